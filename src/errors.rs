/*!
 * Error types for the ticketgate application.
 *
 * Parsing failures are typed so they can be logged with detail, while the
 * user only ever sees the single configured invalid-input message.
 */

use thiserror::Error;

/// Reasons a single ticket record can be rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line did not hold exactly five comma-separated fields
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    /// The line is not valid UTF-8
    #[error("line is not valid UTF-8")]
    InvalidEncoding,

    /// The age category token is not one of Adult, Young, Child
    #[error("unknown age category: {0:?}")]
    UnknownAgeCategory(String),

    /// The content rating token is not one of G, PG-12, R18+
    #[error("unknown content rating: {0:?}")]
    UnknownRating(String),

    /// A start time or running time is not two integers separated by ':'
    #[error("invalid time value: {0:?}")]
    InvalidTime(String),

    /// The seat is not a letter, a dash and a number
    #[error("invalid seat: {0:?}")]
    InvalidSeat(String),

    /// Seat row outside A-L
    #[error("seat row {0} is outside A-L")]
    SeatRowOutOfRange(char),

    /// Seat column outside 1-24
    #[error("seat column {0} is outside 1-24")]
    SeatColumnOutOfRange(u32),
}

/// A parse failure together with the input line it occurred on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {source}")]
pub struct InputError {
    /// 1-based line number in the input stream
    pub line: usize,
    /// What was wrong with the line
    #[source]
    pub source: ParseError,
}

impl InputError {
    pub fn new(line: usize, source: ParseError) -> Self {
        Self { line, source }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// A ticket record could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Error from a file or stream operation
    #[error("File error: {0}")]
    File(String),

    /// Error in the loaded configuration
    #[error("Config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
