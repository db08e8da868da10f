use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AppError, InputError, ParseError};

// @module: Ticket records and line parsing

// @const: H:MM or HH:MM, also used for running times
static TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):(\d+)$").unwrap()
});

// @const: Row letter, dash, column number (e.g. C-12)
static SEAT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z])-(\d+)$").unwrap()
});

/// Number of comma-separated fields in one record
pub const FIELD_COUNT: usize = 5;

/// First and last seat rows in the auditorium
pub const FIRST_ROW: char = 'A';
pub const LAST_ROW: char = 'L';

/// Highest seat column
pub const MAX_COLUMN: u32 = 24;

/// Age bracket a ticket was sold for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeCategory {
    Adult,
    Young,
    Child,
}

impl AgeCategory {
    // @returns: Token as it appears in input records
    pub fn token(&self) -> &'static str {
        match self {
            Self::Adult => "Adult",
            Self::Young => "Young",
            Self::Child => "Child",
        }
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for AgeCategory {
    type Err = ParseError;

    // Tokens are case-sensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Adult" => Ok(Self::Adult),
            "Young" => Ok(Self::Young),
            "Child" => Ok(Self::Child),
            _ => Err(ParseError::UnknownAgeCategory(s.to_string())),
        }
    }
}

/// Content rating of a screening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentRating {
    /// G
    General,
    /// PG-12
    ParentalGuidance12,
    /// R18+
    Restricted18,
}

impl ContentRating {
    // @returns: Token as it appears in input records
    pub fn token(&self) -> &'static str {
        match self {
            Self::General => "G",
            Self::ParentalGuidance12 => "PG-12",
            Self::Restricted18 => "R18+",
        }
    }
}

impl fmt::Display for ContentRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for ContentRating {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "G" => Ok(Self::General),
            "PG-12" => Ok(Self::ParentalGuidance12),
            "R18+" => Ok(Self::Restricted18),
            _ => Err(ParseError::UnknownRating(s.to_string())),
        }
    }
}

/// Splits `H:MM` into its two integer parts
fn parse_hours_minutes(s: &str) -> Result<(u32, u32), ParseError> {
    let invalid = || ParseError::InvalidTime(s.to_string());
    let caps = TIME_REGEX.captures(s).ok_or_else(invalid)?;
    let hours = caps[1].parse().map_err(|_| invalid())?;
    let minutes = caps[2].parse().map_err(|_| invalid())?;
    Ok((hours, minutes))
}

/// Time of day a screening starts, 24-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Minutes elapsed since midnight
    pub fn total_minutes(&self) -> u32 {
        self.hour.saturating_mul(60).saturating_add(self.minute)
    }

    /// Builds a time from minutes since midnight. Hours are not wrapped at 24.
    pub fn from_total_minutes(total: u32) -> Self {
        Self {
            hour: total / 60,
            minute: total % 60,
        }
    }

    /// Time reached after running for `length`
    pub fn after(&self, length: RunningTime) -> Self {
        Self::from_total_minutes(self.total_minutes().saturating_add(length.total_minutes()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = parse_hours_minutes(s)?;
        Ok(Self::new(hour, minute))
    }
}

/// Length of a screening
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunningTime {
    pub hours: u32,
    pub minutes: u32,
}

impl RunningTime {
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    pub fn total_minutes(&self) -> u32 {
        self.hours.saturating_mul(60).saturating_add(self.minutes)
    }
}

impl fmt::Display for RunningTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for RunningTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = parse_hours_minutes(s)?;
        Ok(Self::new(hours, minutes))
    }
}

/// Seat position. The row is always stored uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub row: char,
    pub column: u32,
}

impl Seat {
    // @creates: Validated seat
    // @validates: Row A-L (any case), column 1-24
    pub fn new(row: char, column: u32) -> Result<Self, ParseError> {
        let row = row.to_ascii_uppercase();
        if !(FIRST_ROW..=LAST_ROW).contains(&row) {
            return Err(ParseError::SeatRowOutOfRange(row));
        }
        if !(1..=MAX_COLUMN).contains(&column) {
            return Err(ParseError::SeatColumnOutOfRange(column));
        }
        Ok(Self { row, column })
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.column)
    }
}

impl FromStr for Seat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidSeat(s.to_string());
        let caps = SEAT_REGEX.captures(s).ok_or_else(invalid)?;
        let row = caps[1].chars().next().ok_or_else(invalid)?;
        // Overflowing numbers are out of range rather than malformed
        let column = caps[2].parse().unwrap_or(u32::MAX);
        Self::new(row, column)
    }
}

/// One ticket purchase record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub age: AgeCategory,
    pub rating: ContentRating,
    pub start: ClockTime,
    pub running_time: RunningTime,
    pub seat: Seat,
}

impl Ticket {
    pub fn new(
        age: AgeCategory,
        rating: ContentRating,
        start: ClockTime,
        running_time: RunningTime,
        seat: Seat,
    ) -> Self {
        Self {
            age,
            rating,
            start,
            running_time,
            seat,
        }
    }

    /// Parse a record of the form `Age,Rating,HH:MM,H:MM,Row-Col`.
    /// Spaces after a comma are allowed, spaces before one are not.
    pub fn parse_line(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.trim().split(',').map(str::trim_start).collect();
        if fields.len() != FIELD_COUNT {
            return Err(ParseError::FieldCount(fields.len()));
        }

        Ok(Self {
            age: fields[0].parse()?,
            rating: fields[1].parse()?,
            start: fields[2].parse()?,
            running_time: fields[3].parse()?,
            seat: fields[4].parse()?,
        })
    }

    /// Time the screening on this ticket ends
    pub fn end_time(&self) -> ClockTime {
        self.start.after(self.running_time)
    }
}

impl FromStr for Ticket {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.age, self.rating, self.start, self.running_time, self.seat
        )
    }
}

/// Ordered tickets from one input session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketBatch {
    tickets: Vec<Ticket>,
}

impl TicketBatch {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    /// Read records until end of input, stopping at the first malformed line.
    /// Blank lines are skipped. Bytes that are not UTF-8 make the line
    /// malformed; only failures of the reader itself are I/O errors.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, AppError> {
        let mut tickets = Vec::new();

        for (index, bytes) in reader.split(b'\n').enumerate() {
            let line_number = index + 1;
            let line = String::from_utf8(bytes?).map_err(|_| {
                debug!("Rejected line {}: not valid UTF-8", line_number);
                InputError::new(line_number, ParseError::InvalidEncoding)
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let ticket = Ticket::parse_line(trimmed).map_err(|e| {
                debug!("Rejected line {}: {:?}", line_number, trimmed);
                InputError::new(line_number, e)
            })?;
            tickets.push(ticket);
        }

        Ok(Self { tickets })
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// The record whose rating and times stand for the whole screening
    pub fn screening_ticket(&self) -> Option<&Ticket> {
        self.tickets.first()
    }
}

impl FromStr for TicketBatch {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::read_from(s.as_bytes())
    }
}
