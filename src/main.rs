// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use ticketgate::app_config::{self, Config};
use ticketgate::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for ticketgate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// ticketgate - Movie ticket eligibility checker
///
/// Reads one ticket per line, checks the batch against rating, seat and
/// curfew rules, then prints either the violations or each ticket's price.
#[derive(Parser, Debug)]
#[command(name = "ticketgate")]
#[command(version = "1.0.0")]
#[command(about = "Movie ticket eligibility checker")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "ticketgate reads ticket records of the form
Age,Rating,Start,Duration,Seat (e.g. Adult,G,10:00,2:00,C-12), one per line.

If every ticket is admissible, the price of each ticket is printed in input order.
Otherwise each distinct violation message is printed once. A malformed record
prints a single invalid-input message and nothing else.

EXAMPLES:
    echo 'Adult,G,10:00,2:00,C-12' | ticketgate   # Prints 1800円
    ticketgate tickets.txt                        # Read records from a file
    ticketgate -c prices.json tickets.txt         # Use custom prices and messages
    ticketgate --log-level debug < tickets.txt    # Show per-ticket verdicts on stderr
    ticketgate completions bash > ticketgate.bash # Generate bash completions

An input file named 'completions' must be given as ./completions.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File with ticket records, '-' or omitted for stdin.
    /// A file named 'completions' must be given as ./completions
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    // Logs go to stderr, stdout only carries results
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Max level is adjusted once the config is known
    CustomLogger::init(app_config::LogLevel::default().to_level_filter())?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "ticketgate", &mut std::io::stdout());
        return Ok(());
    }

    run_check(cli)
}

fn run_check(options: CommandLineOptions) -> Result<()> {
    let mut config = match &options.config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;

    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    let outcome = match &options.input_path {
        Some(path) if path.as_path() != Path::new("-") => {
            debug!("Reading ticket records from {:?}", path);
            let file = File::open(path)
                .context(format!("Failed to open input file: {}", path.display()))?;
            controller.run(BufReader::new(file), &mut output)?
        }
        _ => {
            debug!("Reading ticket records from stdin");
            controller.run(std::io::stdin().lock(), &mut output)?
        }
    };

    output.flush().context("Failed to flush output")?;
    debug!("Finished with outcome {:?}", outcome);

    Ok(())
}
