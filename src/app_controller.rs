use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{BufRead, Write};

use crate::app_config::Config;
use crate::errors::AppError;
use crate::pricing::PriceCalculator;
use crate::ticket::TicketBatch;
use crate::validation::{EligibilityService, ViolationKind};

// @module: Application controller for ticket batches

/// What a run printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No records were read, nothing was printed
    Empty,
    /// A record was malformed, only the invalid-input message was printed
    InvalidInput,
    /// At least one ticket failed a gate, the distinct messages were printed
    Rejected(Vec<ViolationKind>),
    /// Every ticket passed, one price per ticket was printed
    Priced(Vec<u32>),
}

/// Main application controller: parse, evaluate, then report or price
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Rule evaluator
    service: EligibilityService,
    // @field: Price lookup
    calculator: PriceCalculator,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config
            .validate()
            .map_err(|e| AppError::Config(format!("{:#}", e)))
            .context("Configuration validation failed")?;

        let calculator = PriceCalculator::new(config.pricing.clone());
        Ok(Self {
            config,
            service: EligibilityService::new(),
            calculator,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read every record from `input` and write the result to `output`.
    ///
    /// Malformed records and rule violations are normal outcomes. Only I/O
    /// failures are returned as errors.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<Outcome> {
        let batch = match TicketBatch::read_from(input) {
            Ok(batch) => batch,
            Err(AppError::InvalidInput(e)) => {
                debug!("Aborting batch: {}", e);
                writeln!(output, "{}", self.config.messages.invalid_input)
                    .context("Failed to write output")?;
                return Ok(Outcome::InvalidInput);
            }
            Err(e) => return Err(e).context("Failed to read ticket records"),
        };

        if batch.is_empty() {
            info!("No ticket records in input");
            return Ok(Outcome::Empty);
        }
        info!("Read {} ticket record(s)", batch.len());

        let report = self.service.evaluate(&batch);

        if !report.all_passed() {
            let kinds: Vec<ViolationKind> = report.violations_in_order().collect();
            for kind in &kinds {
                writeln!(output, "{}", self.config.messages.for_violation(*kind))
                    .context("Failed to write output")?;
            }
            info!(
                "Batch rejected: {} of {} ticket(s) failed",
                report.failed_count(),
                batch.len()
            );
            return Ok(Outcome::Rejected(kinds));
        }

        let prices = self.calculator.prices(batch.tickets());
        for price in &prices {
            writeln!(output, "{}", self.calculator.format_price(*price))
                .context("Failed to write output")?;
        }
        info!("Batch accepted: {} ticket(s) priced", prices.len());

        Ok(Outcome::Priced(prices))
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            config: Config::default(),
            service: EligibilityService::new(),
            calculator: PriceCalculator::default(),
        }
    }
}
