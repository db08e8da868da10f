use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::ticket::AgeCategory;
use crate::validation::ViolationKind;

/// Application configuration module
/// This module handles loading and validating the price table, the
/// user-facing messages and the log level.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Ticket prices
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Messages printed on stdout
    #[serde(default)]
    pub messages: MessageConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Price of each age category
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PricingConfig {
    // @field: Adult price
    #[serde(default = "default_adult_price")]
    pub adult: u32,

    // @field: Young price
    #[serde(default = "default_young_price")]
    pub young: u32,

    // @field: Child price
    #[serde(default = "default_child_price")]
    pub child: u32,

    // @field: Text appended to every price
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,
}

impl PricingConfig {
    // @returns: Price for the given category
    pub fn price_for(&self, age: AgeCategory) -> u32 {
        match age {
            AgeCategory::Adult => self.adult,
            AgeCategory::Young => self.young,
            AgeCategory::Child => self.child,
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            adult: default_adult_price(),
            young: default_young_price(),
            child: default_child_price(),
            currency_suffix: default_currency_suffix(),
        }
    }
}

/// Fixed output strings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MessageConfig {
    /// Printed alone when any record is malformed
    #[serde(default = "default_invalid_input_message")]
    pub invalid_input: String,

    /// Printed when a curfew needs an accompanying adult
    #[serde(default = "default_chaperone_message")]
    pub chaperone_required: String,

    /// Printed when the content rating excludes a ticket
    #[serde(default = "default_age_restricted_message")]
    pub age_restricted: String,

    /// Printed when a ticket's seat is off limits
    #[serde(default = "default_seat_restricted_message")]
    pub seat_restricted: String,
}

impl MessageConfig {
    // @returns: Message for a violation category
    pub fn for_violation(&self, kind: ViolationKind) -> &str {
        match kind {
            ViolationKind::ChaperoneRequired => &self.chaperone_required,
            ViolationKind::AgeRestricted => &self.age_restricted,
            ViolationKind::SeatRestricted => &self.seat_restricted,
        }
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            invalid_input: default_invalid_input_message(),
            chaperone_required: default_chaperone_message(),
            age_restricted: default_age_restricted_message(),
            seat_restricted: default_seat_restricted_message(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_adult_price() -> u32 {
    1800
}

fn default_young_price() -> u32 {
    1200
}

fn default_child_price() -> u32 {
    800
}

fn default_currency_suffix() -> String {
    "円".to_string()
}

fn default_invalid_input_message() -> String {
    "不正な入力です".to_string()
}

fn default_chaperone_message() -> String {
    "対象の映画の入場には大人の同伴が必要です".to_string()
}

fn default_age_restricted_message() -> String {
    "対象の映画は年齢制限により閲覧できません".to_string()
}

fn default_seat_restricted_message() -> String {
    "対象のチケットではその座席をご利用いただけません".to_string()
}

impl Config {
    /// Load a configuration from a JSON file. Missing keys take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let messages = [
            ("invalid_input", &self.messages.invalid_input),
            ("chaperone_required", &self.messages.chaperone_required),
            ("age_restricted", &self.messages.age_restricted),
            ("seat_restricted", &self.messages.seat_restricted),
        ];
        for (name, text) in messages {
            if text.trim().is_empty() {
                return Err(anyhow!("Message '{}' must not be empty", name));
            }
        }

        let pricing = &self.pricing;
        if pricing.adult == 0 && pricing.young == 0 && pricing.child == 0 {
            return Err(anyhow!("At least one ticket price must be non-zero"));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            pricing: PricingConfig::default(),
            messages: MessageConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
