//! Presentation precision configuration.
//!
//! Handles loading of [`PrecisionConfig`] from TOML text or files with
//! environment variable override support.
//!
//! # File format
//!
//! ```toml
//! price_decimals = 2
//! greek_decimals = 4
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::ConfigError;

/// Largest precision accepted by [`PrecisionConfig::validate`].
pub const MAX_DECIMALS: u32 = 12;

/// Environment variable overriding [`PrecisionConfig::price_decimals`].
pub const PRICE_DECIMALS_ENV: &str = "PRICER_PRICE_DECIMALS";

/// Environment variable overriding [`PrecisionConfig::greek_decimals`].
pub const GREEK_DECIMALS_ENV: &str = "PRICER_GREEK_DECIMALS";

/// Number of decimal places used when presenting results.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `price_decimals` | 2 | Option prices (vanilla and barrier) |
/// | `greek_decimals` | 4 | Delta, Gamma, Vega, Theta, Rho |
///
/// # Examples
///
/// ```rust
/// use pricer_core::config::PrecisionConfig;
///
/// let config = PrecisionConfig::default();
/// assert_eq!(config.price_decimals, 2);
/// assert_eq!(config.greek_decimals, 4);
///
/// let custom = PrecisionConfig::from_toml_str("price_decimals = 4").unwrap();
/// assert_eq!(custom.price_decimals, 4);
/// assert_eq!(custom.greek_decimals, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrecisionConfig {
    /// Decimal places for prices.
    #[serde(default = "default_price_decimals")]
    pub price_decimals: u32,

    /// Decimal places for Greeks.
    #[serde(default = "default_greek_decimals")]
    pub greek_decimals: u32,
}

fn default_price_decimals() -> u32 {
    2
}

fn default_greek_decimals() -> u32 {
    4
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self {
            price_decimals: default_price_decimals(),
            greek_decimals: default_greek_decimals(),
        }
    }
}

impl PrecisionConfig {
    /// Creates a configuration with explicit precisions.
    pub fn new(price_decimals: u32, greek_decimals: u32) -> Self {
        Self {
            price_decimals,
            greek_decimals,
        }
    }

    /// Decodes and validates a configuration from TOML text.
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Loads from `path`, falling back to the defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Applies environment variable overrides.
    ///
    /// Reads [`PRICE_DECIMALS_ENV`] and [`GREEK_DECIMALS_ENV`]. Values that
    /// do not parse as unsigned integers are ignored.
    pub fn with_env_override(self) -> Self {
        self.with_overrides(
            std::env::var(PRICE_DECIMALS_ENV).ok().as_deref(),
            std::env::var(GREEK_DECIMALS_ENV).ok().as_deref(),
        )
    }

    fn with_overrides(mut self, price: Option<&str>, greek: Option<&str>) -> Self {
        if let Some(decimals) = price.and_then(|v| v.trim().parse::<u32>().ok()) {
            self.price_decimals = decimals;
        }
        if let Some(decimals) = greek.and_then(|v| v.trim().parse::<u32>().ok()) {
            self.greek_decimals = decimals;
        }
        self
    }

    /// Validates the configuration.
    ///
    /// Both precisions must be at most [`MAX_DECIMALS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.price_decimals > MAX_DECIMALS {
            errors.push(format!(
                "price_decimals {} exceeds maximum allowed ({})",
                self.price_decimals, MAX_DECIMALS
            ));
        }
        if self.greek_decimals > MAX_DECIMALS {
            errors.push(format!(
                "greek_decimals {} exceeds maximum allowed ({})",
                self.greek_decimals, MAX_DECIMALS
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}
