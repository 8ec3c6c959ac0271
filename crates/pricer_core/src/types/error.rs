//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors surfaced by the pricing entry points
//! - `ConfigError`: Errors from loading or validating configuration

use thiserror::Error;

/// Pricing errors.
///
/// Only the option-type tag is validated at the pricing boundary. Numeric
/// inputs outside the model domain (non-positive spot, strike, expiry or
/// volatility) are not errors: they flow through the closed forms and may
/// produce non-finite values.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidOptionType { value: "X".to_string() };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid option type: 'X' (expected Call or Put)"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Option type tag is neither Call nor Put.
    #[error("Invalid option type: '{value}' (expected Call or Put)")]
    InvalidOptionType {
        /// The offending tag, exactly as supplied
        value: String,
    },
}

/// Configuration errors.
///
/// # Variants
/// - `Io`: Configuration file could not be read
/// - `Parse`: Configuration text is not valid TOML for the target type
/// - `Validation`: Decoded values are out of range (all problems collected)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// IO error reading a config file.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config text.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation errors.
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
