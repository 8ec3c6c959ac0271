//! Core option and error types.
//!
//! This module provides:
//! - `option_type`: The two-variant `OptionType` tag and its string parsing
//! - `error`: Structured error types for pricing and configuration
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`] from `option_type`
//! - [`PricingError`], [`ConfigError`] from `error`

pub mod error;
pub mod option_type;

pub use error::{ConfigError, PricingError};
pub use option_type::OptionType;
