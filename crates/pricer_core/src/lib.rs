//! # pricer_core: Foundation Layer for Closed-Form Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Option type tags with boundary parsing: `OptionType` (`types::option_type`)
//! - Error types: `PricingError`, `ConfigError` (`types::error`)
//! - Presentation rounding: `round_to_decimals` (`math::rounding`)
//! - Presentation precision configuration: `PrecisionConfig` (`config`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde + toml: Configuration decoding
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::rounding::round_to_decimals;
//! use pricer_core::types::OptionType;
//!
//! let call: OptionType = "call".parse().unwrap();
//! assert_eq!(call, OptionType::Call);
//! assert!("straddle".parse::<OptionType>().is_err());
//!
//! assert_eq!(round_to_decimals(10.4506_f64, 2), 10.45);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod math;
pub mod types;
