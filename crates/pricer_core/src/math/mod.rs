//! Numerical helpers shared by the pricing layers.
//!
//! - `rounding`: Fixed-decimal presentation rounding

pub mod rounding;

pub use rounding::round_to_decimals;
