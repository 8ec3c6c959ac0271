//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions under Black-Scholes-Merton
//! dynamics:
//! - Vanilla call/put prices with analytical Greeks
//! - All eight single-barrier variants (up/down, in/out, call/put)
//! - Standard normal CDF and PDF
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Typed entry points work for `f32` and `f64`
//! - **Unguarded numerics**: Degenerate inputs yield non-finite values, not errors
//! - **Rounding at the boundary**: Pricers work at full precision; only the
//!   `price_*` functions round

pub mod barrier;
pub mod black_scholes;
pub mod distributions;

// Re-export main types at module level
pub use barrier::{
    price_barrier, price_barrier_with_config, BarrierDirection, BarrierPricer, BarrierQuote,
    BarrierRegime, BarrierRequest, BarrierTerms, BarrierType, KnockType, ParityGaps, RegimeLegs,
};
pub use black_scholes::{
    price_vanilla, price_vanilla_with_config, Greeks, VanillaPricer, VanillaQuote, VanillaRequest,
};
pub use distributions::{norm_cdf, norm_pdf};
