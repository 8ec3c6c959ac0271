//! # Pricer Models (L2: Analytical Pricing)
//!
//! Closed-form Black-Scholes-Merton pricing of European vanilla and
//! single-barrier options.
//!
//! This crate provides:
//! - Vanilla call/put prices with Delta, Gamma, Vega, Theta and Rho
//! - Prices for the eight single-barrier variants in one evaluation
//! - Full-precision typed pricers and rounded presentation entry points
//!
//! ## Quick Start
//!
//! ```
//! use pricer_models::{price_barrier, price_vanilla};
//!
//! let vanilla = price_vanilla(100.0, 100.0, 1.0, 0.05, 0.2, "Call").unwrap();
//! assert_eq!(vanilla.price, 10.45);
//! assert_eq!(vanilla.greeks.delta, 0.6368);
//!
//! let barrier = price_barrier(100.0, 100.0, 1.0, 0.05, 0.2, 120.0, 0.0);
//! assert_eq!(barrier.cui, 9.27);
//! assert_eq!(barrier.pdi, 5.57);
//! ```
//!
//! ## Layering
//!
//! Option types, errors, rounding and precision configuration live in
//! `pricer_core`; this crate only adds the analytics.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;

pub use analytical::{price_barrier, price_barrier_with_config, price_vanilla, price_vanilla_with_config};
