//! Black-Scholes pricing model for European vanilla options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options on a non-dividend-paying underlying, together
//! with the five first-order Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! Each side is evaluated from its own normal CDF terms; the put is never
//! derived from the call through parity, so put-call parity is a property
//! of the output rather than an assumption.
//!
//! ## Domain
//!
//! No numeric input is validated. Non-positive spot, strike, expiry or
//! volatility flow through the formulas and may give non-finite results.

use num_traits::Float;
use pricer_core::config::PrecisionConfig;
use pricer_core::math::round_to_decimals;
use pricer_core::types::{OptionType, PricingError};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::distributions::{norm_cdf, norm_pdf};

/// First-order sensitivities of a vanilla option.
///
/// - `delta`: ∂V/∂S
/// - `gamma`: ∂²V/∂S²
/// - `vega`: ∂V/∂σ
/// - `theta`: ∂V/∂t (calendar time, per year; usually negative)
/// - `rho`: ∂V/∂r
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct Greeks<T: Float> {
    /// Delta: ∂V/∂S
    pub delta: T,
    /// Gamma: ∂²V/∂S²
    pub gamma: T,
    /// Vega: ∂V/∂σ
    pub vega: T,
    /// Theta: ∂V/∂t
    pub theta: T,
    /// Rho: ∂V/∂r
    pub rho: T,
}

impl<T: Float> Greeks<T> {
    /// Rounds every Greek to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            delta: round_to_decimals(self.delta, decimals),
            gamma: round_to_decimals(self.gamma, decimals),
            vega: round_to_decimals(self.vega, decimals),
            theta: round_to_decimals(self.theta, decimals),
            rho: round_to_decimals(self.rho, decimals),
        }
    }
}

/// Price and Greeks of a vanilla option.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VanillaQuote<T: Float> {
    /// Option price
    pub price: T,
    /// First-order sensitivities
    pub greeks: Greeks<T>,
}

impl<T: Float> VanillaQuote<T> {
    /// Applies presentation rounding: price to `price_decimals`,
    /// Greeks to `greek_decimals`.
    pub fn rounded(&self, precision: &PrecisionConfig) -> Self {
        Self {
            price: round_to_decimals(self.price, precision.price_decimals),
            greeks: self.greeks.rounded(precision.greek_decimals),
        }
    }

    /// Splits the quote into `(price, greeks)`.
    pub fn into_parts(self) -> (T, Greeks<T>) {
        (self.price, self.greeks)
    }
}

/// Inputs for pricing one vanilla option.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::VanillaRequest;
///
/// let request = VanillaRequest::new(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
/// let quote = request.evaluate();
/// assert!((quote.price - 10.4506).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VanillaRequest<T: Float> {
    /// Spot price (S₀)
    pub spot: T,
    /// Strike price (K)
    pub strike: T,
    /// Time to expiry in years (T)
    pub expiry: T,
    /// Continuously compounded risk-free rate (r)
    pub rate: T,
    /// Annualised volatility (σ)
    pub volatility: T,
    /// Call or put
    pub option_type: OptionType,
}

impl<T: Float> VanillaRequest<T> {
    /// Creates a new request.
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        volatility: T,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
        }
    }

    /// Model for the request's market inputs.
    pub fn pricer(&self) -> VanillaPricer<T> {
        VanillaPricer::new(self.spot, self.rate, self.volatility)
    }

    /// Full-precision price and Greeks.
    pub fn evaluate(&self) -> VanillaQuote<T> {
        self.pricer()
            .evaluate(self.strike, self.expiry, self.option_type)
    }
}

/// Black-Scholes model for European vanilla options.
///
/// Holds the market state (spot, rate, volatility); strike, expiry and
/// option type are supplied per evaluation.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::VanillaPricer;
///
/// let bs = VanillaPricer::new(100.0_f64, 0.05, 0.2);
/// let call = bs.price(100.0, 1.0, OptionType::Call);
/// let put = bs.price(100.0, 1.0, OptionType::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaPricer<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> VanillaPricer<T> {
    /// Creates a new model. Inputs are taken as given.
    pub fn new(spot: T, rate: T, volatility: T) -> Self {
        Self {
            spot,
            rate,
            volatility,
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T).
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap();
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let mu = self.rate + half * self.volatility * self.volatility;

        ((self.spot / strike).ln() + mu * expiry) / vol_sqrt_t
    }

    /// Computes d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the option price.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionType;
    /// use pricer_models::analytical::VanillaPricer;
    ///
    /// let bs = VanillaPricer::new(100.0_f64, 0.05, 0.2);
    /// assert!((bs.price(100.0, 1.0, OptionType::Put) - 5.5735).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn price(&self, strike: T, expiry: T, option_type: OptionType) -> T {
        self.evaluate(strike, expiry, option_type).price
    }

    /// Computes the full-precision price and Greeks.
    pub fn evaluate(&self, strike: T, expiry: T, option_type: OptionType) -> VanillaQuote<T> {
        let two = T::from(2.0).unwrap();
        let s = self.spot;
        let sigma = self.volatility;
        let r = self.rate;

        let discount = (-r * expiry).exp();
        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = sigma * sqrt_t;

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - vol_sqrt_t;

        trace!(
            option_type = %option_type,
            d1 = d1.to_f64().unwrap_or(f64::NAN),
            d2 = d2.to_f64().unwrap_or(f64::NAN),
            "vanilla closed form"
        );

        let pdf_d1 = norm_pdf(d1);
        // Shared by both sides
        let gamma = pdf_d1 / (s * vol_sqrt_t);
        let vega = s * pdf_d1 * sqrt_t;
        let decay = -(s * pdf_d1 * sigma) / (two * sqrt_t);

        match option_type {
            OptionType::Call => {
                let n_d1 = norm_cdf(d1);
                let n_d2 = norm_cdf(d2);
                VanillaQuote {
                    price: s * n_d1 - strike * discount * n_d2,
                    greeks: Greeks {
                        delta: n_d1,
                        gamma,
                        vega,
                        theta: decay - r * strike * discount * n_d2,
                        rho: strike * expiry * discount * n_d2,
                    },
                }
            }
            OptionType::Put => {
                let n_minus_d1 = norm_cdf(-d1);
                let n_minus_d2 = norm_cdf(-d2);
                VanillaQuote {
                    price: strike * discount * n_minus_d2 - s * n_minus_d1,
                    greeks: Greeks {
                        delta: -n_minus_d1,
                        gamma,
                        vega,
                        theta: decay + r * strike * discount * n_minus_d2,
                        rho: -strike * expiry * discount * n_minus_d2,
                    },
                }
            }
        }
    }
}

/// Prices a European vanilla option and its Greeks.
///
/// `option_type` is parsed case-insensitively (`"Call"`, `"Put"`, `"C"`,
/// `"P"`). The price is rounded to 2 decimals and the Greeks to 4.
///
/// # Errors
/// - `PricingError::InvalidOptionType` if `option_type` is not recognised
///
/// # Examples
/// ```
/// use pricer_models::analytical::price_vanilla;
///
/// let quote = price_vanilla(100.0, 100.0, 1.0, 0.05, 0.2, "C").unwrap();
/// assert_eq!(quote.price, 10.45);
/// assert_eq!(quote.greeks.delta, 0.6368);
///
/// assert!(price_vanilla(100.0, 100.0, 1.0, 0.05, 0.2, "Straddle").is_err());
/// ```
pub fn price_vanilla(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: &str,
) -> Result<VanillaQuote<f64>, PricingError> {
    let option_type: OptionType = option_type.parse()?;
    let request = VanillaRequest::new(spot, strike, expiry, rate, volatility, option_type);
    Ok(price_vanilla_with_config(&request, &PrecisionConfig::default()))
}

/// Prices a typed vanilla request with explicit presentation precision.
pub fn price_vanilla_with_config<T: Float>(
    request: &VanillaRequest<T>,
    precision: &PrecisionConfig,
) -> VanillaQuote<T> {
    request.evaluate().rounded(precision)
}
