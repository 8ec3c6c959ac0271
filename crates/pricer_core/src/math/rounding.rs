//! Fixed-decimal rounding for presenting prices and Greeks.
//!
//! Rounding is a presentation step only. Callers compute at full precision
//! and round the finished value, never an intermediate.

use num_traits::Float;

/// Rounds `value` to `decimals` places after the decimal point.
///
/// Halfway cases round away from zero, following [`Float::round`].
/// Non-finite inputs are returned unchanged.
///
/// # Examples
/// ```
/// use pricer_core::math::rounding::round_to_decimals;
///
/// assert_eq!(round_to_decimals(10.450583_f64, 2), 10.45);
/// assert_eq!(round_to_decimals(0.636830_f64, 4), 0.6368);
/// assert_eq!(round_to_decimals(-6.414027_f64, 2), -6.41);
/// assert!(round_to_decimals(f64::NAN, 2).is_nan());
/// ```
#[inline]
pub fn round_to_decimals<T: Float>(value: T, decimals: u32) -> T {
    if !value.is_finite() {
        return value;
    }
    let factor = T::from(10.0).unwrap().powi(decimals as i32);
    (value * factor).round() / factor
}
