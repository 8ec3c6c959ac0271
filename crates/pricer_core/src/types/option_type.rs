//! Option type tag.
//!
//! Free-form tags are mapped onto [`OptionType`] once, at the boundary, so the
//! pricing formulas only ever see one of the two valid variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// European option type.
///
/// # Parsing
///
/// Parsing is case-insensitive and accepts both the full names and the
/// single-letter tags:
///
/// | Input | Variant |
/// |-------|---------|
/// | `call`, `c` | `Call` |
/// | `put`, `p` | `Put` |
///
/// Anything else fails with [`PricingError::InvalidOptionType`] carrying the
/// offending text unchanged. Surrounding whitespace is not stripped.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionType, PricingError};
///
/// assert_eq!("C".parse::<OptionType>().unwrap(), OptionType::Call);
/// assert_eq!("Put".parse::<OptionType>().unwrap(), OptionType::Put);
///
/// let err = "digital".parse::<OptionType>().unwrap_err();
/// assert_eq!(err, PricingError::InvalidOptionType { value: "digital".to_string() });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    /// Call option: pays max(S - K, 0)
    Call,
    /// Put option: pays max(K - S, 0)
    Put,
}

impl OptionType {
    /// Returns `true` for [`OptionType::Call`].
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns `true` for [`OptionType::Put`].
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Canonical name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("call") || s.eq_ignore_ascii_case("c") {
            Ok(OptionType::Call)
        } else if s.eq_ignore_ascii_case("put") || s.eq_ignore_ascii_case("p") {
            Ok(OptionType::Put)
        } else {
            Err(PricingError::InvalidOptionType {
                value: s.to_string(),
            })
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
