//! # Money Module
//!
//! Provides the `Money` type for prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The screen collects "19.99" as text and the stored document keeps     │
//! │  `"preco": 19.99` as a JSON number.                                    │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents in memory                                 │
//! │    "19.99" ──parse──► 1999 cents ──encode──► 19.99 (JSON number)       │
//! │    19.99   ──decode──► round(19.99 × 100) = 1999 cents                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use loja_core::money::Money;
//!
//! let price: Money = "10.99".parse().unwrap();
//! assert_eq!(price.cents(), 1099);
//! assert_eq!(price.to_string(), "R$ 10,99");
//! ```
//!
//! ## Range
//! Cents are an `i128`, so every price up to 10^36 reais is exact. Larger
//! inputs and stored numbers go through `f64` and saturate at `i128::MAX`
//! cents instead of failing.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos.
///
/// ## Wire Format
/// Serialized as a JSON number in reais (`19.99`), the shape the `produtos`
/// document has always used. Deserialization rounds to the nearest centavo
/// and rejects negative or non-finite numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i128);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use loja_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i128) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i128 {
        self.0
    }

    /// Returns the whole reais portion.
    #[inline]
    pub const fn reais(&self) -> i128 {
        self.0 / 100
    }

    /// Returns the centavos portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i128 {
        (self.0 % 100).abs()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Value in reais as a float, for the JSON document only.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Converts an amount in reais to cents, rounding to the nearest one.
    ///
    /// Returns `None` for negative or NaN values. Amounts beyond the `i128`
    /// range, infinity included, saturate.
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_nan() || value < 0.0 {
            return None;
        }
        // `as` saturates for out-of-range floats.
        Some(Money((value * 100.0).round() as i128))
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses the price typed into the form.
///
/// ## Accepted Shape
/// `^[0-9]+(\.[0-9]{1,2})?$`: digits, then optionally a dot and one or two
/// digits. No sign, no comma, no surrounding whitespace. Zero parses; the
/// "greater than zero" rule lives in validation. Any length of digits is
/// accepted; see the module docs for how very large amounts are held.
///
/// ```rust
/// use loja_core::money::Money;
///
/// assert_eq!("19.9".parse::<Money>().unwrap().cents(), 1990);
/// assert!("19,90".parse::<Money>().is_err());
/// assert!(".5".parse::<Money>().is_err());
/// ```
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidPrice {
            value: s.to_string(),
        };

        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, Some(frac)),
            None => (s, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let frac_cents = match frac {
            None => 0,
            Some(f) if (1..=2).contains(&f.len()) && f.bytes().all(|b| b.is_ascii_digit()) => {
                let digits: i128 = f.parse().map_err(|_| invalid())?;
                if f.len() == 1 {
                    digits * 10
                } else {
                    digits
                }
            }
            Some(_) => return Err(invalid()),
        };

        let exact = whole
            .parse::<i128>()
            .ok()
            .and_then(|reais| reais.checked_mul(100))
            .and_then(|c| c.checked_add(frac_cents));

        match exact {
            Some(cents) => Ok(Money(cents)),
            None => s.parse::<f64>().ok().and_then(Money::from_f64).ok_or_else(invalid),
        }
    }
}

// =============================================================================
// Serde
// =============================================================================

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value).ok_or_else(|| {
            de::Error::invalid_value(de::Unexpected::Float(value), &"a non-negative price")
        })
    }
}

// =============================================================================
// Display
// =============================================================================

/// Formats as Brazilian currency: `R$ 19,99`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}R$ {},{:02}",
            sign,
            self.reais().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_form_shapes() {
        assert_eq!("19.99".parse::<Money>().unwrap().cents(), 1999);
        assert_eq!("19.9".parse::<Money>().unwrap().cents(), 1990);
        assert_eq!("19".parse::<Money>().unwrap().cents(), 1900);
        assert_eq!("0.05".parse::<Money>().unwrap().cents(), 5);
        assert_eq!("007.10".parse::<Money>().unwrap().cents(), 710);
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for input in [
            "", ".", ".5", "5.", "5.123", "-5", "+5", "5,00", " 5", "5 ", "1e3", "abc",
            "5.1.2", "inf", "NaN",
        ] {
            assert!(input.parse::<Money>().is_err(), "{input:?} should fail");
        }
    }

    #[test]
    fn test_display_brl() {
        assert_eq!(Money::from_cents(1999).to_string(), "R$ 19,99");
        assert_eq!(Money::from_cents(5).to_string(), "R$ 0,05");
        assert_eq!(Money::from_cents(100000).to_string(), "R$ 1000,00");
        assert_eq!(Money::from_cents(-250).to_string(), "-R$ 2,50");
    }

    #[test]
    fn test_json_is_a_plain_number() {
        let json = serde_json::to_string(&Money::from_cents(1999)).unwrap();
        assert_eq!(json, "19.99");

        let back: Money = serde_json::from_str("19.99").unwrap();
        assert_eq!(back.cents(), 1999);

        let whole: Money = serde_json::from_str("10").unwrap();
        assert_eq!(whole.cents(), 1000);
    }

    #[test]
    fn test_json_rounds_to_nearest_cent() {
        let m: Money = serde_json::from_str("0.1").unwrap();
        assert_eq!(m.cents(), 10);
        let m: Money = serde_json::from_str("2.675").unwrap();
        assert!(m.cents() == 267 || m.cents() == 268);
    }

    #[test]
    fn test_json_rejects_negative() {
        assert!(serde_json::from_str::<Money>("-1.5").is_err());
        assert!(serde_json::from_str::<Money>("\"1.5\"").is_err());
    }

    #[test]
    fn test_parse_large_amounts() {
        let m: Money = "99999999999999999999".parse().unwrap();
        assert_eq!(m.cents(), 9_999_999_999_999_999_999_900);

        let m: Money = "12345678901234567890.55".parse().unwrap();
        assert_eq!(m.cents(), 1_234_567_890_123_456_789_055);

        // Past the i128 range: accepted and saturated.
        let huge = "9".repeat(60);
        assert_eq!(huge.parse::<Money>().unwrap().cents(), i128::MAX);
        let enormous = "9".repeat(400);
        assert_eq!(enormous.parse::<Money>().unwrap().cents(), i128::MAX);
    }

    #[test]
    fn test_json_large_numbers_decode() {
        let m: Money = serde_json::from_str("100000000000000000000").unwrap();
        assert_eq!(m.cents(), 10i128.pow(22));

        let m: Money = serde_json::from_str("1e300").unwrap();
        assert_eq!(m.cents(), i128::MAX);

        let back: Money = serde_json::from_str(&serde_json::to_string(&m).unwrap()).unwrap();
        assert!(back.is_positive());
    }
}
