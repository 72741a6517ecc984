//! Money type for representing amounts
//!
//! Wraps a `rust_decimal::Decimal` so amounts keep every digit the user typed
//! (up to 28 significant digits) and sums are exact. Accepted amounts are
//! capped at [`Money::MAX`], which keeps any ledger total far inside the
//! decimal range.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Exponents beyond this many digits cannot produce a representable value
const MAX_EXPONENT_STEPS: u32 = 64;

/// An exact decimal amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Largest amount a single entry may carry (one quadrillion)
    pub const MAX: Money = Money(dec!(1000000000000000));

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The underlying decimal value
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_positive()
    }

    pub fn is_negative(&self) -> bool {
        !self.0.is_zero() && self.0.is_sign_negative()
    }

    /// Parse an amount from user text
    ///
    /// Accepts an optional sign, an optional `$`, any number of fractional
    /// digits and an optional exponent: "10", "-10.50", "+$10.50", ".5",
    /// "19.999", "1e3", "2.5E-2".
    ///
    /// # Examples
    /// ```
    /// use finance_tracker::models::Money;
    /// assert_eq!(Money::parse("1e3").unwrap().to_string(), "1000.00");
    /// assert_eq!(Money::parse("0.001").unwrap().to_string(), "0.001");
    /// ```
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(s.to_string());

        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (mantissa, exponent) = match rest.split_once(|c: char| c == 'e' || c == 'E') {
            Some((mantissa, exponent)) => (mantissa, Some(exponent)),
            None => (rest, None),
        };

        let (whole, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let canonical = match (whole.is_empty(), frac.is_empty()) {
            (_, true) => whole.to_string(),
            (true, false) => format!("0.{frac}"),
            (false, false) => format!("{whole}.{frac}"),
        };
        let mut value = Decimal::from_str(&canonical).map_err(|_| out_of_range())?;

        if let Some(exponent) = exponent {
            let (exp_negative, digits) = match exponent.strip_prefix('-') {
                Some(stripped) => (true, stripped),
                None => (false, exponent.strip_prefix('+').unwrap_or(exponent)),
            };
            if digits.is_empty() || !all_digits(digits) {
                return Err(invalid());
            }
            let steps: u32 = digits.parse().map_err(|_| out_of_range())?;
            value = scale_by_ten(value, steps, exp_negative).ok_or_else(out_of_range)?;
        }

        Ok(Self(if negative { -value } else { value }))
    }
}

/// Multiply or divide by ten `steps` times
///
/// Growing past the decimal range yields `None`. Shrinking past 28 fractional
/// digits rounds to the decimal's native precision and eventually reaches zero.
fn scale_by_ten(mut value: Decimal, steps: u32, shrink: bool) -> Option<Decimal> {
    if value.is_zero() {
        return Some(value);
    }
    if !shrink && steps > MAX_EXPONENT_STEPS {
        return None;
    }
    for _ in 0..steps.min(MAX_EXPONENT_STEPS) {
        value = if shrink {
            value.checked_div(Decimal::TEN)?
        } else {
            value.checked_mul(Decimal::TEN)?
        };
        if value.is_zero() {
            break;
        }
    }
    if shrink && steps > MAX_EXPONENT_STEPS {
        return Some(Decimal::ZERO);
    }
    Some(value)
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// At least two decimal places; extra precision is shown, never rounded away
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0.normalize();
        if value.scale() <= 2 {
            write!(f, "{:.2}", value)
        } else {
            write!(f, "{}", value)
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
