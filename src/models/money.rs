//! Money type for representing currency amounts
//!
//! Internally stores amounts as an integer count of millionths of the
//! currency unit, so any amount entered with up to six decimal places is kept
//! exactly and sums do not drift. On disk an amount is a plain decimal number
//! (`12.5`), the same shape float-based ledger files already use. Display
//! rounds to cents.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::{ExpenseError, ExpenseResult};

/// Stored units per currency unit
const SCALE: i64 = 1_000_000;

/// Stored units per cent
const UNITS_PER_CENT: i64 = SCALE / 100;

/// Decimal places kept exactly
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Largest amount, in whole currency units, accepted for one expense or limit
const MAX_WHOLE_UNITS: i64 = 1_000_000_000;

/// Represents a monetary amount in millionths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted for a single expense or budget limit
    pub const MAX: Money = Money(MAX_WHOLE_UNITS * SCALE);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents.saturating_mul(UNITS_PER_CENT))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount rounded to the nearest cent (halves away from zero)
    pub const fn cents(&self) -> i64 {
        let half = UNITS_PER_CENT / 2;
        if self.0 < 0 {
            self.0.saturating_sub(half) / UNITS_PER_CENT
        } else {
            self.0.saturating_add(half) / UNITS_PER_CENT
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", ".5". Up to six
    /// decimal places are kept; more is an error.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        if fraction.len() > MAX_FRACTION_DIGITS {
            return Err(MoneyParseError::TooPrecise(s.to_string()));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::TooLarge(s.to_string()))?
        };

        let mut fraction_units: i64 = 0;
        for (place, digit) in fraction.bytes().enumerate() {
            let weight = 10_i64.pow((MAX_FRACTION_DIGITS - 1 - place) as u32);
            fraction_units += i64::from(digit - b'0') * weight;
        }

        let total = whole
            .checked_mul(SCALE)
            .and_then(|w| w.checked_add(fraction_units))
            .ok_or_else(|| MoneyParseError::TooLarge(s.to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Parse a strictly positive amount, as required for expenses and budget limits
    pub fn parse_positive(s: &str) -> ExpenseResult<Self> {
        match Self::parse(s) {
            Ok(amount) if amount.is_positive() => amount.ensure_valid(),
            Ok(_) | Err(MoneyParseError::InvalidFormat(_)) => Err(ExpenseError::invalid_amount(s)),
            Err(MoneyParseError::TooPrecise(raw)) => Err(ExpenseError::InvalidAmount(format!(
                "'{}' has more than {} decimal places",
                raw, MAX_FRACTION_DIGITS
            ))),
            Err(MoneyParseError::TooLarge(raw)) => Err(ExpenseError::InvalidAmount(format!(
                "'{}' exceeds the maximum of {}",
                raw,
                Self::MAX
            ))),
        }
    }

    /// Check that the amount is positive and within [`Money::MAX`]
    pub fn ensure_valid(self) -> ExpenseResult<Self> {
        if !self.is_positive() {
            return Err(ExpenseError::InvalidAmount(format!(
                "{} must be greater than zero",
                self.to_decimal_string()
            )));
        }
        if self > Self::MAX {
            return Err(ExpenseError::InvalidAmount(format!(
                "{} exceeds the maximum of {}",
                self,
                Self::MAX
            )));
        }
        Ok(self)
    }

    /// Format with a currency symbol, rounded to cents
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let cents = self.cents();
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.unsigned_abs();
        format!("{}{}{}.{:02}", sign, symbol, cents / 100, cents % 100)
    }

    /// Plain decimal rendering rounded to cents, without a currency symbol ("50.00")
    pub fn to_decimal_string(&self) -> String {
        self.format_with_symbol("")
    }

    /// The amount as a floating point number of currency units
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// Convert a floating point number of currency units, failing unless it
    /// is exactly a decimal with at most six places
    fn from_f64_exact(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let scaled = (value * SCALE as f64).round();
        if scaled.abs() > (MAX_WHOLE_UNITS * SCALE) as f64 {
            return None;
        }
        let amount = Self(scaled as i64);
        (amount.as_f64() == value).then_some(amount)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::from_f64_exact(value).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "amount {} is not a finite decimal within range with at most {} places",
                value, MAX_FRACTION_DIGITS
            ))
        })
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    TooPrecise(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooPrecise(s) => {
                write!(f, "More than {} decimal places: {}", MAX_FRACTION_DIGITS, s)
            }
            MoneyParseError::TooLarge(s) => write!(f, "Amount too large: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
