use crate::Result;

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1:?} and {2:?}")]
    Overflow(&'static str, Money, Money),

    #[error("Money out of range: {0:?}")]
    OutOfRange(String),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Signed fixed-point amount, stored as ten-thousandths of a currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const SCALE: i64 = 10_000;

    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    /// Whole currency units, so `Money::units(-1000)` is -1000.00
    pub const fn units(units: i64) -> Self {
        return Self(units * Self::SCALE);
    }

    pub const DECIMALS: i64 = 4;

    /// Parses anything that reads as a finite floating point number, ignoring surrounding
    /// whitespace and allowing `_` between digits. The amount is kept exactly, so input with
    /// more than four significant decimal places is rejected rather than rounded.
    pub fn parse(string: &str) -> Result<Self> {
        let text = strip_digit_separators(string.trim())
            .ok_or_else(|| MoneyError::Parse("Misplaced digit separator", string.to_string()))?;

        let value: f64 = text
            .parse()
            .map_err(|_| MoneyError::Parse("Not a number", string.to_string()))?;

        if !value.is_finite() {
            Err(MoneyError::Parse("Not a finite number", string.to_string()))?
        }

        return Self::from_decimal_str(&text);
    }

    /// Exact conversion of an already validated decimal literal, exponent included
    fn from_decimal_str(text: &str) -> Result<Self> {
        let (mantissa, exponent) = match text.find(|c: char| c == 'e' || c == 'E') {
            Some(idx) => {
                let exponent: i64 = text[idx + 1..]
                    .parse()
                    .map_err(|_| MoneyError::OutOfRange(text.to_string()))?;
                (&text[..idx], exponent)
            }
            None => (text, 0),
        };

        let (negative, unsigned) = match mantissa.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
        };

        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let mut digits = format!("{int_part}{frac_part}")
            .trim_start_matches('0')
            .to_string();

        // decimal places the literal spells out; trailing zeros are dropped below
        let mut places = (frac_part.len() as i64)
            .checked_sub(exponent)
            .ok_or_else(|| MoneyError::OutOfRange(text.to_string()))?;

        while digits.ends_with('0') {
            digits.pop();
            places -= 1;
        }

        if digits.is_empty() {
            return Ok(Money::ZERO);
        }

        if places > Self::DECIMALS {
            Err(MoneyError::Parse(
                "More than 4 decimal places",
                text.to_string(),
            ))?
        }

        let shift = Self::DECIMALS - places;

        // i64 holds at most 19 digits
        if shift > 19 || digits.len() as i64 + shift > 19 {
            Err(MoneyError::OutOfRange(text.to_string()))?
        }

        let minor = digits.parse::<i128>()? * 10i128.pow(shift as u32);
        let minor = if negative { -minor } else { minor };

        let minor =
            i64::try_from(minor).map_err(|_| MoneyError::OutOfRange(text.to_string()))?;

        return Ok(Money(minor));
    }

    pub fn abs(&self) -> Self {
        return Self(self.0.saturating_abs());
    }

    pub fn is_positive(&self) -> bool {
        return self.0 > 0;
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let sum = self
            .0
            .checked_add(other.0)
            .ok_or_else(|| MoneyError::Overflow("add", *self, *other))?;

        return Ok(Money(sum));
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let difference = self
            .0
            .checked_sub(other.0)
            .ok_or_else(|| MoneyError::Overflow("sub", *self, *other))?;

        return Ok(Money(difference));
    }
}

/// Two decimal places, rounding half to even
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let per_cent = i128::from(Self::SCALE / 100);
        let half_cent = per_cent / 2;

        let minor = i128::from(self.0);
        let mut cents = minor / per_cent;
        let rem = (minor % per_cent).abs();

        if rem > half_cent || (rem == half_cent && cents % 2 != 0) {
            cents += minor.signum();
        }

        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.abs();

        return write!(f, "{sign}{}.{:02}", cents / 100, cents % 100);
    }
}

/// Drops `_` separators, which are only allowed between two digits
fn strip_digit_separators(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();

    for (idx, c) in chars.iter().enumerate() {
        if *c != '_' {
            continue;
        }

        let before = idx.checked_sub(1).and_then(|i| chars.get(i));
        let after = chars.get(idx + 1);

        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }

    return Some(chars.into_iter().filter(|c| *c != '_').collect());
}
