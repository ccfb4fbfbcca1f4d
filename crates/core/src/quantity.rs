//! Quantities

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::NonZeroU32,
    str::FromStr,
};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while parsing user-entered quantities.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuantityError {
    /// Input was empty or whitespace.
    #[error("quantity is required")]
    Empty,

    /// Input is not a number at all.
    #[error("quantity {0:?} is not a number")]
    NotANumber(String),

    /// Input is `NaN` or infinite.
    #[error("quantity {0:?} is not a finite number")]
    NotFinite(String),

    /// Input has a fractional part or uses exponent notation.
    #[error("quantity {0:?} is not a whole number")]
    NotAnInteger(String),

    /// Input is zero or negative.
    #[error("quantity must be at least 1, got {0}")]
    NotPositive(i64),

    /// Input does not fit the supported range.
    #[error("quantity {0} is too large")]
    TooLarge(String),
}

/// A positive number of units of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Build a quantity from a signed count, rejecting zero and negatives.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::NotPositive`] for `count <= 0` and
    /// [`QuantityError::TooLarge`] when it exceeds `u32::MAX`.
    pub fn from_count(count: i64) -> Result<Self, QuantityError> {
        if count <= 0 {
            return Err(QuantityError::NotPositive(count));
        }

        u32::try_from(count)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| QuantityError::TooLarge(count.to_string()))
    }

    /// Build a quantity from a signed count, clamping into `1..=u32::MAX`.
    pub fn clamped(count: i64) -> Self {
        let count = u32::try_from(count.max(1)).unwrap_or(u32::MAX);

        Self(NonZeroU32::new(count).unwrap_or(NonZeroU32::MIN))
    }

    /// Parse a quantity typed into a text field.
    ///
    /// Accepts whole numbers, including integer-valued decimals such as
    /// `"2.0"`. Rejects blanks, non-numeric text, `NaN`/infinity, fractions,
    /// zero and negatives.
    ///
    /// # Errors
    ///
    /// Returns a [`QuantityError`] describing why the input was rejected.
    pub fn parse(input: &str) -> Result<Self, QuantityError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(QuantityError::Empty);
        }

        if let Ok(count) = input.parse::<i64>() {
            return Self::from_count(count);
        }

        if let Ok(decimal) = Decimal::from_str(input) {
            if !decimal.fract().is_zero() {
                return Err(QuantityError::NotAnInteger(input.to_string()));
            }

            let count = decimal
                .to_i64()
                .ok_or_else(|| QuantityError::TooLarge(input.to_string()))?;

            return Self::from_count(count);
        }

        match input.parse::<f64>() {
            Ok(value) if !value.is_finite() => Err(QuantityError::NotFinite(input.to_string())),
            Ok(_) => Err(QuantityError::NotAnInteger(input.to_string())),
            Err(_) => Err(QuantityError::NotANumber(input.to_string())),
        }
    }

    /// The count as an unsigned integer.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Add `other` units, saturating at `u32::MAX`.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.get()))
    }

    /// The count as a decimal, for price arithmetic.
    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.get())
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NonZeroU32> for Quantity {
    fn from(value: NonZeroU32) -> Self {
        Self(value)
    }
}
