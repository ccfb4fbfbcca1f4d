//! Product normalisation errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Why a raw product could not be normalised.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    /// No `id` or `_id`, or only whitespace.
    #[error("product has no identifier")]
    MissingId,

    /// Blank or missing name.
    #[error("product {0} has no name")]
    MissingName(String),

    /// No price field.
    #[error("product {0} has no price")]
    MissingPrice(String),

    /// Price below zero.
    #[error("product {id} has a negative price ({price})")]
    NegativePrice {
        /// Offending product.
        id: String,
        /// The rejected price.
        price: Decimal,
    },
}
