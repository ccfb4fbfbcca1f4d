//! Cart Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{products::Product, quantity::Quantity};

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Product as it was when first added.
    pub product: Product,
    /// Units of the product, never zero.
    pub quantity: Quantity,
}

impl CartEntry {
    /// An entry for `quantity` units of `product`.
    pub fn new(product: Product, quantity: Quantity) -> Self {
        Self { product, quantity }
    }

    /// Unit price times quantity, unrounded.
    pub fn line_total(&self) -> Decimal {
        self.product.price * self.quantity.as_decimal()
    }
}
