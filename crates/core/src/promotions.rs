//! Promotions
//!
//! Read-only catalog data. A product may reference a promotion; the cart
//! shows it but never discounts with it.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Promotion Id
pub type PromotionId = TypedId<Promotion>;

/// A promotion as published by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    /// Backend identifier.
    #[serde(alias = "_id")]
    pub id: PromotionId,
    /// Headline shown to customers.
    pub offer: String,
    /// Longer explanation, may be blank.
    #[serde(default)]
    pub description: String,
    /// Discount percentage.
    pub discount: Decimal,
    /// Minimum order value the offer applies from.
    #[serde(default)]
    pub min_order: Decimal,
    /// End of the offer; `None` never expires.
    pub expires: Option<Timestamp>,
    /// Category or product group the offer targets.
    #[serde(default)]
    pub applies_to: String,
    /// Switched off promotions are hidden regardless of expiry.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Promotion {
    /// Active and not yet expired at `now`.
    pub fn is_current(&self, now: Timestamp) -> bool {
        self.is_active && self.expires.is_none_or(|expires| expires > now)
    }
}
