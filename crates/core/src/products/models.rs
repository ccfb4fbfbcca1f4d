//! Product Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ids::TypedId, promotions::PromotionId};

/// Product Id
pub type ProductId = TypedId<Product>;

/// Normalised product as held by the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier, never blank.
    pub id: ProductId,
    /// Display name, trimmed.
    pub name: String,
    /// Unit price, never negative.
    pub price: Decimal,
    /// Catalog category; empty when unknown.
    #[serde(default)]
    pub category: String,
    /// Optional product description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image URLs, first one is the thumbnail.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Promotion advertised alongside the product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PromotionId>,
}

impl Product {
    /// Create a product with the required fields only.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: String::new(),
            description: None,
            images: Vec::new(),
            promotion: None,
        }
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Attach a promotion reference.
    #[must_use]
    pub fn with_promotion(mut self, promotion: impl Into<PromotionId>) -> Self {
        self.promotion = Some(promotion.into());
        self
    }

    /// The first image, used as the thumbnail.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
