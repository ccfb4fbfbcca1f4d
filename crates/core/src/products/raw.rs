//! Raw product payloads
//!
//! Products reach the storefront from the REST catalog (with a populated
//! `promotionId`), from legacy persisted carts (`_id`, single `image`), and
//! from hand-written demo data (`id`, `images[]`).

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    products::{Product, ProductError, ProductId},
    promotions::PromotionId,
};

/// A product in any of the shapes its producers emit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    /// `id` or Mongo-style `_id`.
    #[serde(alias = "_id")]
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// JSON number or decimal string.
    pub price: Option<Decimal>,
    /// Catalog category.
    pub category: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Single image, as older payloads carry it.
    pub image: Option<String>,
    /// Image list, as newer payloads carry it.
    #[serde(default)]
    pub images: Vec<String>,
    /// Promotion reference, bare or populated.
    #[serde(alias = "promotion")]
    pub promotion_id: Option<RawPromotionRef>,
}

/// `promotionId` is either a bare id or the populated promotion document.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPromotionRef {
    /// Bare promotion id.
    Id(String),
    /// Full promotion document; only the id is kept.
    Populated {
        /// Promotion id.
        #[serde(alias = "_id")]
        id: String,
    },
}

impl RawPromotionRef {
    fn into_id(self) -> Option<PromotionId> {
        let id = match self {
            Self::Id(id) | Self::Populated { id } => id,
        };

        let id = id.trim();

        (!id.is_empty()).then(|| PromotionId::new(id))
    }
}

impl TryFrom<RawProduct> for Product {
    type Error = ProductError;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        let id = non_empty(raw.id).ok_or(ProductError::MissingId)?;
        let name = non_empty(raw.name).ok_or_else(|| ProductError::MissingName(id.clone()))?;
        let price = raw
            .price
            .ok_or_else(|| ProductError::MissingPrice(id.clone()))?;

        if price.is_sign_negative() && !price.is_zero() {
            return Err(ProductError::NegativePrice { id, price });
        }

        let mut images: Vec<String> = Vec::with_capacity(raw.images.len() + 1);

        for image in raw.image.into_iter().chain(raw.images) {
            let image = image.trim();

            if !image.is_empty() && !images.iter().any(|seen| seen == image) {
                images.push(image.to_string());
            }
        }

        Ok(Self {
            id: ProductId::new(id),
            name,
            price: price.normalize(),
            category: non_empty(raw.category).unwrap_or_default(),
            description: non_empty(raw.description),
            images,
            promotion: raw.promotion_id.and_then(RawPromotionRef::into_id),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
