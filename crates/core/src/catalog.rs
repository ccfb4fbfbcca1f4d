//! Catalog
//!
//! Products and promotions published by the backend. Records are normalised
//! one by one so a single bad document does not hide the rest of the shop.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use serde_json::Value;
use tracing::warn;

use crate::{
    http::ApiError,
    products::{Product, RawProduct},
    promotions::Promotion,
};

/// Read access to the backend catalog.
#[automock]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Every product that normalises cleanly.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Every promotion, current or not.
    async fn list_promotions(&self) -> Result<Vec<Promotion>, ApiError>;
}

/// Normalise raw product documents, skipping the ones that do not fit.
pub fn normalise_products(documents: Vec<Value>) -> Vec<Product> {
    documents
        .into_iter()
        .enumerate()
        .filter_map(|(index, document)| {
            let product = serde_json::from_value::<RawProduct>(document)
                .map_err(|error| error.to_string())
                .and_then(|raw| Product::try_from(raw).map_err(|error| error.to_string()));

            match product {
                Ok(product) => Some(product),
                Err(reason) => {
                    warn!(index, %reason, "skipping catalog product");
                    None
                }
            }
        })
        .collect()
}

/// Parse raw promotion documents, skipping the ones that do not fit.
pub fn parse_promotions(documents: Vec<Value>) -> Vec<Promotion> {
    documents
        .into_iter()
        .enumerate()
        .filter_map(|(index, document)| match serde_json::from_value(document) {
            Ok(promotion) => Some(promotion),
            Err(error) => {
                warn!(index, %error, "skipping catalog promotion");
                None
            }
        })
        .collect()
}

/// Promotions that are active and unexpired at `now`.
pub fn current_promotions(promotions: &[Promotion], now: Timestamp) -> Vec<&Promotion> {
    promotions
        .iter()
        .filter(|promotion| promotion.is_current(now))
        .collect()
}
