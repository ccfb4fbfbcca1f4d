//! Products
//!
//! Products are owned by the backend catalog. Everything entering the cart
//! passes through [`RawProduct`] and is normalised into a [`Product`] first.

pub mod errors;
pub mod models;
pub mod raw;

pub use errors::ProductError;
pub use models::{Product, ProductId};
pub use raw::{RawProduct, RawPromotionRef};

/// Find a product by id in a catalog listing.
pub fn find_product<'a>(products: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    products.iter().find(|product| product.id == *id)
}
