//! Persisted cart snapshots.
//!
//! Current layout:
//!
//! ```json
//! { "version": 1, "savedAt": "2026-10-18T09:00:00Z", "entries": [{ "product": {..}, "quantity": 2 }] }
//! ```
//!
//! Carts written before versioning were a bare array of
//! `{ product, quantity }` with backend-shaped products; those are migrated
//! entry by entry on load.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::{
    cart::CartEntry,
    products::{Product, RawProduct},
    quantity::Quantity,
};

/// Storage key the cart is persisted under.
pub const CART_STORAGE_KEY: &str = "cart";

/// Schema version written by this build.
pub const SNAPSHOT_VERSION: u64 = 1;

/// Why a persisted cart could not be used at all.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Not JSON at all.
    #[error("cart snapshot is not valid JSON")]
    Malformed(#[source] serde_json::Error),

    /// Written by a newer build.
    #[error("cart snapshot version {0} is not supported")]
    UnsupportedVersion(u64),

    /// Neither a versioned object nor a legacy array.
    #[error("cart snapshot has an unexpected shape")]
    UnexpectedShape,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotOut<'a> {
    version: u64,
    saved_at: Timestamp,
    entries: &'a [CartEntry],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotIn {
    version: u64,
    #[serde(default)]
    entries: Vec<Value>,
}

#[derive(Deserialize)]
struct StoredEntry {
    product: RawProduct,
    quantity: Quantity,
}

#[derive(Deserialize)]
struct LegacyEntry {
    product: RawProduct,
    quantity: Value,
}

/// Serialize `entries` into the current snapshot layout.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(entries: &[CartEntry], saved_at: Timestamp) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SnapshotOut {
        version: SNAPSHOT_VERSION,
        saved_at,
        entries,
    })
}

/// Decode a persisted cart, migrating legacy layouts.
///
/// Products are normalised whatever the layout. Entries that cannot be
/// decoded or whose product fails validation are skipped; entries repeating
/// a product id are merged.
///
/// # Errors
///
/// Returns an error when the payload as a whole is unusable.
pub fn decode(raw: &str) -> Result<Vec<CartEntry>, SnapshotError> {
    let value: Value = serde_json::from_str(raw).map_err(SnapshotError::Malformed)?;

    match value {
        Value::Array(items) => Ok(collect(items, decode_legacy_entry)),
        Value::Object(_) => {
            let snapshot: SnapshotIn =
                serde_json::from_value(value).map_err(|_error| SnapshotError::UnexpectedShape)?;

            match snapshot.version {
                SNAPSHOT_VERSION => Ok(collect(snapshot.entries, decode_entry)),
                other => Err(SnapshotError::UnsupportedVersion(other)),
            }
        }
        _ => Err(SnapshotError::UnexpectedShape),
    }
}

fn collect(items: Vec<Value>, decode_one: fn(Value) -> Option<CartEntry>) -> Vec<CartEntry> {
    let mut entries: Vec<CartEntry> = Vec::with_capacity(items.len());

    for (index, item) in items.into_iter().enumerate() {
        let Some(entry) = decode_one(item) else {
            warn!(index, "dropping unreadable cart entry");
            continue;
        };

        match entries
            .iter_mut()
            .find(|existing| existing.product.id == entry.product.id)
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(entry.quantity),
            None => entries.push(entry),
        }
    }

    entries
}

fn decode_entry(item: Value) -> Option<CartEntry> {
    let stored: StoredEntry = serde_json::from_value(item).ok()?;
    let product = Product::try_from(stored.product).ok()?;

    Some(CartEntry::new(product, stored.quantity))
}

fn decode_legacy_entry(item: Value) -> Option<CartEntry> {
    let legacy: LegacyEntry = serde_json::from_value(item).ok()?;
    let product = Product::try_from(legacy.product).ok()?;

    let quantity = match legacy.quantity {
        Value::Number(number) => Quantity::parse(&number.to_string()).ok()?,
        Value::String(text) => Quantity::parse(&text).ok()?,
        _ => return None,
    };

    Some(CartEntry::new(product, quantity))
}
