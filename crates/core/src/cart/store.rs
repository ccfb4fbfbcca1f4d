//! Cart store.

use jiff::Timestamp;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    cart::{
        CartEntry, CartError,
        snapshot::{self, CART_STORAGE_KEY},
    },
    products::{Product, ProductId},
    quantity::Quantity,
    storage::CartStorage,
};

/// Authoritative client-side cart state.
///
/// Construct one per session with [`CartStore::open`] and hand it to the
/// code that needs it. Every state change is written through to storage
/// before the mutator returns.
#[derive(Debug)]
pub struct CartStore<S: CartStorage> {
    storage: S,
    entries: Vec<CartEntry>,
}

impl<S: CartStorage> CartStore<S> {
    /// Rehydrate the cart from `storage`.
    ///
    /// A missing, unreadable or unsupported snapshot yields an empty cart.
    pub fn open(storage: S) -> Self {
        let entries = match storage.load(CART_STORAGE_KEY) {
            Ok(Some(raw)) => snapshot::decode(&raw).unwrap_or_else(|error| {
                warn!(%error, "discarding persisted cart");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(error) => {
                warn!(%error, "could not read persisted cart");
                Vec::new()
            }
        };

        debug!(entries = entries.len(), "cart opened");

        Self { storage, entries }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the cart holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for `product_id`, if present.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartEntry> {
        self.entries
            .iter()
            .find(|entry| entry.product.id == *product_id)
    }

    /// Total number of units across all entries.
    pub fn item_count(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.quantity.get()))
            .sum()
    }

    /// Sum of `price * quantity` over every entry. Not rounded.
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Add `quantity` units of `product`.
    ///
    /// Merges into the existing entry for the same product id, otherwise
    /// appends a new entry at the end.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be persisted.
    pub fn add_to_cart(&mut self, product: Product, quantity: Quantity) -> Result<(), CartError> {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.product.id == product.id)
        {
            Some(entry) => {
                entry.quantity = entry.quantity.saturating_add(quantity);

                debug!(product = %product.id, quantity = %entry.quantity, "merged into cart entry");
            }
            None => {
                debug!(product = %product.id, %quantity, "appended cart entry");

                self.entries.push(CartEntry::new(product, quantity));
            }
        }

        self.persist()
    }

    /// Remove the entry for `product_id`. Absent ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be persisted.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> Result<(), CartError> {
        let before = self.entries.len();

        self.entries.retain(|entry| entry.product.id != *product_id);

        if self.entries.len() == before {
            return Ok(());
        }

        debug!(product = %product_id, "removed cart entry");

        self.persist()
    }

    /// Set the quantity for `product_id`, clamped to at least one.
    ///
    /// Zero or negative input does not remove the entry; use
    /// [`CartStore::remove_from_cart`] for that. Absent ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated cart cannot be persisted.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> Result<(), CartError> {
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.product.id == *product_id)
        else {
            return Ok(());
        };

        let quantity = Quantity::clamped(quantity);

        if entry.quantity == quantity {
            return Ok(());
        }

        entry.quantity = quantity;

        debug!(product = %product_id, %quantity, "updated cart quantity");

        self.persist()
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&self) -> Result<(), CartError> {
        let raw = snapshot::encode(&self.entries, Timestamp::now()).map_err(CartError::Serialize)?;

        self.storage.save(CART_STORAGE_KEY, &raw)?;

        Ok(())
    }
}
