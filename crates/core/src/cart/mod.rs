//! Cart
//!
//! The client-side cart: an ordered list of entries, one per product,
//! persisted after every change.

pub mod errors;
pub mod models;
pub mod snapshot;
pub mod store;

pub use errors::CartError;
pub use models::CartEntry;
pub use snapshot::{CART_STORAGE_KEY, SNAPSHOT_VERSION, SnapshotError};
pub use store::CartStore;
