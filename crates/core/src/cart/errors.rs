//! Cart errors.

use thiserror::Error;

use crate::storage::StorageError;

/// Errors raised while writing the cart through to storage.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend rejected the write.
    #[error("failed to persist cart")]
    Storage(#[from] StorageError),

    /// The snapshot could not be encoded.
    #[error("failed to serialize cart")]
    Serialize(#[source] serde_json::Error),
}
