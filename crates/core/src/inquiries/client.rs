//! Inquiry transport.

use async_trait::async_trait;
use mockall::automock;

use crate::{http::ApiError, inquiries::InquiryPayload};

/// Delivers inquiries to the shop.
#[automock]
#[async_trait]
pub trait InquiryClient: Send + Sync {
    /// Deliver one inquiry. Any error means the inquiry may not have been
    /// recorded.
    async fn create_inquiry(&self, payload: &InquiryPayload) -> Result<(), ApiError>;
}
