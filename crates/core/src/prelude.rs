//! Prelude

pub use crate::{
    cart::{CartEntry, CartError, CartStore},
    catalog::CatalogClient,
    http::{ApiClient, ApiConfig, ApiError},
    inquiries::{
        ContactError, ContactFields, InquiryClient, InquiryForm, InquiryPayload,
        InquirySubmitter, SubmissionStatus,
    },
    products::{Product, ProductError, ProductId, RawProduct},
    promotions::{Promotion, PromotionId},
    quantity::{Quantity, QuantityError},
    storage::{CartStorage, FileStorage, MemoryStorage, StorageError},
};
