//! Inquiries
//!
//! An inquiry is the storefront's checkout: the customer's contact details
//! plus a snapshot of the cart, sent to the shop in a single request.

pub mod client;
pub mod errors;
pub mod models;
pub mod submitter;

pub use client::*;
pub use errors::ContactError;
pub use models::{ContactFields, InquiryForm, InquiryLine, InquiryPayload, SubmissionStatus};
pub use submitter::InquirySubmitter;
