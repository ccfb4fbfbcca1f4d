//! Inquiry Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    cart::{CartEntry, CartStore},
    inquiries::ContactError,
    storage::CartStorage,
};

/// Contact details typed into the inquiry form. Blank optional fields are
/// left out of the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    /// Customer name, required.
    pub name: String,
    /// Reply address, required.
    pub email: String,
    /// Optional phone number.
    pub phone: String,
    /// Optional free-text message.
    pub message: String,
}

impl ContactFields {
    /// Fields with the required name and email filled in.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Set the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Set the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Check the required fields before submitting.
    ///
    /// The submitter does not call this; it is for the form that collects
    /// the fields.
    ///
    /// # Errors
    ///
    /// Returns the first problem found with `name` or `email`.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }

        let email = self.email.trim();

        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }

        let well_formed = email
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty() && !domain.is_empty() && !domain.contains('@')
            })
            && !email.chars().any(char::is_whitespace);

        if !well_formed {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }

        Ok(())
    }

    /// True when every field is blank.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.phone.is_empty() && self.message.is_empty()
    }

    /// Reset every field to an empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One cart line as sent to the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryLine {
    /// Product name.
    pub name: String,
    /// Units ordered.
    pub quantity: u32,
    /// Unit price.
    #[serde(rename = "price", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// Unit price times quantity.
    #[serde(rename = "total", with = "rust_decimal::serde::float")]
    pub line_total: Decimal,
}

impl From<&CartEntry> for InquiryLine {
    fn from(entry: &CartEntry) -> Self {
        Self {
            name: entry.product.name.clone(),
            quantity: entry.quantity.get(),
            unit_price: entry.product.price,
            line_total: entry.line_total(),
        }
    }
}

/// Request body for `POST /api/inquiries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryPayload {
    /// Customer name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Phone number, omitted when blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Message, omitted when blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Cart lines in cart order.
    pub cart_items: Vec<InquiryLine>,
    /// Sum of the line totals.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}

impl InquiryPayload {
    /// Snapshot `cart` and `fields` into an owned payload.
    pub fn from_cart<S: CartStorage>(cart: &CartStore<S>, fields: &ContactFields) -> Self {
        Self {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            phone: optional(&fields.phone),
            message: optional(&fields.message),
            cart_items: cart.entries().iter().map(InquiryLine::from).collect(),
            total_amount: cart.total(),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();

    (!value.is_empty()).then(|| value.to_string())
}

/// Outcome of the most recent submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing sent yet, or a request is in flight.
    #[default]
    Idle,
    /// The shop accepted the inquiry.
    Success,
    /// The request failed; the fields are kept for a retry.
    Failure,
}

impl SubmissionStatus {
    /// Short machine-readable name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Success => "success",
            Self::Failure => "error",
        }
    }

    /// Text shown to the customer, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Success => Some("Inquiry sent successfully! We will contact you soon."),
            Self::Failure => Some("Failed to send inquiry. Please try again."),
        }
    }
}

/// Contact form state: the typed fields and the last submission status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryForm {
    /// Fields as currently typed.
    pub fields: ContactFields,
    status: SubmissionStatus,
}

impl InquiryForm {
    /// A fresh form in the idle state.
    pub fn new(fields: ContactFields) -> Self {
        Self {
            fields,
            status: SubmissionStatus::Idle,
        }
    }

    /// Outcome of the last submission.
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Build the payload for the current cart and fields.
    pub fn payload<S: CartStorage>(&self, cart: &CartStore<S>) -> InquiryPayload {
        InquiryPayload::from_cart(cart, &self.fields)
    }

    pub(crate) fn set_status(&mut self, status: SubmissionStatus) {
        self.status = status;
    }
}
