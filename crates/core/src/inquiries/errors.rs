//! Contact form validation errors.

use thiserror::Error;

/// Why the contact fields cannot be submitted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    /// Name is blank.
    #[error("name is required")]
    MissingName,

    /// Email is blank.
    #[error("email is required")]
    MissingEmail,

    /// Email does not look like `local@domain`.
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
}
