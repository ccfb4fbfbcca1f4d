//! CLI errors.

use std::io;

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

use scoop::{
    cart::CartError, http::ApiError, inquiries::ContactError, quantity::QuantityError,
};

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("failed to initialise logging")]
    Logging(#[from] TryInitError),

    #[error("storefront request failed")]
    Api(#[from] ApiError),

    #[error("cart update failed")]
    Cart(#[from] CartError),

    #[error(transparent)]
    Quantity(#[from] QuantityError),

    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error("product {0} is not in the catalog")]
    UnknownProduct(String),

    #[error("product {0} is not in the cart")]
    NotInCart(String),

    #[error("the cart is empty; add something before sending an inquiry")]
    EmptyCart,

    #[error("inquiry was not sent")]
    InquiryFailed,

    #[error("failed to write output")]
    Output(#[from] io::Error),
}
