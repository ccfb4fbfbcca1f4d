//! Inquiry commands

use std::io::Write;

use scoop::{
    catalog::CatalogClient,
    inquiries::{ContactFields, InquiryClient, InquiryForm, SubmissionStatus},
    storage::CartStorage,
};
use tracing::info;

use crate::{
    commands::{Storefront, SubmitArgs},
    errors::CliError,
    format::money,
};

pub(crate) async fn submit<S, C, I>(
    storefront: &mut Storefront<S, C, I>,
    args: SubmitArgs,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    S: CartStorage,
    C: CatalogClient,
    I: InquiryClient,
{
    let fields = ContactFields::new(args.name, args.email)
        .with_phone(args.phone)
        .with_message(args.message);

    fields.validate()?;

    if storefront.cart.is_empty() {
        return Err(CliError::EmptyCart);
    }

    info!(
        lines = storefront.cart.len(),
        total = %storefront.cart.total(),
        "submitting inquiry"
    );

    let mut form = InquiryForm::new(fields);

    let status = storefront
        .submitter
        .submit_cart(&storefront.cart, &mut form)
        .await;

    if let Some(message) = status.message() {
        writeln!(out, "{message}")?;
    }

    match status {
        SubmissionStatus::Failure => Err(CliError::InquiryFailed),
        SubmissionStatus::Idle | SubmissionStatus::Success => {
            writeln!(
                out,
                "Your cart still holds {} items totalling {}",
                storefront.cart.item_count(),
                money(storefront.cart.total())
            )?;

            Ok(())
        }
    }
}
