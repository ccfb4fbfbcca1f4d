//! Catalog commands

use std::io::Write;

use jiff::Timestamp;
use scoop::{
    catalog::{CatalogClient, current_promotions},
    inquiries::InquiryClient,
    storage::CartStorage,
};

use crate::{commands::Storefront, errors::CliError, format::money};

pub(crate) async fn products<S, C, I>(
    storefront: &Storefront<S, C, I>,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    S: CartStorage,
    C: CatalogClient,
    I: InquiryClient,
{
    let products = storefront.catalog.list_products().await?;

    if products.is_empty() {
        writeln!(out, "No products available.")?;
        return Ok(());
    }

    for product in &products {
        let promotion = if product.promotion.is_some() { " *" } else { "" };

        writeln!(
            out,
            "{:<26} {:<24} {:>10} {}{promotion}",
            product.id,
            product.name,
            money(product.price),
            product.category,
        )?;
    }

    Ok(())
}

pub(crate) async fn promotions<S, C, I>(
    storefront: &Storefront<S, C, I>,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    S: CartStorage,
    C: CatalogClient,
    I: InquiryClient,
{
    let promotions = storefront.catalog.list_promotions().await?;
    let current = current_promotions(&promotions, Timestamp::now());

    if current.is_empty() {
        writeln!(out, "No current promotions.")?;
        return Ok(());
    }

    for promotion in current {
        write!(out, "{}: {}% off", promotion.offer, promotion.discount.normalize())?;

        if !promotion.applies_to.is_empty() {
            write!(out, " {}", promotion.applies_to)?;
        }

        if !promotion.min_order.is_zero() {
            write!(out, " on orders over {}", money(promotion.min_order))?;
        }

        if let Some(expires) = promotion.expires {
            write!(out, " until {}", expires.strftime("%Y-%m-%d"))?;
        }

        writeln!(out)?;
    }

    Ok(())
}
