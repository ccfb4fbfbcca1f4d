//! Cart commands

use std::io::Write;

use scoop::{
    catalog::CatalogClient,
    inquiries::InquiryClient,
    products::{ProductId, find_product},
    quantity::Quantity,
    storage::CartStorage,
};

use crate::{
    commands::{AddArgs, RemoveArgs, Storefront, UpdateArgs},
    errors::CliError,
    format::money,
};

pub(crate) fn show<S, C, I>(
    storefront: &Storefront<S, C, I>,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    S: CartStorage,
    C: CatalogClient,
    I: InquiryClient,
{
    let cart = &storefront.cart;

    if cart.is_empty() {
        writeln!(out, "Your cart is empty.")?;
        return Ok(());
    }

    for entry in cart.entries() {
        writeln!(
            out,
            "{:<26} {:<24} {} x {} = {}",
            entry.product.id,
            entry.product.name,
            money(entry.product.price),
            entry.quantity,
            money(entry.line_total()),
        )?;
    }

    writeln!(out, "Items: {}", cart.item_count())?;
    writeln!(out, "Total: {}", money(cart.total()))?;

    Ok(())
}

pub(crate) async fn add<S, C, I>(
    storefront: &mut Storefront<S, C, I>,
    args: AddArgs,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    S: CartStorage,
    C: CatalogClient,
    I: InquiryClient,
{
    // Parse before hitting the network so typos fail fast.
    let quantity = Quantity::parse(&args.quantity)?;
    let id = ProductId::new(args.product_id);

    let products = storefront.catalog.list_products().await?;

    let product = find_product(&products, &id)
        .cloned()
        .ok_or_else(|| CliError::UnknownProduct(id.to_string()))?;

    let name = product.name.clone();

    storefront.cart.add_to_cart(product, quantity)?;

    writeln!(out, "Added {quantity} x {name} to cart")?;
    writeln!(out, "Total: {}", money(storefront.cart.total()))?;

    Ok(())
}

pub(crate) fn update<S, C, I>(
    storefront: &mut Storefront<S, C, I>,
    args: &UpdateArgs,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    S: CartStorage,
    C: CatalogClient,
    I: InquiryClient,
{
    let quantity = Quantity::parse(&args.quantity)?;
    let id = ProductId::new(args.product_id.as_str());

    if storefront.cart.get(&id).is_none() {
        return Err(CliError::NotInCart(id.into_string()));
    }

    storefront
        .cart
        .update_quantity(&id, i64::from(quantity.get()))?;

    writeln!(out, "Updated {id} to {quantity}")?;
    writeln!(out, "Total: {}", money(storefront.cart.total()))?;

    Ok(())
}

pub(crate) fn remove<S, C, I>(
    storefront: &mut Storefront<S, C, I>,
    args: &RemoveArgs,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    S: CartStorage,
    C: CatalogClient,
    I: InquiryClient,
{
    let id = ProductId::new(args.product_id.as_str());

    if storefront.cart.get(&id).is_none() {
        writeln!(out, "{id} was not in the cart")?;
        return Ok(());
    }

    storefront.cart.remove_from_cart(&id)?;

    writeln!(out, "Removed {id}")?;
    writeln!(out, "Total: {}", money(storefront.cart.total()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use scoop::{quantity::QuantityError, storage::MemoryStorage};
    use testresult::TestResult;

    use crate::commands::test_support::{output, storefront};

    use super::*;

    fn add_args(id: &str, quantity: &str) -> AddArgs {
        AddArgs {
            product_id: id.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[tokio::test]
    async fn add_looks_up_catalog_and_merges() -> TestResult {
        let mut storefront = storefront(MemoryStorage::new());
        let mut out = Vec::new();

        add(&mut storefront, add_args("p1", "2"), &mut out).await?;
        add(&mut storefront, add_args("p2", "1"), &mut out).await?;
        add(&mut storefront, add_args("p1", "1"), &mut out).await?;

        assert_eq!(storefront.cart.len(), 2);
        assert!(
            output(out).ends_with("Added 1 x Vanilla to cart\nTotal: $35.00\n"),
            "unexpected output"
        );

        Ok(())
    }

    #[tokio::test]
    async fn add_rejects_bad_quantities_before_fetching() -> TestResult {
        let mut storefront = storefront(MemoryStorage::new());

        for quantity in ["0", "-1", "NaN", "abc", "1.5"] {
            let result = add(&mut storefront, add_args("p1", quantity), &mut Vec::new()).await;

            assert!(
                matches!(result, Err(CliError::Quantity(_))),
                "{quantity} should be rejected, got {result:?}"
            );
        }

        assert!(storefront.cart.is_empty(), "nothing should have been added");

        Ok(())
    }

    #[tokio::test]
    async fn add_unknown_product_fails() -> TestResult {
        let mut storefront = storefront(MemoryStorage::new());

        let result = add(&mut storefront, add_args("nope", "1"), &mut Vec::new()).await;

        assert!(
            matches!(result, Err(CliError::UnknownProduct(ref id)) if id == "nope"),
            "expected unknown product, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_and_remove_edit_lines() -> TestResult {
        let mut storefront = storefront(MemoryStorage::new());
        let mut out = Vec::new();

        add(&mut storefront, add_args("p1", "2"), &mut out).await?;
        add(&mut storefront, add_args("p2", "1"), &mut out).await?;

        update(
            &mut storefront,
            &UpdateArgs {
                product_id: "p1".to_string(),
                quantity: "3".to_string(),
            },
            &mut out,
        )?;

        assert_eq!(storefront.cart.total(), rust_decimal::Decimal::from(35));

        remove(
            &mut storefront,
            &RemoveArgs {
                product_id: "p2".to_string(),
            },
            &mut out,
        )?;

        assert_eq!(storefront.cart.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_zero_instead_of_clamping() -> TestResult {
        let mut storefront = storefront(MemoryStorage::new());

        add(&mut storefront, add_args("p1", "2"), &mut Vec::new()).await?;

        let result = update(
            &mut storefront,
            &UpdateArgs {
                product_id: "p1".to_string(),
                quantity: "0".to_string(),
            },
            &mut Vec::new(),
        );

        assert!(
            matches!(result, Err(CliError::Quantity(QuantityError::NotPositive(0)))),
            "expected quantity error, got {result:?}"
        );
        assert_eq!(
            storefront.cart.get(&ProductId::new("p1")).map(|e| e.quantity.get()),
            Some(2)
        );

        Ok(())
    }

    #[test]
    fn update_missing_line_is_reported() {
        let mut storefront = storefront(MemoryStorage::new());

        let result = update(
            &mut storefront,
            &UpdateArgs {
                product_id: "p9".to_string(),
                quantity: "2".to_string(),
            },
            &mut Vec::new(),
        );

        assert!(
            matches!(result, Err(CliError::NotInCart(_))),
            "expected not in cart, got {result:?}"
        );
    }

    #[test]
    fn remove_missing_line_is_harmless() -> TestResult {
        let mut storefront = storefront(MemoryStorage::new());
        let mut out = Vec::new();

        remove(
            &mut storefront,
            &RemoveArgs {
                product_id: "p9".to_string(),
            },
            &mut out,
        )?;

        assert_eq!(output(out), "p9 was not in the cart\n");

        Ok(())
    }

    #[tokio::test]
    async fn show_lists_lines_and_total() -> TestResult {
        let mut storefront = storefront(MemoryStorage::new());

        add(&mut storefront, add_args("p1", "2"), &mut Vec::new()).await?;

        let mut out = Vec::new();

        show(&storefront, &mut out)?;

        let text = output(out);

        assert!(text.contains("Vanilla"), "missing product name: {text}");
        assert!(text.contains("$10.00 x 2 = $20.00"), "missing line total: {text}");
        assert!(text.ends_with("Items: 2\nTotal: $20.00\n"), "missing total: {text}");

        Ok(())
    }

    #[test]
    fn show_empty_cart() -> TestResult {
        let storefront = storefront(MemoryStorage::new());
        let mut out = Vec::new();

        show(&storefront, &mut out)?;

        assert_eq!(output(out), "Your cart is empty.\n");

        Ok(())
    }
}
