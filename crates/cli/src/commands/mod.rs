//! Commands

use std::io::Write;

use clap::{Args, Subcommand};

use scoop::{
    cart::CartStore, catalog::CatalogClient, inquiries::InquiryClient,
    inquiries::InquirySubmitter, storage::CartStorage,
};

use crate::errors::CliError;

pub(crate) mod cart;
pub(crate) mod catalog;
pub(crate) mod inquiry;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List catalog products
    Products,

    /// List current promotions
    Promotions,

    /// Inspect or change the cart
    Cart(CartCommand),

    /// Send the cart to the shop
    Inquiry(InquiryCommand),
}

#[derive(Debug, Args)]
pub struct CartCommand {
    #[command(subcommand)]
    pub command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum CartSubcommand {
    /// Show cart contents and total
    Show,

    /// Add a catalog product to the cart
    Add(AddArgs),

    /// Set the quantity of a cart line
    Update(UpdateArgs),

    /// Remove a cart line
    Remove(RemoveArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Catalog product id
    pub product_id: String,

    /// Number of units to add
    #[arg(short, long, default_value = "1")]
    pub quantity: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Product id of the cart line
    pub product_id: String,

    /// New quantity
    #[arg(allow_hyphen_values = true)]
    pub quantity: String,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Product id of the cart line
    pub product_id: String,
}

#[derive(Debug, Args)]
pub struct InquiryCommand {
    #[command(subcommand)]
    pub command: InquirySubcommand,
}

#[derive(Debug, Subcommand)]
pub enum InquirySubcommand {
    /// Submit the cart with your contact details
    Submit(SubmitArgs),
}

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Your name
    #[arg(long)]
    pub name: String,

    /// Your email address
    #[arg(long)]
    pub email: String,

    /// Optional phone number
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Optional message, e.g. special requests or bulk orders
    #[arg(long, default_value = "")]
    pub message: String,
}

/// One CLI invocation's view of the storefront.
pub(crate) struct Storefront<S: CartStorage, C, I> {
    pub cart: CartStore<S>,
    pub catalog: C,
    pub submitter: InquirySubmitter<I>,
}

impl<S, C, I> Storefront<S, C, I>
where
    S: CartStorage,
    C: CatalogClient,
    I: InquiryClient,
{
    pub(crate) fn new(cart: CartStore<S>, catalog: C, inquiries: I) -> Self {
        Self {
            cart,
            catalog,
            submitter: InquirySubmitter::new(inquiries),
        }
    }

    pub(crate) async fn run(
        &mut self,
        command: Command,
        out: &mut impl Write,
    ) -> Result<(), CliError> {
        match command {
            Command::Products => catalog::products(self, out).await,
            Command::Promotions => catalog::promotions(self, out).await,
            Command::Cart(CartCommand { command }) => match command {
                CartSubcommand::Show => cart::show(self, out),
                CartSubcommand::Add(args) => cart::add(self, args, out).await,
                CartSubcommand::Update(args) => cart::update(self, &args, out),
                CartSubcommand::Remove(args) => cart::remove(self, &args, out),
            },
            Command::Inquiry(InquiryCommand {
                command: InquirySubcommand::Submit(args),
            }) => inquiry::submit(self, args, out).await,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use rust_decimal::Decimal;

    use scoop::{
        catalog::MockCatalogClient, inquiries::MockInquiryClient, products::Product,
        storage::MemoryStorage,
    };

    use super::*;

    pub(crate) type TestStorefront = Storefront<MemoryStorage, MockCatalogClient, MockInquiryClient>;

    pub(crate) fn catalog() -> Vec<Product> {
        vec![
            Product::new("p1", "Vanilla", Decimal::from(10)).with_category("tubs"),
            Product::new("p2", "Choc", Decimal::from(5))
                .with_category("cones")
                .with_promotion("promo-1"),
        ]
    }

    /// Storefront whose catalog answers `list_products` any number of times
    /// and whose inquiry client must not be called.
    pub(crate) fn storefront(storage: MemoryStorage) -> TestStorefront {
        let mut catalog_client = MockCatalogClient::new();

        catalog_client
            .expect_list_products()
            .returning(|| Ok(catalog()));

        let mut inquiries = MockInquiryClient::new();

        inquiries.expect_create_inquiry().never();

        Storefront::new(CartStore::open(storage), catalog_client, inquiries)
    }

    pub(crate) fn output(buffer: Vec<u8>) -> String {
        String::from_utf8_lossy(&buffer).into_owned()
    }
}
