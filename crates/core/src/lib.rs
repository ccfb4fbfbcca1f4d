//! Scoop storefront core
//!
//! Client-side state for the Scoop ice-cream storefront: a persisted cart
//! with merge-on-add semantics, and the inquiry flow that sends a snapshot
//! of that cart plus the customer's contact details to the shop.
//!
//! ```no_run
//! # use scoop::prelude::*;
//! # use rust_decimal::Decimal;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut cart = CartStore::open(FileStorage::new(".scoop"));
//!
//! cart.add_to_cart(Product::new("p1", "Vanilla", Decimal::TEN), Quantity::parse("2")?)?;
//!
//! let client = ApiClient::new(&ApiConfig {
//!     base_url: "http://localhost:5000".to_string(),
//!     timeout: std::time::Duration::from_secs(10),
//! })?;
//!
//! let mut form = InquiryForm::new(ContactFields::new("Ada", "ada@example.com"));
//! let status = InquirySubmitter::new(client).submit_cart(&cart, &mut form).await;
//!
//! println!("{}", status.as_str());
//! # Ok(())
//! # }
//! ```

pub mod cart;
pub mod catalog;
pub mod http;
pub mod ids;
pub mod inquiries;
pub mod prelude;
pub mod products;
pub mod promotions;
pub mod quantity;
pub mod storage;
