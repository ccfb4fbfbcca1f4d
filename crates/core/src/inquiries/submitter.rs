//! Inquiry submitter.

use tracing::{error, info};

use crate::{
    cart::CartStore,
    inquiries::{InquiryClient, InquiryForm, InquiryPayload, SubmissionStatus},
    storage::CartStorage,
};

/// Sends inquiries and records the outcome on the form.
///
/// Best effort: one request per call, no retries and no idempotency key. A
/// repeated submit after a failure is a new inquiry.
#[derive(Debug, Clone)]
pub struct InquirySubmitter<C> {
    client: C,
}

impl<C: InquiryClient> InquirySubmitter<C> {
    /// Submitter sending through `client`.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Snapshot `cart` and the form fields, then send them.
    ///
    /// Use [`InquiryForm::payload`] with [`InquirySubmitter::submit`] instead
    /// when the cart must stay mutable while the request is in flight.
    pub async fn submit_cart<S: CartStorage>(
        &self,
        cart: &CartStore<S>,
        form: &mut InquiryForm,
    ) -> SubmissionStatus {
        let payload = form.payload(cart);

        self.submit(payload, form).await
    }

    /// Send an already built payload.
    ///
    /// On success the contact fields are cleared; on failure they are kept so
    /// the customer can retry. The cart is never touched.
    pub async fn submit(&self, payload: InquiryPayload, form: &mut InquiryForm) -> SubmissionStatus {
        form.set_status(SubmissionStatus::Idle);

        let status = match self.client.create_inquiry(&payload).await {
            Ok(()) => {
                info!(
                    lines = payload.cart_items.len(),
                    total = %payload.total_amount,
                    "inquiry sent"
                );

                form.fields.clear();

                SubmissionStatus::Success
            }
            Err(err) => {
                error!(error = %err, "failed to send inquiry");

                SubmissionStatus::Failure
            }
        };

        form.set_status(status);

        status
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        http::ApiError,
        inquiries::{ContactFields, MockInquiryClient},
        products::Product,
        quantity::Quantity,
        storage::MemoryStorage,
    };

    use super::*;

    fn filled_cart() -> Result<CartStore<MemoryStorage>, crate::cart::CartError> {
        let mut cart = CartStore::open(MemoryStorage::new());

        cart.add_to_cart(Product::new("p1", "Vanilla", Decimal::TEN), Quantity::clamped(2))?;

        Ok(cart)
    }

    fn form() -> InquiryForm {
        InquiryForm::new(
            ContactFields::new("Ada", "ada@example.com")
                .with_phone("555-0100")
                .with_message("Party of 20"),
        )
    }

    #[tokio::test]
    async fn success_clears_fields_and_keeps_cart() -> TestResult {
        let cart = filled_cart()?;
        let mut form = form();

        let mut client = MockInquiryClient::new();

        client
            .expect_create_inquiry()
            .once()
            .withf(|payload| {
                payload.name == "Ada"
                    && payload.phone.as_deref() == Some("555-0100")
                    && payload.cart_items.len() == 1
                    && payload.total_amount == Decimal::from(20)
            })
            .returning(|_| Ok(()));

        let status = InquirySubmitter::new(client)
            .submit_cart(&cart, &mut form)
            .await;

        assert_eq!(status, SubmissionStatus::Success);
        assert_eq!(form.status().as_str(), "success");
        assert!(form.fields.is_empty(), "fields should reset after success");
        assert_eq!(cart.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn failure_keeps_fields_and_cart() -> TestResult {
        let cart = filled_cart()?;
        let before = cart.entries().to_vec();
        let mut form = form();
        let fields = form.fields.clone();

        let mut client = MockInquiryClient::new();

        client
            .expect_create_inquiry()
            .once()
            .returning(|_| Err(ApiError::UnexpectedStatus { status: 500, body: "boom".to_string() }));

        let status = InquirySubmitter::new(client)
            .submit_cart(&cart, &mut form)
            .await;

        assert_eq!(status, SubmissionStatus::Failure);
        assert_eq!(form.fields, fields);
        assert_eq!(cart.entries(), before.as_slice());

        Ok(())
    }

    #[tokio::test]
    async fn retry_after_failure_is_a_new_request() -> TestResult {
        let cart = filled_cart()?;
        let mut form = form();

        let mut client = MockInquiryClient::new();
        let mut calls = 0;

        client.expect_create_inquiry().times(2).returning(move |_| {
            calls += 1;

            if calls == 1 {
                Err(ApiError::UnexpectedStatus { status: 503, body: String::new() })
            } else {
                Ok(())
            }
        });

        let submitter = InquirySubmitter::new(client);

        assert_eq!(submitter.submit_cart(&cart, &mut form).await, SubmissionStatus::Failure);
        assert_eq!(submitter.submit_cart(&cart, &mut form).await, SubmissionStatus::Success);

        Ok(())
    }

    #[tokio::test]
    async fn payload_snapshot_is_unaffected_by_later_cart_changes() -> TestResult {
        let mut cart = filled_cart()?;
        let mut form = form();

        let payload = form.payload(&cart);

        cart.add_to_cart(Product::new("p2", "Choc", Decimal::from(5)), Quantity::ONE)?;

        let mut client = MockInquiryClient::new();

        client
            .expect_create_inquiry()
            .once()
            .withf(|payload| payload.cart_items.len() == 1 && payload.total_amount == Decimal::from(20))
            .returning(|_| Ok(()));

        let status = InquirySubmitter::new(client).submit(payload, &mut form).await;

        assert_eq!(status, SubmissionStatus::Success);
        assert_eq!(cart.len(), 2);

        Ok(())
    }
}
