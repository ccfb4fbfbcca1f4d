//! Storefront REST client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::{CatalogClient, normalise_products, parse_promotions},
    inquiries::{InquiryClient, InquiryPayload},
    products::Product,
    promotions::Promotion,
};

const INQUIRIES_PATH: &str = "api/inquiries";
const PRODUCTS_PATH: &str = "api/products";
const PROMOTIONS_PATH: &str = "api/promotions";

/// Connection settings for the storefront backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend address, e.g. `"http://localhost:5000"`.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, timeout or body (de)serialization error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("unexpected response status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, empty if it could not be read.
        body: String,
    },

    /// The configured base URL cannot be used.
    #[error("invalid base url {0:?}")]
    InvalidBaseUrl(String),
}

/// HTTP client for the storefront's public endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: Url,
    http: Client,
}

impl ApiClient {
    /// Create a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is not an absolute `http(s)` URL
    /// or the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut base = Url::parse(&config.base_url)
            .map_err(|error| ApiError::InvalidBaseUrl(format!("{}: {error}", config.base_url)))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(config.base_url.clone()));
        }

        // Ensure relative joins append instead of replacing the last segment.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { base, http })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|error| ApiError::InvalidBaseUrl(format!("{}: {error}", self.base)))
    }

    async fn get_documents(&self, path: &str) -> Result<Vec<Value>, ApiError> {
        let url = self.url(path)?;

        debug!(%url, "fetching catalog");

        let response = ensure_success(self.http.get(url).send().await?).await?;

        Ok(response.json().await?)
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    Err(ApiError::UnexpectedStatus { status, body })
}

#[async_trait]
impl InquiryClient for ApiClient {
    async fn create_inquiry(&self, payload: &InquiryPayload) -> Result<(), ApiError> {
        let url = self.url(INQUIRIES_PATH)?;

        debug!(%url, lines = payload.cart_items.len(), "posting inquiry");

        ensure_success(self.http.post(url).json(payload).send().await?).await?;

        Ok(())
    }
}

#[async_trait]
impl CatalogClient for ApiClient {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        Ok(normalise_products(self.get_documents(PRODUCTS_PATH).await?))
    }

    async fn list_promotions(&self) -> Result<Vec<Promotion>, ApiError> {
        Ok(parse_promotions(self.get_documents(PROMOTIONS_PATH).await?))
    }
}
