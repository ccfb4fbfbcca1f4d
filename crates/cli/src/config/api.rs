//! Backend Config

use std::time::Duration;

use clap::Args;
use scoop::http::ApiConfig;

/// Storefront backend settings.
#[derive(Debug, Args)]
pub struct ApiSettings {
    /// Storefront backend base URL
    #[arg(long, global = true, env = "SCOOP_API_URL", default_value = "http://localhost:5000")]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "SCOOP_API_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub api_timeout_seconds: u64,
}

impl ApiSettings {
    /// Client configuration for the core HTTP client.
    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api_url.clone(),
            timeout: Duration::from_secs(self.api_timeout_seconds),
        }
    }
}
