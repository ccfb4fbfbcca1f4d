//! Scoop storefront CLI

use std::{error::Error, io, process::ExitCode};

use tracing::error;

use scoop::{cart::CartStore, http::ApiClient, storage::FileStorage};

use crate::{commands::Storefront, config::CliConfig, errors::CliError};

mod commands;
mod config;
mod errors;
mod format;
mod logging;

/// Scoop storefront CLI entry point
#[tokio::main(flavor = "current_thread")]
pub async fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments; prints usage on error
    let config = CliConfig::load().unwrap_or_else(|e| e.exit());

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "command failed");

            #[expect(
                clippy::print_stderr,
                reason = "errors are shown to the user whatever the log level"
            )]
            {
                eprintln!("error: {err}");

                let mut source = err.source();

                while let Some(cause) = source {
                    eprintln!("  caused by: {cause}");
                    source = cause.source();
                }
            }

            ExitCode::FAILURE
        }
    }
}

async fn run(config: CliConfig) -> Result<(), CliError> {
    logging::init_subscriber(&config.logging)?;

    let api = ApiClient::new(&config.api.api_config())?;
    let cart = CartStore::open(FileStorage::new(&config.storage.data_dir));

    let mut storefront = Storefront::new(cart, api.clone(), api);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    storefront.run(config.command, &mut out).await
}
