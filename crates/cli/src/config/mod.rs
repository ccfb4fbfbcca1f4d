//! CLI configuration module

use clap::Parser;

use crate::{
    commands::Command,
    config::{api::ApiSettings, logging::LoggingConfig, storage::StorageSettings},
};

pub(crate) mod api;
pub(crate) mod logging;
pub(crate) mod storage;

/// Scoop storefront CLI configuration
#[derive(Debug, Parser)]
#[command(name = "scoop", about = "Scoop ice-cream storefront", long_about = None)]
pub struct CliConfig {
    /// Storefront backend settings.
    #[command(flatten)]
    pub api: ApiSettings,

    /// Local cart storage settings.
    #[command(flatten)]
    pub storage: StorageSettings,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, time::Duration};

    use testresult::TestResult;

    use crate::{
        commands::{CartCommand, CartSubcommand},
        config::logging::LogFormat,
    };

    use super::*;

    #[test]
    fn global_flags_apply_after_subcommand() -> TestResult {
        let config = CliConfig::try_parse_from([
            "scoop",
            "cart",
            "show",
            "--api-url",
            "http://shop.test:8080",
            "--api-timeout-seconds",
            "3",
            "--data-dir",
            "/tmp/scoop-test",
            "--log-format",
            "json",
        ])?;

        let api = config.api.api_config();

        assert_eq!(api.base_url, "http://shop.test:8080");
        assert_eq!(api.timeout, Duration::from_secs(3));
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/scoop-test"));
        assert!(
            matches!(config.logging.log_format, LogFormat::Json),
            "log format should be json"
        );
        assert!(
            matches!(
                config.command,
                Command::Cart(CartCommand {
                    command: CartSubcommand::Show
                })
            ),
            "expected cart show, got {:?}",
            config.command
        );

        Ok(())
    }

    #[test]
    fn add_quantity_is_kept_as_text_for_explicit_parsing() -> TestResult {
        let config = CliConfig::try_parse_from(["scoop", "cart", "add", "p1", "--quantity", "abc"])?;

        match config.command {
            Command::Cart(CartCommand {
                command: CartSubcommand::Add(args),
            }) => {
                assert_eq!(args.product_id, "p1");
                assert_eq!(args.quantity, "abc");
            }
            other => panic!("expected cart add, got {other:?}"),
        }

        Ok(())
    }
}
