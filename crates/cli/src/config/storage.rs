//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Where the cart is persisted between runs.
#[derive(Debug, Args)]
pub struct StorageSettings {
    /// Directory holding the persisted cart
    #[arg(long, global = true, env = "SCOOP_DATA_DIR", default_value = ".scoop")]
    pub data_dir: PathBuf,
}
