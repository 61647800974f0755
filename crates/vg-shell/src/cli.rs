//! Command-line arguments and log setup for the `vigenere-lab` binary.

use crate::error::{ShellError, ShellResult};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Interactive Caesar/Vigenère cipher playground with ciphertext-only key recovery.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "vigenere-lab", version)]
pub struct Args {
    /// Path to a JSON config file (analysis policy and shell defaults)
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`.
pub fn init_logging() -> ShellResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ShellError::Logging(e.to_string()))
}
