use crate::error::ShellResult;
use std::path::Path;
use tracing::info;
use vg_core::VigenereLabConfig;

/// Read and validate a JSON config file.
pub fn load_config(path: impl AsRef<Path>) -> ShellResult<VigenereLabConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let config = VigenereLabConfig::from_json_str(&raw)?;
    config.validate()?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}
