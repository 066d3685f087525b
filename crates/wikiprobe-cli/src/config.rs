//! Configuration resolution for the CLI.

use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use wikiprobe_extractor::ExtractorConfig;

/// Default configuration file path (`~/.wikiprobe/config.toml`).
pub fn default_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    Ok(home.join(".wikiprobe").join("config.toml"))
}

/// Load the extractor configuration.
///
/// An explicit path must exist. Without one, the default path is used when
/// present, otherwise built-in defaults apply.
pub fn load(explicit: Option<&Path>) -> Result<ExtractorConfig> {
    if let Some(path) = explicit {
        debug!("Loading configuration from {}", path.display());
        return Ok(ExtractorConfig::load(path)?);
    }

    match default_path() {
        Ok(path) if path.exists() => {
            debug!("Loading configuration from {}", path.display());
            Ok(ExtractorConfig::load(&path)?)
        }
        _ => Ok(ExtractorConfig::default()),
    }
}
