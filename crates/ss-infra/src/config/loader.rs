use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use ss_core::AppConfig;

/// Reads the optional TOML configuration file.
///
/// A missing file is normal and yields the defaults; a present but broken
/// file is an error, so a typo never silently reverts the mediator URL.
pub fn load_app_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        debug!("no config file at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read config file failed: {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("parse config file failed: {}", path.display()))
}
