use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "shelfswap";

/// Platform data directory holding the ledger database, the session file
/// and the optional config file.
pub fn default_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("no platform data directory available")?;
    Ok(base.join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dir_is_namespaced_to_the_app() {
        // Headless environments may lack a data dir; only assert the shape.
        if let Ok(dir) = default_data_dir() {
            assert!(dir.ends_with(APP_DIR_NAME));
        }
    }
}
