//! File-backed current-user id.
//!
//! The id is minted exactly once, on the device's first run, and read back
//! on every later start. Components never touch the file; they go through
//! the `SessionPort` accessor.

use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use ss_core::ids::UserId;
use ss_core::ports::SessionPort;

const USER_ID_FILE: &str = "user_id.txt";

pub struct FileSessionStore {
    user_id: UserId,
}

impl FileSessionStore {
    /// Load the persisted user id, minting and saving one on first run.
    pub fn load_or_init(data_dir: &Path) -> Result<Self> {
        if let Some(user_id) = load_from_disk(data_dir)? {
            return Ok(Self { user_id });
        }

        let user_id = UserId::new();
        save_to_disk(data_dir, &user_id)?;
        info!("minted first-run user id");
        Ok(Self { user_id })
    }
}

impl SessionPort for FileSessionStore {
    fn current_user_id(&self) -> UserId {
        self.user_id.clone()
    }
}

fn load_from_disk(data_dir: &Path) -> Result<Option<UserId>> {
    let path = data_dir.join(USER_ID_FILE);

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("read user_id file failed: {}", path.display()))?;

    let id_str = content.trim();
    if id_str.is_empty() {
        return Ok(None);
    }

    uuid::Uuid::parse_str(id_str)
        .with_context(|| format!("invalid user_id UUID in file: {}", path.display()))?;

    Ok(Some(UserId::from(id_str)))
}

fn save_to_disk(data_dir: &Path, id: &UserId) -> Result<()> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("create data dir failed: {}", data_dir.display()))?;

    let path = data_dir.join(USER_ID_FILE);

    // Atomic write via temp file + rename; fall back to a direct write when
    // rename is not possible (cross-device links in some CI setups).
    let tmp_path = path.with_extension("txt.tmp");
    std::fs::write(&tmp_path, id.as_str())
        .with_context(|| format!("write temp user_id failed: {}", tmp_path.display()))?;

    match std::fs::rename(&tmp_path, &path) {
        Ok(_) => Ok(()),
        Err(rename_err) => {
            std::fs::write(&path, id.as_str()).with_context(|| {
                format!(
                    "direct write user_id failed after rename error ({}): {}",
                    rename_err,
                    path.display()
                )
            })?;
            let _ = std::fs::remove_file(&tmp_path);
            Ok(())
        }
    }
}
