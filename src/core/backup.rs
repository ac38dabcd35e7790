use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::fs;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the live database to the backup path, replacing any earlier
    /// backup. Every failure is a BackupFailure: the session must not start
    /// without a copy to fall back on.
    pub fn backup(cfg: &Config) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(&cfg.backup);

        if !src.exists() {
            return Err(AppError::BackupFailure(format!(
                "database not found: {}",
                src.display()
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::BackupFailure(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }

        let bytes = fs::copy(src, dest).map_err(|e| {
            AppError::BackupFailure(format!("{} -> {}: {}", src.display(), dest.display(), e))
        })?;

        tracing::info!(bytes, backup = %dest.display(), "database backed up");
        success(format!("Backup created at {}", dest.display()));

        Ok(dest.to_path_buf())
    }
}
