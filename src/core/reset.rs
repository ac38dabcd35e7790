use crate::config::Config;
use crate::core::service::{ServiceAction, ServiceManager};
use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Token the operator must type to wipe the store.
pub const RESET_CONFIRMATION: &str = "yes";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    Cancelled,
    /// File deleted. `restart_error` holds the service manager's complaint
    /// when the user-service could not be restarted to recreate it.
    Reset { restart_error: Option<String> },
}

pub struct ResetLogic;

impl ResetLogic {
    /// Compared after trimming, case-insensitively.
    pub fn is_confirmed(answer: &str) -> bool {
        answer.trim().eq_ignore_ascii_case(RESET_CONFIRMATION)
    }

    /// Delete the database file and restart the user-service so it creates a
    /// fresh, empty store.
    pub fn reset<S: ServiceManager>(
        cfg: &Config,
        services: &S,
        confirmation: &str,
    ) -> AppResult<ResetOutcome> {
        if !Self::is_confirmed(confirmation) {
            return Ok(ResetOutcome::Cancelled);
        }

        let db = Path::new(&cfg.database);
        if !db.exists() {
            return Err(AppError::DatabaseNotFound(cfg.database.clone()));
        }

        fs::remove_file(db)?;
        tracing::warn!(database = %db.display(), "user database deleted");

        let restart_error = services
            .set_state(&cfg.service, ServiceAction::Restart)
            .err()
            .map(|e| e.to_string());

        Ok(ResetOutcome::Reset { restart_error })
    }
}
