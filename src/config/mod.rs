use crate::cli::parser::Cli;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_DATABASE: &str = "/var/lib/casaos/db/user.db";
pub const DEFAULT_BACKUP: &str = "/var/lib/casaos/db/user_backup.db";
pub const DEFAULT_SERVICE: &str = "casaos-user-service.service";
pub const DEFAULT_SERVICE_MANAGER: &str = "systemctl";

/// Paths and service settings threaded into every component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: String,
    pub backup: String,
    pub service: String,
    pub service_manager: String,
    pub use_sudo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DEFAULT_DATABASE.to_string(),
            backup: DEFAULT_BACKUP.to_string(),
            service: DEFAULT_SERVICE.to_string(),
            service_manager: DEFAULT_SERVICE_MANAGER.to_string(),
            use_sudo: true,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file, or return the CasaOS defaults
    /// when no file is given. Keys missing from the file keep their default.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Command-line flags win over the file and the defaults.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(db) = &cli.db {
            self.database = db.clone();
        }
        if let Some(backup) = &cli.backup {
            self.backup = backup.clone();
        }
        if let Some(service) = &cli.service {
            self.service = service.clone();
        }
        if let Some(manager) = &cli.service_manager {
            self.service_manager = manager.clone();
        }
        if cli.no_sudo {
            self.use_sudo = false;
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
