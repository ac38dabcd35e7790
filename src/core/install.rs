use crate::config::Config;
use crate::core::service::ServiceManager;
use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Startup precondition: CasaOS is installed and its user-service answers.
pub struct InstallGuard;

impl InstallGuard {
    pub fn check<S: ServiceManager>(cfg: &Config, services: &S) -> AppResult<()> {
        if !Path::new(&cfg.database).exists() {
            return Err(AppError::MissingDependency(format!(
                "CasaOS database file '{}' not found. Is CasaOS installed?",
                cfg.database
            )));
        }

        if let Err(e) = services.status(&cfg.service) {
            tracing::debug!(error = %e, "status query failed");
            return Err(AppError::MissingDependency(format!(
                "CasaOS service '{}' not found or not running.",
                cfg.service
            )));
        }

        tracing::info!(database = %cfg.database, service = %cfg.service, "CasaOS installation found");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::service::testing::RecordingServices;
    use crate::db::testing::scratch_store;

    #[test]
    fn passes_when_file_and_service_are_present() {
        let (_dir, cfg) = scratch_store();
        assert!(InstallGuard::check(&cfg, &RecordingServices::running()).is_ok());
    }

    #[test]
    fn missing_database_file() {
        let (_dir, mut cfg) = scratch_store();
        cfg.database = "/nonexistent/casaos/user.db".into();

        let err = InstallGuard::check(&cfg, &RecordingServices::running()).unwrap_err();
        assert!(matches!(err, AppError::MissingDependency(_)));
        assert!(err.to_string().contains("Is CasaOS installed?"));
    }

    #[test]
    fn stopped_service() {
        let (_dir, cfg) = scratch_store();
        let err = InstallGuard::check(&cfg, &RecordingServices::default()).unwrap_err();
        assert!(err.to_string().contains("not found or not running"));
    }
}
