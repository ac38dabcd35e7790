use super::ask;
use crate::config::Config;
use crate::core::reset::{ResetLogic, ResetOutcome};
use crate::core::service::ServiceManager;
use crate::errors::AppResult;
use crate::ui::console::Console;
use crate::ui::messages::{info, success, warning};

pub fn handle<C: Console, S: ServiceManager>(
    console: &mut C,
    cfg: &Config,
    services: &S,
) -> AppResult<()> {
    let answer = ask(
        console,
        "Are you sure you want to reset the database? This will delete all users! (yes/no): ",
    )?;

    match ResetLogic::reset(cfg, services, &answer)? {
        ResetOutcome::Cancelled => info("Database reset canceled."),
        ResetOutcome::Reset { restart_error: None } => {
            success("Database reset successfully.");
            success("CasaOS service restarted.");
        }
        ResetOutcome::Reset {
            restart_error: Some(e),
        } => {
            success("Database reset successfully.");
            warning(format!(
                "Could not restart '{}' to recreate the database: {}",
                cfg.service, e
            ));
        }
    }
    Ok(())
}
