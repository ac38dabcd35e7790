//! casaos-users library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::core::install::InstallGuard;
use crate::core::service::{ServiceManager, Systemctl};
use crate::errors::AppResult;
use crate::ui::console::{Console, TerminalConsole};
use clap::Parser;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Some(cmd @ Commands::Config { .. }) => crate::cli::commands::config::handle(cmd, cfg),
        None => {
            let services = Systemctl::from_config(cfg);
            let mut console = TerminalConsole::stdin();
            session(cfg, &services, &mut console)
        }
    }
}

/// Guards first, then the backup, then the menu. Guard and backup failures
/// end the session before anything is read from the operator.
pub fn session<S: ServiceManager, C: Console>(
    cfg: &Config,
    services: &S,
    console: &mut C,
) -> AppResult<()> {
    InstallGuard::check(cfg, services)?;
    BackupLogic::backup(cfg)?;
    crate::cli::menu::run(console, cfg, services)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let mut cfg = Config::load(cli.config.as_deref().map(Path::new))?;
    cfg.apply_overrides(&cli);
    tracing::debug!(?cfg, "effective configuration");

    dispatch(&cli, &cfg)
}
