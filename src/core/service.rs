//! Service Coordinator: drives the external CasaOS user-service through the
//! system service manager.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fmt;
use std::process::{Command, Stdio};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceAction {
    Start,
    Stop,
    Restart,
}

impl ServiceAction {
    pub fn verb(self) -> &'static str {
        match self {
            ServiceAction::Start => "start",
            ServiceAction::Stop => "stop",
            ServiceAction::Restart => "restart",
        }
    }
}

impl fmt::Display for ServiceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

pub trait ServiceManager {
    /// Succeeds when the service is known and running.
    fn status(&self, service: &str) -> AppResult<()>;

    fn set_state(&self, service: &str, action: ServiceAction) -> AppResult<()>;
}

/// `systemctl`-compatible manager. State changes go through `sudo` unless
/// disabled; the status query never does. Output is discarded and no timeout
/// is applied.
#[derive(Debug, Clone)]
pub struct Systemctl {
    program: String,
    use_sudo: bool,
}

impl Systemctl {
    pub fn new(program: impl Into<String>, use_sudo: bool) -> Self {
        Self {
            program: program.into(),
            use_sudo,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.service_manager.clone(), cfg.use_sudo)
    }

    fn command(&self, privileged: bool) -> Command {
        if privileged && self.use_sudo {
            let mut cmd = Command::new("sudo");
            cmd.arg(&self.program);
            cmd
        } else {
            Command::new(&self.program)
        }
    }

    fn run(&self, privileged: bool, verb: &str, service: &str) -> AppResult<()> {
        tracing::debug!(program = %self.program, sudo = privileged && self.use_sudo, verb, service, "service manager call");

        let status = self
            .command(privileged)
            .arg(verb)
            .arg(service)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(s) if s.success() => Ok(()),
            Ok(s) => Err(AppError::Service(format!(
                "{} {} {} failed: {}",
                self.program, verb, service, s
            ))),
            Err(e) => Err(AppError::Service(format!(
                "{} not available: {}",
                self.program, e
            ))),
        }
    }
}

impl ServiceManager for Systemctl {
    fn status(&self, service: &str) -> AppResult<()> {
        self.run(false, "status", service)
    }

    fn set_state(&self, service: &str, action: ServiceAction) -> AppResult<()> {
        self.run(true, action.verb(), service)
    }
}
