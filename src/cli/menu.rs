//! The interactive loop: show the menu, read one choice, run its handler,
//! come back to the menu. Handler errors are reported and never end the loop.

use crate::cli::commands;
use crate::config::Config;
use crate::core::service::{ServiceAction, ServiceManager};
use crate::core::users::UserStore;
use crate::errors::AppResult;
use crate::ui::console::Console;
use crate::ui::messages::{error, header, info, warning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListUsers,
    EditPassword,
    AddUser,
    RemoveUser,
    ResetDatabase,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::ListUsers,
        MenuChoice::EditPassword,
        MenuChoice::AddUser,
        MenuChoice::RemoveUser,
        MenuChoice::ResetDatabase,
        MenuChoice::Exit,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ListUsers),
            "2" => Some(Self::EditPassword),
            "3" => Some(Self::AddUser),
            "4" => Some(Self::RemoveUser),
            "5" => Some(Self::ResetDatabase),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn key(self) -> u8 {
        match self {
            Self::ListUsers => 1,
            Self::EditPassword => 2,
            Self::AddUser => 3,
            Self::RemoveUser => 4,
            Self::ResetDatabase => 5,
            Self::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ListUsers => "List all users",
            Self::EditPassword => "Edit password",
            Self::AddUser => "Add user",
            Self::RemoveUser => "Remove user",
            Self::ResetDatabase => "Reset database",
            Self::Exit => "Exit",
        }
    }

    /// Choices that write to the store and need the user-service stopped.
    pub fn mutates(self) -> bool {
        !matches!(self, Self::ListUsers | Self::Exit)
    }
}

pub fn print_menu() {
    header("CasaOS User Management");
    for choice in MenuChoice::ALL {
        println!("{}. {}", choice.key(), choice.label());
    }
}

pub fn run<C: Console, S: ServiceManager>(
    console: &mut C,
    cfg: &Config,
    services: &S,
) -> AppResult<()> {
    let store = UserStore::new(cfg);

    loop {
        print_menu();

        let Some(line) = console.read_line("Select an option: ")? else {
            // stdin closed
            println!();
            info("Exiting...");
            return Ok(());
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            error("Invalid option. Please try again.");
            continue;
        };
        tracing::debug!(?choice, "menu choice");

        if choice == MenuChoice::Exit {
            info("Exiting...");
            return Ok(());
        }

        if choice.mutates() {
            coordinate(services, cfg, ServiceAction::Stop);
        }

        let outcome = match choice {
            MenuChoice::ListUsers => commands::list::handle(&store),
            MenuChoice::EditPassword => commands::edit::handle(console, &store),
            MenuChoice::AddUser => commands::add::handle(console, &store),
            MenuChoice::RemoveUser => commands::remove::handle(console, &store),
            MenuChoice::ResetDatabase => commands::reset::handle(console, cfg, services),
            MenuChoice::Exit => Ok(()),
        };

        if choice.mutates() {
            coordinate(services, cfg, ServiceAction::Start);
        }

        if let Err(e) = outcome {
            error(e);
        }
    }
}

/// Start/stop failures are shown to the operator and otherwise ignored: the
/// store operation goes ahead after a failed stop, exactly as it would had the
/// stop succeeded.
fn coordinate<S: ServiceManager>(services: &S, cfg: &Config, action: ServiceAction) {
    if let Err(e) = services.set_state(&cfg.service, action) {
        tracing::warn!(service = %cfg.service, %action, error = %e, "service call failed");
        warning(format!("Could not {} '{}': {}", action, cfg.service, e));
    }
}
