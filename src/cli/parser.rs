use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for casaos-users.
/// Without a subcommand it starts the interactive user-management menu.
#[derive(Parser)]
#[command(
    name = "casaos-users",
    version = env!("CARGO_PKG_VERSION"),
    about = "Interactive management of CasaOS user accounts (list, add, edit password, remove, reset)",
    long_about = "Checks that CasaOS and its user-service are present, backs up the user \
database, then opens a menu to manage accounts. The user-service is stopped around \
every change and started again afterwards.\n\n\
Passwords are stored as unsalted MD5, the format the CasaOS user-service verifies. \
Treat the database and its backup as sensitive."
)]
pub struct Cli {
    /// Load settings from a YAML file (keys: database, backup, service, service_manager, use_sudo)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the user database path
    #[arg(global = true, long = "db", value_name = "FILE")]
    pub db: Option<String>,

    /// Override the backup file path
    #[arg(global = true, long = "backup", value_name = "FILE")]
    pub backup: Option<String>,

    /// Override the user-service unit name
    #[arg(global = true, long = "service", value_name = "UNIT")]
    pub service: Option<String>,

    /// Program used to query and control the service (systemctl-compatible)
    #[arg(global = true, long = "service-manager", value_name = "PROGRAM")]
    pub service_manager: Option<String>,

    /// Do not prefix start/stop/restart with sudo
    #[arg(global = true, long = "no-sudo")]
    pub no_sudo: bool,

    /// Diagnostic logging on stderr (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the effective configuration
    Config {
        /// Print the effective configuration as YAML
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}
