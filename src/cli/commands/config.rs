use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config { print_config } = cmd;

    if *print_config {
        println!("📄 Current configuration:");
        print!("{}", cfg.to_yaml()?);
    } else {
        println!("Nothing to do. Use `config --print` to show the effective configuration.");
    }

    Ok(())
}
