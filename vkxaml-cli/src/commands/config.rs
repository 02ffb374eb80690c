//! `vkxaml config show|path`

use anyhow::{Context, Result};
use clap::Subcommand;

use vkxaml_core::config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration as YAML.
    Show,
    /// Print the configuration file location.
    Path,
}

pub fn run(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let config = config::load().context("failed to load configuration")?;
            let yaml = serde_yaml::to_string(&config).context("failed to serialize configuration")?;
            print!("{yaml}");
        }
        ConfigCommand::Path => {
            let path = config::config_path().context("cannot locate configuration file")?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
