//! `vkxaml init [--out DIR] [--force]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use vkxaml_core::{config, Config};

/// Write a default configuration file.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Default output directory for `vkxaml generate`.
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Replace an existing configuration file.
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        let path = config::config_path().context("cannot locate configuration file")?;
        let existed = path.exists();

        let output_dir = self.out.map(absolute).transpose()?;
        let defaults = Config {
            output_dir,
            ..Config::default()
        };

        config::init(defaults, self.force)
            .with_context(|| format!("failed to write '{}'", path.display()))?;

        if existed && !self.force {
            println!("✓ Configuration already exists (use --force to replace it)");
        } else {
            println!("✓ Wrote default configuration");
        }
        println!("  {}", path.display());
        Ok(())
    }
}

fn absolute(dir: PathBuf) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir);
    }
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    Ok(cwd.join(dir))
}
