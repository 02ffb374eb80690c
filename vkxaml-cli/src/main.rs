//! vkxaml: VK Appearance palette/scheme to XAML resource dictionary generator.
//!
//! # Usage
//!
//! ```text
//! vkxaml generate [--out DIR] [--dry-run] [--source-dir DIR] [--base-url URL]
//!                 [--dark NAME] [--light NAME] [--name LABEL] [--quiet]
//! vkxaml init [--out DIR] [--force]
//! vkxaml config show|path
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{config::ConfigCommand, generate::GenerateArgs, init::InitArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "vkxaml",
    version,
    about = "Generate XAML resource dictionaries from VK Appearance palettes and schemes",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the source documents and write the four XAML dictionaries.
    Generate(GenerateArgs),

    /// Write a default ~/.vkxaml/config.yaml.
    Init(InitArgs),

    /// Inspect the active configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate(args) => args.run(),
        Commands::Init(args) => args.run(),
        Commands::Config { command } => commands::config::run(command),
    }
}

/// Diagnostics go to stderr; stdout carries progress and results.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
