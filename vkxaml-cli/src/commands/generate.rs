//! `vkxaml generate`: fetch the source documents and write the dictionaries.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use vkxaml_core::{config, Config, RenderStamp, SchemeName};
use vkxaml_renderer::Renderer;
use vkxaml_sync::{
    is_not_found, pipeline, write_outputs, CancelToken, DirFetcher, Fetcher, HttpFetcher,
    ProgressEvent, ProgressLevel, RunOptions, SyncError, WriteResult,
};

/// Arguments for `vkxaml generate`. Flags override `~/.vkxaml/config.yaml`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory to write the dictionaries into (default: config, then cwd).
    #[arg(long, short = 'o', value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Show what would be written without writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Read the JSON documents from a local directory instead of the network.
    #[arg(long, value_name = "DIR", conflicts_with = "base_url")]
    pub source_dir: Option<PathBuf>,

    /// Base URL the JSON documents are fetched from.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Scheme used for the dark theme.
    #[arg(long, value_name = "NAME")]
    pub dark: Option<String>,

    /// Scheme used for the light theme.
    #[arg(long, value_name = "NAME")]
    pub light: Option<String>,

    /// Display name written into the scheme dictionaries.
    #[arg(long, value_name = "LABEL")]
    pub name: Option<String>,

    /// Suppress progress output.
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let config = config::load().context("failed to load configuration")?;
        let config = self.apply_overrides(config);

        let out_dir = match self.out.clone().or_else(|| config.output_dir.clone()) {
            Some(dir) => dir,
            None => std::env::current_dir().context("cannot determine current directory")?,
        };

        let fetcher: Box<dyn Fetcher> = match &self.source_dir {
            Some(dir) => Box::new(DirFetcher::new(dir)),
            None => Box::new(HttpFetcher::new(
                config.base_url.clone(),
                Duration::from_secs(config.timeout_secs),
            )),
        };
        let source = match &self.source_dir {
            Some(dir) => dir.display().to_string(),
            None => config.base_url.clone(),
        };

        tracing::debug!(
            "generating from {source} into {} ({}/{} as \"{}\")",
            out_dir.display(),
            config.selection.dark,
            config.selection.light,
            config.selection.display_name
        );

        let renderer = Renderer::with_template_dir(config.template_dir.as_deref())
            .context("failed to load templates")?;
        let options = RunOptions {
            selection: config.selection.clone(),
            stamp: RenderStamp::now(),
        };

        let quiet = self.quiet;
        let listener = move |event: &ProgressEvent| {
            if !quiet {
                print_event(event);
            }
        };

        let files = pipeline::run(
            fetcher.as_ref(),
            &renderer,
            &options,
            Some(&listener),
            &CancelToken::new(),
        )
        .map_err(|err| {
            if matches!(&err, SyncError::Fetch(fetch) if is_not_found(fetch)) {
                eprintln!(
                    "{} source document missing under {source}; check --base-url or --source-dir",
                    "hint:".yellow().bold()
                );
            }
            err
        })
        .context("generation failed")?;

        let writes = write_outputs(&out_dir, &files, self.dry_run)
            .with_context(|| format!("failed to write into '{}'", out_dir.display()))?;

        print_results(&writes, options.stamp.version, self.dry_run);
        Ok(())
    }

    fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(dark) = &self.dark {
            config.selection.dark = SchemeName::from(dark.as_str());
        }
        if let Some(light) = &self.light {
            config.selection.light = SchemeName::from(light.as_str());
        }
        if let Some(name) = &self.name {
            config.selection.display_name = name.clone();
        }
        config
    }
}

fn print_event(event: &ProgressEvent) {
    match event.level() {
        ProgressLevel::Info => match event {
            ProgressEvent::Generated { .. } => println!("  {}", event.to_string().green()),
            _ => println!("  {event}"),
        },
        ProgressLevel::Warning => {
            println!("  {} {}", "!".yellow().bold(), event.to_string().yellow())
        }
        // Printed by `main` through the returned error.
        ProgressLevel::Error => {}
    }
}

fn print_results(writes: &[WriteResult], version: u32, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    println!(
        "{prefix}{} {} dictionaries, version {version}",
        "✓".green(),
        writes.len()
    );
    for w in writes {
        match w {
            WriteResult::Written { path } => println!("  ✎  {}", path.display()),
            WriteResult::WouldWrite { path } => println!("  ~  {}", path.display()),
        }
    }
}
