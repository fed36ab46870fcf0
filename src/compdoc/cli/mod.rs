//! The binary's side of compdoc: argument handling, logging setup and the
//! stdio adapter. Everything here talks to the library through its public API.

mod print;
mod session;

use crate::args::{Cli, Commands, ConfigAction};
use colored::Colorize;
use compdoc::api::CompdocApi;
use compdoc::clipboard::SystemClipboard;
use compdoc::config::CompdocConfig;
use compdoc::error::Result;
use compdoc::host::snapshot::SnapshotHost;
use compdoc::host::stdio::LineChannel;
use directories::ProjectDirs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

pub fn run(cli: Cli) -> Result<()> {
    let config_dir = resolve_config_dir(cli.config_dir.as_deref())?;
    let loaded = CompdocConfig::load(&config_dir);
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => CompdocConfig::default(),
    };
    init_logging(cli.verbose, &config);
    if let Err(e) = loaded {
        tracing::warn!(error = %e, "could not load config, using defaults");
    }

    match cli.command {
        Commands::Extract { snapshot, json } => handle_extract(&config, &snapshot, json),
        Commands::Serve { snapshot } => handle_serve(config, &snapshot),
        Commands::Config { action } => handle_config(&config, &config_dir, action),
    }
}

fn resolve_config_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    let proj_dirs = ProjectDirs::from("com", "compdoc", "compdoc").ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Could not determine config dir")
    })?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

/// Logs go to stderr; stdout belongs to the panel channel.
fn init_logging(verbose: bool, config: &CompdocConfig) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
        })
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_extract(config: &CompdocConfig, snapshot: &Path, json: bool) -> Result<()> {
    let host: SnapshotHost<SystemClipboard> = SnapshotHost::load(snapshot)?;
    let config = CompdocConfig {
        dispatch_on_startup: true,
        ..config.clone()
    };

    if json {
        let channel = LineChannel::new(io::stdout().lock(), config.pretty);
        CompdocApi::init(host, channel, config)?;
    } else {
        CompdocApi::init(host, print::SummaryChannel, config)?;
    }
    Ok(())
}

fn handle_serve(config: CompdocConfig, snapshot: &Path) -> Result<()> {
    let mut host = SnapshotHost::load(snapshot)?;
    if config.clipboard {
        host = host.with_clipboard(SystemClipboard::new());
    }

    let channel = LineChannel::new(io::stdout(), config.pretty);
    let mut api = CompdocApi::init(host, channel, config)?;
    session::run(&mut api, io::stdin().lock())
}

fn handle_config(
    config: &CompdocConfig,
    config_dir: &Path,
    action: Option<ConfigAction>,
) -> Result<()> {
    match action {
        None => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        Some(ConfigAction::Init) => {
            let path = CompdocConfig::path_in(config_dir);
            if path.exists() {
                println!(
                    "{}",
                    format!("Config already exists at {}", path.display()).yellow()
                );
            } else {
                CompdocConfig::default().save(config_dir)?;
                println!(
                    "{}",
                    format!("Wrote default config to {}", path.display()).green()
                );
            }
        }
    }
    Ok(())
}
