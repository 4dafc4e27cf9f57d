//! fat-cli: one-shot driver for the FAT chain storage engine.
//!
//! ```text
//! fat-cli [--data-dir DIR] [--memory] <COMMAND>
//! ```
//!
//! Logging goes to stderr and is controlled by `FAT_LOG` (default `warn`).

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fat_cli::cli::Args;
use fat_cli::commands;
use fat_cli::config::load_config;
use fat_storage::DynFileStorageService;

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_env("FAT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    // Load configuration
    let config = load_config(&args);

    let mut engine = DynFileStorageService::from_config(&config)
        .with_context(|| format!("open storage at {}", config.data_dir.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(&mut engine, args.command, io::stdin().lock(), &mut out)
}
