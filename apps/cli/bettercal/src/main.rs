use bettercal::cli::Cli;
use bettercal::commands;
use bettercal::error::BetterCalError;
use bettercal::logger::{default_log_dir, initialize as LoggerInitialize};
use bettercal::terminal_clipboard::TerminalClipboard;

use client_core::config::{AppConfig, default_config_dir};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::io::{stderr, stdout};
use std::panic::Location;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = start(cli).await {
        match err {
            BetterCalError::Verification { message, .. } => eprintln!("{message}"),
            other => eprintln!("bettercal error: {other}"),
        }
        std::process::exit(1);
    }
}

async fn start(cli: Cli) -> Result<(), BetterCalError> {
    let log_dir = default_log_dir();
    create_dir_all(&log_dir).map_err(|e| BetterCalError::App {
        message: format!("Failed to create log directory: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir, cli.verbose)?;
    info!("Log directory: {}", log_dir.display());

    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded environment from {}", path.display());
    }

    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => default_config_dir()?,
    };
    let mut config = AppConfig::load(&config_dir)?;
    config.apply_env_overrides(|key| std::env::var(key).ok());
    config.validate()?;

    let stdout = stdout();
    let mut out = stdout.lock();
    let mut clipboard = TerminalClipboard::new(stderr());

    commands::run(cli.command, &config, &config_dir, &mut out, &mut clipboard).await
}
