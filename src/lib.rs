//! rpunchclock library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod platform;
pub mod ui;

use std::path::PathBuf;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cli, cfg),
        Commands::Login { .. } => cli::commands::login::handle(&cli.command),
        Commands::Logout => cli::commands::login::handle_logout(),
        Commands::Status => cli::commands::status::handle(cfg).await,
        Commands::Locate { .. } => cli::commands::locate::handle(&cli.command, cfg).await,
        Commands::In { .. } | Commands::Out { .. } => {
            cli::commands::clock::handle(&cli.command, cfg).await
        }
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    // Diagnostics go to stderr; user-facing output stays on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load config once; CLI flags override single fields.
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(&PathBuf::from(path)),
        None => Config::load(),
    };
    if let Some(server) = &cli.server {
        cfg.server_url = server.clone();
    }

    dispatch(&cli, &cfg).await
}
