use std::path::PathBuf;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// Creates the config directory (if missing) and writes a fresh
/// configuration file with the default fix policy and geocoder chain.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    println!("⚙️  Initializing rpunchclock…");
    Config::init_all(&path, cli.server.as_deref())?;

    let cfg = Config::load_from(&path);
    println!("🌐 Server      : {}", cfg.server_url);
    if cfg.locator_command.is_empty() {
        println!("📍 Locator     : (not set — edit locator_command before clocking in)");
    } else {
        println!("📍 Locator     : {}", cfg.locator_command);
    }

    println!("🎉 rpunchclock initialization completed!");
    Ok(())
}
