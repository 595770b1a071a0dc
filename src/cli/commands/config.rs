use std::fs;
use std::path::PathBuf;

use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = cli
            .config
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(Config::config_file);

        if *print_config {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            println!("{}", content);
        }

        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                messages::success("Configuration OK");
            } else {
                for problem in problems {
                    messages::warning(problem);
                }
            }
        }
    }

    Ok(())
}
