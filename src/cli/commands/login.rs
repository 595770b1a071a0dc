use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Store the bearer token used for attendance requests. Token issuance is
/// the server's business; this only persists what the user was given.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Login { token } = cmd {
        Config::save_token(token)?;
        messages::success("Token stored. Attendance requests will be authenticated.");
    }
    Ok(())
}

pub fn handle_logout() -> AppResult<()> {
    Config::clear_token()?;
    messages::success("Token removed.");
    Ok(())
}
