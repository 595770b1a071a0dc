use std::io::{self, Write};
use std::sync::Arc;

use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cache::TodayCache;
use crate::core::geocoding::GeocoderChain;
use crate::core::geolocation::GeolocationService;
use crate::core::orchestrator::{ActionOutcome, ClockOrchestrator};
use crate::core::permission_store::PermissionStore;
use crate::core::prompt::PermissionPrompt;
use crate::errors::AppResult;
use crate::models::action::ClockAction;
use crate::platform::CommandSource;
use crate::ui::messages;

fn confirm(question: &str) -> AppResult<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Handle the `in` and `out` commands.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (action, notes, assume_consent) = match cmd {
        Commands::In {
            notes,
            assume_consent,
        } => (ClockAction::In, notes.clone(), *assume_consent),
        Commands::Out {
            notes,
            assume_consent,
        } => (ClockAction::Out, notes.clone(), *assume_consent),
        _ => return Ok(()),
    };

    let store = PermissionStore::new();

    // One-time consent prompt. A fresh process has no proven permission yet,
    // so the prompt shows unless the user pre-consented with --yes.
    let mut prompt = PermissionPrompt::mount(&store);
    if assume_consent {
        prompt.dismiss();
    }
    if prompt.is_shown() {
        messages::location(
            "We need your location to verify your attendance. It is only used during clock in/out.",
        );
        if !confirm("Allow location access?")? {
            prompt.dismiss();
            messages::info("Clock action cancelled (location consent declined)");
            return Ok(());
        }
    }

    let api = ApiClient::new(&cfg.server_url, Config::load_token())?;
    let source = CommandSource::from_config(cfg)?;
    let geo = GeolocationService::new(
        source,
        GeocoderChain::from_config(api.http(), cfg),
        store.clone(),
        cfg.fix_options(),
    );
    let orchestrator = ClockOrchestrator::new(geo, api, Arc::new(TodayCache::new()));

    messages::location("Getting your location…");
    let outcome = match action {
        ClockAction::In => orchestrator.clock_in(notes).await?,
        ClockAction::Out => orchestrator.clock_out(notes).await?,
    };
    prompt.on_consent_result(store.state().has_permission);

    match outcome {
        ActionOutcome::Success { title, detail } => messages::outcome_success(title, detail),
        ActionOutcome::AlreadyDone { message } => messages::warning(message),
        ActionOutcome::Failed { title, detail } => messages::outcome_error(title, detail),
    }

    Ok(())
}
