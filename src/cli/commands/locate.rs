use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::geocoding::GeocoderChain;
use crate::core::geolocation::GeolocationService;
use crate::core::permission_store::PermissionStore;
use crate::errors::AppResult;
use crate::platform::CommandSource;
use crate::ui::messages;

/// Handle the `locate` command: one full acquisition (the only operation
/// that can prove location permission), or a non-committal probe.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Locate { probe } = cmd {
        let store = PermissionStore::new();
        let source = CommandSource::from_config(cfg)?;
        let api = ApiClient::new(&cfg.server_url, None)?;
        let geo = GeolocationService::new(
            source,
            GeocoderChain::from_config(api.http(), cfg),
            store.clone(),
            cfg.fix_options(),
        );

        if *probe {
            let granted = geo.request_permission().await?;
            if granted {
                messages::info("Platform reports location permission granted");
            } else {
                messages::info(
                    "Location permission not confirmed: only a successful fix proves it",
                );
            }
            return Ok(());
        }

        messages::location("Getting your location…");
        let loc = geo.acquire_enriched_location().await?;

        messages::success(format!("Fix acquired: {}", loc.coords_str()));
        match &loc.address {
            Some(address) => messages::location(address),
            None => messages::warning("Address unavailable (reverse geocoding failed)"),
        }
    }

    Ok(())
}
