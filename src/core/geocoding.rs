//! Reverse geocoding over an ordered provider chain.
//!
//! Providers are tried in order until one answers; every per-provider failure
//! (timeout, non-success status, network error, malformed body) silently moves
//! on to the next. The chain as a whole returns a result-or-nothing: it is
//! kept separate from the fix-acquisition failure path, which is fatal.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::location::{Position, ResolvedAddress};

/// One reverse-geocoding endpoint. `timeout` bounds the whole request when
/// set; otherwise the transport default applies.
#[derive(Debug, Clone)]
pub struct Provider {
    pub name: String,
    pub url: String,
    pub timeout: Option<Duration>,
}

pub struct GeocoderChain {
    client: Client,
    providers: Vec<Provider>,
}

/// Response shape shared by geocode.maps.co and Nominatim-compatible
/// endpoints: a display string plus a structured address breakdown.
#[derive(Debug, Deserialize)]
struct ProviderResponse {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    address: Option<serde_json::Value>,
}

impl GeocoderChain {
    pub fn new(client: Client, providers: Vec<Provider>) -> Self {
        Self { client, providers }
    }

    pub fn from_config(client: Client, cfg: &Config) -> Self {
        let providers = cfg
            .geocoders
            .iter()
            .map(|g| Provider {
                name: g.name.clone(),
                url: g.url.clone(),
                timeout: g.timeout_ms.map(Duration::from_millis),
            })
            .collect();
        Self::new(client, providers)
    }

    /// Resolve a coordinate to an address, best effort. Returns None when
    /// every provider failed; never an error.
    pub async fn resolve(&self, fix: &Position) -> Option<ResolvedAddress> {
        for provider in &self.providers {
            match self.lookup(provider, fix).await {
                Ok(resolved) => {
                    debug!(provider = %provider.name, "reverse geocoding succeeded");
                    return Some(resolved);
                }
                Err(reason) => {
                    warn!(provider = %provider.name, %reason, "reverse geocoding attempt failed");
                }
            }
        }
        None
    }

    async fn lookup(&self, provider: &Provider, fix: &Position) -> Result<ResolvedAddress, String> {
        let mut req = self
            .client
            .get(&provider.url)
            .query(&[("lat", fix.latitude), ("lon", fix.longitude)])
            .header(ACCEPT, "application/json");

        if let Some(timeout) = provider.timeout {
            req = req.timeout(timeout);
        }

        let resp = req.send().await.map_err(|e| e.to_string())?;
        if !resp.status().is_success() {
            return Err(format!("status {}", resp.status()));
        }

        let body: ProviderResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(ResolvedAddress {
            address: body.display_name,
            address_details: body.address,
        })
    }
}
