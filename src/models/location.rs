use serde::{Deserialize, Serialize};

/// Raw single-shot fix as returned by the platform location capability.
/// The three fields are always present together: there is no such thing as
/// a partial coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f64,
}

/// Address data normalized from a reverse-geocoding provider response.
/// Both fields are best-effort and may be None.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedAddress {
    pub address: Option<String>,
    pub address_details: Option<serde_json::Value>,
}

/// A position fix enriched with a best-effort human-readable address.
/// Owned by the caller for the duration of one action; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f64,
    pub address: Option<String>,
    pub address_details: Option<serde_json::Value>,
}

impl EnrichedLocation {
    pub fn from_fix(fix: Position, resolved: ResolvedAddress) -> Self {
        Self {
            latitude: fix.latitude,
            longitude: fix.longitude,
            accuracy: fix.accuracy,
            address: resolved.address,
            address_details: resolved.address_details,
        }
    }

    /// Short "lat, lon (±accuracy m)" rendering for terminal output.
    pub fn coords_str(&self) -> String {
        format!(
            "{:.4}, {:.4} (±{:.0} m)",
            self.latitude, self.longitude, self.accuracy
        )
    }
}
