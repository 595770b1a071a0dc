//! Single-fix acquisition enriched with a reverse-geocoded address.
//!
//! The fix itself is load-bearing: its failure fails the acquisition and
//! records the failure pair in the permission store. Reverse geocoding is
//! best effort and never fatal. Callers must not invoke
//! `acquire_enriched_location` concurrently without awaiting.

use tracing::{debug, info};

use crate::core::geocoding::GeocoderChain;
use crate::core::permission_store::PermissionStore;
use crate::errors::{AppError, AppResult};
use crate::models::location::EnrichedLocation;
use crate::platform::{FixOptions, PositionSource};

pub struct GeolocationService<S> {
    source: S,
    geocoder: GeocoderChain,
    store: PermissionStore,
    fix_options: FixOptions,
}

impl<S: PositionSource> GeolocationService<S> {
    pub fn new(
        source: S,
        geocoder: GeocoderChain,
        store: PermissionStore,
        fix_options: FixOptions,
    ) -> Self {
        Self {
            source,
            geocoder,
            store,
            fix_options,
        }
    }

    /// Acquire one enriched location.
    ///
    /// The fix must complete before any geocoding attempt starts, and the
    /// store is updated with either the success pair `{location, true}` or
    /// the failure pair `{error, false}`, never a mix.
    pub async fn acquire_enriched_location(&self) -> AppResult<EnrichedLocation> {
        let fix = match self.source.current_position(&self.fix_options).await {
            Ok(fix) => fix,
            Err(err) => {
                self.store.record_fix_failure(err.to_string());
                return Err(err);
            }
        };
        debug!(
            latitude = fix.latitude,
            longitude = fix.longitude,
            accuracy = fix.accuracy,
            "position fix acquired"
        );

        let resolved = self.geocoder.resolve(&fix).await;
        if resolved.is_none() {
            // Coordinates alone are enough for attendance proof.
            self.store.set_error(
                AppError::GeocodingFailed("all providers exhausted".into()).to_string(),
            );
        }

        let enriched = EnrichedLocation::from_fix(fix, resolved.unwrap_or_default());
        self.store.record_fix_success(enriched.clone());
        info!(coords = %enriched.coords_str(), "location acquired");
        Ok(enriched)
    }

    /// Non-committal permission probe. Records the answer in the store but
    /// never triggers a real fix: only `acquire_enriched_location` can prove
    /// permission and flip `has_permission` to true for the prompt logic.
    pub async fn request_permission(&self) -> AppResult<bool> {
        match self.source.query_permission().await {
            Ok(answer) => {
                let granted = answer.unwrap_or(false);
                self.store.set_permission(granted);
                Ok(granted)
            }
            Err(AppError::UnsupportedPlatform) => Err(AppError::UnsupportedPlatform),
            Err(err) => {
                self.store.set_error(format!("Permission query failed: {err}"));
                Ok(false)
            }
        }
    }

    pub fn store(&self) -> &PermissionStore {
        &self.store
    }
}
