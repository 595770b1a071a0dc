//! Process-wide holder of the geolocation permission state.
//!
//! Single writer by convention: only the geolocation service writes the
//! location/permission/error fields, and it owns the write ordering for a
//! given acquisition. Any number of readers may observe the current state or
//! subscribe for changes.

use std::sync::Arc;

use tokio::sync::watch;

use crate::models::location::EnrichedLocation;
use crate::models::permission::PermissionState;

#[derive(Debug, Clone)]
pub struct PermissionStore {
    tx: Arc<watch::Sender<PermissionState>>,
}

impl PermissionStore {
    /// Initial state at process start: `{has_permission: false, last_error: None}`.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(PermissionState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PermissionState {
        self.tx.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<PermissionState> {
        self.tx.subscribe()
    }

    // The three mutators are pure field replacements: no validation, no I/O.

    pub fn set_location(&self, location: EnrichedLocation) {
        self.tx.send_modify(|s| s.location = Some(location));
    }

    pub fn set_permission(&self, granted: bool) {
        self.tx.send_modify(|s| s.has_permission = granted);
    }

    pub fn set_error(&self, message: impl Into<String>) {
        self.tx.send_modify(|s| s.last_error = Some(message.into()));
    }

    /// Clear location and error, keeping the permission flag.
    pub fn reset(&self) {
        self.tx.send_modify(|s| {
            s.location = None;
            s.last_error = None;
        });
    }

    /// Success pair for one acquisition, applied as a single update so
    /// observers never see the location without the flag or vice versa.
    pub fn record_fix_success(&self, location: EnrichedLocation) {
        self.tx.send_modify(|s| {
            s.location = Some(location);
            s.has_permission = true;
        });
    }

    /// Failure pair for one acquisition, applied as a single update.
    pub fn record_fix_failure(&self, message: impl Into<String>) {
        self.tx.send_modify(|s| {
            s.last_error = Some(message.into());
            s.has_permission = false;
        });
    }
}

impl Default for PermissionStore {
    fn default() -> Self {
        Self::new()
    }
}
