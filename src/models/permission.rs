use serde::Serialize;

use super::location::EnrichedLocation;

/// Geolocation permission state observed by the rest of the application.
///
/// `has_permission` is deliberately conservative: it becomes true only after
/// a successful fix, because platform permission queries can report "granted" without the
/// user ever having seen a prompt. A true value therefore means "we actually
/// obtained a location at least once this session".
#[derive(Debug, Clone, Default, Serialize)]
pub struct PermissionState {
    pub location: Option<EnrichedLocation>,
    pub has_permission: bool,
    pub last_error: Option<String>,
}
