use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::location::EnrichedLocation;

/// Today's attendance record as returned by the remote service.
/// Invariant (server-enforced): `clock_out` set implies `clock_in` set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[serde(default)]
    pub clock_in: Option<DateTime<Utc>>,
    #[serde(default)]
    pub clock_out: Option<DateTime<Utc>>,
}

/// Which clock action comes next. Derived only from the server-side record,
/// never from local UI state, so the client cannot drift from server truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    ClockIn,
    ClockOut,
    Done,
}

impl NextAction {
    pub fn from_record(record: Option<&AttendanceRecord>) -> Self {
        match record {
            Some(r) if r.clock_in.is_some() && r.clock_out.is_none() => NextAction::ClockOut,
            Some(r) if r.clock_in.is_some() && r.clock_out.is_some() => NextAction::Done,
            _ => NextAction::ClockIn,
        }
    }
}

/// Payload submitted on clock-in/clock-out. `notes` is omitted from the JSON
/// body entirely when empty: omission, not an empty string, means "no note".
#[derive(Debug, Clone, Serialize)]
pub struct ActionRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ActionRequest {
    pub fn new(location: &EnrichedLocation, notes: Option<String>) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
            notes: notes.filter(|n| !n.trim().is_empty()),
        }
    }
}
