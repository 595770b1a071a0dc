pub mod action;
pub mod attendance;
pub mod location;
pub mod permission;

pub use action::ClockAction;
pub use attendance::{ActionRequest, AttendanceRecord, NextAction};
pub use location::{EnrichedLocation, Position, ResolvedAddress};
pub use permission::PermissionState;
