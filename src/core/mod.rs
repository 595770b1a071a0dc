//! The location-aware action pipeline: permission state, fix acquisition and
//! enrichment, clock orchestration, consent prompt, and the today cache.

pub mod cache;
pub mod geocoding;
pub mod geolocation;
pub mod orchestrator;
pub mod permission_store;
pub mod prompt;

pub use cache::TodayCache;
pub use geolocation::GeolocationService;
pub use orchestrator::{ActionOutcome, ClockOrchestrator};
pub use permission_store::PermissionStore;
pub use prompt::{PermissionPrompt, PromptState};
