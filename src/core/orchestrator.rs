//! Clock-in / clock-out orchestration.
//!
//! One action runs strictly acquire-location → submit → report → invalidate
//! cache. There is no automatic retry anywhere in this pipeline: attendance
//! timestamps must reflect an explicit user action, so every failure surfaces
//! to the user, who re-triggers explicitly.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::api::ApiClient;
use crate::core::cache::TodayCache;
use crate::core::geolocation::GeolocationService;
use crate::errors::{AppError, AppResult};
use crate::models::action::ClockAction;
use crate::models::attendance::ActionRequest;
use crate::platform::PositionSource;

/// Outcome of one clock action, rendered by the calling surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Success { title: String, detail: String },
    /// Benign race: the server already has this action for today.
    AlreadyDone { message: String },
    Failed { title: String, detail: String },
}

pub struct ClockOrchestrator<S> {
    geo: GeolocationService<S>,
    api: ApiClient,
    cache: Arc<TodayCache>,
    busy: AtomicBool,
}

impl<S: PositionSource> ClockOrchestrator<S> {
    pub fn new(geo: GeolocationService<S>, api: ApiClient, cache: Arc<TodayCache>) -> Self {
        Self {
            geo,
            api,
            cache,
            busy: AtomicBool::new(false),
        }
    }

    pub async fn clock_in(&self, notes: Option<String>) -> AppResult<ActionOutcome> {
        self.run(ClockAction::In, notes).await
    }

    pub async fn clock_out(&self, notes: Option<String>) -> AppResult<ActionOutcome> {
        self.run(ClockAction::Out, notes).await
    }

    async fn run(&self, action: ClockAction, notes: Option<String>) -> AppResult<ActionOutcome> {
        // Busy flag held for the whole pending action: a double invocation
        // submits exactly one request.
        if self.busy.swap(true, Ordering::AcqRel) {
            return Err(AppError::ActionInProgress);
        }
        let outcome = self.run_inner(action, notes).await;
        self.busy.store(false, Ordering::Release);
        outcome
    }

    async fn run_inner(&self, action: ClockAction, notes: Option<String>) -> AppResult<ActionOutcome> {
        debug!(action = action.as_str(), "clock action started");

        let location = match self.geo.acquire_enriched_location().await {
            Ok(location) => location,
            Err(err) => {
                // No fresh fix, no remote call.
                return Ok(ActionOutcome::Failed {
                    title: action.failure_title().to_string(),
                    detail: err.to_string(),
                });
            }
        };

        let request = ActionRequest::new(&location, notes);
        match self.api.submit_clock(action, &request).await {
            Ok(()) => {
                info!(action = action.as_str(), "clock action accepted");
                self.cache.invalidate().await;
                Ok(ActionOutcome::Success {
                    title: action.success_title().to_string(),
                    detail: action.success_detail().to_string(),
                })
            }
            Err(AppError::RemoteConflict(message)) => {
                // Expected race, not a system error; the cache stays put.
                Ok(ActionOutcome::AlreadyDone { message })
            }
            Err(err) => Ok(ActionOutcome::Failed {
                title: action.failure_title().to_string(),
                detail: err.to_string(),
            }),
        }
    }

    pub fn geo(&self) -> &GeolocationService<S> {
        &self.geo
    }
}
