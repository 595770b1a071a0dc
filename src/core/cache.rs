//! In-process cache for the today's-attendance query.
//!
//! Shared between the clock orchestrator and any view showing attendance
//! status. The remote service stays the single source of truth: writers may
//! only invalidate (forcing the next reader to refetch), never store derived
//! state directly.

use std::future::Future;

use tokio::sync::Mutex;

use crate::errors::AppResult;
use crate::models::attendance::AttendanceRecord;

#[derive(Debug, Default)]
pub struct TodayCache {
    // Outer None: nothing cached. Inner Option: the server may legitimately
    // answer "no record today".
    slot: Mutex<Option<Option<AttendanceRecord>>>,
}

impl TodayCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached record, fetching it once when absent.
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> AppResult<Option<AttendanceRecord>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<Option<AttendanceRecord>>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(cached) = slot.as_ref() {
            return Ok(cached.clone());
        }
        let fresh = fetch().await?;
        *slot = Some(fresh.clone());
        Ok(fresh)
    }

    /// Drop the cached value so dependent views refetch from the server.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }

    pub async fn is_cached(&self) -> bool {
        self.slot.lock().await.is_some()
    }
}
