//! Attendance endpoints.

use reqwest::Method;
use tracing::debug;

use super::{ApiClient, DEFAULT_RETRY_MESSAGE};
use crate::errors::{AppError, AppResult};
use crate::models::action::ClockAction;
use crate::models::attendance::{ActionRequest, AttendanceRecord};

impl ApiClient {
    /// Submit a clock action. A 409 maps to `RemoteConflict` with the
    /// action's own copy; any other failure carries the server-supplied
    /// message when present.
    pub async fn submit_clock(&self, action: ClockAction, body: &ActionRequest) -> AppResult<()> {
        debug!(endpoint = action.endpoint(), "submitting clock action");
        let resp = self
            .request(Method::POST, action.endpoint())
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::RemoteFailure(format!("request failed: {e}")))?;

        if resp.status().is_success() {
            // The response body repeats the attendance record; the pipeline
            // refetches through the cache instead of trusting it.
            return Ok(());
        }

        Err(Self::classify_failure(resp, action.conflict_message(), DEFAULT_RETRY_MESSAGE).await)
    }

    /// Current day's attendance record, or None when nothing is recorded yet.
    pub async fn today(&self) -> AppResult<Option<AttendanceRecord>> {
        let resp = self
            .request(Method::GET, "/attendance/today")
            .send()
            .await
            .map_err(|e| AppError::RemoteFailure(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(Self::classify_failure(
                resp,
                "Attendance already recorded",
                "Could not load today's attendance",
            )
            .await);
        }

        let record: Option<AttendanceRecord> = resp
            .json()
            .await
            .map_err(|e| AppError::RemoteFailure(format!("malformed response: {e}")))?;
        Ok(record)
    }
}
