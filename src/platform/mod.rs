//! Platform location capability seam.
//!
//! Wraps whatever the host can do (an external locator command in the shipped
//! build, stubs in tests) behind a single-resolution asynchronous operation
//! with deterministic timeout-to-failure mapping. The raw process/callback
//! shape is never exposed to callers.

use std::io;
use std::process::Stdio;
use std::time::Duration;

use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::location::Position;

/// Policy for a single-shot position fix.
#[derive(Debug, Clone, Copy)]
pub struct FixOptions {
    pub high_accuracy: bool,
    pub timeout: Duration,
    /// Maximum acceptable age of a cached fix. Zero means a cached fix is
    /// never accepted: attendance proof must reflect present location.
    pub max_age: Duration,
}

impl Default for FixOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            max_age: Duration::ZERO,
        }
    }
}

/// Single-shot access to the platform positioning capability.
#[allow(async_fn_in_trait)]
pub trait PositionSource {
    /// Acquire one position fix under the given policy.
    async fn current_position(&self, opts: &FixOptions) -> AppResult<Position>;

    /// Non-committal permission query. `Ok(None)` when the platform cannot
    /// answer without prompting; this must never trigger a consent UI.
    async fn query_permission(&self) -> AppResult<Option<bool>>;
}

/// Fix payload printed by locator commands such as `termux-location` or
/// `CoreLocationCLI -format json`.
#[derive(Debug, Deserialize)]
struct RawFix {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    accuracy: f64,
}

/// Position source backed by an external locator command that prints a JSON
/// fix on stdout. Spawning a fresh process per call trivially satisfies the
/// zero cached-age policy.
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    /// Build from the configured locator command line. An empty command means
    /// the platform has no location capability at all.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let mut parts = cfg.locator_command.split_whitespace();
        let program = parts.next().ok_or(AppError::UnsupportedPlatform)?.to_string();
        let args = parts.map(str::to_string).collect();
        Ok(Self { program, args })
    }
}

impl PositionSource for CommandSource {
    async fn current_position(&self, opts: &FixOptions) -> AppResult<Position> {
        debug!(program = %self.program, timeout = ?opts.timeout, "spawning locator");

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = tokio::time::timeout(opts.timeout, cmd.output())
            .await
            .map_err(|_| {
                AppError::LocationUnavailable(format!(
                    "position fix timed out after {} s",
                    opts.timeout.as_secs()
                ))
            })?
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => AppError::UnsupportedPlatform,
                _ => AppError::LocationUnavailable(e.to_string()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("locator exited with {}", output.status)
            } else {
                stderr
            };
            // Locators report denial on stderr; keep that distinct from a
            // positioning failure.
            if message.to_lowercase().contains("denied") {
                return Err(AppError::PermissionDenied(message));
            }
            return Err(AppError::LocationUnavailable(message));
        }

        let raw: RawFix = serde_json::from_slice(&output.stdout)
            .map_err(|e| AppError::InvalidPosition(e.to_string()))?;
        Ok(Position {
            latitude: raw.latitude,
            longitude: raw.longitude,
            accuracy: raw.accuracy,
        })
    }

    async fn query_permission(&self) -> AppResult<Option<bool>> {
        // External locators offer no non-committal query; an actual fix is
        // the only trust signal available.
        Ok(None)
    }
}
