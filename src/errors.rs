//! Unified application error type.
//! All modules (api, core, platform, cli, config) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Platform location capability
    // ---------------------------
    #[error("No location capability is available on this platform")]
    UnsupportedPlatform,

    #[error("Location permission denied: {0}")]
    PermissionDenied(String),

    #[error("Unable to determine current location: {0}")]
    LocationUnavailable(String),

    #[error("Invalid position payload: {0}")]
    InvalidPosition(String),

    // ---------------------------
    // Reverse geocoding
    // ---------------------------
    // Informational only: an exhausted provider chain never aborts an
    // otherwise successful acquisition.
    #[error("Reverse geocoding failed: {0}")]
    GeocodingFailed(String),

    // ---------------------------
    // Remote attendance service
    // ---------------------------
    #[error("{0}")]
    RemoteConflict(String),

    #[error("{0}")]
    RemoteFailure(String),

    #[error("Session expired: run 'rpunchclock login' with a fresh token")]
    AuthExpired,

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    // ---------------------------
    // Orchestration
    // ---------------------------
    #[error("A clock action is already in progress")]
    ActionInProgress,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
