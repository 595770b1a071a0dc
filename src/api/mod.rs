//! HTTP client for the remote attendance service.
//!
//! Attaches the stored bearer token to every request and maps unauthorized
//! responses to `AuthExpired`, the CLI counterpart of a redirect to login.

pub mod attendance;

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use crate::errors::{AppError, AppResult};

pub(crate) const DEFAULT_RETRY_MESSAGE: &str = "Please try again";

/// Error body shape used by the attendance service.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Shared transport, reused by the geocoder chain.
    pub fn http(&self) -> Client {
        self.http.clone()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Map a non-success response to the error taxonomy. 409 is the benign
    /// already-clocked case; 401 means the stored token no longer works.
    async fn classify_failure(resp: Response, conflict_message: &str, default: &str) -> AppError {
        let status = resp.status();
        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.is_empty());

        match status {
            StatusCode::CONFLICT => AppError::RemoteConflict(conflict_message.to_string()),
            StatusCode::UNAUTHORIZED => AppError::AuthExpired,
            _ => AppError::RemoteFailure(message.unwrap_or_else(|| default.to_string())),
        }
    }
}
