#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use rpunchclock::errors::{AppError, AppResult};
use rpunchclock::models::location::Position;
use rpunchclock::platform::{FixOptions, PositionSource};

pub fn rpc() -> Command {
    cargo_bin_cmd!("rpunchclock")
}

/// Create a unique test config path inside the system temp dir and remove any
/// existing file
pub fn setup_test_conf(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpunchclock.conf", name));
    let conf_path = path.to_string_lossy().to_string();
    fs::remove_file(&conf_path).ok();
    conf_path
}

// ---------------------------------------------------------------------------
// Stub position sources
// ---------------------------------------------------------------------------

/// Always returns the same fix; permission probe answers "granted".
pub struct StaticSource {
    pub fix: Position,
}

impl StaticSource {
    pub fn market_st() -> Self {
        Self {
            fix: Position {
                latitude: 37.7749,
                longitude: -122.4194,
                accuracy: 15.0,
            },
        }
    }
}

impl PositionSource for StaticSource {
    async fn current_position(&self, _opts: &FixOptions) -> AppResult<Position> {
        Ok(self.fix)
    }

    async fn query_permission(&self) -> AppResult<Option<bool>> {
        Ok(Some(true))
    }
}

/// Always fails the fix, optionally as a permission denial.
pub struct FailingSource {
    pub message: String,
    pub denied: bool,
}

impl FailingSource {
    pub fn denied() -> Self {
        Self {
            message: "User denied Geolocation".to_string(),
            denied: true,
        }
    }

    pub fn unavailable(message: &str) -> Self {
        Self {
            message: message.to_string(),
            denied: false,
        }
    }
}

impl PositionSource for FailingSource {
    async fn current_position(&self, _opts: &FixOptions) -> AppResult<Position> {
        if self.denied {
            Err(AppError::PermissionDenied(self.message.clone()))
        } else {
            Err(AppError::LocationUnavailable(self.message.clone()))
        }
    }

    async fn query_permission(&self) -> AppResult<Option<bool>> {
        Ok(Some(false))
    }
}

// ---------------------------------------------------------------------------
// Minimal in-test HTTP server
// ---------------------------------------------------------------------------

/// One canned HTTP exchange.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl CannedResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(status: u16, body: &str, delay: Duration) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay,
        }
    }
}

/// Request as recorded by the mock server: first line plus body.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub request_line: String,
    pub body: String,
}

/// Tiny single-purpose HTTP/1.1 server: serves the canned responses in
/// order (the last one repeats) and records every request it parsed.
pub struct MockServer {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| {
            let lower = line.to_ascii_lowercase();
            lower
                .strip_prefix("content-length:")
                .map(|v| v.trim().parse::<usize>().unwrap_or(0))
        })
        .unwrap_or(0)
}

impl MockServer {
    pub async fn start(responses: Vec<CannedResponse>) -> MockServer {
        assert!(!responses.is_empty(), "mock server needs at least one response");

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock server");
        let addr = listener.local_addr().expect("mock server addr");
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        tokio::spawn(async move {
            let mut served = 0usize;
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let canned = responses[served.min(responses.len() - 1)].clone();
                served += 1;

                let recorded = recorded.clone();
                tokio::spawn(async move {
                    let mut buf: Vec<u8> = Vec::new();
                    let mut tmp = [0u8; 1024];

                    // Read head, then the declared body length.
                    let parsed = loop {
                        match socket.read(&mut tmp).await {
                            Ok(0) | Err(_) => break None,
                            Ok(n) => buf.extend_from_slice(&tmp[..n]),
                        }
                        if let Some(pos) = header_end(&buf) {
                            let head = String::from_utf8_lossy(&buf[..pos]).to_string();
                            let want = pos + 4 + content_length(&head);
                            while buf.len() < want {
                                match socket.read(&mut tmp).await {
                                    Ok(0) | Err(_) => break,
                                    Ok(n) => buf.extend_from_slice(&tmp[..n]),
                                }
                            }
                            let body = String::from_utf8_lossy(&buf[pos + 4..]).to_string();
                            let request_line =
                                head.lines().next().unwrap_or_default().to_string();
                            break Some(RecordedRequest { request_line, body });
                        }
                    };

                    if let Some(req) = parsed {
                        recorded.lock().unwrap().push(req);
                    }

                    if !canned.delay.is_zero() {
                        tokio::time::sleep(canned.delay).await;
                    }

                    let response = format!(
                        "HTTP/1.1 {} Mock\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        canned.status,
                        canned.body.len(),
                        canned.body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        MockServer { addr, requests }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}
