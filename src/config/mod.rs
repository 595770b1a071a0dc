use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::platform::FixOptions;

/// One reverse-geocoding endpoint entry. List order is the fallback order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    pub name: String,
    pub url: String,
    /// Per-provider bound in milliseconds; absent means the transport default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub server_url: String,
    /// External locator command printing a JSON fix on stdout
    /// (e.g. "termux-location" or "CoreLocationCLI -format json").
    /// Empty means the platform has no location capability.
    #[serde(default)]
    pub locator_command: String,
    #[serde(default = "default_high_accuracy")]
    pub high_accuracy: bool,
    #[serde(default = "default_fix_timeout_ms")]
    pub fix_timeout_ms: u64,
    /// Zero means a cached fix is never accepted.
    #[serde(default)]
    pub fix_max_age_ms: u64,
    #[serde(default = "default_geocoders")]
    pub geocoders: Vec<GeocoderConfig>,
}

fn default_high_accuracy() -> bool {
    true
}
fn default_fix_timeout_ms() -> u64 {
    10_000
}
fn default_server_url() -> String {
    "https://api.otter-server.win/api".to_string()
}
fn default_geocoders() -> Vec<GeocoderConfig> {
    vec![
        GeocoderConfig {
            name: "geocode.maps.co".to_string(),
            url: "https://geocode.maps.co/reverse".to_string(),
            timeout_ms: Some(5_000),
        },
        GeocoderConfig {
            name: "nominatim".to_string(),
            url: "https://nominatim.openstreetmap.org/reverse?format=jsonv2".to_string(),
            timeout_ms: None,
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            locator_command: String::new(),
            high_accuracy: default_high_accuracy(),
            fix_timeout_ms: default_fix_timeout_ms(),
            fix_max_age_ms: 0,
            geocoders: default_geocoders(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rpunchclock")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rpunchclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpunchclock.conf")
    }

    /// Return the full path of the stored auth token
    pub fn token_file() -> PathBuf {
        Self::config_dir().join("token")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            let content = fs::read_to_string(path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Write the configuration file, creating the directory when needed.
    pub fn init_all(path: &Path, server_override: Option<&str>) -> io::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut config = Config::default();
        if let Some(server) = server_override {
            config.server_url = server.to_string();
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| io::Error::other(format!("serialize error: {e}")))?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;

        println!("✅ Config file: {:?}", path);
        Ok(())
    }

    /// Report configuration problems for `config --check`.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.server_url.trim().is_empty() {
            problems.push("server_url is empty".to_string());
        }
        if self.locator_command.trim().is_empty() {
            problems.push(
                "locator_command is empty: clock in/out will fail with no location capability"
                    .to_string(),
            );
        }
        if self.geocoders.is_empty() {
            problems.push("geocoders list is empty: addresses will never resolve".to_string());
        }
        problems
    }

    /// Fix policy derived from the configured values.
    pub fn fix_options(&self) -> FixOptions {
        FixOptions {
            high_accuracy: self.high_accuracy,
            timeout: Duration::from_millis(self.fix_timeout_ms),
            max_age: Duration::from_millis(self.fix_max_age_ms),
        }
    }

    // ---------------------------
    // Auth token storage
    // ---------------------------

    pub fn load_token() -> Option<String> {
        fs::read_to_string(Self::token_file())
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    pub fn save_token(token: &str) -> io::Result<()> {
        fs::create_dir_all(Self::config_dir())?;
        fs::write(Self::token_file(), token.trim())
    }

    pub fn clear_token() -> io::Result<()> {
        let path = Self::token_file();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
