//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// AASA configuration loaded from environment variables.
///
/// Every field is optional with a documented fallback, so loading never fails
/// on missing values. This is re-read on every AASA request so that the served
/// document always reflects the current environment.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AasaConfig {
    /// Apple Developer team identifier (e.g. "9JA89QQLNQ").
    #[serde(default = "default_team_id")]
    pub ios_team_id: String,

    /// App bundle identifier.
    #[serde(default = "default_bundle_id")]
    pub ios_bundle_id: String,

    /// Comma-separated Universal Link paths (e.g. "/callback,/wsegue").
    #[serde(default = "default_ul_paths")]
    pub ul_paths: String,
}

/// Server configuration loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_team_id() -> String {
    "TEAMID".to_string()
}

fn default_bundle_id() -> String {
    "com.MeshNetProtocol.OpenMesh.OpenMesh".to_string()
}

fn default_ul_paths() -> String {
    "/callback".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AasaConfig {
    /// Load the AASA configuration from the current environment.
    ///
    /// All fields have defaults, so missing variables never cause an error.
    /// A variable set to an empty (or whitespace-only) string behaves the
    /// same as an unset one.
    pub fn from_env() -> Result<Self, envy::Error> {
        let config: Self = envy::from_env()?;
        Ok(config.with_fallbacks())
    }

    /// Replace values that are empty after trimming with the documented
    /// defaults.
    fn with_fallbacks(mut self) -> Self {
        if self.ios_team_id.trim().is_empty() {
            self.ios_team_id = default_team_id();
        }
        if self.ios_bundle_id.trim().is_empty() {
            self.ios_bundle_id = default_bundle_id();
        }
        if self.ul_paths.trim().is_empty() {
            self.ul_paths = default_ul_paths();
        }
        self
    }
}

impl Default for AasaConfig {
    fn default() -> Self {
        Self {
            ios_team_id: default_team_id(),
            ios_bundle_id: default_bundle_id(),
            ul_paths: default_ul_paths(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}
