//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cdp: CdpConfig,

    #[serde(default)]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chrome DevTools endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CdpConfig {
    /// HTTP debugging endpoint of an already-running browser.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout for CDP round trips.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for CdpConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "http://127.0.0.1:9222".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Traversal, resolution and serialization bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Default component listing depth (in emitted ancestors).
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Default component listing size.
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,

    /// Hard cap on fiber nodes exported from the page per call.
    #[serde(default = "default_export_max_nodes")]
    pub export_max_nodes: usize,

    /// Parent traversals allowed when looking for the nearest component.
    #[serde(default = "default_ancestor_max_steps")]
    pub ancestor_max_steps: usize,

    /// Owner chain length.
    #[serde(default = "default_max_owners")]
    pub max_owners: usize,

    /// Default depth for props/state serialization.
    #[serde(default = "default_serialize_depth")]
    pub serialize_depth: usize,

    #[serde(default = "default_max_properties")]
    pub max_properties: usize,

    #[serde(default = "default_max_array_items")]
    pub max_array_items: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_nodes: default_max_nodes(),
            export_max_nodes: default_export_max_nodes(),
            ancestor_max_steps: default_ancestor_max_steps(),
            max_owners: default_max_owners(),
            serialize_depth: default_serialize_depth(),
            max_properties: default_max_properties(),
            max_array_items: default_max_array_items(),
        }
    }
}

fn default_max_depth() -> usize {
    50
}

fn default_max_nodes() -> usize {
    500
}

fn default_export_max_nodes() -> usize {
    20_000
}

fn default_ancestor_max_steps() -> usize {
    20
}

fn default_max_owners() -> usize {
    10
}

fn default_serialize_depth() -> usize {
    3
}

fn default_max_properties() -> usize {
    50
}

fn default_max_array_items() -> usize {
    100
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Also write a daily-rolling log file.
    #[serde(default)]
    pub file: bool,

    /// Directory for log files. Defaults to `~/.reactscope/logs`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: false,
            dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    /// Resolved log directory.
    pub fn log_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|h| h.join(".reactscope").join("logs"))
                .unwrap_or_else(|| PathBuf::from(".reactscope/logs"))
        })
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
