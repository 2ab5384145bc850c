//! Application configuration domain model

use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// Loaded from an optional TOML file by the infrastructure layer; every
/// field has a working default so a missing or partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Mediator endpoint settings
    pub mediator: MediatorConfig,

    /// Result polling settings
    pub polling: PollConfig,
}

/// Mediator endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediatorConfig {
    /// Base URL of the mediator service
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// Result polling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Interval between result polls, in milliseconds
    pub interval_ms: u64,

    /// Poll ceiling before the transaction attempt times out
    pub max_attempts: u32,

    /// Interval of the legacy confirmation-only watcher, in milliseconds
    pub confirm_interval_ms: u64,

    /// Ceiling of the legacy confirmation-only watcher
    pub confirm_max_attempts: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mediator: MediatorConfig::default(),
            polling: PollConfig::default(),
        }
    }
}

impl Default for MediatorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/shelfswap".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        // 1 s x 120 and 2 s x 60: both ceilings sit at about two minutes.
        Self {
            interval_ms: 1_000,
            max_attempts: 120,
            confirm_interval_ms: 2_000,
            confirm_max_attempts: 60,
        }
    }
}
