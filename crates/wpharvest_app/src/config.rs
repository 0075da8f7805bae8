//! Optional RON configuration for the command-line front end.
//!
//! Every field has a default, so a file only needs the values it changes:
//!
//! ```ron
//! (per_page: 50, max_retries: 5, output_file: "posts.csv")
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use engine_logging::engine_info;
use serde::{Deserialize, Serialize};
use wpharvest_engine::{FetchSettings, RetryPolicy, DEFAULT_OUTPUT_FILENAME};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub per_page: u32,
    pub user_agent: Option<String>,
    pub max_retries: u32,
    pub backoff_factor_ms: u64,
    pub max_backoff_secs: u64,
    pub retry_statuses: Vec<u16>,
    pub respect_retry_after: bool,
    pub output_file: String,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        let settings = FetchSettings::default();
        Self {
            request_timeout_secs: settings.request_timeout.as_secs(),
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            per_page: settings.per_page,
            user_agent: None,
            max_retries: settings.retry.max_retries,
            backoff_factor_ms: settings.retry.backoff_factor.as_millis() as u64,
            max_backoff_secs: settings.retry.max_backoff.as_secs(),
            retry_statuses: settings.retry.status_forcelist,
            respect_retry_after: settings.retry.respect_retry_after,
            output_file: DEFAULT_OUTPUT_FILENAME.to_string(),
        }
    }
}

impl HarvestConfig {
    /// Settings for the shared, retrying transport.
    pub fn fetch_settings(&self) -> FetchSettings {
        let defaults = FetchSettings::default();
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            per_page: self.per_page,
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            retry: RetryPolicy {
                max_retries: self.max_retries,
                backoff_factor: Duration::from_millis(self.backoff_factor_ms),
                max_backoff: Duration::from_secs(self.max_backoff_secs),
                status_forcelist: self.retry_statuses.clone(),
                respect_retry_after: self.respect_retry_after,
            },
        }
    }

    /// Settings for the one-shot site probe: same timeouts, no retries.
    pub fn probe_settings(&self) -> FetchSettings {
        FetchSettings {
            retry: RetryPolicy::disabled(),
            ..self.fetch_settings()
        }
    }
}

pub fn parse_config(content: &str) -> Result<HarvestConfig> {
    ron::from_str(content).context("invalid RON configuration")
}

/// Loads `path` if given; no path means built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<HarvestConfig> {
    let Some(path) = path else {
        return Ok(HarvestConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    engine_info!("Loaded configuration from {:?}", path);
    Ok(config)
}
