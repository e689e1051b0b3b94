//! Configuration loaded from `up42.toml`.
//!
//! [`Up42Config`] holds the project credentials and the knobs for the job
//! waiter. Values missing from the file fall back to sensible defaults. The
//! `UP42_PROJECT_ID` and `UP42_PROJECT_API_KEY` environment variables take
//! precedence over the file.

use serde::Deserialize;
use std::path::Path;

use crate::error::QaError;

/// Top-level configuration loaded from `up42.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Up42Config {
    /// Project id from the UP42 console developer section.
    #[serde(default)]
    pub project_id: String,

    /// Project API key paired with the project id.
    #[serde(default)]
    pub project_api_key: String,

    /// API host; overridable to point at a test double.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Seconds between job-status polls.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Maximum seconds to wait for a job to complete.
    #[serde(default = "default_job_timeout_secs")]
    pub job_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.up42.com".to_string()
}

// Matches the waiter's fixed 3-second poll cadence.
fn default_poll_interval_secs() -> u64 {
    3
}

fn default_job_timeout_secs() -> u64 {
    300
}

impl Default for Up42Config {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            project_api_key: String::new(),
            base_url: default_base_url(),
            poll_interval_secs: default_poll_interval_secs(),
            job_timeout_secs: default_job_timeout_secs(),
        }
    }
}

impl Up42Config {
    /// Load configuration from `up42.toml` in the current directory.
    /// Uses defaults if the file does not exist.
    pub fn load() -> Result<Self, QaError> {
        Self::load_from(Path::new("up42.toml"))
    }

    /// Load configuration from an explicit path, then apply environment
    /// overrides.
    pub fn load_from(path: &Path) -> Result<Self, QaError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<Up42Config>(&contents)?
        } else {
            Self::default()
        };

        // Environment takes precedence over the config file for credentials.
        if let Ok(id) = std::env::var("UP42_PROJECT_ID")
            && !id.is_empty()
        {
            config.project_id = id;
        }
        if let Ok(key) = std::env::var("UP42_PROJECT_API_KEY")
            && !key.is_empty()
        {
            config.project_api_key = key;
        }

        Ok(config)
    }

    /// Fail early when credentials are missing instead of collecting 401s.
    pub fn require_credentials(&self) -> Result<(), QaError> {
        if self.project_id.is_empty() || self.project_api_key.is_empty() {
            return Err(QaError::Config(
                "project_id and project_api_key must be set in up42.toml or via \
                 UP42_PROJECT_ID / UP42_PROJECT_API_KEY"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
