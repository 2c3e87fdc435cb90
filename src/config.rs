//! Configuration handling for the TUI

use crate::i18n::Language;
use crate::state::validation::MessagePolicy;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default submission endpoint
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/submit";

/// Environment variable overriding the endpoint
const ENDPOINT_ENV: &str = "ENGCELL_ENDPOINT";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Submission endpoint URL
    pub endpoint: Option<String>,
    /// Interface language, as a code (`en`) or display name (`English`)
    pub language: Option<String>,
    /// Require the free-text message
    pub message_required: Option<bool>,
    /// District data file replacing the bundled list
    pub districts_file: Option<PathBuf>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("in", "engineers-cell", "engcell-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Endpoint to post to: environment, then file, then default
    pub fn endpoint(&self) -> String {
        self.resolve_endpoint(std::env::var(ENDPOINT_ENV).ok())
    }

    fn resolve_endpoint(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Configured language; unknown values fall back to English
    pub fn language(&self) -> Language {
        self.language
            .as_deref()
            .and_then(Language::parse)
            .unwrap_or_default()
    }

    pub fn message_policy(&self) -> MessagePolicy {
        MessagePolicy::from_required(self.message_required.unwrap_or(false))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
