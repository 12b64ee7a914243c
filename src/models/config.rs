//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use scraper::Selector;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Portal page and HTTP settings
    #[serde(default)]
    pub portal: PortalConfig,

    /// Snapshot destination
    #[serde(default)]
    pub storage: StorageConfig,

    /// LINE Notify delivery settings
    #[serde(default)]
    pub notify: NotifyConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration, or return defaults if the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match Self::load(&path) {
            Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!(
                    "Config not found at {:?}. Using defaults.",
                    path.as_ref()
                );
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.portal.url)
            .map_err(|e| AppError::validation(format!("portal.url is invalid: {e}")))?;
        Selector::parse(&self.portal.selector)
            .map_err(|e| AppError::selector(&self.portal.selector, format!("{e:?}")))?;
        if self.portal.user_agent.trim().is_empty() {
            return Err(AppError::validation("portal.user_agent is empty"));
        }
        if self.portal.timeout_secs == 0 {
            return Err(AppError::validation("portal.timeout_secs must be > 0"));
        }
        if self.storage.snapshot_path.as_os_str().is_empty() {
            return Err(AppError::validation("storage.snapshot_path is empty"));
        }
        Url::parse(&self.notify.endpoint)
            .map_err(|e| AppError::validation(format!("notify.endpoint is invalid: {e}")))?;
        Ok(())
    }
}

/// Where and how the announcement block is fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Portal page carrying the announcement
    #[serde(default = "defaults::portal_url")]
    pub url: String,

    /// CSS selector of the announcement block
    #[serde(default = "defaults::selector")]
    pub selector: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            url: defaults::portal_url(),
            selector: defaults::selector(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Snapshot file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Snapshot file, overwritten on every run
    #[serde(default = "defaults::snapshot_path")]
    pub snapshot_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_path: defaults::snapshot_path(),
        }
    }
}

/// LINE Notify settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Notification endpoint
    #[serde(default = "defaults::notify_endpoint")]
    pub endpoint: String,

    /// Access token; usually supplied through `LINE_NOTIFY_TOKEN` instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::notify_endpoint(),
            token: None,
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // Portal defaults
    pub fn portal_url() -> String {
        "https://portal.shuchiin.ac.jp/".into()
    }
    pub fn selector() -> String {
        "#login-infomation p".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; kyuko/0.1)".into()
    }
    pub fn timeout() -> u64 {
        10
    }

    // Storage defaults
    pub fn snapshot_path() -> PathBuf {
        PathBuf::from("kyuko_info.json")
    }

    // Notify defaults
    pub fn notify_endpoint() -> String {
        "https://notify-api.line.me/api/notify".into()
    }
}
