//! Panel configuration.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags and environment variables:
//!
//! ```toml
//! base_url = "http://192.168.4.1"
//! timeout_ms = 3000
//! search_debounce_ms = 300
//! default_view = "defaults"
//! ```

use cardpanel_core::{
    CardSource, Error, Result,
    constants::{DEFAULT_DEVICE_URL, DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_SEARCH_DEBOUNCE_MS},
};
use cardpanel_network::HttpCardServiceConfig;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanelConfig {
    /// Device base URL
    pub base_url: String,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,

    /// Quiet window before a typed search runs, in milliseconds
    pub search_debounce_ms: u64,

    /// Listing shown when no view is requested
    pub default_view: CardSource,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DEVICE_URL.to_string(),
            timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            default_view: CardSource::default(),
        }
    }
}

impl PanelConfig {
    /// Read a TOML configuration file.
    ///
    /// # Errors
    /// Returns `Error::Config` if the file cannot be read, is not valid TOML,
    /// or holds invalid values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: PanelConfig =
            toml::from_str(content).map_err(|e| Error::Config(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_search_debounce(mut self, debounce: Duration) -> Self {
        self.search_debounce_ms = u64::try_from(debounce.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_default_view(mut self, view: CardSource) -> Self {
        self.default_view = view;
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Check the values after all overrides are applied.
    ///
    /// # Errors
    /// Returns `Error::Config` for a blank or non-HTTP URL or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(Error::Config("base_url must not be empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "base_url must start with http:// or https://, got {url}"
            )));
        }
        if self.timeout_ms == 0 {
            return Err(Error::Config("timeout_ms must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Settings for the HTTP device client.
    #[must_use]
    pub fn service_config(&self) -> HttpCardServiceConfig {
        HttpCardServiceConfig {
            base_url: self.base_url.trim().to_string(),
            timeout: self.timeout(),
        }
    }
}
