//! Configuration for link checking
//!
//! Defines the URL cap, probe timeout and concurrency.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the link checker
///
/// # Examples
///
/// ```
/// use forensic_linkcheck::LinkCheckConfig;
///
/// let config = LinkCheckConfig::default();
/// assert_eq!(config.max_urls, 100);
/// assert_eq!(config.timeout_secs, 5.0);
///
/// // One probe at a time
/// let config = LinkCheckConfig::sequential();
/// assert_eq!(config.concurrency, 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkCheckConfig {
    /// Maximum number of unique URLs probed per document
    /// Default: 100
    #[serde(default = "default_max_urls")]
    pub max_urls: usize,

    /// Hard per-request timeout (in seconds, fractions allowed)
    /// Default: 5.0
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,

    /// Probes in flight at once
    /// Default: 8
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Redirects followed before giving up
    /// Default: 10
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// User-Agent header sent with every probe
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_max_urls() -> usize {
    100
}

fn default_timeout_secs() -> f64 {
    5.0
}

fn default_concurrency() -> usize {
    8
}

fn default_max_redirects() -> usize {
    10
}

fn default_user_agent() -> String {
    concat!("forensic-hub/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for LinkCheckConfig {
    fn default() -> Self {
        Self {
            max_urls: default_max_urls(),
            timeout_secs: default_timeout_secs(),
            concurrency: default_concurrency(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
        }
    }
}

impl LinkCheckConfig {
    /// Probe one URL at a time, in order
    pub fn sequential() -> Self {
        Self {
            concurrency: 1,
            ..Self::default()
        }
    }

    /// Short timeout and wide fan-out for large reference lists
    ///
    /// - Timeout: 2 seconds
    /// - Concurrency: 32
    pub fn aggressive() -> Self {
        Self {
            timeout_secs: 2.0,
            concurrency: 32,
            ..Self::default()
        }
    }

    /// Get the probe timeout as Duration
    ///
    /// Values a `Duration` cannot hold saturate; `validate` rejects them.
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_secs).unwrap_or(Duration::MAX)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_urls == 0 {
            return Err("max_urls must be greater than 0".to_string());
        }
        if !self.timeout_secs.is_finite() || self.timeout_secs <= 0.0 {
            return Err("timeout_secs must be a positive number".to_string());
        }
        if Duration::try_from_secs_f64(self.timeout_secs).is_err() {
            return Err(format!("timeout_secs {} is too large", self.timeout_secs));
        }
        if self.concurrency == 0 {
            return Err("concurrency must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LinkCheckConfig::default();
        assert_eq!(config.max_urls, 100);
        assert_eq!(config.timeout_secs, 5.0);
        assert_eq!(config.concurrency, 8);
        assert_eq!(config.max_redirects, 10);
        assert!(config.user_agent.starts_with("forensic-hub/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(LinkCheckConfig::sequential().concurrency, 1);
        let aggressive = LinkCheckConfig::aggressive();
        assert!(aggressive.timeout_secs < LinkCheckConfig::default().timeout_secs);
        assert!(aggressive.validate().is_ok());
    }

    #[test]
    fn test_fractional_timeout() {
        let config = LinkCheckConfig {
            timeout_secs: 0.25,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_values() {
        let mut config = LinkCheckConfig::default();
        config.max_urls = 0;
        assert!(config.validate().is_err());

        let mut config = LinkCheckConfig::default();
        config.timeout_secs = 0.0;
        assert!(config.validate().is_err());

        let mut config = LinkCheckConfig::default();
        config.timeout_secs = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = LinkCheckConfig::default();
        config.timeout_secs = 1e30;
        assert!(config.validate().is_err());
        assert_eq!(config.timeout(), Duration::MAX);

        let mut config = LinkCheckConfig::default();
        config.concurrency = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml() {
        let config = LinkCheckConfig::from_toml("timeout_secs = 1.5\nconcurrency = 2").unwrap();
        assert_eq!(config.timeout_secs, 1.5);
        assert_eq!(config.concurrency, 2);
        assert_eq!(config.max_urls, 100);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = LinkCheckConfig::aggressive();
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: LinkCheckConfig = serde_json::from_str(&serialized).unwrap();

        assert_eq!(config.timeout_secs, deserialized.timeout_secs);
        assert_eq!(config.concurrency, deserialized.concurrency);
    }
}
