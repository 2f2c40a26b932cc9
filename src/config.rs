//! Collector configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default wait budget for the app-set-id probe (1500 ms).
pub const DEFAULT_APP_SET_ID_TIMEOUT: Duration = Duration::from_millis(1500);

fn default_app_set_id_timeout() -> Duration {
    DEFAULT_APP_SET_ID_TIMEOUT
}

/// Configuration for identity collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Wait budget for the app-set-id capability (default: 1500ms). A
    /// capability that does not respond within this budget contributes
    /// absence; the other probes are unaffected.
    #[serde(with = "humantime_serde")]
    pub app_set_id_timeout: Duration,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            app_set_id_timeout: default_app_set_id_timeout(),
        }
    }
}

impl IdentityConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the app-set-id wait budget.
    pub fn with_app_set_id_timeout(mut self, timeout: Duration) -> Self {
        self.app_set_id_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = IdentityConfig::new();
        assert_eq!(config.app_set_id_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_config_builder() {
        let config = IdentityConfig::new().with_app_set_id_timeout(Duration::from_secs(3));
        assert_eq!(config.app_set_id_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_config_deserialize_humantime() {
        let config: IdentityConfig = serde_yaml::from_str("app_set_id_timeout: 2s").unwrap();
        assert_eq!(config.app_set_id_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_config_deserialize_empty_uses_defaults() {
        let config: IdentityConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.app_set_id_timeout, DEFAULT_APP_SET_ID_TIMEOUT);
    }
}
