//! Run configuration for a verification run
//!
//! Every value the original verification procedure hardcoded (target URL,
//! screenshot paths, the 10-second grid assertion bound) is exposed here as
//! a configurable field with the original literal as its default.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for one verification run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Base URL of the storefront under verification
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Screenshot path written when the run succeeds
    #[serde(default = "default_success_screenshot")]
    pub success_screenshot: PathBuf,

    /// Screenshot path written when the run fails
    #[serde(default = "default_failure_screenshot")]
    pub failure_screenshot: PathBuf,

    /// Bound for the product-grid / empty-state visibility assertion
    #[serde(default = "default_assert_timeout_secs")]
    pub assert_timeout_secs: u64,

    /// Bound for required element lookups (globe button, language menu item)
    #[serde(default = "default_locator_timeout_secs")]
    pub locator_timeout_secs: u64,

    /// Bound for network-idle waits after navigation
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,

    /// Quiet window with no new network activity that counts as "idle"
    #[serde(default = "default_idle_quiet_ms")]
    pub idle_quiet_ms: u64,

    /// Run the browser headless
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Browser window width
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Browser window height
    #[serde(default = "default_window_height")]
    pub window_height: u32,
}

// Default value providers
fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_success_screenshot() -> PathBuf {
    PathBuf::from("verification/final_state.png")
}

fn default_failure_screenshot() -> PathBuf {
    PathBuf::from("verification/failure_state.png")
}

fn default_assert_timeout_secs() -> u64 {
    10
}

fn default_locator_timeout_secs() -> u64 {
    30
}

fn default_idle_timeout_secs() -> u64 {
    30
}

fn default_idle_quiet_ms() -> u64 {
    500
}

fn default_headless() -> bool {
    true
}

fn default_window_width() -> u32 {
    1920
}

fn default_window_height() -> u32 {
    1080
}

impl RunConfig {
    /// Bound for the grid/empty-state assertion
    pub fn assert_timeout(&self) -> Duration {
        Duration::from_secs(self.assert_timeout_secs)
    }

    /// Bound for required element lookups
    pub fn locator_timeout(&self) -> Duration {
        Duration::from_secs(self.locator_timeout_secs)
    }

    /// Bound for network-idle waits
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Quiet window for the network-idle heuristic
    pub fn idle_quiet(&self) -> Duration {
        Duration::from_millis(self.idle_quiet_ms)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            success_screenshot: default_success_screenshot(),
            failure_screenshot: default_failure_screenshot(),
            assert_timeout_secs: default_assert_timeout_secs(),
            locator_timeout_secs: default_locator_timeout_secs(),
            idle_timeout_secs: default_idle_timeout_secs(),
            idle_quiet_ms: default_idle_quiet_ms(),
            headless: default_headless(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_literals() {
        let config = RunConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(
            config.success_screenshot,
            PathBuf::from("verification/final_state.png")
        );
        assert_eq!(
            config.failure_screenshot,
            PathBuf::from("verification/failure_state.png")
        );
        assert_eq!(config.assert_timeout_secs, 10);
        assert!(config.headless);
        assert_eq!(config.window_width, 1920);
        assert_eq!(config.window_height, 1080);
    }

    #[test]
    fn test_duration_accessors() {
        let config = RunConfig::default();
        assert_eq!(config.assert_timeout(), Duration::from_secs(10));
        assert_eq!(config.idle_quiet(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: RunConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:8080"}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.assert_timeout_secs, 10);
        assert!(config.headless);
    }
}
