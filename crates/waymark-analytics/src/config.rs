//! Analytics configuration.

use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

/// Event emitted once per page load.
pub const PAGE_EVENT: &str = "page";

/// Event emitted after the page event to record the history entry.
pub const PUSH_STATE_EVENT: &str = "trackPushState";

/// Default id of the injected script element.
const DEFAULT_ELEMENT_ID: &str = "waymark-analytics";

/// Default name of the global tracker function.
const DEFAULT_GLOBAL_NAME: &str = "_wmq";

fn default_element_id() -> String {
    DEFAULT_ELEMENT_ID.to_owned()
}

fn default_global_name() -> String {
    DEFAULT_GLOBAL_NAME.to_owned()
}

/// `[analytics]` section of the site configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// URL of the external analytics script.
    pub script_src: String,
    /// Element id guarding against double injection.
    #[serde(default = "default_element_id")]
    pub element_id: String,
    /// Name of the global tracker function.
    #[serde(default = "default_global_name")]
    pub global_name: String,
    /// Re-fire tracking events after client-side route changes.
    #[serde(default)]
    pub track_route_changes: bool,
}

impl AnalyticsConfig {
    /// Create a configuration with default element id and global name.
    #[must_use]
    pub fn new(script_src: impl Into<String>) -> Self {
        Self {
            script_src: script_src.into(),
            element_id: default_element_id(),
            global_name: default_global_name(),
            track_route_changes: false,
        }
    }

    /// Check that the values can be embedded in a page.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        let src = self.script_src.as_str();
        if src.is_empty() {
            return Err(AnalyticsError::invalid("analytics.script_src", "cannot be empty"));
        }
        if !(src.starts_with("https://") || src.starts_with("http://") || src.starts_with('/')) {
            return Err(AnalyticsError::invalid(
                "analytics.script_src",
                "must be an http(s) URL or an absolute path",
            ));
        }
        if self.element_id.is_empty() || self.element_id.contains(char::is_whitespace) {
            return Err(AnalyticsError::invalid(
                "analytics.element_id",
                "must be non-empty without whitespace",
            ));
        }
        if !is_js_identifier(&self.global_name) {
            return Err(AnalyticsError::invalid(
                "analytics.global_name",
                "must be a JavaScript identifier",
            ));
        }
        Ok(())
    }
}

/// `[A-Za-z_$][A-Za-z0-9_$]*`
fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let config: AnalyticsConfig =
            toml::from_str(r#"script_src = "https://stats.example.com/a.js""#).unwrap();

        assert_eq!(config.element_id, "waymark-analytics");
        assert_eq!(config.global_name, "_wmq");
        assert!(!config.track_route_changes);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_script_src() {
        let config = AnalyticsConfig::new("");
        assert!(config.validate().unwrap_err().to_string().contains("script_src"));

        let config = AnalyticsConfig::new("javascript:alert(1)");
        assert!(config.validate().is_err());

        assert!(AnalyticsConfig::new("/assets/stats.js").validate().is_ok());
    }

    #[test]
    fn test_validate_global_name() {
        let mut config = AnalyticsConfig::new("https://stats.example.com/a.js");
        config.global_name = "1bad".to_owned();
        assert!(config.validate().unwrap_err().to_string().contains("global_name"));

        config.global_name = "$track_2".to_owned();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_element_id() {
        let mut config = AnalyticsConfig::new("https://stats.example.com/a.js");
        config.element_id = "two words".to_owned();
        assert!(config.validate().unwrap_err().to_string().contains("element_id"));
    }
}
