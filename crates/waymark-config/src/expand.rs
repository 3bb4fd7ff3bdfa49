//! `${VAR}` expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Bare `$VAR` is left as is. An unset variable without a default is an
/// error naming `field`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, MissingVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| MissingVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

struct MissingVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_literal_unchanged() {
        assert_eq!(
            expand_env("https://stats.example.com/a.js", "analytics.script_src").unwrap(),
            "https://stats.example.com/a.js"
        );
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("WAYMARK_TEST_STATS_HOST", "stats.example.com");
        }
        let result =
            expand_env("https://${WAYMARK_TEST_STATS_HOST}/a.js", "analytics.script_src").unwrap();
        assert_eq!(result, "https://stats.example.com/a.js");
        unsafe {
            std::env::remove_var("WAYMARK_TEST_STATS_HOST");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("WAYMARK_TEST_UNSET_HOST");
        }
        let result = expand_env("${WAYMARK_TEST_UNSET_HOST:-0.0.0.0}", "server.host").unwrap();
        assert_eq!(result, "0.0.0.0");
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("WAYMARK_TEST_MISSING");
        }
        let err = expand_env("${WAYMARK_TEST_MISSING}", "server.host").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let message = err.to_string();
        assert!(message.contains("WAYMARK_TEST_MISSING"));
        assert!(message.contains("server.host"));
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        assert_eq!(expand_env("$HOME/docs", "docs.source_dir").unwrap(), "$HOME/docs");
    }
}
