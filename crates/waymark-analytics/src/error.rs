//! Analytics error types.

/// Analytics errors.
///
/// Backend failures never reach page rendering; the tracker logs and drops
/// them. Only configuration problems surface to the build.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    /// Invalid analytics configuration.
    #[error("Invalid {field}: {message}")]
    InvalidConfig {
        /// Config field path (e.g., "`analytics.script_src`").
        field: &'static str,
        /// What is wrong with the value.
        message: &'static str,
    },

    /// The external analytics backend rejected a call.
    #[error("Analytics backend error: {0}")]
    Backend(String),
}

impl AnalyticsError {
    pub(crate) fn invalid(field: &'static str, message: &'static str) -> Self {
        Self::InvalidConfig { field, message }
    }
}
