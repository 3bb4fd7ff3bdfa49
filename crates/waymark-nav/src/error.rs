//! Navigation error types.

use waymark_pages::PageError;

/// Errors raised by the navigation registry and redirect table.
///
/// Configuration defects inside a tree are not errors; they are collected as
/// [`ValidationIssue`](crate::ValidationIssue)s.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// No tree is registered for the requested mount path.
    #[error("Unknown mount path: {0}")]
    UnknownMount(String),

    /// Two trees were registered for the same mount path.
    #[error("Mount path registered twice: {0}")]
    DuplicateMount(String),

    /// Two redirect rules share the same source path.
    #[error("Redirect source defined twice: {0}")]
    DuplicateRedirect(String),

    /// Page index query failed.
    #[error("Page index error: {0}")]
    Pages(#[from] PageError),
}
