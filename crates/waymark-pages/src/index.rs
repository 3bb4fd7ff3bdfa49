//! Page index trait and error types.
//!
//! # Path Convention
//!
//! Page paths are slugs relative to their mount, without leading or trailing
//! slashes and without the `.md` extension:
//! - `""` - the mount's landing page (`index.md`)
//! - `"guide"` - standalone page (`guide.md` or `guide/index.md`)
//! - `"getting-started/intro"` - nested page

use std::path::PathBuf;

/// A page known to the rendering collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// Slug relative to the mount (e.g., "getting-started/intro").
    pub path: String,
    /// Title derived from the page itself (first H1, else the file name).
    pub title: String,
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PageErrorKind {
    /// Mount directory or page does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Mount path escapes the source directory.
    InvalidPath,
    /// Other/unknown error category.
    Other,
}

/// Page index error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct PageError {
    /// Semantic error category.
    pub kind: PageErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PageError {
    /// Create a new page index error.
    #[must_use]
    pub fn new(kind: PageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create an error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => PageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => PageErrorKind::PermissionDenied,
            _ => PageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            PageErrorKind::NotFound => "Not found",
            PageErrorKind::PermissionDenied => "Permission denied",
            PageErrorKind::InvalidPath => "Invalid path",
            PageErrorKind::Other => "Error",
        };
        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for PageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Query interface of the rendering collaborator.
///
/// Implementations list every page reachable under a mount path. The result
/// is used to resolve derived titles and to check sidebar entries; it is
/// never used to reorder navigation.
pub trait PageIndex: Send + Sync {
    /// List the pages under a mount path (e.g., "/docs/").
    ///
    /// A mount with no backing content returns an empty list rather than an
    /// error, so callers can report each missing page individually.
    ///
    /// # Errors
    ///
    /// Returns [`PageError`] if the backend fails or the mount path is invalid.
    fn pages(&self, mount: &str) -> Result<Vec<Page>, PageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_backend_and_path() {
        let err = PageError::new(PageErrorKind::InvalidPath)
            .with_backend("Fs")
            .with_path("/docs/../etc");
        assert_eq!(err.to_string(), "[Fs] Invalid path (path: /docs/../etc)");
    }

    #[test]
    fn test_io_maps_kind() {
        let io = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = PageError::io(io, None);
        assert_eq!(err.kind, PageErrorKind::PermissionDenied);
        assert!(std::error::Error::source(&err).is_some());
    }
}
