//! Filesystem page index.
//!
//! Maps a mount path to a directory under the source root and walks it for
//! markdown files. Titles come from the first H1 heading, falling back to the
//! title-cased file name.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::index::{Page, PageError, PageErrorKind, PageIndex};
use crate::path::{normalize_page_path, titlecase_from_slug};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// First ATX level-one heading.
static H1_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").expect("H1 regex is a valid constant"));

/// Filesystem page index.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use waymark_pages::{FsPageIndex, PageIndex};
///
/// let index = FsPageIndex::new(PathBuf::from("docs"));
/// let pages = index.pages("/docs/")?;
/// ```
#[derive(Debug, Clone)]
pub struct FsPageIndex {
    /// Root directory holding one subdirectory per mount.
    source_dir: PathBuf,
}

impl FsPageIndex {
    /// Create a page index rooted at `source_dir`.
    ///
    /// Mount `/docs/` is read from `source_dir/docs`; mount `/` from
    /// `source_dir` itself.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Root directory of the index.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Reject mount paths that would escape the source directory.
    fn validate_mount(mount: &str) -> Result<(), PageError> {
        if mount.split('/').any(|segment| segment == "..") {
            return Err(PageError::new(PageErrorKind::InvalidPath)
                .with_path(mount)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    /// Directory holding the pages of a mount.
    fn mount_dir(&self, mount: &str) -> PathBuf {
        let relative = mount.trim_matches('/');
        if relative.is_empty() {
            self.source_dir.clone()
        } else {
            self.source_dir.join(relative)
        }
    }

    /// Collect pages from `dir`, prefixing page paths with `url_prefix`.
    fn scan_directory(
        dir: &Path,
        url_prefix: &str,
        pages: &mut Vec<Page>,
    ) -> Result<(), PageError> {
        let entries = fs::read_dir(dir)
            .map_err(|e| PageError::io(e, Some(dir.to_path_buf())).with_backend(BACKEND))?;

        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
            let child_url = if url_prefix.is_empty() {
                name.clone()
            } else {
                format!("{url_prefix}/{name}")
            };

            if is_dir {
                Self::scan_directory(&path, &child_url, pages)?;
            } else if path.extension().is_some_and(|e| e == "md") {
                let page_path = normalize_page_path(&child_url);
                let title = extract_title(&path).unwrap_or_else(|| titlecase_from_slug(&page_path));
                pages.push(Page {
                    path: page_path,
                    title,
                });
            }
        }

        Ok(())
    }
}

impl PageIndex for FsPageIndex {
    fn pages(&self, mount: &str) -> Result<Vec<Page>, PageError> {
        Self::validate_mount(mount)?;

        let dir = self.mount_dir(mount);
        if !dir.is_dir() {
            tracing::debug!(mount, dir = %dir.display(), "Mount directory missing");
            return Ok(Vec::new());
        }

        let mut pages = Vec::new();
        Self::scan_directory(&dir, "", &mut pages)?;
        // read_dir order is platform dependent
        pages.sort_by(|a, b| a.path.cmp(&b.path));

        tracing::debug!(mount, count = pages.len(), "Scanned pages");
        Ok(pages)
    }
}

/// Extract title from the first H1 heading of a markdown file.
fn extract_title(file_path: &Path) -> Option<String> {
    let content = match fs::read_to_string(file_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %file_path.display(), error = %e, "Failed to read page");
            return None;
        }
    };
    let caps = H1_REGEX.captures(&content)?;
    Some(caps[1].trim().to_owned())
}
