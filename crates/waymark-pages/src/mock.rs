//! Mock page index for testing.
//!
//! Provides [`MockPageIndex`] for unit testing without filesystem access.

use std::collections::HashMap;

use crate::index::{Page, PageError, PageIndex};

/// In-memory page index.
///
/// # Example
///
/// ```ignore
/// use waymark_pages::{MockPageIndex, PageIndex};
///
/// let index = MockPageIndex::new()
///     .with_page("/docs/", "getting-started/intro", "Introduction");
///
/// let pages = index.pages("/docs/").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockPageIndex {
    pages: HashMap<String, Vec<Page>>,
}

impl MockPageIndex {
    /// Create a new empty mock index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page under a mount.
    #[must_use]
    pub fn with_page(
        mut self,
        mount: impl Into<String>,
        path: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.pages.entry(mount.into()).or_default().push(Page {
            path: path.into(),
            title: title.into(),
        });
        self
    }
}

impl PageIndex for MockPageIndex {
    fn pages(&self, mount: &str) -> Result<Vec<Page>, PageError> {
        Ok(self.pages.get(mount).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_grouped_by_mount() {
        let index = MockPageIndex::new()
            .with_page("/docs/", "intro", "Intro")
            .with_page("/guides/", "deploy", "Deploy");

        assert_eq!(index.pages("/docs/").unwrap().len(), 1);
        assert!(index.pages("/tutorials/").unwrap().is_empty());
    }
}
