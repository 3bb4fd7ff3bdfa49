//! Redirect table.
//!
//! Maps a section-root path to the canonical landing page inside its mount.
//! Lookup is exact-match only: no patterns, no prefix matching.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use waymark_pages::normalize_page_path;

use crate::error::NavError;
use crate::registry::NavigationRegistry;
use crate::validate::{IssueKind, ValidationIssue};

/// A single redirect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectRule {
    /// Path the router navigates to (e.g., "/docs/" or "/docs/extended/").
    pub from: String,
    /// Canonical page inside the mount (e.g., "/docs/getting-started/intro").
    pub to: String,
}

impl RedirectRule {
    /// Create a rule.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Exact-match redirect lookup.
#[derive(Debug, Default)]
pub struct RedirectTable {
    rules: Vec<RedirectRule>,
    index: HashMap<String, usize>,
}

impl RedirectTable {
    /// Build a table from rules, keeping their authored order.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::DuplicateRedirect`] if two rules share a source.
    pub fn new(rules: impl IntoIterator<Item = RedirectRule>) -> Result<Self, NavError> {
        let mut table = Self::default();
        for rule in rules {
            if table.index.contains_key(&rule.from) {
                return Err(NavError::DuplicateRedirect(rule.from));
            }
            table.index.insert(rule.from.clone(), table.rules.len());
            table.rules.push(rule);
        }
        Ok(table)
    }

    /// Canonical target for `requested`, or `None` when no rule matches.
    ///
    /// `None` means the requested path is used as-is.
    #[must_use]
    pub fn resolve(&self, requested: &str) -> Option<&str> {
        self.index
            .get(requested)
            .map(|&i| self.rules[i].to.as_str())
    }

    /// Rules in authored order.
    #[must_use]
    pub fn rules(&self) -> &[RedirectRule] {
        &self.rules
    }

    /// Whether the table holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Cross-check redirect rules against the registered navigation trees.
///
/// A rule belongs to the tree with the longest mount prefixing its source,
/// so `/docs/extended/` is checked against `/docs/`. The target must sit
/// inside that mount and name an enabled entry of its tree; a trailing
/// `.html` or `.md` on the target is ignored.
#[must_use]
pub fn validate_redirects_against_trees(
    table: &RedirectTable,
    registry: &NavigationRegistry,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for rule in table.rules() {
        let Some(tree) = registry
            .owning_mount(&rule.from)
            .and_then(|mount| registry.load(mount).ok())
        else {
            issues.push(
                ValidationIssue::new(IssueKind::RedirectSourceOutsideMounts, &rule.from)
                    .with_path(&rule.from),
            );
            continue;
        };

        let Some(relative) = rule.to.strip_prefix(&tree.mount) else {
            issues.push(
                ValidationIssue::new(IssueKind::RedirectTargetOutsideMount, &tree.mount)
                    .with_path(&rule.to),
            );
            continue;
        };

        let target = normalize_page_path(relative);
        let found = tree
            .entries()
            .any(|(_, entry)| normalize_page_path(&entry.path) == target);
        if !found {
            issues.push(
                ValidationIssue::new(IssueKind::RedirectTargetMissing, &tree.mount)
                    .with_path(&rule.to),
            );
        }
    }

    issues
}
