//! Combined build-time check of navigation and redirects.

use serde::Serialize;
use waymark_pages::PageIndex;

use crate::error::NavError;
use crate::redirect::{RedirectTable, validate_redirects_against_trees};
use crate::registry::NavigationRegistry;
use crate::validate::{Severity, ValidationIssue, check_pages_exist, lint_duplicate_paths, validate};

/// Issues collected across every mount and the redirect table.
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    /// Issues in discovery order: per mount, then redirects.
    pub issues: Vec<ValidationIssue>,
}

impl CheckReport {
    /// Issues that fail the build.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
    }

    /// Issues that are reported only.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Warning)
    }

    /// Whether any issue fails the build.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }
}

/// Run every validation pass over the site.
///
/// Trees are checked in their effective (enabled-only) form. Page existence
/// is only checked when a page index is supplied.
///
/// # Errors
///
/// Returns [`NavError::Pages`] if the page index fails.
pub fn check_site(
    registry: &NavigationRegistry,
    redirects: &RedirectTable,
    pages: Option<&dyn PageIndex>,
) -> Result<CheckReport, NavError> {
    let mut report = CheckReport::default();

    for mount in registry.mounts() {
        let tree = registry.load(mount)?;
        report.issues.extend(validate(&tree));
        report.issues.extend(lint_duplicate_paths(&tree));
        if let Some(index) = pages {
            let known = index.pages(mount)?;
            report.issues.extend(check_pages_exist(&tree, &known));
        }
    }

    report
        .issues
        .extend(validate_redirects_against_trees(redirects, registry));

    tracing::info!(
        mounts = registry.len(),
        redirects = redirects.rules().len(),
        errors = report.errors().count(),
        warnings = report.warnings().count(),
        "Site check complete"
    );

    Ok(report)
}
