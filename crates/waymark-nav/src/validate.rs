//! Advisory validation of hand-authored navigation.
//!
//! Every pass collects issues instead of stopping at the first one, so a
//! single run surfaces every typo in the configuration.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;
use waymark_pages::{Page, normalize_page_path};

use crate::tree::{NavigationEntry, NavigationItem, NavigationTree};

/// How an issue affects the build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fails the build.
    Error,
    /// Reported but does not fail the build.
    Warning,
}

/// Category of a validation issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Section has no children.
    EmptySection,
    /// Entry path is empty.
    EmptyPath,
    /// Explicit entry title is empty.
    EmptyTitle,
    /// Same path appears twice in one section.
    DuplicatePath,
    /// Entry points at a page the page index does not know.
    UnknownPage,
    /// Redirect source lies under no registered mount.
    RedirectSourceOutsideMounts,
    /// Redirect target lies outside the source mount.
    RedirectTargetOutsideMount,
    /// Redirect target matches no entry of the mount's tree.
    RedirectTargetMissing,
}

impl IssueKind {
    /// Build impact of this kind of issue.
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::DuplicatePath | Self::UnknownPage => Severity::Warning,
            _ => Severity::Error,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::EmptySection => "section has no entries",
            Self::EmptyPath => "entry path is empty",
            Self::EmptyTitle => "explicit entry title is empty",
            Self::DuplicatePath => "entry path repeated within section",
            Self::UnknownPage => "entry points at an unknown page",
            Self::RedirectSourceOutsideMounts => "redirect source is outside every registered mount",
            Self::RedirectTargetOutsideMount => "redirect target is outside its mount",
            Self::RedirectTargetMissing => "redirect target is not in the navigation tree",
        }
    }
}

/// A configuration defect found by a validation pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Issue category.
    pub kind: IssueKind,
    /// Mount path of the affected tree (or redirect source).
    pub mount: String,
    /// Title of the affected section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Zero-based entry position within the section, or within the tree's
    /// items for a bare entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    /// Offending entry or redirect path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ValidationIssue {
    pub(crate) fn new(kind: IssueKind, mount: &str) -> Self {
        Self {
            kind,
            mount: mount.to_owned(),
            section: None,
            position: None,
            path: None,
        }
    }

    pub(crate) fn in_section(mut self, title: &str) -> Self {
        self.section = Some(title.to_owned());
        self
    }

    pub(crate) fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub(crate) fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_owned());
        self
    }

    /// Build impact of the issue.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "/docs/ > Getting Started #2: entry path is empty (path: x)"
        write!(f, "{}", self.mount)?;
        if let Some(section) = &self.section {
            write!(f, " > {section}")?;
        }
        if let Some(position) = self.position {
            write!(f, " #{}", position + 1)?;
        }
        write!(f, ": {}", self.kind.describe())?;
        if let Some(path) = &self.path {
            write!(f, " (path: {path})")?;
        }
        Ok(())
    }
}

/// Check that every section has children and every entry is well-formed.
///
/// Returns an empty list iff every section has at least one child, every
/// entry has a non-empty path, and every explicit title is non-empty. Bare
/// top-level entries are located by their item position.
#[must_use]
pub fn validate(tree: &NavigationTree) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (index, item) in tree.items.iter().enumerate() {
        match item {
            NavigationItem::Entry(entry) => {
                check_entry(&mut issues, tree, None, index, entry);
            }
            NavigationItem::Section(section) => {
                if section.children.is_empty() {
                    issues.push(
                        ValidationIssue::new(IssueKind::EmptySection, &tree.mount)
                            .in_section(&section.title),
                    );
                }
                for (position, entry) in section.children.iter().enumerate() {
                    check_entry(&mut issues, tree, Some(&section.title), position, entry);
                }
            }
        }
    }

    issues
}

fn check_entry(
    issues: &mut Vec<ValidationIssue>,
    tree: &NavigationTree,
    section: Option<&str>,
    position: usize,
    entry: &NavigationEntry,
) {
    if entry.path.trim().is_empty() {
        issues.push(locate(IssueKind::EmptyPath, tree, section, position));
    }
    if entry.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        issues.push(locate(IssueKind::EmptyTitle, tree, section, position).with_path(&entry.path));
    }
}

fn locate(
    kind: IssueKind,
    tree: &NavigationTree,
    section: Option<&str>,
    position: usize,
) -> ValidationIssue {
    let issue = ValidationIssue::new(kind, &tree.mount).at(position);
    match section {
        Some(title) => issue.in_section(title),
        None => issue,
    }
}

/// Entries grouped by the list they are authored in.
///
/// Bare top-level entries form one group with no section title; positions
/// are relative to the list that holds the entry.
fn entry_groups(tree: &NavigationTree) -> Vec<(Option<&str>, Vec<(usize, &NavigationEntry)>)> {
    let top_level: Vec<_> = tree
        .items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            NavigationItem::Entry(entry) => Some((index, entry)),
            NavigationItem::Section(_) => None,
        })
        .collect();

    let mut groups = Vec::new();
    if !top_level.is_empty() {
        groups.push((None, top_level));
    }
    for section in tree.sections() {
        groups.push((
            Some(section.title.as_str()),
            section.children.iter().enumerate().collect(),
        ));
    }
    groups
}

/// Report paths repeated within a single child list.
///
/// Paths are compared after normalization, so `"guide"` and `"guide.md"`
/// collide. Repeats across sections are allowed; bare top-level entries are
/// compared with each other.
#[must_use]
pub fn lint_duplicate_paths(tree: &NavigationTree) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (section, entries) in entry_groups(tree) {
        let mut seen = HashSet::new();
        for (position, entry) in entries {
            if entry.path.trim().is_empty() {
                continue;
            }
            if !seen.insert(normalize_page_path(&entry.path)) {
                issues.push(
                    locate(IssueKind::DuplicatePath, tree, section, position).with_path(&entry.path),
                );
            }
        }
    }

    issues
}

/// Report entries whose target is not among `pages`.
#[must_use]
pub fn check_pages_exist(tree: &NavigationTree, pages: &[Page]) -> Vec<ValidationIssue> {
    let known: HashMap<&str, &Page> = pages.iter().map(|p| (p.path.as_str(), p)).collect();
    let mut issues = Vec::new();

    for (section, entries) in entry_groups(tree) {
        for (position, entry) in entries {
            if entry.path.trim().is_empty() {
                continue;
            }
            if !known.contains_key(normalize_page_path(&entry.path).as_str()) {
                issues.push(
                    locate(IssueKind::UnknownPage, tree, section, position).with_path(&entry.path),
                );
            }
        }
    }

    issues
}
