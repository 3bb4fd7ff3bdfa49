//! Navigation registry.
//!
//! Holds every [`NavigationTree`] keyed by mount path. Trees are stored in
//! registration order with a `HashMap` index for O(1) mount lookups, and are
//! immutable once the registry is built.

use std::collections::HashMap;

use waymark_pages::PageIndex;

use crate::error::NavError;
use crate::sidebar::Sidebar;
use crate::tree::{NavigationTree, normalize_mount};
use crate::validate::{ValidationIssue, validate};

/// Read-only collection of navigation trees.
#[derive(Debug, Default)]
pub struct NavigationRegistry {
    trees: Vec<NavigationTree>,
    mount_index: HashMap<String, usize>,
}

impl NavigationRegistry {
    /// Build a registry from authored trees.
    ///
    /// Mount paths are normalized to `/name/` form before indexing.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::DuplicateMount`] if two trees share a mount path.
    pub fn new(trees: impl IntoIterator<Item = NavigationTree>) -> Result<Self, NavError> {
        let mut registry = Self::default();
        for mut tree in trees {
            tree.mount = normalize_mount(&tree.mount);
            if registry.mount_index.contains_key(&tree.mount) {
                return Err(NavError::DuplicateMount(tree.mount));
            }
            registry
                .mount_index
                .insert(tree.mount.clone(), registry.trees.len());
            registry.trees.push(tree);
        }

        tracing::debug!(mounts = registry.trees.len(), "Navigation registry built");
        Ok(registry)
    }

    /// Load the effective tree for a mount.
    ///
    /// Disabled sections and entries are filtered out; everything else keeps
    /// its authored order. Repeated calls return equal trees.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::UnknownMount`] if no tree is registered for `mount`.
    pub fn load(&self, mount: &str) -> Result<NavigationTree, NavError> {
        self.authored(mount).map(NavigationTree::enabled_only)
    }

    /// Authored tree for a mount, including disabled items.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::UnknownMount`] if no tree is registered for `mount`.
    pub fn authored(&self, mount: &str) -> Result<&NavigationTree, NavError> {
        let key = normalize_mount(mount);
        self.mount_index
            .get(&key)
            .map(|&i| &self.trees[i])
            .ok_or(NavError::UnknownMount(key))
    }

    /// Whether a tree is registered for `mount`.
    #[must_use]
    pub fn contains(&self, mount: &str) -> bool {
        self.mount_index.contains_key(&normalize_mount(mount))
    }

    /// Longest registered mount that prefixes `path`.
    ///
    /// `"/docs/extended/"` belongs to `"/docs/"` unless `"/docs/extended/"`
    /// is itself registered.
    #[must_use]
    pub fn owning_mount(&self, path: &str) -> Option<&str> {
        self.mounts()
            .filter(|mount| path.starts_with(mount))
            .max_by_key(|mount| mount.len())
    }

    /// Mount paths in registration order.
    pub fn mounts(&self) -> impl Iterator<Item = &str> {
        self.trees.iter().map(|tree| tree.mount.as_str())
    }

    /// Number of registered trees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Whether the registry holds no trees.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Validate the effective tree of a mount.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::UnknownMount`] if no tree is registered for `mount`.
    pub fn validate(&self, mount: &str) -> Result<Vec<ValidationIssue>, NavError> {
        Ok(validate(&self.load(mount)?))
    }

    /// Build the sidebar of a mount, resolving derived titles from `pages`.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::UnknownMount`] for an unregistered mount and
    /// [`NavError::Pages`] if the page index fails.
    pub fn sidebar(&self, mount: &str, pages: &dyn PageIndex) -> Result<Sidebar, NavError> {
        let tree = self.load(mount)?;
        let known = pages.pages(&tree.mount)?;
        Ok(Sidebar::build(&tree, &known))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{NavigationEntry, NavigationSection};
    use pretty_assertions::assert_eq;
    use waymark_pages::MockPageIndex;

    static_assertions::assert_impl_all!(NavigationRegistry: Send, Sync);

    fn docs_tree() -> NavigationTree {
        NavigationTree::new(
            "/docs/",
            vec![NavigationSection::new(
                "Getting Started",
                vec![
                    NavigationEntry::page("getting-started/intro"),
                    NavigationEntry::titled("getting-started/configuration", "Config"),
                ],
            )],
        )
    }

    #[test]
    fn test_load_returns_authored_order() {
        let registry = NavigationRegistry::new([docs_tree()]).unwrap();
        let tree = registry.load("/docs/").unwrap();

        assert_eq!(tree.items.len(), 1);
        let entries = &tree.sections().next().unwrap().children;
        assert_eq!(entries[0].explicit_title(), None);
        assert_eq!(entries[0].path, "getting-started/intro");
        assert_eq!(entries[1].explicit_title(), Some("Config"));
    }

    #[test]
    fn test_load_is_idempotent() {
        let registry = NavigationRegistry::new([docs_tree()]).unwrap();
        assert_eq!(registry.load("/docs/").unwrap(), registry.load("/docs/").unwrap());
    }

    #[test]
    fn test_load_unknown_mount() {
        let registry = NavigationRegistry::new([docs_tree()]).unwrap();
        let err = registry.load("/tutorials/").unwrap_err();

        assert!(matches!(err, NavError::UnknownMount(ref m) if m == "/tutorials/"));
    }

    #[test]
    fn test_load_normalizes_requested_mount() {
        let registry = NavigationRegistry::new([docs_tree()]).unwrap();
        assert!(registry.load("/docs").is_ok());
        assert!(registry.contains("docs"));
    }

    #[test]
    fn test_load_filters_disabled() {
        let tree = NavigationTree::new(
            "/guides/",
            vec![
                NavigationSection::new(
                    "Deploy",
                    vec![
                        NavigationEntry::page("deploy/docker"),
                        NavigationEntry::page("deploy/k8s").disabled(),
                    ],
                ),
                NavigationSection::new("Legacy", vec![NavigationEntry::page("v1")]).disabled(),
            ],
        );
        let registry = NavigationRegistry::new([tree]).unwrap();

        let loaded = registry.load("/guides/").unwrap();
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(loaded.sections().next().unwrap().children.len(), 1);

        let authored = registry.authored("/guides/").unwrap();
        assert_eq!(authored.items.len(), 2);
    }

    #[test]
    fn test_duplicate_mount_rejected() {
        let err = NavigationRegistry::new([
            docs_tree(),
            NavigationTree::new("docs", vec![]),
        ])
        .unwrap_err();

        assert!(matches!(err, NavError::DuplicateMount(ref m) if m == "/docs/"));
    }

    #[test]
    fn test_mounts_in_registration_order() {
        let registry = NavigationRegistry::new([
            NavigationTree::new("/tutorials/", vec![]),
            docs_tree(),
            NavigationTree::new("/guides/", vec![]),
        ])
        .unwrap();

        let mounts: Vec<_> = registry.mounts().collect();
        assert_eq!(mounts, vec!["/tutorials/", "/docs/", "/guides/"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_owning_mount_prefers_longest_prefix() {
        let registry = NavigationRegistry::new([
            docs_tree(),
            NavigationTree::new("/docs/api/", vec![]),
            NavigationTree::new("/tutorials/", vec![]),
        ])
        .unwrap();

        assert_eq!(registry.owning_mount("/docs/extended/"), Some("/docs/"));
        assert_eq!(registry.owning_mount("/docs/api/v2/"), Some("/docs/api/"));
        assert_eq!(registry.owning_mount("/tutorials/"), Some("/tutorials/"));
        assert_eq!(registry.owning_mount("/blog/"), None);
        assert_eq!(registry.owning_mount("/docs"), None);
    }

    #[test]
    fn test_validate_uses_effective_tree() {
        let tree = NavigationTree::new(
            "/docs/",
            vec![NavigationSection::new(
                "Drafts",
                vec![NavigationEntry::page("wip").disabled()],
            )],
        );
        let registry = NavigationRegistry::new([tree]).unwrap();

        let issues = registry.validate("/docs/").unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].section.as_deref(), Some("Drafts"));
    }

    #[test]
    fn test_sidebar_resolves_derived_titles() {
        let registry = NavigationRegistry::new([docs_tree()]).unwrap();
        let pages = MockPageIndex::new().with_page("/docs/", "getting-started/intro", "Introduction");

        let sidebar = registry.sidebar("/docs/", &pages).unwrap();
        let titles: Vec<_> = sidebar.sections[0]
            .items
            .iter()
            .map(|i| i.title.as_str())
            .collect();

        assert_eq!(titles, vec!["Introduction", "Config"]);
    }
}
