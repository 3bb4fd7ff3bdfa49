//! Navigation data model.
//!
//! A [`NavigationTree`] is an ordered list of [`NavigationItem`]s mounted at a
//! URL prefix: titled [`NavigationSection`]s, bare entries with no heading, or
//! a mix of both. Authored order is display order and is never re-sorted.
//!
//! Entries accept three authored forms:
//!
//! ```toml
//! children = [
//!     "getting-started/intro",                         # derived title
//!     ["getting-started/configuration", "Config"],     # explicit title
//!     { path = "plugins", title = "Plugins (draft)", enabled = false },
//! ]
//! ```
//!
//! A flat tree lists entries directly:
//!
//! ```toml
//! [[trees]]
//! mount = "/tutorials/"
//! sections = ["cms-agnostic-resolver", "localized-newsletter"]
//! ```

use serde::{Deserialize, Serialize};

/// Returns `true`; serde default for `enabled` flags.
fn enabled_by_default() -> bool {
    true
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_enabled(enabled: &bool) -> bool {
    *enabled
}

/// Normalize a mount path to `/name/` form.
///
/// `"docs"`, `"/docs"` and `"/docs/"` all become `"/docs/"`; an empty string
/// or `"/"` becomes `"/"`.
pub fn normalize_mount(mount: &str) -> String {
    let inner = mount.trim().trim_matches('/');
    if inner.is_empty() {
        "/".to_owned()
    } else {
        format!("/{inner}/")
    }
}

/// A page reference inside a section or at the top level of a tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EntryRepr")]
pub struct NavigationEntry {
    /// Slug relative to the mount (e.g., "getting-started/intro").
    pub path: String,
    /// Display title override. `None` means the title is derived from the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Disabled entries stay in the configuration but are dropped by `load`.
    #[serde(skip_serializing_if = "is_enabled")]
    pub enabled: bool,
}

/// Authored forms of an entry.
#[derive(Deserialize)]
#[serde(untagged)]
enum EntryRepr {
    Path(String),
    Pair(String, String),
    Table {
        path: String,
        #[serde(default)]
        title: Option<String>,
        #[serde(default = "enabled_by_default")]
        enabled: bool,
    },
}

impl From<EntryRepr> for NavigationEntry {
    fn from(repr: EntryRepr) -> Self {
        match repr {
            EntryRepr::Path(path) => Self::page(path),
            EntryRepr::Pair(path, title) => Self::titled(path, title),
            EntryRepr::Table {
                path,
                title,
                enabled,
            } => Self {
                path,
                title,
                enabled,
            },
        }
    }
}

impl NavigationEntry {
    /// Entry whose title is derived from the target page.
    #[must_use]
    pub fn page(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: None,
            enabled: true,
        }
    }

    /// Entry with an explicit display title.
    #[must_use]
    pub fn titled(path: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: Some(title.into()),
            enabled: true,
        }
    }

    /// Mark the entry as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Explicit display title, if any.
    #[must_use]
    pub fn explicit_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Whether the explicit title flags the page as provisional.
    ///
    /// The convention is a trailing parenthetical marker, as in
    /// `"Plugins (draft)"` or `"Theming (WIP)"`.
    #[must_use]
    pub fn is_provisional(&self) -> bool {
        self.title.as_deref().is_some_and(|title| {
            let title = title.trim_end();
            title.ends_with(')')
                && title
                    .rfind('(')
                    .is_some_and(|open| open > 0 && open + 2 < title.len())
        })
    }
}

/// A titled, ordered group of entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSection {
    /// Section heading shown in the sidebar.
    pub title: String,
    /// Entries in display order.
    #[serde(default)]
    pub children: Vec<NavigationEntry>,
    /// Disabled sections stay in the configuration but are dropped by `load`.
    #[serde(default = "enabled_by_default", skip_serializing_if = "is_enabled")]
    pub enabled: bool,
}

impl NavigationSection {
    /// Create an enabled section.
    #[must_use]
    pub fn new(title: impl Into<String>, children: Vec<NavigationEntry>) -> Self {
        Self {
            title: title.into(),
            children,
            enabled: true,
        }
    }

    /// Mark the section as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Top-level item of a tree: a titled section or a bare entry.
///
/// Deserialization tries the entry forms first; a table without `path` is a
/// section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavigationItem {
    /// Entry rendered without a section heading.
    Entry(NavigationEntry),
    /// Titled group of entries.
    Section(NavigationSection),
}

impl NavigationItem {
    /// The section, if this item is one.
    #[must_use]
    pub fn as_section(&self) -> Option<&NavigationSection> {
        match self {
            Self::Section(section) => Some(section),
            Self::Entry(_) => None,
        }
    }

    /// Whether the item survives `enabled_only`.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Entry(entry) => entry.enabled,
            Self::Section(section) => section.enabled,
        }
    }
}

impl From<NavigationSection> for NavigationItem {
    fn from(section: NavigationSection) -> Self {
        Self::Section(section)
    }
}

impl From<NavigationEntry> for NavigationItem {
    fn from(entry: NavigationEntry) -> Self {
        Self::Entry(entry)
    }
}

/// Ordered items mounted at a URL prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTree {
    /// Mount path in `/name/` form.
    pub mount: String,
    /// Sections and bare entries in display order.
    #[serde(default, alias = "sections")]
    pub items: Vec<NavigationItem>,
}

impl NavigationTree {
    /// Create a tree of sections, normalizing the mount path.
    #[must_use]
    pub fn new(mount: &str, sections: Vec<NavigationSection>) -> Self {
        Self::with_items(mount, sections.into_iter().map(NavigationItem::from).collect())
    }

    /// Create a tree from mixed items, normalizing the mount path.
    #[must_use]
    pub fn with_items(mount: &str, items: Vec<NavigationItem>) -> Self {
        Self {
            mount: normalize_mount(mount),
            items,
        }
    }

    /// Copy of the tree without disabled items and entries.
    ///
    /// Order of the remaining items is preserved.
    #[must_use]
    pub fn enabled_only(&self) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| item.is_enabled())
            .map(|item| match item {
                NavigationItem::Entry(entry) => NavigationItem::Entry(entry.clone()),
                NavigationItem::Section(section) => NavigationItem::Section(NavigationSection {
                    title: section.title.clone(),
                    children: section
                        .children
                        .iter()
                        .filter(|entry| entry.enabled)
                        .cloned()
                        .collect(),
                    enabled: true,
                }),
            })
            .collect();

        Self {
            mount: self.mount.clone(),
            items,
        }
    }

    /// Titled sections in display order, skipping bare entries.
    pub fn sections(&self) -> impl Iterator<Item = &NavigationSection> {
        self.items.iter().filter_map(NavigationItem::as_section)
    }

    /// Iterate over every entry together with its section, if any.
    pub fn entries(&self) -> impl Iterator<Item = (Option<&NavigationSection>, &NavigationEntry)> {
        self.items.iter().flat_map(|item| {
            let (section, children) = match item {
                NavigationItem::Entry(entry) => (None, std::slice::from_ref(entry)),
                NavigationItem::Section(section) => (Some(section), section.children.as_slice()),
            };
            children.iter().map(move |entry| (section, entry))
        })
    }

    /// Full URL of a page path inside this mount.
    #[must_use]
    pub fn link(&self, path: &str) -> String {
        format!("{}{}", self.mount, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Deserialize)]
    struct Wrapper {
        trees: Vec<NavigationTree>,
    }

    #[test]
    fn test_normalize_mount() {
        assert_eq!(normalize_mount("docs"), "/docs/");
        assert_eq!(normalize_mount("/docs"), "/docs/");
        assert_eq!(normalize_mount("/docs/"), "/docs/");
        assert_eq!(normalize_mount(""), "/");
        assert_eq!(normalize_mount("/"), "/");
    }

    #[test]
    fn test_parse_all_entry_forms() {
        let toml = r#"
[[trees]]
mount = "/docs/"

[[trees.sections]]
title = "Getting Started"
children = [
    "getting-started/intro",
    ["getting-started/configuration", "Config"],
    { path = "plugins", title = "Plugins (draft)", enabled = false },
]
"#;
        let wrapper: Wrapper = toml::from_str(toml).unwrap();
        let section = wrapper.trees[0].sections().next().unwrap();

        assert_eq!(
            section.children,
            vec![
                NavigationEntry::page("getting-started/intro"),
                NavigationEntry::titled("getting-started/configuration", "Config"),
                NavigationEntry::titled("plugins", "Plugins (draft)").disabled(),
            ]
        );
        assert!(section.enabled);
    }

    #[test]
    fn test_parse_disabled_section() {
        let toml = r#"
[[trees]]
mount = "/guides/"

[[trees.sections]]
title = "Legacy"
enabled = false
children = ["old"]
"#;
        let wrapper: Wrapper = toml::from_str(toml).unwrap();
        assert!(!wrapper.trees[0].sections().next().unwrap().enabled);
    }

    #[test]
    fn test_parse_flat_tree() {
        let toml = r#"
[[trees]]
mount = "/tutorials/"
sections = ["cms-agnostic-resolver", "localized-newsletter"]
"#;
        let wrapper: Wrapper = toml::from_str(toml).unwrap();
        let tree = &wrapper.trees[0];

        assert_eq!(
            tree.items,
            vec![
                NavigationItem::Entry(NavigationEntry::page("cms-agnostic-resolver")),
                NavigationItem::Entry(NavigationEntry::page("localized-newsletter")),
            ]
        );
        assert_eq!(tree.sections().count(), 0);
        let paths: Vec<_> = tree.entries().map(|(_, e)| e.path.as_str()).collect();
        assert_eq!(paths, vec!["cms-agnostic-resolver", "localized-newsletter"]);
    }

    #[test]
    fn test_parse_mixed_items() {
        let toml = r#"
[[trees]]
mount = "/guides/"
items = [
    ["overview", "Overview"],
    { path = "faq", enabled = false },
    { title = "Deploy", children = ["deploy/docker"] },
]
"#;
        let wrapper: Wrapper = toml::from_str(toml).unwrap();
        let tree = &wrapper.trees[0];

        assert_eq!(
            tree.items,
            vec![
                NavigationEntry::titled("overview", "Overview").into(),
                NavigationEntry::page("faq").disabled().into(),
                NavigationSection::new("Deploy", vec![NavigationEntry::page("deploy/docker")])
                    .into(),
            ]
        );

        let view = tree.enabled_only();
        let sections: Vec<_> = view
            .entries()
            .map(|(section, _)| section.map(|s| s.title.as_str()))
            .collect();
        assert_eq!(sections, vec![None, Some("Deploy")]);
    }

    #[test]
    fn test_enabled_only_preserves_order() {
        let tree = NavigationTree::new(
            "/docs/",
            vec![
                NavigationSection::new(
                    "A",
                    vec![
                        NavigationEntry::page("a1"),
                        NavigationEntry::page("a2").disabled(),
                        NavigationEntry::page("a3"),
                    ],
                ),
                NavigationSection::new("B", vec![NavigationEntry::page("b1")]).disabled(),
                NavigationSection::new("C", vec![NavigationEntry::page("c1")]),
            ],
        );

        let view = tree.enabled_only();
        let titles: Vec<_> = view.sections().map(|s| s.title.as_str()).collect();
        let paths: Vec<_> = view
            .sections()
            .next()
            .unwrap()
            .children
            .iter()
            .map(|e| e.path.as_str())
            .collect();

        assert_eq!(titles, vec!["A", "C"]);
        assert_eq!(paths, vec!["a1", "a3"]);
    }

    #[test]
    fn test_is_provisional() {
        assert!(NavigationEntry::titled("p", "Plugins (draft)").is_provisional());
        assert!(NavigationEntry::titled("p", "Theming (WIP) ").is_provisional());
        assert!(!NavigationEntry::titled("p", "Plugins").is_provisional());
        assert!(!NavigationEntry::titled("p", "(draft)").is_provisional());
        assert!(!NavigationEntry::page("p").is_provisional());
    }

    #[test]
    fn test_serialize_omits_defaults() {
        let entry = NavigationEntry::page("intro");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({"path": "intro"}));

        let disabled = NavigationEntry::titled("cfg", "Config").disabled();
        let json = serde_json::to_value(&disabled).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"path": "cfg", "title": "Config", "enabled": false})
        );
    }

    #[test]
    fn test_link() {
        let tree = NavigationTree::new("docs", vec![]);
        assert_eq!(tree.link("getting-started/intro"), "/docs/getting-started/intro");
        assert_eq!(tree.link(""), "/docs/");
    }
}
