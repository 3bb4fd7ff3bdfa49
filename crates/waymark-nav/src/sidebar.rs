//! Sidebar structure handed to the rendering collaborator.

use std::collections::HashMap;

use serde::Serialize;
use waymark_pages::{Page, normalize_page_path, titlecase_from_slug};

use crate::tree::{NavigationEntry, NavigationItem, NavigationTree};

/// Resolved sidebar link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    /// Display title (explicit, or derived from the page).
    pub title: String,
    /// Absolute link target (mount + page path).
    pub link: String,
    /// True when the title was derived rather than authored.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub derived: bool,
    /// True when the authored title carries a provisional marker.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub provisional: bool,
}

/// Resolved sidebar section.
///
/// Consecutive bare entries of a tree form one section without a heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarSection {
    /// Section heading, absent for bare entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Links in display order.
    pub items: Vec<SidebarItem>,
}

/// Sidebar of one mount, in authored order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    /// Mount path the sidebar belongs to.
    pub mount: String,
    /// Sections in display order.
    pub sections: Vec<SidebarSection>,
}

impl Sidebar {
    /// Resolve a tree against the pages known under its mount.
    ///
    /// Entries without an explicit title take the page's own title; when the
    /// page is unknown the title falls back to the title-cased slug.
    #[must_use]
    pub fn build(tree: &NavigationTree, pages: &[Page]) -> Self {
        let titles: HashMap<&str, &str> = pages
            .iter()
            .map(|p| (p.path.as_str(), p.title.as_str()))
            .collect();

        let resolve = |entry: &NavigationEntry| {
            let page_path = normalize_page_path(&entry.path);
            let (title, derived) = match entry.explicit_title() {
                Some(title) => (title.to_owned(), false),
                None => {
                    let title = titles
                        .get(page_path.as_str())
                        .map_or_else(|| titlecase_from_slug(&page_path), |t| (*t).to_owned());
                    (title, true)
                }
            };
            SidebarItem {
                title,
                link: tree.link(&page_path),
                derived,
                provisional: entry.is_provisional(),
            }
        };

        let mut sections: Vec<SidebarSection> = Vec::new();
        for item in &tree.items {
            match item {
                NavigationItem::Section(section) => sections.push(SidebarSection {
                    title: Some(section.title.clone()),
                    items: section.children.iter().map(&resolve).collect(),
                }),
                NavigationItem::Entry(entry) => match sections.last_mut() {
                    Some(last) if last.title.is_none() => last.items.push(resolve(entry)),
                    _ => sections.push(SidebarSection {
                        title: None,
                        items: vec![resolve(entry)],
                    }),
                },
            }
        }

        Self {
            mount: tree.mount.clone(),
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NavigationSection;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_resolves_titles_and_links() {
        let tree = NavigationTree::new(
            "/docs/",
            vec![NavigationSection::new(
                "Getting Started",
                vec![
                    NavigationEntry::page("getting-started/intro"),
                    NavigationEntry::titled("getting-started/configuration", "Config"),
                    NavigationEntry::titled("plugins/", "Plugins (draft)"),
                ],
            )],
        );
        let pages = vec![Page {
            path: "getting-started/intro".to_owned(),
            title: "Introduction".to_owned(),
        }];

        let sidebar = Sidebar::build(&tree, &pages);

        assert_eq!(
            sidebar.sections[0].items,
            vec![
                SidebarItem {
                    title: "Introduction".to_owned(),
                    link: "/docs/getting-started/intro".to_owned(),
                    derived: true,
                    provisional: false,
                },
                SidebarItem {
                    title: "Config".to_owned(),
                    link: "/docs/getting-started/configuration".to_owned(),
                    derived: false,
                    provisional: false,
                },
                SidebarItem {
                    title: "Plugins (draft)".to_owned(),
                    link: "/docs/plugins".to_owned(),
                    derived: false,
                    provisional: true,
                },
            ]
        );
    }

    #[test]
    fn test_unknown_page_falls_back_to_slug() {
        let tree = NavigationTree::new(
            "/tutorials/",
            vec![NavigationSection::new(
                "Basics",
                vec![NavigationEntry::page("first-steps")],
            )],
        );

        let sidebar = Sidebar::build(&tree, &[]);
        assert_eq!(sidebar.sections[0].items[0].title, "First Steps");
        assert!(sidebar.sections[0].items[0].derived);
    }

    #[test]
    fn test_bare_entries_group_without_heading() {
        let tree = NavigationTree::with_items(
            "/tutorials/",
            vec![
                NavigationEntry::page("cms-agnostic-resolver").into(),
                NavigationEntry::titled("localized-newsletter", "Newsletter").into(),
                NavigationSection::new("More", vec![NavigationEntry::page("extras")]).into(),
                NavigationEntry::page("appendix").into(),
            ],
        );

        let sidebar = Sidebar::build(&tree, &[]);

        let headings: Vec<_> = sidebar.sections.iter().map(|s| s.title.as_deref()).collect();
        assert_eq!(headings, vec![None, Some("More"), None]);
        assert_eq!(sidebar.sections[0].items.len(), 2);
        assert_eq!(sidebar.sections[0].items[0].title, "Cms Agnostic Resolver");
        assert_eq!(sidebar.sections[0].items[0].link, "/tutorials/cms-agnostic-resolver");

        let json = serde_json::to_value(&sidebar.sections[2]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [{"title": "Appendix", "link": "/tutorials/appendix", "derived": true}]
            })
        );
    }

    #[test]
    fn test_serialization_skips_false_flags() {
        let item = SidebarItem {
            title: "Config".to_owned(),
            link: "/docs/config".to_owned(),
            derived: false,
            provisional: false,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Config", "link": "/docs/config"})
        );
    }
}
