//! Navigation registry and redirect table for Waymark.
//!
//! This crate provides:
//! - [`NavigationRegistry`]: ordered sidebar trees keyed by mount path
//! - [`RedirectTable`]: exact-match redirects from a section root to its landing page
//! - Advisory validation that collects every [`ValidationIssue`] in one pass
//! - [`Sidebar`] resolution of derived titles against a page index
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), waymark_nav::NavError> {
//! use waymark_nav::{
//!     NavigationEntry, NavigationRegistry, NavigationSection, NavigationTree, RedirectRule,
//!     RedirectTable,
//! };
//!
//! let registry = NavigationRegistry::new([NavigationTree::new(
//!     "/docs/",
//!     vec![NavigationSection::new(
//!         "Getting Started",
//!         vec![
//!             NavigationEntry::page("getting-started/intro"),
//!             NavigationEntry::titled("getting-started/configuration", "Config"),
//!         ],
//!     )],
//! )])?;
//! let tree = registry.load("/docs/")?;
//! assert!(waymark_nav::validate(&tree).is_empty());
//!
//! let redirects =
//!     RedirectTable::new([RedirectRule::new("/docs/", "/docs/getting-started/intro")])?;
//! assert_eq!(redirects.resolve("/docs/"), Some("/docs/getting-started/intro"));
//! # Ok(())
//! # }
//! ```

mod check;
mod error;
mod redirect;
mod registry;
mod sidebar;
mod tree;
mod validate;

pub use check::{CheckReport, check_site};
pub use error::NavError;
pub use redirect::{RedirectRule, RedirectTable, validate_redirects_against_trees};
pub use registry::NavigationRegistry;
pub use sidebar::{Sidebar, SidebarItem, SidebarSection};
pub use tree::{
    NavigationEntry, NavigationItem, NavigationSection, NavigationTree, normalize_mount,
};
pub use validate::{
    IssueKind, Severity, ValidationIssue, check_pages_exist, lint_duplicate_paths, validate,
};
