//! Page index abstraction for Waymark.
//!
//! The rendering collaborator knows which pages exist under each mount path.
//! This crate exposes that knowledge through the [`PageIndex`] trait so the
//! navigation registry can resolve derived titles and check that sidebar
//! entries point at real pages.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`PageIndex`] trait with a single `pages(mount)` query
//! - [`FsPageIndex`] scanning markdown sources on disk
//! - [`MockPageIndex`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use waymark_pages::{FsPageIndex, PageIndex};
//!
//! let index = FsPageIndex::new(PathBuf::from("docs"));
//! for page in index.pages("/guides/")? {
//!     println!("{}: {}", page.path, page.title);
//! }
//! ```

mod fs;
mod index;
#[cfg(feature = "mock")]
mod mock;
mod path;

pub use fs::FsPageIndex;
pub use index::{Page, PageError, PageErrorKind, PageIndex};
#[cfg(feature = "mock")]
pub use mock::MockPageIndex;
pub use path::{normalize_page_path, titlecase_from_slug};
