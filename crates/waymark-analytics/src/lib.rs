//! Analytics shim for Waymark sites.
//!
//! Models the "stub now, replace when the real script loads" pattern used by
//! third-party tracking snippets:
//!
//! - [`AnalyticsShim`]: one-shot script injection with states
//!   `Uninitialized -> ScriptInjected`
//! - [`Tracker`]: global tracker function with an ordered replay queue
//! - [`RouteObserver`]: optional router hook re-firing page events
//! - [`render_snippet`]: the same contract as browser JavaScript
//!
//! # Example
//!
//! ```
//! use waymark_analytics::{AnalyticsConfig, AnalyticsShim, InitOutcome, MemoryPage};
//!
//! let mut shim = AnalyticsShim::new(AnalyticsConfig::new("https://stats.example.com/a.js"));
//! let mut page = MemoryPage::new();
//!
//! assert_eq!(shim.initialize(Some(&mut page)), InitOutcome::Injected);
//! assert_eq!(shim.initialize(None), InitOutcome::Skipped);
//! ```

mod config;
mod error;
mod observer;
mod page;
mod shim;
mod snippet;
mod tracker;

pub use config::{AnalyticsConfig, PAGE_EVENT, PUSH_STATE_EVENT};
pub use error::AnalyticsError;
pub use observer::{NavigationHook, RouteObserver, RouterHooks};
pub use page::{Element, MemoryPage, PageEnvironment};
pub use shim::{AnalyticsShim, InitOutcome, ShimState};
pub use snippet::{ROUTE_HOOK_NAME, render_script_tag, render_snippet};
pub use tracker::{AnalyticsBackend, Tracker, TrackingCall};
