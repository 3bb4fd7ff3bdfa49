//! Route-change hooks.
//!
//! The client-side router calls [`RouterHooks::navigated`] after each
//! navigation. [`RouteObserver`] is the analytics hook: it re-fires the page
//! events without re-injecting the script.

use crate::page::PageEnvironment;
use crate::shim::fire_page_events;

/// Callback invoked by the router after a navigation completes.
pub trait NavigationHook {
    /// Called with the page environment and the new path.
    fn after_navigate(&self, env: &mut dyn PageEnvironment, to: &str);
}

/// Re-fires `page` and `trackPushState` on every route change.
#[derive(Debug)]
pub struct RouteObserver {
    global_name: String,
}

impl RouteObserver {
    /// Observer pushing to the global tracker named `global_name`.
    #[must_use]
    pub fn new(global_name: &str) -> Self {
        Self {
            global_name: global_name.to_owned(),
        }
    }
}

impl NavigationHook for RouteObserver {
    fn after_navigate(&self, env: &mut dyn PageEnvironment, to: &str) {
        tracing::trace!(path = to, "Route change tracked");
        fire_page_events(env, &self.global_name);
    }
}

/// After-navigation hooks registered with the router.
#[derive(Default)]
pub struct RouterHooks {
    hooks: Vec<Box<dyn NavigationHook>>,
}

impl RouterHooks {
    /// No hooks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hook; hooks run in registration order.
    pub fn register(&mut self, hook: Box<dyn NavigationHook>) {
        self.hooks.push(hook);
    }

    /// Run every hook for a completed navigation to `to`.
    pub fn navigated(&self, env: &mut dyn PageEnvironment, to: &str) {
        for hook in &self.hooks {
            hook.after_navigate(env, to);
        }
    }

    /// Number of registered hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether no hooks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalyticsConfig;
    use crate::page::MemoryPage;
    use crate::shim::{AnalyticsShim, ShimState};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_route_change_refires_events_without_injecting() {
        let mut config = AnalyticsConfig::new("https://stats.example.com/a.js");
        config.track_route_changes = true;
        let mut shim = AnalyticsShim::new(config);
        let mut hooks = RouterHooks::new();
        shim.register_route_observer(&mut hooks);

        let mut page = MemoryPage::new();
        shim.initialize(Some(&mut page));
        hooks.navigated(&mut page, "/docs/getting-started/intro");

        let events: Vec<_> = page
            .global("_wmq")
            .unwrap()
            .pending()
            .iter()
            .map(|c| c.event.as_str())
            .collect();
        assert_eq!(
            events,
            vec!["page", "trackPushState", "page", "trackPushState"]
        );
        assert_eq!(page.count_id("waymark-analytics"), 1);
        assert_eq!(shim.state(), ShimState::ScriptInjected);
    }

    #[test]
    fn test_no_hooks_no_events() {
        let hooks = RouterHooks::new();
        let mut page = MemoryPage::new();
        hooks.navigated(&mut page, "/docs/");

        assert!(page.global("_wmq").is_none());
    }
}
