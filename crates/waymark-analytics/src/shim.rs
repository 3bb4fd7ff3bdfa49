//! Analytics shim lifecycle.
//!
//! States are `Uninitialized -> ScriptInjected`, with no way back. The shim
//! owns the only entry point that injects the script; everything else can
//! only enqueue events.

use crate::config::{AnalyticsConfig, PAGE_EVENT, PUSH_STATE_EVENT};
use crate::observer::{RouteObserver, RouterHooks};
use crate::page::{Element, PageEnvironment};
use crate::tracker::TrackingCall;

/// Shim lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShimState {
    /// Nothing injected yet.
    Uninitialized,
    /// The script tag is on the page. Terminal for the page's lifetime.
    ScriptInjected,
}

/// Result of [`AnalyticsShim::initialize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitOutcome {
    /// No browser globals; nothing was touched.
    Skipped,
    /// Script injected and both events enqueued.
    Injected,
    /// Script already present; nothing injected or enqueued.
    AlreadyPresent,
}

/// Installs the tracker global and injects the analytics script.
#[derive(Debug)]
pub struct AnalyticsShim {
    config: AnalyticsConfig,
    state: ShimState,
}

impl AnalyticsShim {
    /// Create an uninitialized shim.
    #[must_use]
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            config,
            state: ShimState::Uninitialized,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ShimState {
        self.state
    }

    /// Shim configuration.
    #[must_use]
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Inject the script once and enqueue the page events.
    ///
    /// `env` is `None` outside a browser (e.g., a server-side render pass),
    /// in which case this is a silent no-op. Calling again on the same page,
    /// or on a page that already carries the element id, injects nothing.
    pub fn initialize(&mut self, env: Option<&mut dyn PageEnvironment>) -> InitOutcome {
        let Some(env) = env else {
            tracing::trace!("No page environment, analytics skipped");
            return InitOutcome::Skipped;
        };

        if self.state == ShimState::ScriptInjected || env.has_element(&self.config.element_id) {
            self.state = ShimState::ScriptInjected;
            return InitOutcome::AlreadyPresent;
        }

        // Install the stub before the script exists so early calls queue.
        env.tracker(&self.config.global_name);
        env.insert_before_first_script(Element::script(
            Some(&self.config.element_id),
            &self.config.script_src,
        ));
        self.state = ShimState::ScriptInjected;

        fire_page_events(env, &self.config.global_name);
        tracing::debug!(
            element_id = %self.config.element_id,
            src = %self.config.script_src,
            "Analytics script injected"
        );
        InitOutcome::Injected
    }

    /// Register the route observer with the router when enabled.
    ///
    /// Returns `true` if an observer was registered. Registration does not
    /// depend on, or change, the shim state.
    pub fn register_route_observer(&self, hooks: &mut RouterHooks) -> bool {
        if !self.config.track_route_changes {
            return false;
        }
        hooks.register(Box::new(RouteObserver::new(&self.config.global_name)));
        true
    }
}

/// Enqueue the two page events on the global tracker.
pub(crate) fn fire_page_events(env: &mut dyn PageEnvironment, global_name: &str) {
    let tracker = env.tracker(global_name);
    tracker.push(TrackingCall::new(PAGE_EVENT));
    tracker.push(TrackingCall::new(PUSH_STATE_EVENT));
}
