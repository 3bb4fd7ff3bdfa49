//! Queue-backed global tracker.
//!
//! The tracker starts as a stub that buffers calls. When the external script
//! finishes loading it takes over as the backend and the buffered calls are
//! replayed in order. If the script never loads, the queue is never flushed.

use std::fmt;

use crate::error::AnalyticsError;

/// One call to the global tracker function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackingCall {
    /// Event name (e.g., "page").
    pub event: String,
}

impl TrackingCall {
    /// Create a call for `event`.
    #[must_use]
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
        }
    }
}

/// The real analytics implementation that replaces the stub.
pub trait AnalyticsBackend {
    /// Deliver a call.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::Backend`] when delivery fails. The tracker
    /// swallows the error.
    fn track(&mut self, call: &TrackingCall) -> Result<(), AnalyticsError>;
}

enum TrackerState {
    Stub(Vec<TrackingCall>),
    Loaded(Box<dyn AnalyticsBackend>),
}

/// Global tracker function with its backing queue.
pub struct Tracker {
    state: TrackerState,
}

impl Default for Tracker {
    fn default() -> Self {
        Self::stub()
    }
}

impl fmt::Debug for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            TrackerState::Stub(queue) => f
                .debug_struct("Tracker")
                .field("queued", &queue.len())
                .finish(),
            TrackerState::Loaded(_) => f.debug_struct("Tracker").field("loaded", &true).finish(),
        }
    }
}

impl Tracker {
    /// Stub tracker with an empty queue.
    #[must_use]
    pub fn stub() -> Self {
        Self {
            state: TrackerState::Stub(Vec::new()),
        }
    }

    /// Append a call. Buffered until the backend loads, forwarded afterwards.
    pub fn push(&mut self, call: TrackingCall) {
        match &mut self.state {
            TrackerState::Stub(queue) => queue.push(call),
            TrackerState::Loaded(backend) => deliver(backend.as_mut(), &call),
        }
    }

    /// Calls waiting for the backend. Empty once loaded.
    #[must_use]
    pub fn pending(&self) -> &[TrackingCall] {
        match &self.state {
            TrackerState::Stub(queue) => queue,
            TrackerState::Loaded(_) => &[],
        }
    }

    /// Whether the real script has replaced the stub.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, TrackerState::Loaded(_))
    }

    /// Replace the stub with the loaded backend and replay queued calls.
    ///
    /// Loading twice swaps the backend without replaying anything.
    pub fn load(&mut self, mut backend: Box<dyn AnalyticsBackend>) {
        if let TrackerState::Stub(queue) = &mut self.state {
            let queued = std::mem::take(queue);
            tracing::debug!(count = queued.len(), "Replaying queued analytics calls");
            for call in &queued {
                deliver(backend.as_mut(), call);
            }
        }
        self.state = TrackerState::Loaded(backend);
    }
}

/// Forward a call, dropping backend failures.
fn deliver(backend: &mut dyn AnalyticsBackend, call: &TrackingCall) {
    if let Err(e) = backend.track(call) {
        tracing::debug!(event = %call.event, error = %e, "Analytics call dropped");
    }
}
