//! Observer plumbing for round events.
//!
//! Observers are plain synchronous callbacks: the controller invokes
//! them on the caller's stack, in registration order, immediately after
//! the state change an event describes. There are no channels or
//! threads involved, so an observer that re-reads the controller's state
//! always sees the post-event world.

use crate::round::RoundEvent;

/// Receives round events as they happen.
///
/// Implement this on a struct, or pass any `FnMut(&RoundEvent)` closure;
/// the blanket impl below covers closures.
pub trait RoundObserver {
    /// Called once per event, after the change it describes.
    fn on_event(&mut self, event: &RoundEvent);
}

impl<F> RoundObserver for F
where
    F: FnMut(&RoundEvent),
{
    fn on_event(&mut self, event: &RoundEvent) {
        self(event);
    }
}
