//! Scroll tracker: has the page scrolled past the nav chrome threshold?

use crate::view::subscription::{Listeners, Subscription};

/// Vertical offset, in CSS pixels, beyond which the nav bar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Strictly greater than the threshold; exactly 50 is still "at the top".
pub fn scrolled_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub scrolled_past_threshold: bool,
}

impl ScrollState {
    pub fn from_offset(offset: f64) -> Self {
        Self {
            scrolled_past_threshold: scrolled_past_threshold(offset),
        }
    }
}

#[derive(Debug, Default)]
pub struct ScrollTracker {
    state: ScrollState,
    listeners: Listeners<ScrollState>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Recomputes the state from the latest offset. Subscribers hear about it
    /// only when the value flips.
    pub fn on_scroll(&mut self, offset: f64) -> ScrollState {
        let next = ScrollState::from_offset(offset);
        if next != self.state {
            self.state = next;
            tracing::debug!(
                offset,
                scrolled = next.scrolled_past_threshold,
                "scroll state changed"
            );
            self.listeners.publish(&next);
        }
        self.state
    }

    pub fn subscribe(&self, callback: impl FnMut(&ScrollState) + 'static) -> Subscription {
        self.listeners.subscribe(callback)
    }
}
