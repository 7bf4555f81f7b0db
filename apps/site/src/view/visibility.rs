//! Visibility tracker: one-shot "revealed" flags for page sections.
//!
//! A section is revealed the first time it is seen intersecting the viewport
//! by at least the observer threshold. The revealed set only ever grows;
//! scrolling a section out and back in does not replay its entrance.

use std::collections::BTreeSet;

use crate::content::sections::SectionRegistry;
use crate::view::subscription::{Listeners, Subscription};

/// Intersection observer settings, shared by the browser binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the section that must be visible.
    pub threshold: f64,
    /// CSS margin applied to the viewport; negative bottom fires slightly before the edge.
    pub root_margin: &'static str,
}

pub const REVEAL_OPTIONS: ObserverOptions = ObserverOptions {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
};

impl Default for ObserverOptions {
    fn default() -> Self {
        REVEAL_OPTIONS
    }
}

/// One intersection notification for one observed section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEvent<'a> {
    pub section_id: &'a str,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl<'a> IntersectionEvent<'a> {
    pub fn entered(section_id: &'a str, ratio: f64) -> Self {
        Self {
            section_id,
            is_intersecting: true,
            ratio,
        }
    }

    pub fn left(section_id: &'a str) -> Self {
        Self {
            section_id,
            is_intersecting: false,
            ratio: 0.0,
        }
    }
}

/// Insert-only set of section ids that have entered the viewport.
/// Only ids from the registry are ever stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealedSet {
    ids: BTreeSet<&'static str>,
}

impl RevealedSet {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ids.iter().copied()
    }

    fn insert(&mut self, id: &'static str) -> bool {
        self.ids.insert(id)
    }
}

#[derive(Debug)]
pub struct VisibilityTracker {
    registry: SectionRegistry,
    options: ObserverOptions,
    revealed: RevealedSet,
    listeners: Listeners<&'static str>,
}

impl VisibilityTracker {
    pub fn new(registry: SectionRegistry) -> Self {
        Self::with_options(registry, REVEAL_OPTIONS)
    }

    pub fn with_options(registry: SectionRegistry, options: ObserverOptions) -> Self {
        Self {
            registry,
            options,
            revealed: RevealedSet::default(),
            listeners: Listeners::new(),
        }
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    /// Ids to observe at mount. Sections are static, so this never changes.
    pub fn observed_sections(&self) -> impl Iterator<Item = &'static str> {
        self.registry.ids()
    }

    pub fn revealed(&self) -> &RevealedSet {
        &self.revealed
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Applies one intersection event. Returns the id if this event revealed it.
    ///
    /// Exit events, repeat entries, sub-threshold or NaN ratios, and ids outside the
    /// registry (detached or foreign nodes) are all no-ops.
    pub fn on_intersection(&mut self, event: IntersectionEvent<'_>) -> Option<&'static str> {
        if !event.is_intersecting || event.ratio.is_nan() || event.ratio < self.options.threshold {
            return None;
        }
        let Some(section) = self.registry.get(event.section_id) else {
            tracing::debug!(section = event.section_id, "intersection for unregistered section ignored");
            return None;
        };
        if !self.revealed.insert(section.id) {
            return None;
        }

        tracing::debug!(section = section.id, ratio = event.ratio, "section revealed");
        self.listeners.publish(&section.id);
        Some(section.id)
    }

    /// Subscribes to newly revealed ids. Each id is published at most once.
    pub fn subscribe(&self, callback: impl FnMut(&&'static str) + 'static) -> Subscription {
        self.listeners.subscribe(callback)
    }
}
