//! Navigation controller: mobile menu state, active section, in-page jumps.

use crate::content::sections::SectionRegistry;
use crate::view::subscription::{Listeners, Subscription};

/// The platform surface navigation needs: scrolling a section into view.
pub trait Viewport {
    /// Smooth-scrolls so the top edge of `section_id` is visible.
    /// Returns `false` when the section's element cannot be found.
    fn scroll_to_section(&mut self, section_id: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
}

/// Snapshot published whenever the menu or active section changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub menu: MenuState,
    pub active_section: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The viewport accepted the scroll request.
    Scrolled,
    /// The section is registered but not mounted; nothing scrolled.
    TargetMissing,
    /// The id is not in the registry; only the menu was closed.
    UnknownSection,
}

#[derive(Debug)]
pub struct NavigationController {
    registry: SectionRegistry,
    state: NavState,
    listeners: Listeners<NavState>,
}

impl NavigationController {
    /// Starts with the menu closed and the first registered section active.
    pub fn new(registry: SectionRegistry) -> Self {
        let active_section = registry.first().map(|s| s.id).unwrap_or_default();
        Self {
            registry,
            state: NavState {
                menu: MenuState::default(),
                active_section,
            },
            listeners: Listeners::new(),
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn menu(&self) -> MenuState {
        self.state.menu
    }

    pub fn active_section(&self) -> &'static str {
        self.state.active_section
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        self.set_menu_open(!self.state.menu.open);
        self.state.menu
    }

    pub fn close_menu(&mut self) {
        self.set_menu_open(false);
    }

    /// Closes the menu, marks the section active and scrolls to it.
    ///
    /// Never fails: an unregistered id or an unmounted section leaves the
    /// viewport where it is.
    pub fn navigate_to<V: Viewport + ?Sized>(
        &mut self,
        section_id: &str,
        viewport: &mut V,
    ) -> NavigationOutcome {
        let Some(section) = self.registry.get(section_id) else {
            self.close_menu();
            tracing::debug!(section = section_id, "navigation to unregistered section ignored");
            return NavigationOutcome::UnknownSection;
        };

        self.update(NavState {
            menu: MenuState { open: false },
            active_section: section.id,
        });

        if viewport.scroll_to_section(section.id) {
            NavigationOutcome::Scrolled
        } else {
            tracing::debug!(section = section.id, "navigation target not mounted");
            NavigationOutcome::TargetMissing
        }
    }

    pub fn subscribe(&self, callback: impl FnMut(&NavState) + 'static) -> Subscription {
        self.listeners.subscribe(callback)
    }

    fn set_menu_open(&mut self, open: bool) {
        self.update(NavState {
            menu: MenuState { open },
            ..self.state
        });
    }

    fn update(&mut self, next: NavState) {
        if next != self.state {
            self.state = next;
            self.listeners.publish(&next);
        }
    }
}
