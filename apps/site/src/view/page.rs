//! Page composer: one owner for the trackers, plus the presentation rules
//! shared by the server renderer and the browser binding.

use crate::content::sections::{Section, SectionRegistry};
use crate::view::navigation::{NavigationController, NavigationOutcome, Viewport};
use crate::view::scroll::{ScrollState, ScrollTracker};
use crate::view::visibility::{IntersectionEvent, VisibilityTracker};

/// CSS class names toggled by the view state.
pub mod classes {
    pub const NAV: &str = "site-nav";
    pub const NAV_SOLID: &str = "site-nav--solid";
    pub const NAV_LINK: &str = "nav-link";
    pub const NAV_LINK_ACTIVE: &str = "nav-link--active";
    pub const MENU: &str = "mobile-menu";
    pub const MENU_OPEN: &str = "mobile-menu--open";
    pub const REVEAL: &str = "reveal";
    pub const REVEALED: &str = "revealed";
    /// Set on `<html>` once the browser binding is live.
    pub const HYDRATED: &str = "hydrated";
}

pub fn nav_chrome_class(scroll: ScrollState) -> String {
    with_modifier(classes::NAV, classes::NAV_SOLID, scroll.scrolled_past_threshold)
}

pub fn nav_link_class(active: bool) -> String {
    with_modifier(classes::NAV_LINK, classes::NAV_LINK_ACTIVE, active)
}

pub fn menu_class(open: bool) -> String {
    with_modifier(classes::MENU, classes::MENU_OPEN, open)
}

pub fn section_class(revealed: bool) -> String {
    with_modifier(classes::REVEAL, classes::REVEALED, revealed)
}

pub fn menu_icon(open: bool) -> &'static str {
    if open {
        "✕"
    } else {
        "☰"
    }
}

fn with_modifier(base: &str, modifier: &str, on: bool) -> String {
    if on {
        format!("{base} {modifier}")
    } else {
        base.to_string()
    }
}

/// Every external stimulus the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent<'a> {
    Scrolled { offset: f64 },
    Intersection(IntersectionEvent<'a>),
    MenuToggled,
    NavigateRequested { section_id: &'a str },
}

/// Point-in-time snapshot of everything presentation depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub scroll: ScrollState,
    pub menu_open: bool,
    pub active_section: &'static str,
    pub revealed: Vec<&'static str>,
}

impl PageView {
    pub fn nav_class(&self) -> String {
        nav_chrome_class(self.scroll)
    }

    pub fn menu_class(&self) -> String {
        menu_class(self.menu_open)
    }

    pub fn link_class(&self, section: &Section) -> String {
        nav_link_class(self.active_section == section.id)
    }

    pub fn section_class(&self, section: &Section) -> String {
        section_class(self.revealed.contains(&section.id))
    }
}

#[derive(Debug)]
pub struct PageController {
    registry: SectionRegistry,
    scroll: ScrollTracker,
    visibility: VisibilityTracker,
    navigation: NavigationController,
}

impl Default for PageController {
    fn default() -> Self {
        Self::new(SectionRegistry::default())
    }
}

impl PageController {
    pub fn new(registry: SectionRegistry) -> Self {
        Self {
            registry,
            scroll: ScrollTracker::new(),
            visibility: VisibilityTracker::new(registry),
            navigation: NavigationController::new(registry),
        }
    }

    pub fn registry(&self) -> SectionRegistry {
        self.registry
    }

    pub fn scroll(&self) -> &ScrollTracker {
        &self.scroll
    }

    pub fn visibility(&self) -> &VisibilityTracker {
        &self.visibility
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    /// Routes the event to the component that owns the affected state.
    /// Returns the navigation outcome for `NavigateRequested`, `None` otherwise.
    pub fn handle<V: Viewport + ?Sized>(
        &mut self,
        event: PageEvent<'_>,
        viewport: &mut V,
    ) -> Option<NavigationOutcome> {
        match event {
            PageEvent::Scrolled { offset } => {
                self.scroll.on_scroll(offset);
                None
            }
            PageEvent::Intersection(intersection) => {
                self.visibility.on_intersection(intersection);
                None
            }
            PageEvent::MenuToggled => {
                self.navigation.toggle_menu();
                None
            }
            PageEvent::NavigateRequested { section_id } => {
                Some(self.navigation.navigate_to(section_id, viewport))
            }
        }
    }

    pub fn view(&self) -> PageView {
        PageView {
            scroll: self.scroll.state(),
            menu_open: self.navigation.menu().open,
            active_section: self.navigation.active_section(),
            revealed: self.visibility.revealed().iter().collect(),
        }
    }
}
