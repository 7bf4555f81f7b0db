//! Section registry — the ordered list of navigable page sections.
//!
//! The registry is the single source of truth for nav links, the reveal
//! observer targets and the set of ids `navigate_to` accepts.

/// One scrollable region of the home page, addressed by its slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section {
        id: "about",
        label: "About Me",
    },
    Section {
        id: "professional",
        label: "Solutions Architecture",
    },
    Section {
        id: "surfboards",
        label: "Board Shaping",
    },
    Section {
        id: "projects",
        label: "Projects",
    },
    Section {
        id: "contact",
        label: "Contact",
    },
];

/// Read-only view over a static section list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: &'static [Section],
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::new(SECTIONS)
    }
}

impl SectionRegistry {
    pub const fn new(sections: &'static [Section]) -> Self {
        Self { sections }
    }

    pub fn all(&self) -> &'static [Section] {
        self.sections
    }

    /// Looks up a section by slug, returning the registry's own `'static` entry.
    pub fn get(&self, id: &str) -> Option<&'static Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.sections.iter().map(|s| s.id)
    }

    pub fn first(&self) -> Option<&'static Section> {
        self.sections.first()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
