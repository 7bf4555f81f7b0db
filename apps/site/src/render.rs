//! HTML rendering with askama. Handlers build a template struct, the
//! templates under `templates/` lay out the static content.

use askama::Template;

use crate::config::Config;
use crate::content::profile::Profile;
use crate::content::resumes::ResumeConfig;
use crate::content::sections::SectionRegistry;
use crate::view::page::{menu_icon, PageView};

/// One entry in the desktop and mobile nav bars.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
    pub class: String,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub title: String,
    pub profile: &'static Profile,
    pub nav_links: Vec<NavLink>,
    pub nav_class: String,
    pub menu_class: String,
    pub menu_icon: &'static str,
    pub menu_expanded: bool,
    pub year: i32,
    pub hydrate: bool,
    view: PageView,
    config: &'a Config,
}

impl<'a> HomeTemplate<'a> {
    pub fn new(
        config: &'a Config,
        profile: &'static Profile,
        sections: SectionRegistry,
        view: PageView,
        year: i32,
    ) -> Self {
        let nav_links = sections
            .all()
            .iter()
            .map(|section| NavLink {
                id: section.id,
                label: section.label,
                class: view.link_class(section),
            })
            .collect();

        Self {
            title: format!("{} | Solutions Architect", profile.full_name()),
            profile,
            nav_links,
            nav_class: view.nav_class(),
            menu_class: view.menu_class(),
            menu_icon: menu_icon(view.menu_open),
            menu_expanded: view.menu_open,
            year,
            hydrate: true,
            view,
            config,
        }
    }

    /// Class list for a section wrapper; unknown ids render unrevealed.
    pub fn section_class(&self, id: &str) -> String {
        crate::view::page::section_class(self.view.revealed.iter().any(|r| *r == id))
    }

    pub fn asset(&self, path: &str) -> String {
        self.config.asset_url(path)
    }
}

#[derive(Template)]
#[template(path = "resume.html")]
pub struct ResumeTemplate {
    pub title: String,
    pub profile: &'static Profile,
    pub resume: &'static ResumeConfig,
    pub hydrate: bool,
}

impl ResumeTemplate {
    pub fn new(profile: &'static Profile, resume: &'static ResumeConfig) -> Self {
        Self {
            title: format!("{} | {}", profile.full_name(), resume.title),
            profile,
            resume,
            hydrate: false,
        }
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub heading: &'static str,
    pub hydrate: bool,
}

/// Renders the standalone error view: a heading and a link back to `/`.
pub fn error_page(heading: &'static str) -> Result<String, askama::Error> {
    ErrorTemplate {
        title: heading.to_string(),
        heading,
        hydrate: false,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{resolve, PROFILE};
    use crate::view::page::PageController;

    fn render_home(view: PageView) -> String {
        let config = Config::default();
        HomeTemplate::new(&config, &PROFILE, SectionRegistry::default(), view, 2025)
            .render()
            .unwrap()
    }

    #[test]
    fn test_home_has_every_section_anchor() {
        let html = render_home(PageController::default().view());
        for id in SectionRegistry::default().ids() {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing section {id}");
            assert!(
                html.contains(&format!("data-nav-target=\"{id}\"")),
                "missing nav link {id}"
            );
        }
    }

    #[test]
    fn test_home_initial_state_classes() {
        let html = render_home(PageController::default().view());
        assert!(html.contains("class=\"site-nav\""));
        assert!(html.contains("class=\"mobile-menu\""));
        assert!(html.contains("nav-link nav-link--active"));
        assert!(!html.contains("reveal revealed"));
        assert!(html.contains("class=\"reveal\""));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn test_home_uses_asset_base_url() {
        let html = render_home(PageController::default().view());
        assert!(html.contains("https://conner-reavill-images.s3.us-east-2.amazonaws.com/headshot.webp"));
        assert!(html.contains("/pkg/portfolio.js"));
        assert!(html.contains("2025"));
    }

    #[test]
    fn test_resume_page_embeds_with_fallback() {
        let resume = resolve("devops-resume").unwrap();
        let html = ResumeTemplate::new(&PROFILE, resume).render().unwrap();
        assert!(html.contains("DevOps Resume"));
        assert!(html.contains("type=\"application/pdf\""));
        assert!(html.contains("data=\"/Conner_Reavill_DevOps_Resume.pdf\""));
        assert!(html.contains("Unable to display PDF inline"));
        assert!(html.contains("download"));
        assert!(html.contains("href=\"/\""));
        assert!(!html.contains("/pkg/portfolio.js"));
    }

    #[test]
    fn test_error_page_links_home() {
        let html = error_page("Resume Not Found").unwrap();
        assert!(html.contains("Resume Not Found"));
        assert!(html.contains("href=\"/\""));
    }
}
