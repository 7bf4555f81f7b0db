//! HTML page handlers.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::Uri,
    response::Html,
};
use chrono::{Datelike, Utc};

use crate::content::{resolve, SectionRegistry};
use crate::errors::AppError;
use crate::render::{HomeTemplate, ResumeTemplate};
use crate::state::AppState;
use crate::view::page::{PageController, PageView};

/// What a freshly loaded page looks like before any browser event.
fn initial_view(sections: SectionRegistry) -> PageView {
    PageController::new(sections).view()
}

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = HomeTemplate::new(
        &state.config,
        state.profile,
        state.sections,
        initial_view(state.sections),
        Utc::now().year(),
    );
    Ok(Html(template.render()?))
}

/// GET /resume/:resume_type
///
/// Unknown keys become `AppError::ResumeNotFound`, rendered as the 404 view.
pub async fn handle_resume(
    State(state): State<AppState>,
    Path(resume_type): Path<String>,
) -> Result<Html<String>, AppError> {
    let resume = resolve(&resume_type)?;
    tracing::debug!(key = resume.key, "rendering resume viewer");

    Ok(Html(ResumeTemplate::new(state.profile, resume).render()?))
}

/// Fallback for paths neither the router nor the public directory know.
pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
