use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::content::UnknownResume;
use crate::render;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Resume not found: {0}")]
    ResumeNotFound(#[from] UnknownResume),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, heading) = match &self {
            AppError::ResumeNotFound(e) => {
                tracing::info!(key = %e.key, "unknown resume requested");
                (StatusCode::NOT_FOUND, "Resume Not Found")
            }
            AppError::NotFound(path) => {
                tracing::debug!(%path, "no route or asset");
                (StatusCode::NOT_FOUND, "Page Not Found")
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something Went Wrong")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something Went Wrong")
            }
        };

        let body = render::error_page(heading).unwrap_or_else(|e| {
            tracing::error!("Error page failed to render: {e}");
            format!("<h1>{heading}</h1><a href=\"/\">Back to Home</a>")
        });

        (status, Html(body)).into_response()
    }
}
