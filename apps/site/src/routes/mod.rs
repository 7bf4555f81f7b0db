pub mod health;
pub mod pages;

use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Resume PDFs and the wasm bundle live in the public directory.
    let assets = ServeDir::new(&state.config.public_dir)
        .fallback(pages::handle_not_found.into_service());

    Router::new()
        .route("/", get(pages::handle_home))
        .route("/resume/:resume_type", get(pages::handle_resume))
        .route("/health", get(health::health_handler))
        .fallback_service(assets)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::config::Config;

    fn app_with_public_dir(dir: &std::path::Path) -> Router {
        let config = Config {
            public_dir: dir.to_path_buf(),
            ..Config::default()
        };
        build_router(AppState::new(config))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn test_home_renders() {
        let public = tempfile::tempdir().unwrap();
        let (status, body) = get_body(app_with_public_dir(public.path()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("id=\"projects\""));
        assert!(body.contains("data-nav-target=\"contact\""));
    }

    #[tokio::test]
    async fn test_resume_route_resolves() {
        let public = tempfile::tempdir().unwrap();
        let (status, body) =
            get_body(app_with_public_dir(public.path()), "/resume/devops-resume").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("DevOps Resume"));
        assert!(body.contains("/Conner_Reavill_DevOps_Resume.pdf"));
    }

    #[tokio::test]
    async fn test_unknown_resume_is_not_found_view() {
        let public = tempfile::tempdir().unwrap();
        let (status, body) = get_body(app_with_public_dir(public.path()), "/resume/bogus").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Resume Not Found"));
        assert!(body.contains("href=\"/\""));
    }

    #[tokio::test]
    async fn test_health() {
        let public = tempfile::tempdir().unwrap();
        let (status, body) = get_body(app_with_public_dir(public.path()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_public_dir_serves_pdf() {
        let public = tempfile::tempdir().unwrap();
        std::fs::write(
            public.path().join("Conner_Reavill_SWE_Resume.pdf"),
            b"%PDF-1.4\n%%EOF\n",
        )
        .unwrap();

        let response = app_with_public_dir(public.path())
            .oneshot(
                Request::builder()
                    .uri("/Conner_Reavill_SWE_Resume.pdf")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found_view() {
        let public = tempfile::tempdir().unwrap();
        let (status, body) = get_body(app_with_public_dir(public.path()), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page Not Found"));
    }
}
