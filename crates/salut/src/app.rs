use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    handlers::{
        health::{healthz, livez},
        pages::index,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn render(uri: &str, accept_language: Option<&str>) -> String {
        let app = create_app(AppState::with_demo_data());

        let mut builder = Request::builder().uri(uri);
        if let Some(value) = accept_language {
            builder = builder.header("Accept-Language", value);
        }

        let response = app
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_defaults_to_english() {
        let html = render("/", None).await;

        assert!(html.contains("<html lang=\"en\">"));
        assert!(html.contains("Hello world!"));
        assert!(html.contains("You are not logged in."));
        assert!(html.contains("The current time is"));
    }

    #[tokio::test]
    async fn test_locale_query_param_switches_language() {
        let html = render("/?locale=fr", None).await;

        assert!(html.contains("<html lang=\"fr\">"));
        assert!(html.contains("Bonjour monde!"));
    }

    #[tokio::test]
    async fn test_unsupported_locale_query_falls_back() {
        let html = render("/?locale=es", None).await;

        assert!(html.contains("Hello world!"));
    }

    #[tokio::test]
    async fn test_logged_in_user_gets_their_locale() {
        let html = render("/?login_as=1", None).await;

        assert!(html.contains("Bonjour monde!"));
        assert!(html.contains("Vous êtes connecté en tant que Balou."));
    }

    #[tokio::test]
    async fn test_locale_query_param_beats_user_preference() {
        let html = render("/?login_as=1&locale=en", None).await;

        assert!(html.contains("Hello world!"));
        assert!(html.contains("You are logged in as Balou."));
    }

    #[tokio::test]
    async fn test_unsupported_user_locale_falls_back() {
        let html = render("/?login_as=3", None).await;

        assert!(html.contains("Hello world!"));
        assert!(html.contains("You are logged in as Spock."));
    }

    #[tokio::test]
    async fn test_unknown_user_renders_anonymous_page() {
        let html = render("/?login_as=999", None).await;

        assert!(html.contains("You are not logged in."));
    }

    #[tokio::test]
    async fn test_literal_accept_language_header() {
        let html = render("/", Some("fr")).await;

        assert!(html.contains("Bonjour monde!"));
    }

    #[tokio::test]
    async fn test_weighted_accept_language_negotiation() {
        let html = render("/", Some("fr-CH, fr;q=0.9, en;q=0.8")).await;

        assert!(html.contains("Bonjour monde!"));
    }

    #[tokio::test]
    async fn test_unmatched_accept_language_falls_to_default() {
        let html = render("/", Some("es-AR, es;q=0.9")).await;

        assert!(html.contains("Hello world!"));
    }

    #[tokio::test]
    async fn test_amharic_locale() {
        let html = render("/?locale=am", None).await;

        assert!(html.contains("<html lang=\"am\">"));
        assert!(html.contains("ሰላም ዓለም!"));
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::with_demo_data());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz_reports_settings() {
        let app = create_app(AppState::with_demo_data());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["status"], "ok");
        assert_eq!(json["default_locale"], "en");
        assert_eq!(json["default_timezone"], "UTC");
        assert_eq!(json["supported_locales"][1], "fr");
    }
}
