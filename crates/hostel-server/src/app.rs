//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, patch};
use tower::ServiceBuilder;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// Content pages are the fallback: every path not claimed by the API
/// or the static route is resolved against the database.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    // JSON admin API
    let api_routes = Router::new()
        .route(
            "/api/servers",
            get(handlers::servers::list).post(handlers::servers::create),
        )
        .route(
            "/api/pages",
            get(handlers::pages::list).post(handlers::pages::create),
        )
        .route(
            "/api/page-contents",
            get(handlers::page_contents::list).post(handlers::page_contents::create),
        )
        .route(
            "/api/page-contents/{id}",
            patch(handlers::page_contents::update),
        );

    Router::new()
        .merge(api_routes)
        .route("/static/{*path}", get(static_files::serve))
        .fallback(handlers::content::serve_page)
        .layer(
            ServiceBuilder::new()
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use hostel_site::Resolver;
    use hostel_store::fixtures;
    use hostel_store::Store;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    /// Router over an empty in-memory store (no default host).
    async fn router_with_store() -> (Router, Store) {
        let store = Store::in_memory().await.unwrap();
        store.init_schema().await.unwrap();
        fixtures::clear_servers(&store).await.unwrap();
        let state = Arc::new(AppState {
            resolver: Resolver::new(store.clone()),
            store: store.clone(),
            default_language: "en".to_owned(),
        });
        (create_router(state), store)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get_request(host: &str, path: &str, language: &str) -> Request<Body> {
        Request::builder()
            .uri(path)
            .header(header::HOST, host)
            .header(header::ACCEPT_LANGUAGE, language)
            .body(Body::empty())
            .unwrap()
    }

    fn post_json(path: &str, json: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_owned()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_found_page_renders_through_theme() {
        let (app, store) = router_with_store().await;
        let default_theme = fixtures::theme(&store, "{{title}}").await.unwrap();
        let site_theme = fixtures::theme(&store, "<h1>{{title}}</h1>{{content}}")
            .await
            .unwrap();
        fixtures::default_server(&store, default_theme).await.unwrap();
        let server = fixtures::server(&store, "example.com", site_theme)
            .await
            .unwrap();
        let page = fixtures::page(&store, server, "/hello").await.unwrap();
        fixtures::page_content(&store, page, "en", "Hi", "**bold**")
            .await
            .unwrap();

        let response = app
            .oneshot(get_request("example.com", "/hello", "en"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html"
        );
        let body = body_string(response).await;
        assert!(body.contains("<h1>Hi</h1>"));
        assert!(body.contains("<strong>bold</strong>"));
    }

    #[tokio::test]
    async fn test_unknown_host_and_page_renders_not_found() {
        let (app, store) = router_with_store().await;
        let theme = fixtures::theme(&store, "{{title}}").await.unwrap();
        fixtures::default_server(&store, theme).await.unwrap();

        let response = app
            .oneshot(get_request("unknown.example", "/missing", "en"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, "Not Found!");
    }

    #[tokio::test]
    async fn test_host_header_port_is_stripped() {
        let (app, store) = router_with_store().await;
        let default_theme = fixtures::theme(&store, "default").await.unwrap();
        let site_theme = fixtures::theme(&store, "site").await.unwrap();
        fixtures::default_server(&store, default_theme).await.unwrap();
        fixtures::server(&store, "example.com", site_theme)
            .await
            .unwrap();

        let response = app
            .oneshot(get_request("example.com:8080", "/", "en"))
            .await
            .unwrap();

        assert_eq!(body_string(response).await, "site");
    }

    #[tokio::test]
    async fn test_security_headers_on_every_response() {
        let (app, store) = router_with_store().await;
        let theme = fixtures::theme(&store, "{{title}}").await.unwrap();
        fixtures::default_server(&store, theme).await.unwrap();

        let response = app
            .oneshot(get_request("example.com", "/", "en"))
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
        assert_eq!(
            response.headers().get("x-frame-options").unwrap(),
            "SAMEORIGIN"
        );
    }

    #[tokio::test]
    async fn test_api_create_and_list_servers() {
        let (app, store) = router_with_store().await;
        let theme = fixtures::theme(&store, "t").await.unwrap();
        fixtures::default_server(&store, theme).await.unwrap();

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/servers",
                &format!(r#"{{"hostname": "example.com", "theme_id": {theme}}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains(r#""hostname":"example.com""#));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/servers")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("example.com"));
    }

    #[tokio::test]
    async fn test_api_duplicate_hostname_returns_400() {
        let (app, store) = router_with_store().await;
        let theme = fixtures::theme(&store, "t").await.unwrap();
        fixtures::default_server(&store, theme).await.unwrap();
        fixtures::server(&store, "example.com", theme).await.unwrap();

        let response = app
            .oneshot(post_json(
                "/api/servers",
                &format!(r#"{{"hostname": "example.com", "theme_id": {theme}}}"#),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response).await.contains("error"));
    }

    #[tokio::test]
    async fn test_api_page_and_content_lifecycle() {
        let (app, store) = router_with_store().await;
        let theme = fixtures::theme(&store, "{{title}}:{{content}}").await.unwrap();
        let server = fixtures::default_server(&store, theme).await.unwrap();

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/pages",
                &format!(r#"{{"server_id": {server}, "relative_path": "/hello"}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains(r#""relative_path":"/hello""#));

        let response = app
            .clone()
            .oneshot(post_json(
                "/api/page-contents",
                r#"{"page_id": 1, "language": "en", "title": "Hi", "content": "body"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(get_request("anything.example", "/hello", "en"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.starts_with("Hi:"));
    }

    #[tokio::test]
    async fn test_api_patch_updates_rendered_page() {
        let (app, store) = router_with_store().await;
        let theme = fixtures::theme(&store, "{{title}}").await.unwrap();
        let server = fixtures::default_server(&store, theme).await.unwrap();
        let page = fixtures::page(&store, server, "/hello").await.unwrap();
        let id = fixtures::page_content(&store, page, "en", "Hi", "body")
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/api/page-contents/{id}"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"title": "Hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(get_request("example.com", "/hello", "en"))
            .await
            .unwrap();
        assert_eq!(body_string(response).await, "Hello");
    }

    #[tokio::test]
    async fn test_static_resource_for_matching_host() {
        let (app, store) = router_with_store().await;
        let theme = fixtures::theme(&store, "t").await.unwrap();
        fixtures::default_server(&store, theme).await.unwrap();
        let server = fixtures::server(&store, "example.com", theme)
            .await
            .unwrap();
        fixtures::static_resource(&store, server, "style.css", b"body{}", "text/css")
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(get_request("example.com", "/static/style.css", "en"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css"
        );
        assert_eq!(body_string(response).await, "body{}");

        // Another host does not see it.
        let response = app
            .oneshot(get_request("other.example", "/static/style.css", "en"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
