//! # Integration Tests for atrium-web
//!
//! Drives the assembled router with `tower::ServiceExt::oneshot`:
//! status endpoint shape and cache policy, placeholder CTA rendering,
//! the pricing alias (metadata override, identical body), the
//! verification write path and its null normalization, and the 404
//! fallback.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use atrium_web::AppState;

/// Helper: build the application state for tests.
fn test_state() -> AppState {
    AppState::try_new().expect("test state bootstrap")
}

/// Helper: build the test app.
fn test_app() -> axum::Router {
    atrium_web::app(test_state())
}

/// Helper: read a response body as a string.
async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Helper: GET a path and return the response.
async fn get(app: axum::Router, path: &str) -> axum::http::Response<Body> {
    app.oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Helper: POST a JSON body to a path.
async fn post_json(
    app: axum::Router,
    path: &str,
    json: serde_json::Value,
) -> axum::http::Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Helper: the `<main>` section of a rendered page.
fn main_section(html: &str) -> &str {
    let start = html.find("<main>").expect("main open tag");
    let end = html.find("</main>").expect("main close tag");
    &html[start..end]
}

// -- Status Endpoint ----------------------------------------------------------

#[tokio::test]
async fn status_endpoint_reports_production_defaults() {
    let before = Utc::now();
    let response = get(test_app(), "/__ssr-status").await;
    let after = Utc::now();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok()),
        Some("public, max-age=60, stale-while-revalidate=300"),
    );

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["healthy"], serde_json::json!(true));
    assert_eq!(json["environment"], serde_json::json!("production"));
    assert!(json["last_error_at"].is_null());
    assert!(json["last_error_message"].is_null());
    assert!(json["last_fallback_at"].is_null());

    // The success stamp must parse as ISO-8601 within the test window.
    let stamped: DateTime<Utc> = json["last_success_at"]
        .as_str()
        .expect("last_success_at string")
        .parse()
        .expect("ISO-8601 timestamp");
    assert!(stamped >= before && stamped <= after);
}

// -- Placeholder Pages --------------------------------------------------------

#[tokio::test]
async fn brand_page_renders_two_ctas_in_order() {
    let response = get(test_app(), "/brand").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;

    assert_eq!(html.matches("Press resources").count(), 1);
    assert_eq!(html.matches("Request specific assets").count(), 1);

    let press = html.find("href=\"/press\"").expect("press CTA");
    let contact = html.find("href=\"/contact\"").expect("contact CTA");
    assert!(press < contact, "press CTA must render first");

    // The second CTA carries the ghost treatment.
    assert!(html.contains("class=\"cta cta-ghost\" href=\"/contact\""));
}

#[tokio::test]
async fn placeholder_routes_render_html() {
    for path in ["/blog", "/brand", "/contact", "/help", "/press"] {
        let response = get(test_app(), path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        let html = body_string(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"), "{path}");
        assert!(html.contains("class=\"eyebrow\""), "{path}");
        assert!(html.contains("cta-list"), "{path}");
    }
}

// -- Legal & Documentation ----------------------------------------------------

#[tokio::test]
async fn legal_routes_render_their_documents() {
    for (path, title) in [
        ("/cookies", "Cookie Policy"),
        ("/privacy", "Privacy Policy"),
        ("/terms", "Terms of Service"),
    ] {
        let response = get(test_app(), path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        let html = body_string(response).await;
        assert!(html.contains(title), "{path} missing {title}");
        assert!(html.contains("Effective"), "{path}");
    }
}

#[tokio::test]
async fn documentation_route_renders_the_tree() {
    let response = get(test_app(), "/documentation").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Getting started"));
    assert!(html.contains("/documentation/quickstart"));
}

// -- Pricing Alias ------------------------------------------------------------

#[tokio::test]
async fn pricing_alias_overrides_metadata_but_shares_body() {
    let alias_html = body_string(get(test_app(), "/pricing").await).await;
    let target_html = body_string(get(test_app(), "/pricing-v2").await).await;

    // Metadata differs: the alias overrides title and description for SEO.
    assert!(alias_html.contains("<title>Atrium pricing — plans for every team</title>"));
    assert!(target_html.contains("<title>Pricing (v2) — Atrium</title>"));
    assert_ne!(alias_html, target_html);

    // Bodies are structurally identical: same body function, no duplication.
    assert_eq!(main_section(&alias_html), main_section(&target_html));
}

// -- Marketplace & Shell Context ----------------------------------------------

#[tokio::test]
async fn marketplace_prompts_sign_in_and_records_auth_request() {
    let state = test_state();
    let app = atrium_web::app(state.clone());

    let response = get(app, "/products/marketplace").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Sign in"));
    assert!(html.contains("LedgerLink"));
    assert_eq!(state.shell.auth_requests(), 1);
}

#[tokio::test]
async fn marketplace_greets_signed_in_user() {
    let state = test_state();
    let app = atrium_web::app(state.clone());

    let user = serde_json::json!({
        "id": uuid::Uuid::new_v4(),
        "email": "ada@atrium.example",
        "display_name": "Ada",
        "verified_at": Utc::now(),
    });
    let response = post_json(app.clone(), "/verify/complete", serde_json::json!({ "user": user })).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(get(app, "/products/marketplace").await).await;
    assert!(html.contains("Signed in as Ada"));
    assert_eq!(state.shell.auth_requests(), 0);
}

// -- Verification Flow --------------------------------------------------------

#[tokio::test]
async fn verify_completion_normalizes_missing_user_to_null() {
    let state = test_state();
    let app = atrium_web::app(state.clone());

    // The provider's callback omitted the user field entirely.
    let response = post_json(app, "/verify/complete", serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    // Exactly null, never a distinct "undefined".
    assert!(json.get("user").expect("user field present").is_null());
    assert!(state.shell.user().is_none());
}

#[tokio::test]
async fn verify_completion_writes_the_shell_context() {
    let state = test_state();
    let app = atrium_web::app(state.clone());

    let id = uuid::Uuid::new_v4();
    let response = post_json(
        app.clone(),
        "/verify/complete",
        serde_json::json!({
            "user": {
                "id": id,
                "email": "ada@atrium.example",
                "display_name": "Ada",
                "verified_at": Utc::now(),
            }
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(state.shell.user().expect("user set").id, id);

    // A later null result tears the user back down.
    let response = post_json(app, "/verify/complete", serde_json::json!({ "user": null })).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(state.shell.user().is_none());
}

#[tokio::test]
async fn verify_page_reflects_current_shell_state() {
    let state = test_state();
    let app = atrium_web::app(state.clone());

    let html = body_string(get(app.clone(), "/verify").await).await;
    assert!(html.contains("Verify your identity"));

    post_json(
        app.clone(),
        "/verify/complete",
        serde_json::json!({
            "user": {
                "id": uuid::Uuid::new_v4(),
                "email": "ada@atrium.example",
                "display_name": "Ada",
                "verified_at": Utc::now(),
            }
        }),
    )
    .await;

    let html = body_string(get(app, "/verify").await).await;
    assert!(html.contains("You are verified"));
}

// -- Fallback -----------------------------------------------------------------

#[tokio::test]
async fn unknown_path_renders_404_page() {
    let response = get(test_app(), "/no-such-page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_string(response).await;
    assert!(html.contains("Page not found"));
    assert!(html.contains("href=\"/\""));
}

// -- Rendering ----------------------------------------------------------------

#[tokio::test]
async fn pages_inline_critical_styles_and_font() {
    let html = body_string(get(test_app(), "/").await).await;
    // Critical CSS is inlined, not linked.
    assert!(html.contains("cta-primary {"));
    assert!(html.contains("@font-face"));
    assert!(html.contains("font-display: swap"));
    assert!(html.contains("rel=\"preload\""));
}
