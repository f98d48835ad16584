//! # atrium-web — Server-Rendered Site
//!
//! The Axum front end for the Atrium site. Assembles one router per
//! surface area into a single application; every route binder either
//! feeds a content provider's output to a feature body, hands a
//! declarative config to the placeholder renderer, or aliases another
//! route's body. No business logic lives in the handlers.
//!
//! ## Route Surface
//!
//! | Prefix                   | Module                   | Mode        |
//! |--------------------------|--------------------------|-------------|
//! | `/`, legal, docs, misc   | [`routes::pages`]        | feature / placeholder |
//! | `/pricing`, `/pricing-v2`| [`routes::pricing`]      | alias / feature |
//! | `/products/marketplace`  | [`routes::marketplace`]  | feature (reads shell) |
//! | `/verify`, `/verify/complete` | [`routes::verify`]  | feature (sole shell writer) |
//! | `/__ssr-status`          | [`routes::status`]       | JSON        |
//!
//! Unknown paths fall through to the 404 page.

pub mod error;
pub mod render;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState, BootstrapError};

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    tracing::debug!(routes = state.routes.len(), "assembling router");
    Router::new()
        .merge(routes::pages::router())
        .merge(routes::pricing::router())
        .merge(routes::marketplace::router())
        .merge(routes::verify::router())
        .merge(routes::status::router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 404 fallback: a rendered page, not a bare status line.
async fn not_found(State(state): State<AppState>) -> impl IntoResponse {
    let meta = atrium_core::route::RouteConfig::feature(
        "/404",
        "Page not found — Atrium",
        "The page you were looking for does not exist.",
    );
    let body = r#"        <span class="eyebrow">404</span>
        <h1>Page not found</h1>
        <p class="lede">The page you were looking for does not exist or has moved.</p>
        <ul class="cta-list">
            <li><a class="cta cta-primary" href="/">Back to the homepage</a></li>
        </ul>"#;
    match render::document(&meta, body, &state) {
        Ok(html) => (StatusCode::NOT_FOUND, axum::response::Html(html)).into_response(),
        Err(err) => err.into_response(),
    }
}
