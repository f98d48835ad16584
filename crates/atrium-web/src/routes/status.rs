//! # Server Status Endpoint
//!
//! `GET /__ssr-status` returns the JSON status payload. The provider
//! holds no cache; the delivery layer's staleness policy is declared
//! on the response instead: 60 seconds fresh, 300 seconds
//! stale-while-revalidate. Concurrent readers inside that window may
//! observe a cached snapshot — an accepted staleness bound.

use atrium_core::route::RouteConfig;
use atrium_core::status::{produce_status_payload, StatusOverrides, StatusPayload};
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

/// Cache policy for the status response.
pub const CACHE_CONTROL: &str = "public, max-age=60, stale-while-revalidate=300";

/// Metadata for the status path. Not a page route: returns JSON, not
/// HTML, but it still occupies a path in the table.
pub fn meta() -> Vec<RouteConfig> {
    vec![RouteConfig::feature(
        "/__ssr-status",
        "Server status",
        "Rendering-server health payload.",
    )]
}

/// Mount the status route.
pub fn router() -> Router<AppState> {
    Router::new().route("/__ssr-status", get(status))
}

async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let payload: StatusPayload = produce_status_payload(StatusOverrides {
        environment: Some(state.environment.clone()),
        ..Default::default()
    });
    (
        [(header::CACHE_CONTROL, CACHE_CONTROL)],
        Json(payload),
    )
}
