//! # Identity Verification Routes
//!
//! `GET /verify` renders the flow page; the multi-step flow itself is
//! delegated to the external identity provider, which posts its
//! result to `POST /verify/complete`. That completion handler is the
//! single writer of the shell context's user state in the whole
//! application.
//!
//! An absent or null verified-user result is normalized to explicit
//! `None` before the write, so downstream consumers never distinguish
//! "not yet checked" from "undefined" — both collapse to no user.

use atrium_core::route::RouteConfig;
use atrium_core::AuthUser;
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::render::{self, escape_html};
use crate::state::AppState;

/// Metadata for the verification path.
pub fn meta() -> Vec<RouteConfig> {
    vec![RouteConfig::feature(
        "/verify",
        "Verify your identity — Atrium",
        "Complete identity verification to unlock vendor features on Atrium.",
    )]
}

/// Mount the verification routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/verify", get(verify_page))
        .route("/verify/complete", post(complete))
}

/// Result posted by the external identity provider when its flow
/// finishes. A missing or null `user` field means verification did
/// not produce a user; both deserialize to `None`.
#[derive(Debug, Deserialize)]
pub struct VerifyCompletion {
    #[serde(default)]
    pub user: Option<AuthUser>,
}

/// Completion acknowledgment. `user` serializes as explicit `null`
/// when verification produced no user.
#[derive(Debug, Serialize)]
pub struct VerifyCompletionResponse {
    pub user: Option<AuthUser>,
}

async fn verify_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let body = match state.shell.user() {
        Some(user) => format!(
            r#"        <span class="eyebrow">Verification</span>
        <h1>You are verified</h1>
        <p class="lede">{name}, your identity is confirmed. Vendor features are unlocked.</p>
        <ul class="cta-list">
            <li><a class="cta cta-primary" href="/products/marketplace">Back to the marketplace</a></li>
        </ul>"#,
            name = escape_html(&user.display_name),
        ),
        None => r#"        <span class="eyebrow">Verification</span>
        <h1>Verify your identity</h1>
        <p class="lede">Verification runs with our identity partner and takes about two
        minutes. You will need a government-issued ID.</p>
        <ul class="cta-list">
            <li><a class="cta cta-primary" href="/verify/start">Start verification</a></li>
            <li><a class="cta cta-ghost" href="/help">Get help</a></li>
        </ul>"#
            .to_string(),
    };
    render::page(&state, "/verify", &body)
}

/// The shell context's only write path.
async fn complete(
    State(state): State<AppState>,
    Json(completion): Json<VerifyCompletion>,
) -> Json<VerifyCompletionResponse> {
    // Normalize absent results to explicit None before writing.
    let user = completion.user;
    tracing::info!(verified = user.is_some(), "verification flow completed");
    state.shell.set_user(user.clone());
    Json(VerifyCompletionResponse { user })
}
