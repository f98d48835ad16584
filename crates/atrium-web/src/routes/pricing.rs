//! # Pricing Routes
//!
//! `/pricing-v2` is the canonical pricing page. `/pricing` is an
//! alias: it renders the same body function verbatim and overrides
//! only the metadata, which is intentionally different for SEO. The
//! body is never duplicated — metadata and body are independently
//! composable outputs of route resolution.

use atrium_core::route::RouteConfig;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::error::AppError;
use crate::render;
use crate::state::AppState;

/// Metadata for both pricing paths. The alias entry carries its own
/// title and description; everything else resolves to `/pricing-v2`.
pub fn meta() -> Vec<RouteConfig> {
    vec![
        RouteConfig::feature(
            "/pricing-v2",
            "Pricing (v2) — Atrium",
            "Current Atrium plans: Starter, Growth, and Scale.",
        ),
        RouteConfig::alias(
            "/pricing",
            "Atrium pricing — plans for every team",
            "Simple pricing for the Atrium marketplace: start free, upgrade when your team grows.",
            "/pricing-v2",
        ),
    ]
}

/// Mount the pricing routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pricing-v2", get(pricing_v2))
        .route("/pricing", get(pricing_alias))
}

/// The shared pricing body. Both routes call this; neither copies it.
pub fn pricing_body() -> String {
    let plans = [
        ("Starter", "Free", "List one product and reach every buyer."),
        ("Growth", "$49/mo", "Unlimited listings and the verified-vendor badge."),
        ("Scale", "$199/mo", "Dedicated support and custom procurement flows."),
    ];
    let mut cards = String::new();
    for (name, price, blurb) in plans {
        cards.push_str(&format!(
            "            <div class=\"card\"><h2>{name}</h2>\
             <p class=\"vendor\">{price}</p><p>{blurb}</p></div>\n",
        ));
    }
    format!(
        r#"        <span class="eyebrow">Pricing</span>
        <h1>Plans for every team</h1>
        <p class="lede">Start free. Upgrade when your catalogue grows.</p>
        <div class="card-grid">
{cards}        </div>"#,
    )
}

async fn pricing_v2(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render::page(&state, "/pricing-v2", &pricing_body())
}

/// Alias handler: same body, `/pricing` metadata.
async fn pricing_alias(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render::page(&state, "/pricing", &pricing_body())
}
