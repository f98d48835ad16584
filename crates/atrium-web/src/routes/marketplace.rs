//! # Marketplace Route
//!
//! The marketplace product surface. Declares a read dependency on the
//! shell context: signed-out visitors get the catalogue plus a
//! sign-in prompt (recorded via `open_auth`), signed-in users get a
//! personalized header. This route never writes identity state.

use atrium_core::content::{self, MarketplaceListing};
use atrium_core::route::RouteConfig;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::error::AppError;
use crate::render::{self, escape_html};
use crate::state::AppState;

/// Metadata for the marketplace path.
pub fn meta() -> Vec<RouteConfig> {
    vec![RouteConfig::feature(
        "/products/marketplace",
        "Marketplace — Atrium",
        "Browse operations software from identity-verified vendors.",
    )]
}

/// Mount the marketplace route.
pub fn router() -> Router<AppState> {
    Router::new().route("/products/marketplace", get(marketplace))
}

async fn marketplace(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let listings = content::marketplace_listings();
    let greeting = match state.shell.user() {
        Some(user) => format!(
            "        <p class=\"lede\">Signed in as {}.</p>\n",
            escape_html(&user.display_name)
        ),
        None => {
            // No dialog to pop server-side; record the auth request and
            // render the sign-in prompt instead.
            state.shell.open_auth();
            "        <div class=\"notice\"><a href=\"/verify\">Sign in</a> to save vendors \
             and request quotes.</div>\n"
                .to_string()
        }
    };

    let mut cards = String::new();
    for listing in &listings {
        cards.push_str(&listing_card(listing));
    }

    let body = format!(
        r#"        <span class="eyebrow">Marketplace</span>
        <h1>Operations software, verified vendors</h1>
{greeting}        <div class="card-grid">
{cards}        </div>"#,
    );
    render::page(&state, "/products/marketplace", &body)
}

fn listing_card(listing: &MarketplaceListing) -> String {
    let badge = if listing.vendor_verified {
        " <span class=\"badge\">Verified vendor</span>"
    } else {
        ""
    };
    format!(
        "            <div class=\"card\"><h2>{name}</h2>\
         <p class=\"vendor\">{vendor}{badge}</p><p>{tagline}</p></div>\n",
        name = escape_html(&listing.name),
        vendor = escape_html(&listing.vendor),
        badge = badge,
        tagline = escape_html(&listing.tagline),
    )
}
