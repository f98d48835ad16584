//! # Marketing, Legal, and Documentation Pages
//!
//! Route binders for the static surface of the site. Placeholder
//! routes construct a [`PlaceholderConfig`] and hand it to the
//! generic renderer; legal and documentation routes pull their
//! content from `atrium_core::content`. No route here performs
//! business logic or has a failure path of its own.

use atrium_core::content::{self, DocSection, LegalDoc};
use atrium_core::placeholder::PlaceholderError;
use atrium_core::route::RouteConfig;
use atrium_core::{Cta, PlaceholderConfig};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::error::AppError;
use crate::render::{self, escape_html};
use crate::state::AppState;

/// Metadata for every path this module mounts.
pub fn meta() -> Vec<RouteConfig> {
    vec![
        RouteConfig::feature(
            "/",
            "Atrium — operations software, verified vendors",
            "Atrium is the marketplace for operations software from identity-verified vendors.",
        ),
        RouteConfig::placeholder(
            "/blog",
            "Blog — Atrium",
            "Writing from the Atrium team on operations software and running a verified marketplace.",
        ),
        RouteConfig::placeholder(
            "/brand",
            "Brand assets — Atrium",
            "Atrium logos, wordmarks, and brand guidelines.",
        ),
        RouteConfig::placeholder(
            "/contact",
            "Contact — Atrium",
            "Get in touch with the Atrium team.",
        ),
        RouteConfig::feature(
            "/cookies",
            "Cookie Policy — Atrium",
            "How Atrium uses cookies and how to manage them.",
        ),
        RouteConfig::feature(
            "/documentation",
            "Documentation — Atrium",
            "Guides and reference for building on Atrium.",
        ),
        RouteConfig::placeholder(
            "/help",
            "Help center — Atrium",
            "Support resources for Atrium customers.",
        ),
        RouteConfig::placeholder(
            "/press",
            "Press — Atrium",
            "Press releases and media resources from Atrium.",
        ),
        RouteConfig::feature(
            "/privacy",
            "Privacy Policy — Atrium",
            "What Atrium collects, what we never do, and your rights.",
        ),
        RouteConfig::feature(
            "/terms",
            "Terms of Service — Atrium",
            "The terms that govern your use of Atrium.",
        ),
    ]
}

/// Mount the static page routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/blog", get(blog))
        .route("/brand", get(brand))
        .route("/contact", get(contact))
        .route("/cookies", get(cookies))
        .route("/documentation", get(documentation))
        .route("/help", get(help))
        .route("/press", get(press))
        .route("/privacy", get(privacy))
        .route("/terms", get(terms))
}

// -- Placeholder configurations ----------------------------------------------
//
// Public so integration tests can assert against the declared CTAs.

/// Brand page: exactly two CTAs, press resources first.
pub fn brand_config() -> Result<PlaceholderConfig, PlaceholderError> {
    PlaceholderConfig::new(
        "Brand",
        "Brand assets are on the way",
        "Logos, wordmarks, and usage guidelines are being packaged up. Until then, \
         the press page has what most publications need.",
        vec![
            Cta::primary("/press", "Press resources"),
            Cta::ghost("/contact", "Request specific assets"),
        ],
    )
}

fn blog_config() -> Result<PlaceholderConfig, PlaceholderError> {
    PlaceholderConfig::new(
        "Blog",
        "The Atrium blog launches soon",
        "Writing on operations software, vendor verification, and what we learn \
         running the marketplace.",
        vec![Cta::primary("/products/marketplace", "Browse the marketplace")],
    )
}

fn contact_config() -> Result<PlaceholderConfig, PlaceholderError> {
    PlaceholderConfig::new(
        "Contact",
        "Talk to us",
        "A proper contact form is coming. Email reaches a human today.",
        vec![Cta::primary("mailto:hello@atrium.example", "Email the team")],
    )
}

fn help_config() -> Result<PlaceholderConfig, PlaceholderError> {
    PlaceholderConfig::new(
        "Help center",
        "The help center is under construction",
        "Documentation covers the common questions while we build out guided \
         support articles.",
        vec![
            Cta::primary("/documentation", "Read the documentation"),
            Cta::ghost("mailto:support@atrium.example", "Email support"),
        ],
    )
}

fn press_config() -> Result<PlaceholderConfig, PlaceholderError> {
    PlaceholderConfig::new(
        "Press",
        "Press resources are coming soon",
        "Company background, founder bios, and product screenshots are being \
         assembled for publication.",
        vec![Cta::primary("mailto:press@atrium.example", "Reach the press desk")],
    )
}

// -- Handlers -----------------------------------------------------------------

async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let body = r#"        <span class="eyebrow">Atrium</span>
        <h1>Operations software from verified vendors</h1>
        <p class="lede">Every vendor on the Atrium marketplace has completed identity
        verification, so you know exactly who built what you run.</p>
        <ul class="cta-list">
            <li><a class="cta cta-primary" href="/products/marketplace">Browse the marketplace</a></li>
            <li><a class="cta cta-ghost" href="/pricing">See pricing</a></li>
        </ul>"#;
    render::page(&state, "/", body)
}

async fn blog(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render::page(&state, "/blog", &render::placeholder(&blog_config()?))
}

async fn brand(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render::page(&state, "/brand", &render::placeholder(&brand_config()?))
}

async fn contact(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render::page(&state, "/contact", &render::placeholder(&contact_config()?))
}

async fn help(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render::page(&state, "/help", &render::placeholder(&help_config()?))
}

async fn press(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render::page(&state, "/press", &render::placeholder(&press_config()?))
}

async fn cookies(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render::page(&state, "/cookies", &legal_body(&content::cookie_policy()))
}

async fn privacy(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render::page(&state, "/privacy", &legal_body(&content::privacy_policy()))
}

async fn terms(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render::page(&state, "/terms", &legal_body(&content::terms_of_service()))
}

async fn documentation(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render::page(
        &state,
        "/documentation",
        &documentation_body(&content::documentation_tree()),
    )
}

// -- Body builders ------------------------------------------------------------

fn legal_body(doc: &LegalDoc) -> String {
    let mut sections = String::new();
    for s in &doc.sections {
        sections.push_str(&format!(
            "        <section><h2>{}</h2><p>{}</p></section>\n",
            escape_html(&s.heading),
            escape_html(&s.body),
        ));
    }
    format!(
        r#"        <div class="legal">
        <h1>{title}</h1>
        <p class="effective">Effective {effective}</p>
{sections}        </div>"#,
        title = escape_html(&doc.title),
        effective = doc.effective.format("%-d %B %Y"),
        sections = sections,
    )
}

fn documentation_body(tree: &[DocSection]) -> String {
    let mut out = String::from(
        "        <span class=\"eyebrow\">Documentation</span>\n        <h1>Guides &amp; reference</h1>\n",
    );
    for doc_section in tree {
        out.push_str(&format!(
            "        <div class=\"doc-section\"><h2>{}</h2><ul>\n",
            escape_html(&doc_section.title)
        ));
        for a in &doc_section.articles {
            out.push_str(&format!(
                "            <li><a href=\"/documentation/{slug}\">{title}</a>\
                 <span class=\"summary\">{summary}</span></li>\n",
                slug = escape_html(&a.slug),
                title = escape_html(&a.title),
                summary = escape_html(&a.summary),
            ));
        }
        out.push_str("        </ul></div>\n");
    }
    out
}
