//! # HTML Rendering
//!
//! The base document layout and the placeholder renderer. Metadata
//! (title, description) and body are composed independently, which is
//! what lets the pricing alias reuse a body while overriding metadata
//! without duplicating render logic.
//!
//! Rendering is pure string construction: no network calls, no
//! mutable state. Identical inputs produce identical documents.

use atrium_core::route::RouteConfig;
use atrium_core::PlaceholderConfig;
use axum::response::Html;

use crate::error::AppError;
use crate::state::AppState;

/// Escape text for interpolation into HTML content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Build the full document for a route: metadata in the head, inlined
/// critical CSS, font preload, and the given body inside `<main>`.
pub fn document(meta: &RouteConfig, body: &str, state: &AppState) -> Result<String, AppError> {
    let css = state.styles.load()?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{description}">
    {preload}
    <style>
{font_face}
body {{ font-family: {font_stack}; }}
{css}
    </style>
</head>
<body>
    <main>
{body}
    </main>
    <footer>Atrium — the marketplace for operations software.</footer>
</body>
</html>"#,
        title = escape_html(&meta.title),
        description = escape_html(&meta.description),
        preload = state.font.preload_link(),
        font_face = state.font.face_css(),
        font_stack = state.font.stack(),
        css = css,
        body = body,
    ))
}

/// Render a route's page: look up its metadata from the table and
/// wrap the body in the base layout.
pub fn page(state: &AppState, path: &str, body: &str) -> Result<Html<String>, AppError> {
    let meta = state.route(path)?;
    Ok(Html(document(meta, body, state)?))
}

/// Render the placeholder layout for a "coming soon" page.
///
/// Emits, in order: eyebrow, title, description, then the CTA list
/// preserving input order. Each CTA's variant selects a CSS class
/// only.
pub fn placeholder(config: &PlaceholderConfig) -> String {
    let mut ctas = String::new();
    for cta in config.ctas() {
        ctas.push_str(&format!(
            "            <li><a class=\"cta cta-{variant}\" href=\"{href}\">{label}</a></li>\n",
            variant = cta.variant.as_str(),
            href = escape_html(&cta.href),
            label = escape_html(&cta.label),
        ));
    }
    format!(
        r#"        <span class="eyebrow">{eyebrow}</span>
        <h1>{title}</h1>
        <p class="lede">{description}</p>
        <ul class="cta-list">
{ctas}        </ul>"#,
        eyebrow = escape_html(config.eyebrow()),
        title = escape_html(config.title()),
        description = escape_html(config.description()),
        ctas = ctas,
    )
}
