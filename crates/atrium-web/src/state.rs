//! # Application State
//!
//! Shared state for the Axum application, passed to all route
//! handlers via the `State` extractor. Construction validates the
//! route table and warms the style cache so that a missing critical
//! stylesheet or a misdeclared route aborts startup instead of
//! surfacing per-request.

use std::sync::Arc;

use atrium_core::assets::{AssetError, FontFace, StyleCache};
use atrium_core::route::{RouteConfig, RouteError, RouteTable};
use atrium_core::status::resolve_environment;
use atrium_core::ShellContext;
use thiserror::Error;

use crate::error::AppError;
use crate::routes;

/// Fixed path of the critical stylesheet, resolved against the crate
/// root so it is independent of the working directory.
pub const CRITICAL_CSS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/critical.css");

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Error during application bootstrap.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The declared route set failed validation.
    #[error("route table invalid: {0}")]
    Routes(#[from] RouteError),

    /// The critical stylesheet could not be read. Fatal: there is no
    /// fallback content.
    #[error("critical stylesheet unavailable: {0}")]
    Styles(#[from] AssetError),
}

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly: the route table and style cache sit behind `Arc`,
/// and [`ShellContext`] shares its state across clones.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Per-session identity state. Written only by the verification
    /// completion handler.
    pub shell: ShellContext,
    /// Validated metadata for every public route.
    pub routes: Arc<RouteTable>,
    /// Process-lifetime cache of the critical stylesheet.
    pub styles: Arc<StyleCache>,
    /// The site font descriptor.
    pub font: FontFace,
    /// Environment name reported by the status endpoint.
    pub environment: String,
    pub config: AppConfig,
}

impl AppState {
    /// Build the application state with default configuration.
    pub fn try_new() -> Result<Self, BootstrapError> {
        Self::try_with_config(AppConfig::default())
    }

    /// Build the application state, validating the route table and
    /// warming the style cache.
    pub fn try_with_config(config: AppConfig) -> Result<Self, BootstrapError> {
        Self::try_with_styles(config, StyleCache::new(CRITICAL_CSS_PATH))
    }

    /// As [`try_with_config`](Self::try_with_config), with an explicit
    /// style cache (used by tests to point at fixture files).
    pub fn try_with_styles(config: AppConfig, styles: StyleCache) -> Result<Self, BootstrapError> {
        let routes = RouteTable::new(routes::table())?;
        styles.load()?;
        Ok(Self {
            shell: ShellContext::new(),
            routes: Arc::new(routes),
            styles: Arc::new(styles),
            font: FontFace::site_default(),
            environment: resolve_environment(),
            config,
        })
    }

    /// Look up the metadata a handler was mounted for.
    ///
    /// A miss is a wiring bug (handler path and table entry out of
    /// sync), reported as an internal error.
    pub fn route(&self, path: &str) -> Result<&RouteConfig, AppError> {
        self.routes
            .get(path)
            .ok_or_else(|| AppError::Internal(format!("no route table entry for {path}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_core::route::ContentMode;

    #[test]
    fn app_state_builds_and_warms_style_cache() {
        let state = AppState::try_new().unwrap();
        assert_eq!(state.styles.reads(), 1);
        assert!(state.styles.load().unwrap().contains("cta-primary"));
        assert!(state.shell.user().is_none());
        assert!(!state.environment.is_empty());
    }

    #[test]
    fn app_state_fails_without_stylesheet() {
        let dir = tempfile::tempdir().unwrap();
        let missing = StyleCache::new(dir.path().join("absent.css"));
        let err = AppState::try_with_styles(AppConfig::default(), missing).unwrap_err();
        assert!(matches!(err, BootstrapError::Styles(_)));
    }

    #[test]
    fn route_table_contains_every_public_path() {
        let state = AppState::try_new().unwrap();
        for path in [
            "/",
            "/blog",
            "/brand",
            "/contact",
            "/cookies",
            "/documentation",
            "/help",
            "/press",
            "/pricing",
            "/pricing-v2",
            "/privacy",
            "/products/marketplace",
            "/terms",
            "/verify",
        ] {
            assert!(state.routes.get(path).is_some(), "missing route {path}");
        }
    }

    #[test]
    fn pricing_is_an_alias_of_pricing_v2() {
        let state = AppState::try_new().unwrap();
        let pricing = state.routes.get("/pricing").unwrap();
        assert_eq!(
            pricing.content_mode,
            ContentMode::Alias {
                target: "/pricing-v2".to_string()
            }
        );
    }

    #[test]
    fn route_lookup_miss_is_internal_error() {
        let state = AppState::try_new().unwrap();
        assert!(state.route("/not-mounted").is_err());
    }
}
