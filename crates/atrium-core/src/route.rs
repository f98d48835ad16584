//! # Route Configuration
//!
//! Metadata for every public URL path: title and description for the
//! document head, plus the content mode that decides what the binder
//! renders. A [`RouteTable`] collects the whole route set and enforces
//! the structural invariants (unique paths, resolvable alias targets)
//! once at startup rather than leaving them implicit in the router.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a route produces its page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum ContentMode {
    /// A full feature component fed by a content provider.
    Feature,
    /// The generic placeholder renderer with route-specific config.
    Placeholder,
    /// Re-uses another route's body verbatim; metadata may be
    /// intentionally overridden (the pricing alias does this for SEO).
    Alias {
        /// Path of the route whose body this one re-uses.
        target: String,
    },
}

impl ContentMode {
    /// Short string form, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Placeholder => "placeholder",
            Self::Alias { .. } => "alias",
        }
    }
}

/// Metadata for one public route.
///
/// Each route binder owns exactly one of these. `title` and
/// `description` feed the rendered document head; the routing layer
/// itself never reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// URL path, unique across the whole route set.
    pub path: String,
    /// Document title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// What the binder renders for this path.
    pub content_mode: ContentMode,
}

impl RouteConfig {
    /// Construct route metadata for a feature route.
    pub fn feature(path: &str, title: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            content_mode: ContentMode::Feature,
        }
    }

    /// Construct route metadata for a placeholder route.
    pub fn placeholder(path: &str, title: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            content_mode: ContentMode::Placeholder,
        }
    }

    /// Construct route metadata for an alias of `target`.
    pub fn alias(path: &str, title: &str, description: &str, target: &str) -> Self {
        Self {
            path: path.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            content_mode: ContentMode::Alias {
                target: target.to_string(),
            },
        }
    }
}

/// Error building a [`RouteTable`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// Two routes declared the same path.
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),

    /// A route path does not start with `/`.
    #[error("route path must start with '/': {0}")]
    RelativePath(String),

    /// An alias points at a path not present in the table.
    #[error("alias {path} targets unknown route {target}")]
    UnknownAliasTarget { path: String, target: String },

    /// An alias points at another alias. Aliases must resolve in one
    /// hop so the body lookup never loops.
    #[error("alias {path} targets another alias {target}")]
    AliasChain { path: String, target: String },
}

/// The validated set of all route configurations.
///
/// Built once at startup; a validation failure aborts startup rather
/// than serving a route set with ambiguous paths.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteConfig>,
}

impl RouteTable {
    /// Build a table from the full route set, enforcing uniqueness and
    /// alias resolution.
    pub fn new(routes: Vec<RouteConfig>) -> Result<Self, RouteError> {
        for (i, route) in routes.iter().enumerate() {
            if !route.path.starts_with('/') {
                return Err(RouteError::RelativePath(route.path.clone()));
            }
            if routes[..i].iter().any(|r| r.path == route.path) {
                return Err(RouteError::DuplicatePath(route.path.clone()));
            }
        }
        for route in &routes {
            if let ContentMode::Alias { target } = &route.content_mode {
                let resolved = routes.iter().find(|r| &r.path == target).ok_or_else(|| {
                    RouteError::UnknownAliasTarget {
                        path: route.path.clone(),
                        target: target.clone(),
                    }
                })?;
                if matches!(resolved.content_mode, ContentMode::Alias { .. }) {
                    return Err(RouteError::AliasChain {
                        path: route.path.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
        Ok(Self { routes })
    }

    /// Look up a route by exact path.
    pub fn get(&self, path: &str) -> Option<&RouteConfig> {
        self.routes.iter().find(|r| r.path == path)
    }

    /// All routes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteConfig> {
        self.routes.iter()
    }

    /// Number of routes in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(path: &str) -> RouteConfig {
        RouteConfig::feature(path, "Title", "Description")
    }

    #[test]
    fn table_accepts_unique_paths() {
        let table = RouteTable::new(vec![page("/a"), page("/b"), page("/c")]).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("/b").unwrap().path, "/b");
        assert!(table.get("/missing").is_none());
    }

    #[test]
    fn table_rejects_duplicate_path() {
        let err = RouteTable::new(vec![page("/a"), page("/a")]).unwrap_err();
        assert_eq!(err, RouteError::DuplicatePath("/a".to_string()));
    }

    #[test]
    fn table_rejects_relative_path() {
        let err = RouteTable::new(vec![page("pricing")]).unwrap_err();
        assert_eq!(err, RouteError::RelativePath("pricing".to_string()));
    }

    #[test]
    fn table_resolves_alias_target() {
        let table = RouteTable::new(vec![
            page("/pricing-v2"),
            RouteConfig::alias("/pricing", "Pricing", "Plans", "/pricing-v2"),
        ])
        .unwrap();
        let alias = table.get("/pricing").unwrap();
        assert_eq!(
            alias.content_mode,
            ContentMode::Alias {
                target: "/pricing-v2".to_string()
            }
        );
    }

    #[test]
    fn table_rejects_unknown_alias_target() {
        let err = RouteTable::new(vec![RouteConfig::alias(
            "/pricing",
            "Pricing",
            "Plans",
            "/pricing-v2",
        )])
        .unwrap_err();
        assert_eq!(
            err,
            RouteError::UnknownAliasTarget {
                path: "/pricing".to_string(),
                target: "/pricing-v2".to_string(),
            }
        );
    }

    #[test]
    fn table_rejects_alias_chains() {
        let err = RouteTable::new(vec![
            page("/base"),
            RouteConfig::alias("/one", "One", "One", "/base"),
            RouteConfig::alias("/two", "Two", "Two", "/one"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RouteError::AliasChain {
                path: "/two".to_string(),
                target: "/one".to_string(),
            }
        );
    }

    #[test]
    fn content_mode_as_str() {
        assert_eq!(ContentMode::Feature.as_str(), "feature");
        assert_eq!(ContentMode::Placeholder.as_str(), "placeholder");
        assert_eq!(
            ContentMode::Alias {
                target: "/x".to_string()
            }
            .as_str(),
            "alias"
        );
    }
}
