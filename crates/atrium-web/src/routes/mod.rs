//! # Route Modules
//!
//! One module per surface area, each exposing an Axum `router()` and
//! the [`RouteConfig`] metadata for the paths it mounts. Routers are
//! assembled in `lib.rs`; metadata is collected into the validated
//! route table here.

use atrium_core::route::RouteConfig;

pub mod marketplace;
pub mod pages;
pub mod pricing;
pub mod status;
pub mod verify;

/// Metadata for the whole route set, in mount order.
///
/// Validated by `RouteTable::new` during bootstrap: duplicate paths
/// and dangling alias targets abort startup.
pub fn table() -> Vec<RouteConfig> {
    let mut routes = pages::meta();
    routes.extend(pricing::meta());
    routes.extend(marketplace::meta());
    routes.extend(verify::meta());
    routes.extend(status::meta());
    routes
}
