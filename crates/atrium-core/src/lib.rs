//! # atrium-core — Site Domain Model
//!
//! Domain types and content sources for the Atrium site, kept free of
//! any web-framework dependency so the rendering layer stays a thin
//! composition of these pieces.
//!
//! ## Modules
//!
//! | Module          | Domain                                        |
//! |-----------------|-----------------------------------------------|
//! | [`route`]       | Route metadata and the validated route table  |
//! | [`placeholder`] | Declarative "coming soon" page configuration  |
//! | [`status`]      | Server status payload and environment lookup  |
//! | [`identity`]    | Per-session shell context (current user)      |
//! | [`assets`]      | Critical-CSS cache and font descriptor        |
//! | [`content`]     | Static legal, documentation, and marketplace content |
//!
//! ## Crate Policy
//!
//! - No I/O except the explicit asset loaders in [`assets`].
//! - All fallible constructors return `Result`; no panics in library
//!   code.
//! - Shared state uses `parking_lot` locks behind `Arc` and is never
//!   held across await points (this crate has no async code at all).

pub mod assets;
pub mod content;
pub mod identity;
pub mod placeholder;
pub mod route;
pub mod status;

pub use identity::{AuthUser, ShellContext};
pub use placeholder::{Cta, CtaVariant, PlaceholderConfig};
pub use route::{ContentMode, RouteConfig, RouteTable};
pub use status::{produce_status_payload, StatusOverrides, StatusPayload};
