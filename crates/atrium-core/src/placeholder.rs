//! # Placeholder Page Configuration
//!
//! Declarative configuration for "coming soon" pages: an eyebrow
//! label, a title, a description, and an ordered list of
//! call-to-action links. The renderer in the web crate is a pure
//! function of this type, so identical configs always produce
//! identical pages.
//!
//! Instances are validated on construction and immutable afterwards;
//! the binder that declares one owns it for the life of the process.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Visual treatment of a call-to-action link.
///
/// Variant selection carries no behavioral difference; it only picks
/// the CSS class the renderer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaVariant {
    /// Filled, high-emphasis button.
    Primary,
    /// Outline, low-emphasis button.
    Ghost,
}

impl CtaVariant {
    /// CSS class suffix for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Ghost => "ghost",
        }
    }
}

/// One call-to-action link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cta {
    /// Internal path (`/press`) or external URI with an explicit
    /// scheme (`mailto:press@atrium.example`).
    pub href: String,
    /// Link label, rendered exactly once.
    pub label: String,
    /// Visual treatment.
    pub variant: CtaVariant,
}

impl Cta {
    /// A primary-variant CTA.
    pub fn primary(href: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
            variant: CtaVariant::Primary,
        }
    }

    /// A ghost-variant CTA.
    pub fn ghost(href: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
            variant: CtaVariant::Ghost,
        }
    }
}

/// Error constructing a [`PlaceholderConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaceholderError {
    /// Every placeholder page needs at least one way forward.
    #[error("placeholder config must declare at least one CTA")]
    NoCtas,

    /// A CTA href was neither an internal path nor a scheme URI.
    #[error("CTA href must be an internal path or carry a URI scheme: {0}")]
    InvalidHref(String),
}

/// Validated configuration for one placeholder page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderConfig {
    eyebrow: String,
    title: String,
    description: String,
    ctas: Vec<Cta>,
}

/// An href is acceptable when it is an internal absolute path or has
/// an explicit URI scheme like `mailto:` or `https:`.
fn href_is_valid(href: &str) -> bool {
    if href.starts_with('/') {
        return true;
    }
    match href.split_once(':') {
        Some((scheme, rest)) => {
            !scheme.is_empty()
                && !rest.is_empty()
                && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-')
        }
        None => false,
    }
}

impl PlaceholderConfig {
    /// Build a validated placeholder configuration.
    ///
    /// Returns an error when `ctas` is empty or an href is neither an
    /// internal path nor a scheme URI.
    pub fn new(
        eyebrow: &str,
        title: &str,
        description: &str,
        ctas: Vec<Cta>,
    ) -> Result<Self, PlaceholderError> {
        if ctas.is_empty() {
            return Err(PlaceholderError::NoCtas);
        }
        if let Some(bad) = ctas.iter().find(|c| !href_is_valid(&c.href)) {
            return Err(PlaceholderError::InvalidHref(bad.href.clone()));
        }
        Ok(Self {
            eyebrow: eyebrow.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            ctas,
        })
    }

    /// Eyebrow label, rendered above the title.
    pub fn eyebrow(&self) -> &str {
        &self.eyebrow
    }

    /// Page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Supporting description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// CTAs in declaration order.
    pub fn ctas(&self) -> &[Cta] {
        &self.ctas
    }
}
