//! # Static Asset Loaders
//!
//! Two assets back every rendered page: a critical-CSS file inlined
//! into the document head, and a single variable-weight font.
//!
//! The stylesheet is read once per process and memoized for the
//! process lifetime — invalidation happens only on restart. A missing
//! file is a fatal I/O error with no fallback content: presence is a
//! build/deployment-time assurance, not a runtime-recoverable
//! condition.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use thiserror::Error;

/// Error loading a static asset.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The asset file could not be read.
    #[error("failed to read asset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Process-lifetime memoized read of the critical stylesheet.
///
/// The first successful [`load`](Self::load) performs the file read;
/// every later call returns the same cached string without touching
/// the filesystem. A failed read leaves the cell empty so startup can
/// surface the error and abort.
#[derive(Debug)]
pub struct StyleCache {
    path: PathBuf,
    cell: OnceLock<String>,
    reads: AtomicUsize,
}

impl StyleCache {
    /// A cache for the stylesheet at `path`. No I/O happens here.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
            reads: AtomicUsize::new(0),
        }
    }

    /// The path this cache reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the stylesheet contents, reading the file on first call.
    pub fn load(&self) -> Result<&str, AssetError> {
        if let Some(css) = self.cell.get() {
            return Ok(css);
        }
        let css = std::fs::read_to_string(&self.path).map_err(|source| AssetError::Read {
            path: self.path.clone(),
            source,
        })?;
        self.reads.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(path = %self.path.display(), bytes = css.len(), "critical stylesheet read");
        // Concurrent first calls may race to read; the cell keeps
        // whichever value lands first. Contents are identical either way.
        Ok(self.cell.get_or_init(|| css))
    }

    /// Number of successful file reads performed so far.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }
}

/// Descriptor for the site's single variable-weight font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFace {
    /// Font family name used in CSS.
    pub family: String,
    /// URL path of the font file.
    pub src: String,
    /// System-font fallback chain appended after the family.
    pub fallbacks: Vec<String>,
}

impl FontFace {
    /// The site font: one variable-weight file, swap display, system
    /// fallback chain.
    pub fn site_default() -> Self {
        Self {
            family: "Atrium Sans".to_string(),
            src: "/fonts/atrium-sans-var.woff2".to_string(),
            fallbacks: vec![
                "system-ui".to_string(),
                "-apple-system".to_string(),
                "Segoe UI".to_string(),
                "sans-serif".to_string(),
            ],
        }
    }

    /// `@font-face` rule for the document head.
    pub fn face_css(&self) -> String {
        format!(
            "@font-face {{ font-family: \"{}\"; src: url(\"{}\") format(\"woff2\"); \
             font-weight: 100 900; font-display: swap; }}",
            self.family, self.src
        )
    }

    /// Preload `<link>` tag for the font file.
    pub fn preload_link(&self) -> String {
        format!(
            "<link rel=\"preload\" href=\"{}\" as=\"font\" type=\"font/woff2\" crossorigin>",
            self.src
        )
    }

    /// Full `font-family` stack including fallbacks.
    pub fn stack(&self) -> String {
        let mut parts = vec![format!("\"{}\"", self.family)];
        parts.extend(self.fallbacks.iter().cloned());
        parts.join(", ")
    }
}
