//! # Shell Context
//!
//! Per-session identity state shared by every route that declares a
//! dependency on it. Read path: current user plus the "open
//! authentication UI" action. Write path: `set_user`, used exactly
//! once per session by the verification flow's completion handler —
//! no other caller mutates the user.
//!
//! The lock is `parking_lot` behind `Arc` and is never held across
//! await points; all accessors clone out or write and release.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated user as supplied by the external identity
/// provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    /// When identity verification completed, if it has.
    pub verified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
struct ShellInner {
    user: RwLock<Option<AuthUser>>,
    auth_requests: AtomicU64,
}

/// Shared per-session shell state.
///
/// Created once when the session starts and cloned into every route
/// binder that needs identity awareness. Clones share the same
/// underlying state.
#[derive(Debug, Clone, Default)]
pub struct ShellContext {
    inner: Arc<ShellInner>,
}

impl ShellContext {
    /// A fresh context with no authenticated user.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current user.
    pub fn user(&self) -> Option<AuthUser> {
        self.inner.user.read().clone()
    }

    /// Record a request to open the authentication UI.
    ///
    /// Server-rendered routes cannot pop a dialog; they record the
    /// request and render their sign-in prompt instead.
    pub fn open_auth(&self) {
        self.inner.auth_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// How many times the auth UI has been requested this session.
    pub fn auth_requests(&self) -> u64 {
        self.inner.auth_requests.load(Ordering::Relaxed)
    }

    /// Replace the current user.
    ///
    /// The single writer is the verification flow's completion
    /// handler, which normalizes an absent verified-user result to
    /// explicit `None` before calling this — downstream readers never
    /// see a third "undefined" state.
    pub fn set_user(&self, user: Option<AuthUser>) {
        *self.inner.user.write() = user;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> AuthUser {
        AuthUser {
            id: Uuid::new_v4(),
            email: "ada@atrium.example".to_string(),
            display_name: "Ada".to_string(),
            verified_at: Some(Utc::now()),
        }
    }

    #[test]
    fn new_context_has_no_user() {
        let shell = ShellContext::new();
        assert!(shell.user().is_none());
        assert_eq!(shell.auth_requests(), 0);
    }

    #[test]
    fn set_user_replaces_current_user() {
        let shell = ShellContext::new();
        let user = sample_user();
        shell.set_user(Some(user.clone()));
        assert_eq!(shell.user(), Some(user));

        shell.set_user(None);
        assert!(shell.user().is_none());
    }

    #[test]
    fn clones_share_state() {
        let shell = ShellContext::new();
        let reader = shell.clone();
        shell.set_user(Some(sample_user()));
        assert!(reader.user().is_some());

        reader.open_auth();
        assert_eq!(shell.auth_requests(), 1);
    }

    #[test]
    fn open_auth_counts_requests() {
        let shell = ShellContext::new();
        shell.open_auth();
        shell.open_auth();
        assert_eq!(shell.auth_requests(), 2);
    }
}
