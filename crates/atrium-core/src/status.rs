//! # Server Status Payload
//!
//! Content provider for the `/__ssr-status` endpoint. The provider
//! merges caller overrides over defaults and stamps a fresh timestamp
//! for any field the caller marks as "now". It holds no cache and is
//! safe to call repeatedly — freshness and stale-serving windows are
//! the delivery layer's concern, expressed there as Cache-Control.
//!
//! Health determination is an integration point, not logic that lives
//! here: the default payload reports `healthy: true`, and a monitoring
//! integration supplies real health inputs through
//! [`StatusOverrides`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Environment name used when no environment variable is set.
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// JSON payload reported by the status endpoint.
///
/// Nullable fields serialize as explicit `null` rather than being
/// omitted — monitoring consumers key on field presence.
/// `environment` is always a non-empty string. Historical error
/// fields may stay populated while `healthy` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub healthy: bool,
    pub last_success_at: Option<DateTime<Utc>>,
    pub last_error_at: Option<DateTime<Utc>>,
    pub last_error_message: Option<String>,
    pub last_fallback_at: Option<DateTime<Utc>>,
    pub environment: String,
}

/// Override for one timestamp field of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    /// Stamp a fresh `Utc::now()` at merge time.
    Now,
    /// Use the given timestamp as-is.
    At(DateTime<Utc>),
    /// Force the field to null.
    Absent,
}

impl TimeField {
    fn resolve(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Now => Some(now),
            Self::At(ts) => Some(ts),
            Self::Absent => None,
        }
    }
}

/// Caller-supplied overrides merged over the default payload.
///
/// `None` leaves the default for that field in place.
#[derive(Debug, Clone, Default)]
pub struct StatusOverrides {
    pub healthy: Option<bool>,
    pub last_success_at: Option<TimeField>,
    pub last_error_at: Option<TimeField>,
    pub last_error_message: Option<Option<String>>,
    pub last_fallback_at: Option<TimeField>,
    pub environment: Option<String>,
}

/// Produce a status payload: defaults, then overrides, with `Now`
/// markers stamped from a single `Utc::now()` reading.
///
/// Defaults: `healthy: true`, fresh `last_success_at`, null error and
/// fallback fields, environment from [`resolve_environment`]. An
/// empty or whitespace environment override is ignored so the payload
/// never carries an empty environment.
pub fn produce_status_payload(overrides: StatusOverrides) -> StatusPayload {
    let now = Utc::now();
    let environment = overrides
        .environment
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(resolve_environment);

    StatusPayload {
        healthy: overrides.healthy.unwrap_or(true),
        last_success_at: overrides
            .last_success_at
            .unwrap_or(TimeField::Now)
            .resolve(now),
        last_error_at: overrides
            .last_error_at
            .unwrap_or(TimeField::Absent)
            .resolve(now),
        last_error_message: overrides.last_error_message.unwrap_or(None),
        last_fallback_at: overrides
            .last_fallback_at
            .unwrap_or(TimeField::Absent)
            .resolve(now),
        environment,
    }
}

/// Resolve the environment name for status reporting.
///
/// Reads the execution-environment indicator (`ATRIUM_ENV`) first,
/// the generic `ENVIRONMENT` second, and falls back to
/// [`DEFAULT_ENVIRONMENT`] when both are absent or empty.
pub fn resolve_environment() -> String {
    resolve_environment_from(
        std::env::var("ATRIUM_ENV").ok(),
        std::env::var("ENVIRONMENT").ok(),
    )
}

fn resolve_environment_from(exec: Option<String>, generic: Option<String>) -> String {
    exec.filter(|v| !v.trim().is_empty())
        .or(generic.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn default_payload_is_healthy_with_fresh_success_stamp() {
        let before = Utc::now();
        let payload = produce_status_payload(StatusOverrides::default());
        let after = Utc::now();

        assert!(payload.healthy);
        let stamped = payload.last_success_at.expect("success stamp");
        assert!(stamped >= before && stamped <= after);
        assert!(payload.last_error_at.is_none());
        assert!(payload.last_error_message.is_none());
        assert!(payload.last_fallback_at.is_none());
        assert!(!payload.environment.is_empty());
    }

    #[test]
    fn overrides_merge_over_defaults() {
        let when = Utc::now() - Duration::hours(2);
        let payload = produce_status_payload(StatusOverrides {
            healthy: Some(false),
            last_error_at: Some(TimeField::At(when)),
            last_error_message: Some(Some("upstream timeout".to_string())),
            last_fallback_at: Some(TimeField::Now),
            ..Default::default()
        });

        assert!(!payload.healthy);
        assert_eq!(payload.last_error_at, Some(when));
        assert_eq!(payload.last_error_message.as_deref(), Some("upstream timeout"));
        assert!(payload.last_fallback_at.is_some());
    }

    #[test]
    fn historical_errors_may_persist_while_healthy() {
        let when = Utc::now() - Duration::days(1);
        let payload = produce_status_payload(StatusOverrides {
            healthy: Some(true),
            last_error_at: Some(TimeField::At(when)),
            last_error_message: Some(Some("stale error".to_string())),
            ..Default::default()
        });
        assert!(payload.healthy);
        assert!(payload.last_error_at.is_some());
        assert!(payload.last_error_message.is_some());
    }

    #[test]
    fn environment_is_never_empty() {
        let payload = produce_status_payload(StatusOverrides {
            environment: Some("   ".to_string()),
            ..Default::default()
        });
        assert!(!payload.environment.is_empty());

        let payload = produce_status_payload(StatusOverrides {
            environment: Some("staging".to_string()),
            ..Default::default()
        });
        assert_eq!(payload.environment, "staging");
    }

    #[test]
    fn success_stamp_can_be_cleared() {
        let payload = produce_status_payload(StatusOverrides {
            last_success_at: Some(TimeField::Absent),
            ..Default::default()
        });
        assert!(payload.last_success_at.is_none());
    }

    #[test]
    fn environment_resolution_prefers_exec_indicator() {
        assert_eq!(
            resolve_environment_from(Some("preview".into()), Some("staging".into())),
            "preview"
        );
        assert_eq!(
            resolve_environment_from(None, Some("staging".into())),
            "staging"
        );
        assert_eq!(resolve_environment_from(None, None), "production");
        assert_eq!(
            resolve_environment_from(Some("".into()), Some(" ".into())),
            "production"
        );
    }

    #[test]
    fn payload_serializes_nulls_explicitly() {
        let payload = produce_status_payload(StatusOverrides::default());
        let json = serde_json::to_value(&payload).unwrap();
        // Nullable fields must be present as explicit null, not omitted.
        assert!(json.get("last_error_at").unwrap().is_null());
        assert!(json.get("last_error_message").unwrap().is_null());
        assert!(json.get("last_fallback_at").unwrap().is_null());
        assert!(json.get("environment").unwrap().is_string());
    }
}
