//! # CourseHub Observability
//!
//! Structured logging and Prometheus metrics.
//!
//! With the default `observability` feature, [`init_tracing`] writes compact
//! console output plus daily rolling files under `storage/logs` (an error log
//! and a JSON log), and [`init_metrics`] installs the Prometheus recorder
//! served by [`metrics_app`]. Setting `OBSERVABILITY_ENABLED=false` at runtime,
//! or building without the feature, falls back to console logging only and
//! turns every metrics helper into a no-op.

use std::sync::OnceLock;

pub mod basic_logging;
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

pub use logging::{init_tracing, logging_middleware};

#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

#[cfg(feature = "observability")]
pub use metrics::{
    init_metrics, metrics_app, metrics_middleware, track_course_liked, track_token_issued,
    track_user_created, track_user_login_failure, track_user_login_success,
};

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Whether full observability is switched on (`OBSERVABILITY_ENABLED`,
/// default `true`). Always `false` without the `observability` feature.
pub fn is_observability_enabled() -> bool {
    if !cfg!(feature = "observability") {
        return false;
    }

    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(true)
    })
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    /// Placeholder for the Prometheus handle
    #[derive(Debug, Clone)]
    pub struct PrometheusHandle;

    pub fn init_metrics() -> anyhow::Result<Option<PrometheusHandle>> {
        Ok(None)
    }

    pub fn metrics_app(_handle: PrometheusHandle) -> Router {
        Router::new()
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub fn track_user_created(_role: &str) {}
    pub fn track_user_login_success(_role: &str) {}
    pub fn track_user_login_failure(_reason: &str) {}
    pub fn track_token_issued() {}
    pub fn track_course_liked(_liked: bool) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("FALSE"));
        assert!(!parse_flag(" 0 "));
        assert!(!parse_flag("off"));
    }
}
