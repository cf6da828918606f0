//! Central configuration for the scanportal-client crate

use std::sync::LazyLock;

/// Base URL of the scan-platform API, including the route prefix.
///
/// Server-rendered contexts point this at the internal backend origin
/// (e.g. `https://backend.internal/api`) so that outbound calls bypass the
/// public edge. Default: "http://localhost:8080/api"
pub static SCANPORTAL_BACKEND_URL: LazyLock<String> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    std::env::var("SCANPORTAL_BACKEND_URL")
        .unwrap_or_else(|_| "http://localhost:8080/api".to_string())
});
