use thiserror::Error;

/// Errors surfaced by the authenticated request client.
///
/// Business-logic failures are not errors: the backend reports them as
/// `success: false` payloads which the endpoint helpers return as typed
/// values. This enum covers the cases where no usable payload exists.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure reaching the backend
    #[error("Transport error: {0}")]
    Transport(String),

    /// The preflight did not yield a usable CSRF token
    #[error("Csrf token error: {0}")]
    CsrfToken(String),

    /// Non-2xx response whose body carried no structured error
    #[error("Unexpected response status: {0}")]
    Status(u16),

    /// A 2xx response body that does not match the expected type
    #[error("Serde error: {0}")]
    Serde(String),

    /// The configured base URL is not a usable absolute URL
    #[error("Invalid base URL: {0}")]
    BaseUrl(String),

    /// The call was aborted through its abort signal
    #[error("Request aborted")]
    Aborted,
}
