//! Axum-based mock scan-platform backend for client integration tests.
//!
//! Each test spawns its own instance on an ephemeral loopback port so tests
//! never share token or counter state. The backend speaks just enough of
//! the real API surface: an `OPTIONS` preflight handing out the CSRF token,
//! and canned auth endpoints that record what the client actually sent.

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Json},
    routing::options,
};
use serde_json::{Value, json};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

pub const CSRF_TOKEN_HEADER: &str = "X-CSRF-Token";
pub const TEST_CSRF_TOKEN: &str = "test-csrf-token-123";

/// Minimal PNG header; enough for the client-side "raw bytes, no JSON
/// decoding" assertions.
pub const QR_PNG: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d,
];

/// Shared per-instance state the tests assert against.
#[derive(Clone, Default)]
pub struct MockBackendState {
    /// Number of OPTIONS preflights served
    pub preflight_count: Arc<AtomicUsize>,
    /// Number of non-preflight requests served
    pub request_count: Arc<AtomicUsize>,
    /// CSRF token attached to the most recent non-preflight request
    pub last_token: Arc<Mutex<Option<String>>>,
    /// JSON body of the most recent non-preflight request
    pub last_body: Arc<Mutex<Option<Value>>>,
}

/// Bind an instance on an ephemeral port; returns the API base URL
/// (origin plus `/api` prefix) and its state handle.
pub async fn spawn_backend() -> (String, MockBackendState) {
    let state = MockBackendState::default();
    let app = mock_app(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock backend");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Mock backend exited");
    });

    (format!("http://{addr}/api"), state)
}

fn mock_app(state: MockBackendState) -> Router {
    Router::new()
        .route("/api/auth/login", options(preflight).post(login))
        .route("/api/auth/logout", options(preflight).post(forbidden))
        .route(
            "/api/auth/2fa/totp/validate",
            options(preflight).post(totp_validate_rejection),
        )
        .route(
            "/api/auth/2fa/totp/confirm",
            options(preflight).get(totp_pending_secret),
        )
        .route("/api/auth/2fa/totp/qr", options(preflight).get(totp_qr))
        .route(
            "/api/auth/webauthn/login/begin",
            options(preflight).post(webauthn_login_begin),
        )
        .route(
            "/api/auth/webauthn/register/finish",
            options(preflight).post(webauthn_register_finish),
        )
        .route("/api/slow", options(preflight).get(slow))
        .with_state(state)
}

fn record_request(state: &MockBackendState, headers: &HeaderMap, body: Option<&Value>) {
    state.request_count.fetch_add(1, Ordering::SeqCst);
    *state.last_token.lock().unwrap() = headers
        .get(CSRF_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());
    if let Some(body) = body {
        *state.last_body.lock().unwrap() = Some(body.clone());
    }
}

fn csrf_ok(headers: &HeaderMap) -> bool {
    headers
        .get(CSRF_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        == Some(TEST_CSRF_TOKEN)
}

async fn preflight(State(state): State<MockBackendState>) -> impl IntoResponse {
    state.preflight_count.fetch_add(1, Ordering::SeqCst);
    (
        StatusCode::NO_CONTENT,
        [(CSRF_TOKEN_HEADER, TEST_CSRF_TOKEN)],
    )
}

async fn login(
    State(state): State<MockBackendState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    record_request(&state, &headers, Some(&body));

    if !csrf_ok(&headers) {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"success": false, "message": "invalid csrf token"})),
        )
            .into_response();
    }

    Json(json!({
        "success": true,
        "user": {"id": 7, "username": "alice", "email": "alice@example.com"}
    }))
    .into_response()
}

/// Stand-in for any endpoint rejecting the session; used to verify that a
/// 403 makes the client drop its cached token.
async fn forbidden(
    State(state): State<MockBackendState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    record_request(&state, &headers, None);
    (
        StatusCode::FORBIDDEN,
        Json(json!({"success": false, "message": "unauthorized"})),
    )
}

async fn totp_validate_rejection(
    State(state): State<MockBackendState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    record_request(&state, &headers, Some(&body));
    (
        StatusCode::BAD_REQUEST,
        Json(json!({"success": false, "errors": {"code": ["Invalid token"]}})),
    )
}

async fn totp_pending_secret(
    State(state): State<MockBackendState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    record_request(&state, &headers, None);
    Json(json!({"success": true, "totp_secret": "ABC123"}))
}

async fn totp_qr(State(state): State<MockBackendState>, headers: HeaderMap) -> impl IntoResponse {
    record_request(&state, &headers, None);
    ([(header::CONTENT_TYPE, "image/png")], QR_PNG.to_vec())
}

async fn webauthn_login_begin(
    State(state): State<MockBackendState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    record_request(&state, &headers, Some(&body));
    Json(json!({
        "success": true,
        "response": {
            "challenge": "AAECAw",
            "timeout": 60000,
            "allowCredentials": [{"id": "BAUG", "type": "public-key"}],
            "userVerification": "preferred"
        }
    }))
}

async fn webauthn_register_finish(
    State(state): State<MockBackendState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    record_request(&state, &headers, Some(&body));
    Json(json!({"success": true}))
}

/// Never answers within test time; lets the abort tests observe an
/// in-flight cancellation.
async fn slow(State(state): State<MockBackendState>, headers: HeaderMap) -> impl IntoResponse {
    record_request(&state, &headers, None);
    tokio::time::sleep(std::time::Duration::from_secs(30)).await;
    Json(json!({"success": true}))
}
