use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::webauthn::{AttestationCredentialJson, CreationOptionsJson, RequestOptionsJson};

/// Per-field validation messages, ordered as the backend produced them.
pub type FieldErrors = HashMap<String, Vec<String>>;

/// Failure details every backend response may carry alongside
/// `success: false`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorDetail {
    /// First message for a given field, if the backend reported one.
    pub fn field_message(&self, field: &str) -> Option<&str> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.get(field))
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }
}

/// First-step login credentials.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub remember: bool,
}

/// New-account registration data.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub(crate) struct TotpCodeRequest<'a> {
    pub(crate) code: &'a str,
}

#[derive(Serialize)]
pub(crate) struct RecoverRequest<'a> {
    pub(crate) username: &'a str,
}

/// Begin-login body; `username` is null for discoverable-credential logins.
#[derive(Serialize)]
pub(crate) struct PasskeyLoginBeginRequest<'a> {
    pub(crate) username: Option<&'a str>,
}

/// Finish-registration body: the encoded credential plus the user-chosen
/// name for it, flattened into one object.
#[derive(Serialize)]
pub(crate) struct PasskeyRegisterFinishRequest<'a> {
    pub(crate) name: &'a str,
    #[serde(flatten)]
    pub(crate) credential: &'a AttestationCredentialJson,
}

/// Account information returned once the backend establishes a session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Minimal response shape shared by endpoints that only report an outcome.
#[derive(Clone, Debug, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(flatten)]
    pub error: ErrorDetail,
}

/// Login outcome. On `success: false` the `totp`/`webauthn` flags tell the
/// caller which second factors can complete the login.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub totp: bool,
    #[serde(default)]
    pub webauthn: bool,
    pub user: Option<SessionUser>,
    #[serde(flatten)]
    pub error: ErrorDetail,
}

/// Registration outcome.
#[derive(Clone, Debug, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub user: Option<SessionUser>,
    #[serde(flatten)]
    pub error: ErrorDetail,
}

/// Pending TOTP secret awaiting confirmation. The secret is an opaque
/// backend value and is never re-encoded by this layer.
#[derive(Clone, Debug, Deserialize)]
pub struct TotpSecretResponse {
    pub success: bool,
    pub totp_secret: Option<String>,
    #[serde(flatten)]
    pub error: ErrorDetail,
}

/// Recovery codes issued when TOTP setup completes.
#[derive(Clone, Debug, Deserialize)]
pub struct RecoveryCodesResponse {
    pub success: bool,
    pub recovery_codes: Option<Vec<String>>,
    #[serde(flatten)]
    pub error: ErrorDetail,
}

/// WebAuthn registration ceremony parameters, still in wire form.
#[derive(Clone, Debug, Deserialize)]
pub struct CreationOptionsResponse {
    pub success: bool,
    pub response: Option<CreationOptionsJson>,
    #[serde(flatten)]
    pub error: ErrorDetail,
}

/// WebAuthn authentication ceremony parameters, still in wire form.
#[derive(Clone, Debug, Deserialize)]
pub struct RequestOptionsResponse {
    pub success: bool,
    pub response: Option<RequestOptionsJson>,
    #[serde(flatten)]
    pub error: ErrorDetail,
}
