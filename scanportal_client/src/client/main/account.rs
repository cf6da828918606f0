use http::Method;

use super::abort::AbortSignal;
use super::core::{ApiClient, decode_json_response};
use crate::client::errors::ApiError;
use crate::client::types::{
    LoginRequest, LoginResponse, RecoverRequest, RegisterRequest, RegisterResponse, StatusResponse,
};

impl ApiClient {
    /// First-step login with username and password.
    ///
    /// `success: false` with the `totp`/`webauthn` flags set means the
    /// credentials were accepted but a second factor must complete the
    /// login; without flags the attempt was rejected.
    pub async fn login(
        &self,
        request: &LoginRequest,
        abort: Option<&AbortSignal>,
    ) -> Result<LoginResponse, ApiError> {
        let response = self
            .fetch_with_csrf(Method::POST, "/auth/login", Some(request), abort)
            .await?;
        decode_json_response(response).await
    }

    /// Create an account. The backend validates the fields again; run the
    /// local validators first to save the round trip.
    pub async fn register(
        &self,
        request: &RegisterRequest,
        abort: Option<&AbortSignal>,
    ) -> Result<RegisterResponse, ApiError> {
        let response = self
            .fetch_with_csrf(Method::POST, "/auth/register", Some(request), abort)
            .await?;
        decode_json_response(response).await
    }

    /// Tear down the current session.
    pub async fn logout(&self, abort: Option<&AbortSignal>) -> Result<StatusResponse, ApiError> {
        let response = self
            .fetch_with_csrf(Method::POST, "/auth/logout", None::<&()>, abort)
            .await?;
        decode_json_response(response).await
    }

    /// Ask the backend to mail a password-reset link.
    ///
    /// The backend answers success whether or not the account exists, so
    /// the response leaks nothing about registered usernames.
    pub async fn request_password_reset(
        &self,
        username: &str,
        abort: Option<&AbortSignal>,
    ) -> Result<StatusResponse, ApiError> {
        let body = RecoverRequest { username };
        let response = self
            .fetch_with_csrf(Method::POST, "/auth/recover", Some(&body), abort)
            .await?;
        decode_json_response(response).await
    }
}
