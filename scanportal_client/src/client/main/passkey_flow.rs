use http::Method;

use super::abort::AbortSignal;
use super::core::{ApiClient, decode_json_response};
use crate::client::errors::ApiError;
use crate::client::types::{
    CreationOptionsResponse, PasskeyLoginBeginRequest, PasskeyRegisterFinishRequest,
    RequestOptionsResponse, StatusResponse,
};
use crate::webauthn::{AssertionCredentialJson, AttestationCredentialJson};

impl ApiClient {
    /// Begin passkey registration; the returned options are still in wire
    /// form and go through `decode_creation_options` before reaching an
    /// authenticator.
    pub async fn webauthn_register_begin(
        &self,
        abort: Option<&AbortSignal>,
    ) -> Result<CreationOptionsResponse, ApiError> {
        let response = self
            .fetch_with_csrf(
                Method::POST,
                "/auth/webauthn/register/begin",
                None::<&()>,
                abort,
            )
            .await?;
        decode_json_response(response).await
    }

    /// Finish passkey registration with the encoded attestation credential
    /// and the user-chosen name for it.
    pub async fn webauthn_register_finish(
        &self,
        name: &str,
        credential: &AttestationCredentialJson,
        abort: Option<&AbortSignal>,
    ) -> Result<StatusResponse, ApiError> {
        let body = PasskeyRegisterFinishRequest { name, credential };
        let response = self
            .fetch_with_csrf(
                Method::POST,
                "/auth/webauthn/register/finish",
                Some(&body),
                abort,
            )
            .await?;
        decode_json_response(response).await
    }

    /// Begin passkey login. `username` is `None` for discoverable-credential
    /// logins where the authenticator picks the account.
    pub async fn webauthn_login_begin(
        &self,
        username: Option<&str>,
        abort: Option<&AbortSignal>,
    ) -> Result<RequestOptionsResponse, ApiError> {
        let body = PasskeyLoginBeginRequest { username };
        let response = self
            .fetch_with_csrf(
                Method::POST,
                "/auth/webauthn/login/begin",
                Some(&body),
                abort,
            )
            .await?;
        decode_json_response(response).await
    }

    /// Finish passkey login with the encoded assertion credential.
    pub async fn webauthn_login_finish(
        &self,
        credential: &AssertionCredentialJson,
        abort: Option<&AbortSignal>,
    ) -> Result<StatusResponse, ApiError> {
        let response = self
            .fetch_with_csrf(
                Method::POST,
                "/auth/webauthn/login/finish",
                Some(credential),
                abort,
            )
            .await?;
        decode_json_response(response).await
    }
}
