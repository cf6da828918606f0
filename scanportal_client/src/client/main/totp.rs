use http::Method;

use super::abort::AbortSignal;
use super::core::{ApiClient, decode_bytes_response, decode_json_response};
use crate::client::errors::ApiError;
use crate::client::types::{
    RecoveryCodesResponse, StatusResponse, TotpCodeRequest, TotpSecretResponse,
};

impl ApiClient {
    /// Start TOTP enrollment; the backend generates a pending secret.
    pub async fn totp_setup_start(
        &self,
        abort: Option<&AbortSignal>,
    ) -> Result<StatusResponse, ApiError> {
        let response = self
            .fetch_with_csrf(Method::POST, "/auth/2fa/totp/setup", None::<&()>, abort)
            .await?;
        decode_json_response(response).await
    }

    /// Fetch the pending secret so it can be shown next to the QR code.
    /// The secret is opaque backend data; no re-encoding happens here.
    pub async fn totp_pending_secret(
        &self,
        abort: Option<&AbortSignal>,
    ) -> Result<TotpSecretResponse, ApiError> {
        let response = self
            .fetch_with_csrf(Method::GET, "/auth/2fa/totp/confirm", None::<&()>, abort)
            .await?;
        decode_json_response(response).await
    }

    /// Confirm enrollment with a code generated from the pending secret;
    /// on success the backend activates the factor and issues recovery
    /// codes.
    pub async fn totp_confirm(
        &self,
        code: &str,
        abort: Option<&AbortSignal>,
    ) -> Result<RecoveryCodesResponse, ApiError> {
        let body = TotpCodeRequest { code };
        let response = self
            .fetch_with_csrf(Method::POST, "/auth/2fa/totp/confirm", Some(&body), abort)
            .await?;
        decode_json_response(response).await
    }

    /// Second-step login with a TOTP code.
    pub async fn totp_validate(
        &self,
        code: &str,
        abort: Option<&AbortSignal>,
    ) -> Result<StatusResponse, ApiError> {
        let body = TotpCodeRequest { code };
        let response = self
            .fetch_with_csrf(Method::POST, "/auth/2fa/totp/validate", Some(&body), abort)
            .await?;
        decode_json_response(response).await
    }

    /// Disable the TOTP factor; requires a current code.
    pub async fn totp_remove(
        &self,
        code: &str,
        abort: Option<&AbortSignal>,
    ) -> Result<StatusResponse, ApiError> {
        let body = TotpCodeRequest { code };
        let response = self
            .fetch_with_csrf(Method::POST, "/auth/2fa/totp/remove", Some(&body), abort)
            .await?;
        decode_json_response(response).await
    }

    /// Provisioning QR code for the pending secret, as raw PNG bytes.
    pub async fn totp_qr_code(&self, abort: Option<&AbortSignal>) -> Result<Vec<u8>, ApiError> {
        let response = self
            .fetch_with_csrf(Method::GET, "/auth/2fa/totp/qr", None::<&()>, abort)
            .await?;
        decode_bytes_response(response).await
    }
}
