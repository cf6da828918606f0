use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use thiserror::Error;

/// Decode a URL-safe, unpadded base64 string into raw bytes.
///
/// Every binary WebAuthn field (challenge, credential id, signature, ...)
/// travels in this encoding; the decoded bytes are later matched
/// byte-for-byte by the authenticator and the backend.
pub(crate) fn base64url_decode(input: &str) -> Result<Vec<u8>, UtilError> {
    let decoded = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|_| UtilError::Format("Failed to decode base64url".to_string()))?;
    Ok(decoded)
}

/// Encode raw bytes as URL-safe, unpadded base64.
pub(crate) fn base64url_encode(input: impl AsRef<[u8]>) -> Result<String, UtilError> {
    Ok(URL_SAFE_NO_PAD.encode(input))
}

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Invalid format: {0}")]
    Format(String),
}
