use thiserror::Error;

use crate::utils::UtilError;

/// Errors that can occur while converting WebAuthn ceremony data between
/// its JSON wire form and the binary form used by authenticators.
#[derive(Debug, Error)]
pub enum WebAuthnError {
    /// A binary field did not decode as URL-safe base64
    #[error("Invalid format: {0}")]
    Format(String),

    /// Error from utility operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
