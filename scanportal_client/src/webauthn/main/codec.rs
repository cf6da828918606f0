//! Lossless conversion between the JSON wire form of WebAuthn ceremony data
//! and the binary form used by platform authenticators.
//!
//! Binary fields travel as URL-safe unpadded base64 in both directions; no
//! other transformation applies. The codec performs no semantic validation
//! of ceremony options (challenge freshness, origin, ...), which belongs to
//! the backend.

use crate::utils::{base64url_decode, base64url_encode};
use crate::webauthn::errors::WebAuthnError;
use crate::webauthn::types::{
    AssertionCredential, AssertionCredentialJson, AssertionResponseJson, AttestationCredential,
    AttestationCredentialJson, AttestationResponseJson, CreationOptions, CreationOptionsJson,
    CredentialDescriptor, CredentialDescriptorJson, CredentialJson, PublicKeyCredential,
    RequestOptions, RequestOptionsJson, UserEntity,
};

fn decode_field(field: &str, value: &str) -> Result<Vec<u8>, WebAuthnError> {
    base64url_decode(value)
        .map_err(|e| WebAuthnError::Format(format!("Failed to decode {field}: {e}")))
}

fn decode_descriptor(
    field: &str,
    descriptor: CredentialDescriptorJson,
) -> Result<CredentialDescriptor, WebAuthnError> {
    Ok(CredentialDescriptor {
        id: decode_field(field, &descriptor.id)?,
        type_: descriptor.type_,
        transports: descriptor.transports,
    })
}

/// Decode server-issued registration options into their binary form.
///
/// `challenge`, `user.id` and each `excludeCredentials[].id` are decoded;
/// every other scalar passes through unchanged.
pub fn decode_creation_options(
    options: CreationOptionsJson,
) -> Result<CreationOptions, WebAuthnError> {
    let challenge = decode_field("challenge", &options.challenge)?;
    let user = UserEntity {
        id: decode_field("user.id", &options.user.id)?,
        name: options.user.name,
        display_name: options.user.display_name,
    };
    let exclude_credentials = options
        .exclude_credentials
        .unwrap_or_default()
        .into_iter()
        .map(|descriptor| decode_descriptor("excludeCredentials.id", descriptor))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CreationOptions {
        challenge,
        rp: options.rp,
        user,
        pub_key_cred_params: options.pub_key_cred_params,
        timeout: options.timeout,
        attestation: options.attestation,
        exclude_credentials,
    })
}

/// Decode server-issued authentication options into their binary form.
///
/// `challenge` and each `allowCredentials[].id` are decoded; `timeout` and
/// `userVerification` pass through unchanged.
pub fn decode_request_options(
    options: RequestOptionsJson,
) -> Result<RequestOptions, WebAuthnError> {
    let challenge = decode_field("challenge", &options.challenge)?;
    let allow_credentials = options
        .allow_credentials
        .into_iter()
        .map(|descriptor| decode_descriptor("allowCredentials.id", descriptor))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RequestOptions {
        challenge,
        timeout: options.timeout,
        allow_credentials,
        user_verification: options.user_verification,
    })
}

/// Re-encode a freshly created attestation credential for transmission.
///
/// `rawId`, `response.clientDataJSON` and `response.attestationObject` are
/// encoded; `id` and `type` pass through unchanged.
pub fn encode_attestation_credential(
    credential: &AttestationCredential,
) -> Result<AttestationCredentialJson, WebAuthnError> {
    Ok(AttestationCredentialJson {
        id: credential.id.clone(),
        raw_id: base64url_encode(&credential.raw_id)?,
        type_: credential.type_.clone(),
        response: AttestationResponseJson {
            client_data_json: base64url_encode(&credential.response.client_data_json)?,
            attestation_object: base64url_encode(&credential.response.attestation_object)?,
        },
    })
}

/// Re-encode an authentication assertion for transmission.
///
/// `rawId`, `response.clientDataJSON`, `response.authenticatorData`,
/// `response.signature` and `response.userHandle` (when present) are
/// encoded; `id` passes through unchanged.
pub fn encode_assertion_credential(
    credential: &AssertionCredential,
) -> Result<AssertionCredentialJson, WebAuthnError> {
    let user_handle = match &credential.response.user_handle {
        Some(handle) => Some(base64url_encode(handle)?),
        None => None,
    };

    Ok(AssertionCredentialJson {
        id: credential.id.clone(),
        raw_id: base64url_encode(&credential.raw_id)?,
        response: AssertionResponseJson {
            client_data_json: base64url_encode(&credential.response.client_data_json)?,
            authenticator_data: base64url_encode(&credential.response.authenticator_data)?,
            signature: base64url_encode(&credential.response.signature)?,
            user_handle,
        },
    })
}

impl PublicKeyCredential {
    /// Produce the wire form of the credential, whichever ceremony it
    /// came from.
    pub fn to_wire(&self) -> Result<CredentialJson, WebAuthnError> {
        match self {
            Self::Attestation(credential) => {
                Ok(CredentialJson::Attestation(encode_attestation_credential(
                    credential,
                )?))
            }
            Self::Assertion(credential) => Ok(CredentialJson::Assertion(
                encode_assertion_credential(credential)?,
            )),
        }
    }
}
