use serde::{Deserialize, Serialize};

/// Relying-party identity as delivered on the wire.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RelyingParty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

/// Accepted credential algorithm, e.g. `{"type": "public-key", "alg": -7}`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PubKeyCredParam {
    #[serde(rename = "type")]
    pub type_: String,
    pub alg: i32,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct UserEntityJson {
    pub id: String,
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// Reference to an existing credential, id still base64url-encoded.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct CredentialDescriptorJson {
    pub id: String,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<String>>,
}

/// Registration ceremony parameters as issued by the backend.
///
/// This is the JSON-safe form of navigator.credentials.create() options:
/// `challenge` and the credential ids are base64url strings that must be
/// decoded before the options reach an authenticator.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreationOptionsJson {
    pub challenge: String,
    pub rp: RelyingParty,
    pub user: UserEntityJson,
    pub pub_key_cred_params: Vec<PubKeyCredParam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attestation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_credentials: Option<Vec<CredentialDescriptorJson>>,
}

/// Authentication ceremony parameters as issued by the backend.
///
/// JSON-safe form of navigator.credentials.get() options.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptionsJson {
    pub challenge: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(default)]
    pub allow_credentials: Vec<CredentialDescriptorJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<String>,
}

/// Binary form of a user entity; `id` is the raw user handle.
#[derive(Clone, Debug, PartialEq)]
pub struct UserEntity {
    pub id: Vec<u8>,
    pub name: String,
    pub display_name: String,
}

/// Binary form of a credential reference.
#[derive(Clone, Debug, PartialEq)]
pub struct CredentialDescriptor {
    pub id: Vec<u8>,
    pub type_: String,
    pub transports: Option<Vec<String>>,
}

/// Registration ceremony parameters with binary fields decoded, ready to
/// hand to a platform authenticator.
#[derive(Clone, Debug)]
pub struct CreationOptions {
    pub challenge: Vec<u8>,
    pub rp: RelyingParty,
    pub user: UserEntity,
    pub pub_key_cred_params: Vec<PubKeyCredParam>,
    pub timeout: Option<u32>,
    pub attestation: Option<String>,
    pub exclude_credentials: Vec<CredentialDescriptor>,
}

/// Authentication ceremony parameters with binary fields decoded.
#[derive(Clone, Debug)]
pub struct RequestOptions {
    pub challenge: Vec<u8>,
    pub timeout: Option<u32>,
    pub allow_credentials: Vec<CredentialDescriptor>,
    pub user_verification: Option<String>,
}

/// Authenticator output from a registration ceremony, binary fields raw.
#[derive(Clone, Debug)]
pub struct AttestationCredential {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub type_: String,
    pub response: AttestationResponse,
}

#[derive(Clone, Debug)]
pub struct AttestationResponse {
    pub client_data_json: Vec<u8>,
    pub attestation_object: Vec<u8>,
}

/// Authenticator output from an authentication ceremony, binary fields raw.
#[derive(Clone, Debug)]
pub struct AssertionCredential {
    pub id: String,
    pub raw_id: Vec<u8>,
    pub response: AssertionResponse,
}

#[derive(Clone, Debug)]
pub struct AssertionResponse {
    pub client_data_json: Vec<u8>,
    pub authenticator_data: Vec<u8>,
    pub signature: Vec<u8>,
    pub user_handle: Option<Vec<u8>>,
}

/// Authenticator output, decoded at the boundary instead of trusted by shape.
///
/// Registration ceremonies produce an attestation, authentication ceremonies
/// an assertion; each variant carries its own binary-field schema.
#[derive(Clone, Debug)]
pub enum PublicKeyCredential {
    Attestation(AttestationCredential),
    Assertion(AssertionCredential),
}

/// Attestation credential in transmission form, binary fields re-encoded.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct AttestationCredentialJson {
    pub id: String,
    #[serde(rename = "rawId")]
    pub raw_id: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub response: AttestationResponseJson,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct AttestationResponseJson {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    #[serde(rename = "attestationObject")]
    pub attestation_object: String,
}

/// Assertion credential in transmission form, binary fields re-encoded.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct AssertionCredentialJson {
    pub id: String,
    #[serde(rename = "rawId")]
    pub raw_id: String,
    pub response: AssertionResponseJson,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct AssertionResponseJson {
    #[serde(rename = "clientDataJSON")]
    pub client_data_json: String,
    #[serde(rename = "authenticatorData")]
    pub authenticator_data: String,
    pub signature: String,
    #[serde(rename = "userHandle", skip_serializing_if = "Option::is_none")]
    pub user_handle: Option<String>,
}

/// Wire form of either credential kind; serializes as the bare credential
/// object the backend finish endpoints expect.
#[derive(Clone, Serialize, Debug)]
#[serde(untagged)]
pub enum CredentialJson {
    Attestation(AttestationCredentialJson),
    Assertion(AssertionCredentialJson),
}
