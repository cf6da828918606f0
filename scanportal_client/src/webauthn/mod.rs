mod errors;
mod main;
mod types;

pub use errors::WebAuthnError;

pub use main::{
    decode_creation_options, decode_request_options, encode_assertion_credential,
    encode_attestation_credential,
};

pub use types::{
    AssertionCredential, AssertionCredentialJson, AssertionResponse, AssertionResponseJson,
    AttestationCredential, AttestationCredentialJson, AttestationResponse, AttestationResponseJson,
    CreationOptions, CreationOptionsJson, CredentialDescriptor, CredentialDescriptorJson,
    CredentialJson, PubKeyCredParam, PublicKeyCredential, RelyingParty, RequestOptions,
    RequestOptionsJson, UserEntity, UserEntityJson,
};
