//! scanportal-client - Authenticated API-access layer for the ScanPortal platform
//!
//! This crate is the programmatic surface that ScanPortal page-load and
//! form-handler code uses to talk to the backend: a request client that
//! acquires and attaches the anti-forgery token to every outbound call,
//! typed helpers for each authentication endpoint, and a codec that
//! converts WebAuthn ceremony data between its JSON wire form and the
//! binary form consumed by platform authenticators.

mod client;
mod config;
mod utils;
mod validation;
mod webauthn;

// Re-export the request client and its wire types
pub use client::{
    AbortHandle, AbortSignal, ApiClient, ApiError, CSRF_TOKEN_HEADER, CreationOptionsResponse,
    ErrorDetail, FieldErrors, LoginRequest, LoginResponse, RecoveryCodesResponse, RegisterRequest,
    RegisterResponse, RequestOptionsResponse, SessionUser, StatusResponse, TotpSecretResponse,
    abort_channel,
};

// Re-export the WebAuthn ceremony codec
pub use webauthn::{
    AssertionCredential, AssertionCredentialJson, AssertionResponse, AssertionResponseJson,
    AttestationCredential, AttestationCredentialJson, AttestationResponse, AttestationResponseJson,
    CreationOptions, CreationOptionsJson, CredentialDescriptor, CredentialDescriptorJson,
    CredentialJson, PubKeyCredParam, PublicKeyCredential, RelyingParty, RequestOptions,
    RequestOptionsJson, UserEntity, UserEntityJson, WebAuthnError, decode_creation_options,
    decode_request_options, encode_assertion_credential, encode_attestation_credential,
};

// Re-export the client-side field validators
pub use validation::{
    ValidationError, validate_email, validate_password, validate_totp_code, validate_username,
};

pub use config::SCANPORTAL_BACKEND_URL;
