mod errors;
mod main;
mod types;

pub use errors::ApiError;

pub use main::{AbortHandle, AbortSignal, ApiClient, CSRF_TOKEN_HEADER, abort_channel};

pub use types::{
    CreationOptionsResponse, ErrorDetail, FieldErrors, LoginRequest, LoginResponse,
    RecoveryCodesResponse, RegisterRequest, RegisterResponse, RequestOptionsResponse, SessionUser,
    StatusResponse, TotpSecretResponse,
};
