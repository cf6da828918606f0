mod abort;
mod account;
mod core;
mod passkey_flow;
mod totp;

pub use abort::{AbortHandle, AbortSignal, abort_channel};
pub use core::{ApiClient, CSRF_TOKEN_HEADER};
