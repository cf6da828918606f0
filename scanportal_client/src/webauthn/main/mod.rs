mod codec;

pub use codec::{
    decode_creation_options, decode_request_options, encode_assertion_credential,
    encode_attestation_credential,
};
