//! AWS Signature V4 request signing.
//!
//! The signature is computed over a canonical form of the request (method,
//! path, selected headers, payload hash, timestamp, region, and service
//! scope) and attached as the `Authorization` header, letting SES
//! authenticate the caller without a prior handshake.

mod canonical;
mod error;
mod v4;

pub use canonical::{canonical_headers, should_sign_header, uri_encode_path};
pub use error::SigningError;
pub use v4::{
    build_credential_scope, derive_signing_key, format_date_stamp, format_datetime, sha256_hex,
    sign_request, AWS_ALGORITHM, SES_SIGNING_SERVICE,
};
