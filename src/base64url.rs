//! Base64URL (unpadded) encoding as used by JWS segments.
//!
//! Thin wrapper around the `base64` engine so the alphabet and padding
//! choice are fixed in exactly one place.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

pub use base64::DecodeError;

/// Encode bytes with the URL-safe alphabet (`-`, `_`), no `=` padding.
pub fn encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode an unpadded Base64URL string.
///
/// Fails on characters outside the URL-safe alphabet (including `=`
/// padding) and on lengths no unpadded encoding can produce.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}
