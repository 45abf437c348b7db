//! Detached-JWS creation and verification (RFC 7515, Appendix F).

use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::base64url;
use crate::error::JwsError;
use crate::header::JwsHeader;
use crate::sign;

/// Creates and verifies detached JSON Web Signatures in Compact
/// Serialization. HMAC SHA-256 only.
///
/// Holds the symmetric key for its lifetime; every call is otherwise
/// stateless, so a single handler can be shared freely across threads.
///
/// The signed bytes are the payload's compact JSON in the payload type's
/// own field order (no canonicalization is applied), so signer and
/// verifier must agree on the payload shape, not just its values.
pub struct DetachedJwsHandler {
    secret_key: Vec<u8>,
}

impl fmt::Debug for DetachedJwsHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("DetachedJwsHandler").finish_non_exhaustive()
    }
}

impl DetachedJwsHandler {
    /// New handler around a pre-shared secret key.
    ///
    /// The key may be given as raw bytes or as text (converted via UTF-8);
    /// both forms produce an equivalent handler. Empty keys are accepted
    /// (HMAC is defined for any key length) but make for trivially
    /// forgeable tokens.
    pub fn new(secret_key: impl Into<Vec<u8>>) -> Self {
        Self {
            secret_key: secret_key.into(),
        }
    }

    /// Create a detached JWS over `payload`.
    ///
    /// The returned string has the shape `<header>..<signature>`: the empty
    /// middle segment marks the payload as detached, per the compact
    /// serialization convention. The only failure path is payload
    /// serialization.
    pub fn create_detached_jws<T: Serialize>(&self, payload: &T) -> Result<String, JwsError> {
        let header = base64url::encode(serde_json::to_vec(&JwsHeader::hs256())?);
        let signature = base64url::encode(self.signature_bytes(payload)?);
        Ok(format!("{header}..{signature}"))
    }

    /// Verify a detached JWS against `payload`.
    ///
    /// Three gates, in order:
    /// 1. structure: not exactly three segments → [`JwsError::MalformedToken`]
    /// 2. algorithm: undecodable header, or anything but HS256 →
    ///    [`JwsError::UnsupportedAlgorithm`]
    /// 3. signature: recomputed over `payload` and compared in constant
    ///    time; any mismatch, including an undecodable signature segment,
    ///    is `Ok(false)`, never an error.
    pub fn verify_detached_jws<T: Serialize>(
        &self,
        payload: &T,
        detached_signature: &str,
    ) -> Result<bool, JwsError> {
        let parts: Vec<&str> = detached_signature.split('.').collect();
        if parts.len() != 3 {
            return Err(JwsError::MalformedToken);
        }

        if !is_header_valid(parts[0]) {
            return Err(JwsError::UnsupportedAlgorithm);
        }

        let computed = self.signature_bytes(payload)?;

        // Past the header gate the signature segment is still untrusted
        // input; a decode failure is a failed verification, not a fault.
        let provided = match base64url::decode(parts[2]) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "signature segment is not valid base64url");
                return Ok(false);
            }
        };

        Ok(sign::fixed_time_eq(&provided, &computed))
    }

    // HMAC-SHA256 over the canonical (compact JSON, UTF-8) payload bytes.
    fn signature_bytes<T: Serialize>(&self, payload: &T) -> Result<[u8; 32], JwsError> {
        let canonical = serde_json::to_vec(payload)?;
        Ok(sign::sign(&self.secret_key, &canonical))
    }
}

fn is_header_valid(encoded_header: &str) -> bool {
    let bytes = match base64url::decode(encoded_header) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, "header segment is not valid base64url");
            return false;
        }
    };
    let header: JwsHeader = match serde_json::from_slice(&bytes) {
        Ok(header) => header,
        Err(e) => {
            warn!(error = %e, "header segment is not a valid JSON header");
            return false;
        }
    };
    header.is_supported()
}
