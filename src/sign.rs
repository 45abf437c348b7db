//! HMAC-SHA256 signing primitive and fixed-time signature comparison.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Compute HMAC-SHA256 over `message`.
///
/// Deterministic; no state survives the call. There is no entry point that
/// verifies against a caller-supplied tag: verification recomputes the tag
/// and compares (see `DetachedJwsHandler`).
pub(crate) fn sign(key: &[u8], message: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Constant-time equality. Buffers of unequal length compare unequal
/// without inspecting their contents.
pub(crate) fn fixed_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231, test case 2.
    #[test]
    fn matches_rfc_4231_vector() {
        let tag = sign(b"Jefe", b"what do ya want for nothing?");
        let expected =
            hex::decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
                .unwrap();
        assert_eq!(tag.as_slice(), expected);
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(sign(b"key", b"message"), sign(b"key", b"message"));
    }

    #[test]
    fn accepts_empty_key() {
        // Weak, but HMAC is defined for any key length.
        let _ = sign(b"", b"message");
    }

    #[test]
    fn fixed_time_eq_semantics() {
        assert!(fixed_time_eq(b"abc", b"abc"));
        assert!(fixed_time_eq(b"", b""));
        assert!(!fixed_time_eq(b"abc", b"abd"));
        assert!(!fixed_time_eq(b"abc", b"abcd"));
    }
}
