use thiserror::Error;

/// Errors surfaced by [`DetachedJwsHandler`](crate::DetachedJwsHandler).
///
/// A signature that merely fails to match is not represented here:
/// verification reports it as `Ok(false)`. These variants cover structural
/// and protocol-support failures, which callers are expected to handle
/// differently from a tampered or forged token.
#[derive(Debug, Error)]
pub enum JwsError {
    /// The token does not split into exactly three dot-separated segments.
    #[error("JWS compact serialization string must consist of exactly three parts")]
    MalformedToken,

    /// The header segment is undecodable, unparsable, or names an
    /// algorithm other than HS256.
    #[error("invalid header: we only support HMAC SHA-256 as the signing algorithm")]
    UnsupportedAlgorithm,

    /// The payload could not be serialized to canonical JSON.
    #[error("failed to serialize payload")]
    Serialization(#[from] serde_json::Error),
}
