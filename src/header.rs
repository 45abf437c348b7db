use serde::{Deserialize, Serialize};

/// The only signing algorithm this crate produces or accepts.
pub const SIGNING_ALGORITHM: &str = "HS256";

/// JOSE header carried in the first token segment.
///
/// Only `alg` is emitted. Tokens whose header carries additional
/// parameters still parse (unknown fields are ignored), but the algorithm
/// must be `HS256`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwsHeader {
    #[serde(rename = "alg")]
    pub algorithm: String,
}

impl JwsHeader {
    /// Fresh header for a token this crate is about to sign.
    pub fn hs256() -> Self {
        Self {
            algorithm: SIGNING_ALGORITHM.to_owned(),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.algorithm == SIGNING_ALGORITHM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_compact_alg_field() {
        let json = serde_json::to_string(&JwsHeader::hs256()).unwrap();
        assert_eq!(json, r#"{"alg":"HS256"}"#);
    }

    #[test]
    fn parses_headers_with_extra_parameters() {
        let header: JwsHeader =
            serde_json::from_str(r#"{"alg":"HS256","typ":"JWT"}"#).unwrap();
        assert!(header.is_supported());
    }

    #[test]
    fn rejects_other_algorithms() {
        let header: JwsHeader = serde_json::from_str(r#"{"alg":"RS256"}"#).unwrap();
        assert!(!header.is_supported());
    }
}
