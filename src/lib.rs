//! Create and verify detached JSON Web Signatures (JWS) in Compact
//! Serialization, restricted to HMAC SHA-256 (`HS256`).
//!
//! A detached JWS carries only the header and the signature; the payload
//! travels out-of-band and is supplied again at verification time.
//! See [RFC 7515, Appendix F](https://datatracker.ietf.org/doc/html/rfc7515#appendix-F).
//!
//! ```
//! use detached_jws::DetachedJwsHandler;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct SamplePayload {
//!     key: String,
//! }
//!
//! # fn main() -> Result<(), detached_jws::JwsError> {
//! let handler = DetachedJwsHandler::new("YourSecretKey");
//! let payload = SamplePayload { key: "value".into() };
//!
//! let detached_signature = handler.create_detached_jws(&payload)?;
//! assert!(handler.verify_detached_jws(&payload, &detached_signature)?);
//! # Ok(())
//! # }
//! ```

pub mod base64url;
mod error;
mod handler;
mod header;
mod sign;

pub use error::JwsError;
pub use handler::DetachedJwsHandler;
pub use header::{JwsHeader, SIGNING_ALGORITHM};
