//! X-Ops signed-header authentication for outbound management API requests.
//!
//! Each request is reduced to a canonical string (method, hashed path, hashed
//! body, principal, timestamp), signed with the caller's RSA key, and
//! described by a set of `X-Ops-*` headers the server can verify.
//!
//! # Usage
//!
//! ```rust,no_run
//! use opsign_auth::{PrivateKey, Request, sign};
//!
//! # fn main() -> Result<(), opsign_core::OpsignError> {
//! let key = PrivateKey::from_pem(&std::fs::read_to_string("client.pem").unwrap())?;
//! let request = Request::parse("POST", "/users", r#"{"username":"myuser"}"#)?;
//!
//! let headers = sign(&request, "user", "2026-10-16T08:00:00Z", &key)?;
//! for (name, value) in headers.iter() {
//!     println!("{name}: {value}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`hashing`] - Base64 SHA-1 content hashes
//! - [`canonical`] - Canonical request construction
//! - [`signer`] - RSA key loading and PKCS#1 v1.5 signing
//! - [`chunker`] - Splitting signatures into authorization headers
//! - [`headers`] - Header set assembly and attachment
//! - [`request`] - The request value being signed
//! - [`clock`] - Timestamp sources

pub mod canonical;
pub mod chunker;
pub mod clock;
pub mod hashing;
pub mod headers;
pub mod request;
pub mod signer;

#[cfg(test)]
mod testdata;

pub use clock::{CachedTimestamp, FixedTimestamp, SystemClock, TimestampSource};
pub use headers::{AuthHeaderAssembler, HeaderSet, sign};
pub use request::Request;
pub use signer::PrivateKey;
