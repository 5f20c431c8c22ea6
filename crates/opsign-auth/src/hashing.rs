//! Content hashing.
//!
//! Bodies and canonical paths are digested with SHA-1 and base64-encoded
//! (standard alphabet, padded). The result of hashing the body is sent as
//! `X-Ops-Content-Hash`.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use opsign_core::DigestAlgorithm;
use sha1::{Digest, Sha1};

/// Base64 SHA-1 digest of the empty payload.
pub const EMPTY_CONTENT_HASH: &str = "2jmj7l5rSw0yVb/vlWAYkK/YBwk=";

/// Computes base64-encoded digests of arbitrary payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentHasher {
    algorithm: DigestAlgorithm,
}

impl ContentHasher {
    /// Create a hasher for the given algorithm.
    #[must_use]
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self { algorithm }
    }

    /// The digest algorithm in use.
    #[must_use]
    pub fn algorithm(self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Raw digest bytes of `payload`.
    #[must_use]
    pub fn digest(self, payload: &[u8]) -> Vec<u8> {
        match self.algorithm {
            DigestAlgorithm::Sha1 => Sha1::digest(payload).to_vec(),
        }
    }

    /// Base64 encoding of the digest of `payload`.
    ///
    /// # Examples
    ///
    /// ```
    /// use opsign_auth::hashing::ContentHasher;
    ///
    /// let hasher = ContentHasher::default();
    /// assert_eq!(hasher.hash(br#"{"username":"myuser"}"#), "yLHOxvgIEtNw5UrZDxslOeMw1gw=");
    /// ```
    #[must_use]
    pub fn hash(self, payload: &[u8]) -> String {
        BASE64.encode(self.digest(payload))
    }
}

/// Base64 SHA-1 digest of `payload`.
#[must_use]
pub fn hash_content(payload: &[u8]) -> String {
    ContentHasher::default().hash(payload)
}
