//! Canonical request construction for X-Ops signing.
//!
//! The canonical request is five newline-joined fields, with no trailing
//! newline:
//!
//! ```text
//! <lowercase method>\n
//! <base64(sha1(canonical path))>\n
//! <base64(sha1(body))>\n
//! <principal>\n
//! <timestamp>
//! ```
//!
//! Only the method, path, body, principal, and timestamp feed the string.
//! Headers are never consulted, so cache or content-negotiation headers added
//! by a transport cannot invalidate a signature.

use opsign_core::{Principal, Timestamp};

use crate::hashing::ContentHasher;
use crate::request::Request;

/// A canonical request together with the body hash it embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    text: String,
    content_hash: String,
}

impl CanonicalRequest {
    /// The newline-joined text that gets signed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Base64 digest of the request body, sent as `X-Ops-Content-Hash`.
    #[must_use]
    pub fn content_hash(&self) -> &str {
        &self.content_hash
    }

    /// Consume into the canonical text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

/// Build the canonical request for `request` signed by `principal` at `timestamp`.
///
/// # Examples
///
/// ```
/// use opsign_auth::canonical::build_canonical_request;
/// use opsign_auth::hashing::ContentHasher;
/// use opsign_auth::Request;
/// use opsign_core::{Principal, Timestamp};
///
/// let request = Request::parse("GET", "/nodes?all=true", "").unwrap();
/// let canonical = build_canonical_request(
///     ContentHasher::default(),
///     &request,
///     &Principal::new("user").unwrap(),
///     &Timestamp::new("2026-10-16T08:00:00Z").unwrap(),
/// );
/// assert!(canonical.as_str().starts_with("get\n"));
/// assert!(canonical.as_str().ends_with("\nuser\n2026-10-16T08:00:00Z"));
/// ```
#[must_use]
pub fn build_canonical_request(
    hasher: ContentHasher,
    request: &Request,
    principal: &Principal,
    timestamp: &Timestamp,
) -> CanonicalRequest {
    let method = request.method().as_str().to_ascii_lowercase();
    let hashed_path = hasher.hash(canonical_path(request.path()).as_bytes());
    let content_hash = hasher.hash(request.body());

    let text = format!("{method}\n{hashed_path}\n{content_hash}\n{principal}\n{timestamp}");

    CanonicalRequest { text, content_hash }
}

/// Normalize a request path for hashing.
///
/// The query string and fragment are dropped, runs of `/` collapse to one,
/// a leading `/` is ensured, and a trailing `/` is removed unless the path is
/// the root.
///
/// # Examples
///
/// ```
/// use opsign_auth::canonical::canonical_path;
///
/// assert_eq!(canonical_path("/users"), "/users");
/// assert_eq!(canonical_path("users//myuser/?verbose"), "/users/myuser");
/// assert_eq!(canonical_path(""), "/");
/// ```
#[must_use]
pub fn canonical_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());

    let mut canonical = String::with_capacity(end + 1);
    for segment in path[..end].split('/').filter(|s| !s.is_empty()) {
        canonical.push('/');
        canonical.push_str(segment);
    }

    if canonical.is_empty() {
        canonical.push('/');
    }
    canonical
}
