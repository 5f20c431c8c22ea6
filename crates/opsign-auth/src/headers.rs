//! X-Ops header assembly.
//!
//! [`AuthHeaderAssembler`] runs the full pipeline for one request:
//!
//! 1. Hash the body and the canonical path.
//! 2. Build the canonical request.
//! 3. Sign it with the caller's RSA key.
//! 4. Base64-encode the signature and split it into 60-character chunks.
//! 5. Emit the ordered [`HeaderSet`].
//!
//! Every stage is a pure function of its inputs. The assembler holds only its
//! configuration, so one instance can be shared across threads.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use http::{HeaderMap, HeaderName, HeaderValue};
use opsign_core::{OpsignError, OpsignResult, Principal, SignerConfig, Timestamp};
use tracing::debug;

use crate::canonical::build_canonical_request;
use crate::chunker::chunk_signature;
use crate::clock::TimestampSource;
use crate::hashing::ContentHasher;
use crate::request::Request;
use crate::signer::{PrivateKey, sign_canonical};

/// Protocol version marker header.
pub const X_OPS_SIGN: &str = "X-Ops-Sign";
/// Principal header.
pub const X_OPS_USERID: &str = "X-Ops-Userid";
/// Timestamp header.
pub const X_OPS_TIMESTAMP: &str = "X-Ops-Timestamp";
/// Body hash header.
pub const X_OPS_CONTENT_HASH: &str = "X-Ops-Content-Hash";
/// Prefix of the numbered signature chunk headers.
pub const X_OPS_AUTHORIZATION_PREFIX: &str = "X-Ops-Authorization-";

/// The ordered set of authentication headers for one request.
///
/// Entries appear as `X-Ops-Sign`, `X-Ops-Userid`, `X-Ops-Timestamp`,
/// `X-Ops-Content-Hash`, then `X-Ops-Authorization-1..N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(String, String)>,
}

impl HeaderSet {
    /// Iterate over `(name, value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Look up a header value by case-insensitive name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Number of headers in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty. A set produced by the assembler never is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `X-Ops-Content-Hash` value.
    #[must_use]
    pub fn content_hash(&self) -> Option<&str> {
        self.get(X_OPS_CONTENT_HASH)
    }

    /// The `X-Ops-Authorization-N` values in order.
    #[must_use]
    pub fn authorization_chunks(&self) -> Vec<&str> {
        self.iter()
            .filter(|(name, _)| name.starts_with(X_OPS_AUTHORIZATION_PREFIX))
            .map(|(_, value)| value)
            .collect()
    }

    /// The base64 signature, reassembled from its chunks.
    #[must_use]
    pub fn signature(&self) -> String {
        self.authorization_chunks().concat()
    }

    /// Convert into an [`http::HeaderMap`].
    ///
    /// # Errors
    /// Returns [`OpsignError::InvalidHeader`] if a value cannot be sent as an
    /// HTTP header.
    pub fn to_header_map(&self) -> OpsignResult<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.len());
        self.apply_to(&mut map)?;
        Ok(map)
    }

    /// Attach the headers to `headers`, replacing any `X-Ops-*` entries left
    /// over from an earlier attempt. Other headers are left alone.
    ///
    /// On error `headers` is not modified.
    ///
    /// # Errors
    /// Returns [`OpsignError::InvalidHeader`] if a value cannot be sent as an
    /// HTTP header.
    pub fn apply_to(&self, headers: &mut HeaderMap) -> OpsignResult<()> {
        let converted = self
            .iter()
            .map(|(name, value)| to_http_header(name, value))
            .collect::<OpsignResult<Vec<_>>>()?;

        let stale: Vec<HeaderName> = headers
            .keys()
            .filter(|name| name.as_str().starts_with("x-ops-"))
            .cloned()
            .collect();
        for name in &stale {
            headers.remove(name);
        }

        for (name, value) in converted {
            headers.insert(name, value);
        }
        Ok(())
    }
}

impl IntoIterator for HeaderSet {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

fn to_http_header(name: &str, value: &str) -> OpsignResult<(HeaderName, HeaderValue)> {
    let invalid = |reason: String| {
        debug!(header = name, %reason, "Cannot attach X-Ops header");
        OpsignError::InvalidHeader {
            name: name.to_owned(),
            reason,
        }
    };
    let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
    let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
    Ok((header_name, header_value))
}

/// Builds X-Ops header sets for outbound requests.
#[derive(Debug, Clone)]
pub struct AuthHeaderAssembler {
    sign_marker: String,
    hasher: ContentHasher,
}

impl Default for AuthHeaderAssembler {
    fn default() -> Self {
        let config = SignerConfig::default();
        Self {
            sign_marker: format!("version={}", config.sign_version),
            hasher: ContentHasher::default(),
        }
    }
}

impl AuthHeaderAssembler {
    /// Create an assembler from an explicit configuration.
    ///
    /// # Errors
    /// Returns [`OpsignError::UnsupportedDigest`] or [`OpsignError::Config`]
    /// if the configuration is unusable.
    pub fn new(config: &SignerConfig) -> OpsignResult<Self> {
        let algorithm = config.validate()?;
        Ok(Self {
            sign_marker: format!("version={}", config.sign_version),
            hasher: ContentHasher::new(algorithm),
        })
    }

    /// Produce the header set for `request`.
    ///
    /// # Errors
    /// Returns [`OpsignError::Signing`] if the RSA primitive rejects the key.
    pub fn sign(
        &self,
        request: &Request,
        principal: &Principal,
        timestamp: &Timestamp,
        key: &PrivateKey,
    ) -> OpsignResult<HeaderSet> {
        let canonical = build_canonical_request(self.hasher, request, principal, timestamp);
        let signature = sign_canonical(self.hasher.algorithm(), canonical.as_str(), key)?;
        let encoded = BASE64.encode(signature);
        let chunks = chunk_signature(&encoded);

        let mut entries = Vec::with_capacity(4 + chunks.len());
        entries.push((X_OPS_SIGN.to_owned(), self.sign_marker.clone()));
        entries.push((X_OPS_USERID.to_owned(), principal.to_string()));
        entries.push((X_OPS_TIMESTAMP.to_owned(), timestamp.to_string()));
        entries.push((
            X_OPS_CONTENT_HASH.to_owned(),
            canonical.content_hash().to_owned(),
        ));
        for (index, chunk) in chunks.into_iter().enumerate() {
            entries.push((
                format!("{X_OPS_AUTHORIZATION_PREFIX}{}", index + 1),
                chunk.to_owned(),
            ));
        }

        Ok(HeaderSet { entries })
    }

    /// Produce the header set using one timestamp drawn from `clock`.
    ///
    /// # Errors
    /// Same as [`AuthHeaderAssembler::sign`].
    pub fn sign_now(
        &self,
        request: &Request,
        principal: &Principal,
        clock: &dyn TimestampSource,
        key: &PrivateKey,
    ) -> OpsignResult<HeaderSet> {
        let timestamp = clock.timestamp();
        self.sign(request, principal, &timestamp, key)
    }

    /// Sign an [`http::Request`] and attach the headers to it.
    ///
    /// Method, URI, and body are read but never modified.
    ///
    /// # Errors
    /// Returns any error from [`Request::from_http`],
    /// [`AuthHeaderAssembler::sign`], or [`HeaderSet::apply_to`]. On error the
    /// request is left untouched.
    pub fn sign_http_request<B: AsRef<[u8]>>(
        &self,
        request: &mut http::Request<B>,
        principal: &Principal,
        timestamp: &Timestamp,
        key: &PrivateKey,
    ) -> OpsignResult<HeaderSet> {
        let signable = Request::from_http(request)?;
        let headers = self.sign(&signable, principal, timestamp, key)?;
        headers.apply_to(request.headers_mut())?;
        Ok(headers)
    }
}

/// Sign `request` with the default configuration.
///
/// Principal and timestamp are validated first; no header set is produced
/// unless every stage succeeds.
///
/// # Errors
/// Returns [`OpsignError::InvalidPrincipal`] or [`OpsignError::InvalidTimestamp`]
/// for malformed identity or time, and [`OpsignError::Signing`] if the key is
/// rejected by the RSA primitive.
pub fn sign(
    request: &Request,
    principal: &str,
    timestamp: &str,
    key: &PrivateKey,
) -> OpsignResult<HeaderSet> {
    let principal = Principal::new(principal)?;
    let timestamp = Timestamp::new(timestamp)?;
    AuthHeaderAssembler::default().sign(request, &principal, &timestamp, key)
}
