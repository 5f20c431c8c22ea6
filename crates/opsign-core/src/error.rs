//! Error types for X-Ops request signing.
//!
//! Every failure is represented by [`OpsignError`]. Callers that only care
//! about how to react (fix the input, replace the key, fix the deployment)
//! can branch on [`OpsignError::kind`] instead of matching variants.

/// Errors that can occur while building or attaching an X-Ops header set.
#[derive(Debug, thiserror::Error)]
pub enum OpsignError {
    /// The principal is empty or contains characters that cannot appear in a header.
    #[error("invalid principal: {0:?}")]
    InvalidPrincipal(String),

    /// The timestamp is empty or not in a single-token wire format.
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// The HTTP method is not a valid token.
    #[error("invalid HTTP method: {0:?}")]
    InvalidMethod(String),

    /// The request path contains control characters.
    #[error("invalid request path: {0:?}")]
    InvalidPath(String),

    /// The private key could not be decoded or is not an RSA key.
    #[error("invalid private key: {0}")]
    InvalidKey(String),

    /// The RSA modulus is outside the supported range.
    #[error("unsupported key size: {bits} bits")]
    UnsupportedKeySize {
        /// Modulus length of the rejected key.
        bits: usize,
    },

    /// The signature primitive rejected the input.
    #[error("signing failed: {0}")]
    Signing(String),

    /// The configured digest algorithm is not usable for this protocol.
    #[error("unsupported digest algorithm: {0:?}")]
    UnsupportedDigest(String),

    /// The signer configuration is unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// A produced header could not be represented as an HTTP header.
    #[error("invalid header {name}: {reason}")]
    InvalidHeader {
        /// Name of the offending header.
        name: String,
        /// Why the header was rejected.
        reason: String,
    },
}

/// Broad classification of an [`OpsignError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or missing principal, timestamp, method, or path.
    Validation,
    /// The key is unusable by the signature primitive.
    Signing,
    /// The digest primitive is unavailable.
    Hashing,
    /// The signer configuration or header attachment is broken.
    Config,
}

impl ErrorKind {
    /// Whether a caller can recover by fixing its input and calling again.
    ///
    /// Signing and hashing failures need a new key or a new deployment.
    #[must_use]
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Validation)
    }
}

impl OpsignError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPrincipal(_)
            | Self::InvalidTimestamp(_)
            | Self::InvalidMethod(_)
            | Self::InvalidPath(_) => ErrorKind::Validation,
            Self::InvalidKey(_) | Self::UnsupportedKeySize { .. } | Self::Signing(_) => {
                ErrorKind::Signing
            }
            Self::UnsupportedDigest(_) => ErrorKind::Hashing,
            Self::Config(_) | Self::InvalidHeader { .. } => ErrorKind::Config,
        }
    }
}

/// Convenience result type for signing operations.
pub type OpsignResult<T> = Result<T, OpsignError>;
