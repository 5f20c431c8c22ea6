//! Signer configuration.
//!
//! Configuration is an explicit value handed to the header assembler at
//! construction time. Nothing here reads the environment; hosts that want
//! env- or file-driven settings deserialize a [`SignerConfig`] themselves.

use std::fmt;
use std::str::FromStr;

use crate::{OpsignError, OpsignResult};

/// Configuration for the X-Ops header assembler.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignerConfig {
    /// Protocol version advertised in `X-Ops-Sign: version=<sign_version>`.
    pub sign_version: String,
    /// Name of the digest used for content hashes and the signature.
    pub digest: String,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            sign_version: "1.0".to_owned(),
            digest: DigestAlgorithm::Sha1.as_str().to_owned(),
        }
    }
}

impl SignerConfig {
    /// Override the advertised protocol version.
    #[must_use]
    pub fn with_sign_version(mut self, version: impl Into<String>) -> Self {
        self.sign_version = version.into();
        self
    }

    /// Override the digest algorithm name.
    #[must_use]
    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.digest = digest.into();
        self
    }

    /// Check the configuration and resolve the digest algorithm.
    ///
    /// # Errors
    /// Returns [`OpsignError::UnsupportedDigest`] if the digest is unknown and
    /// [`OpsignError::Config`] if the sign version cannot be sent as a header.
    pub fn validate(&self) -> OpsignResult<DigestAlgorithm> {
        if self.sign_version.is_empty()
            || self
                .sign_version
                .chars()
                .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(OpsignError::Config(format!(
                "sign version {:?} must be a single non-empty token",
                self.sign_version
            )));
        }
        self.digest.parse()
    }
}

/// Digest algorithms the X-Ops protocol can sign with.
///
/// Version 1.0 servers only verify SHA-1, so that is the only variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigestAlgorithm {
    /// SHA-1, 160-bit digest.
    #[default]
    Sha1,
}

impl DigestAlgorithm {
    /// Canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
        }
    }

    /// Digest length in bytes.
    #[must_use]
    pub fn output_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = OpsignError;

    fn from_str(s: &str) -> OpsignResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(Self::Sha1),
            _ => Err(OpsignError::UnsupportedDigest(s.to_owned())),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
