//! Identity and timestamp values that feed the canonical request.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{OpsignError, OpsignResult};

/// Identity on whose behalf a request is signed.
///
/// Emitted verbatim as `X-Ops-Userid` and as the fourth canonical field, so it
/// must be non-empty and free of control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Principal(String);

impl Principal {
    /// Create a principal from an identifier string.
    ///
    /// # Errors
    /// Returns [`OpsignError::InvalidPrincipal`] if the identifier is empty,
    /// blank, or contains control characters.
    pub fn new(id: impl Into<String>) -> OpsignResult<Self> {
        let id = id.into();
        if id.trim().is_empty() || id.chars().any(char::is_control) {
            return Err(OpsignError::InvalidPrincipal(id));
        }
        Ok(Self(id))
    }

    /// Get the principal as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Principal {
    type Error = OpsignError;

    fn try_from(value: String) -> OpsignResult<Self> {
        Self::new(value)
    }
}

impl From<Principal> for String {
    fn from(value: Principal) -> Self {
        value.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request timestamp in its wire format.
///
/// The signing core treats the value as opaque: any single token without
/// whitespace or control characters is accepted. [`Timestamp::from_datetime`]
/// produces the format servers expect, ISO-8601 UTC at seconds precision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(String);

impl Timestamp {
    /// `strftime` pattern of the wire format.
    pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    /// Wrap a timestamp already rendered in its wire format.
    ///
    /// # Errors
    /// Returns [`OpsignError::InvalidTimestamp`] if the value is empty or
    /// contains whitespace or control characters.
    pub fn new(value: impl Into<String>) -> OpsignResult<Self> {
        let value = value.into();
        if value.is_empty()
            || value
                .chars()
                .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(OpsignError::InvalidTimestamp(value));
        }
        Ok(Self(value))
    }

    /// Render a UTC instant in the wire format, truncated to whole seconds.
    #[must_use]
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Self(instant.format(Self::WIRE_FORMAT).to_string())
    }

    /// Get the timestamp as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Timestamp {
    type Error = OpsignError;

    fn try_from(value: String) -> OpsignResult<Self> {
        Self::new(value)
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
