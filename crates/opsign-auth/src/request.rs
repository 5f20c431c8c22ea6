//! The request value handed to the signer.

use bytes::Bytes;
use http::Method;
use opsign_core::{OpsignError, OpsignResult};

/// An outbound request as seen by the signer: method, path, and body.
///
/// The path may carry a query string; it is dropped during canonicalization.
/// Headers are not part of the value because they never influence the
/// signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    path: String,
    body: Bytes,
}

impl Request {
    /// Create a request.
    ///
    /// # Errors
    /// Returns [`OpsignError::InvalidPath`] if the path contains control characters.
    pub fn new(
        method: Method,
        path: impl Into<String>,
        body: impl Into<Bytes>,
    ) -> OpsignResult<Self> {
        let path = path.into();
        if path.chars().any(char::is_control) {
            return Err(OpsignError::InvalidPath(path));
        }
        Ok(Self {
            method,
            path,
            body: body.into(),
        })
    }

    /// Create a request from a textual method such as `"POST"`.
    ///
    /// # Errors
    /// Returns [`OpsignError::InvalidMethod`] if the method is not a valid
    /// HTTP token, or [`OpsignError::InvalidPath`] as for [`Request::new`].
    pub fn parse(
        method: &str,
        path: impl Into<String>,
        body: impl Into<Bytes>,
    ) -> OpsignResult<Self> {
        if method.is_empty() {
            return Err(OpsignError::InvalidMethod(method.to_owned()));
        }
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| OpsignError::InvalidMethod(method.to_owned()))?;
        Self::new(method, path, body)
    }

    /// Capture method, path and query, and body of an [`http::Request`].
    ///
    /// # Errors
    /// Returns [`OpsignError::InvalidPath`] as for [`Request::new`].
    pub fn from_http<B: AsRef<[u8]>>(request: &http::Request<B>) -> OpsignResult<Self> {
        let path = request
            .uri()
            .path_and_query()
            .map_or("/", http::uri::PathAndQuery::as_str);
        Self::new(
            request.method().clone(),
            path,
            Bytes::copy_from_slice(request.body().as_ref()),
        )
    }

    /// The HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The path as supplied, including any query string.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The request body; empty for bodiless requests.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
