//! Core types, configuration, and error taxonomy for X-Ops request signing.
//!
//! This crate holds the vocabulary shared by the signing pipeline and its
//! callers: the identity on whose behalf a request is signed ([`Principal`]),
//! the wire timestamp ([`Timestamp`]), the explicit signer configuration
//! ([`SignerConfig`]), and the error type every fallible operation returns
//! ([`OpsignError`]).

mod config;
mod error;
mod types;

pub use config::{DigestAlgorithm, SignerConfig};
pub use error::{ErrorKind, OpsignError, OpsignResult};
pub use types::{Principal, Timestamp};
