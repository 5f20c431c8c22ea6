//! End-to-end tests for the X-Ops request signer.
//!
//! These run entirely in-process against the public API: a fixed RSA client
//! key and fixed timestamps make every signature reproducible.
//!
//! ```text
//! cargo test -p opsign-integration
//! ```

use std::sync::Once;

use opsign_auth::{PrivateKey, Request};
use opsign_core::{Principal, Timestamp};

static INIT: Once = Once::new();

/// PEM of the 2048-bit client key every fixture is signed with.
pub const CLIENT_KEY_PEM: &str = include_str!("../fixtures/client-rsa-2048.pem");

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Load the fixture client key.
#[must_use]
pub fn client_key() -> PrivateKey {
    init_tracing();
    let key = PrivateKey::from_pem(CLIENT_KEY_PEM).unwrap_or_else(|e| panic!("fixture key: {e}"));
    tracing::debug!(bits = key.bits(), "Loaded fixture client key");
    key
}

/// `POST /users` with the JSON body of a new user named `username`.
#[must_use]
pub fn create_user_request(username: &str) -> Request {
    let body = serde_json::to_vec(&serde_json::json!({ "username": username }))
        .unwrap_or_else(|e| panic!("serialize user: {e}"));
    Request::parse("POST", "/users", body).unwrap_or_else(|e| panic!("build request: {e}"))
}

/// Principal from a literal.
#[must_use]
pub fn principal(id: &str) -> Principal {
    Principal::new(id).unwrap_or_else(|e| panic!("principal: {e}"))
}

/// Timestamp from a literal.
#[must_use]
pub fn timestamp(value: &str) -> Timestamp {
    Timestamp::new(value).unwrap_or_else(|e| panic!("timestamp: {e}"))
}

mod test_properties;
