//! Key fixtures shared by unit tests.

use crate::signer::PrivateKey;

/// 2048-bit RSA key in PKCS#1 PEM.
pub const RSA_2048_PKCS1: &str = include_str!("../testdata/fixture-rsa-2048.pem");

/// The same key re-encoded as PKCS#8 PEM.
pub const RSA_2048_PKCS8: &str = include_str!("../testdata/fixture-rsa-2048-pkcs8.pem");

/// A 512-bit RSA key, below the accepted minimum.
pub const RSA_512: &str = include_str!("../testdata/rsa-512.pem");

/// A P-256 EC key, which the signer does not support.
pub const EC_P256: &str = include_str!("../testdata/p256-ec.pem");

pub fn fixture_key() -> PrivateKey {
    PrivateKey::from_pem(RSA_2048_PKCS1).unwrap()
}
