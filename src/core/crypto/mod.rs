//! Cryptographic operations.
//!
//! Password-based file encryption plus the hashing and encoding helpers used
//! by the `hash` and `base64` commands.
//!
//! The encrypted format is `base64(salt || iv || ciphertext)` with no header
//! or version byte, so a new format needs a new [`Cipher`] implementation and
//! an explicit marker. It also carries no MAC: a wrong password is detected
//! only through invalid padding.

use base64::{engine::general_purpose::STANDARD, Engine};
use sha2::{Digest, Sha256};

use crate::error::{CryptoError, Result};

mod aes_cbc;

pub use aes_cbc::AesCbc;

/// Password cipher trait.
///
/// Abstracts the file encryption scheme so the commands do not depend on a
/// particular algorithm.
pub trait Cipher {
    /// Encrypt `plaintext` with `password` into printable text.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Random` if salt or IV generation fails.
    fn encrypt(&self, plaintext: &[u8], password: &str) -> Result<String>;

    /// Decrypt text produced by [`Cipher::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `CryptoError` for malformed input or a wrong password.
    fn decrypt(&self, encrypted: &str, password: &str) -> Result<Vec<u8>>;
}

/// Encrypt with the default cipher.
///
/// This is a convenience wrapper around `AesCbc::encrypt`.
pub fn encrypt(plaintext: &[u8], password: &str) -> Result<String> {
    AesCbc.encrypt(plaintext, password)
}

/// Decrypt with the default cipher.
///
/// This is a convenience wrapper around `AesCbc::decrypt`.
pub fn decrypt(encrypted: &str, password: &str) -> Result<Vec<u8>> {
    AesCbc.decrypt(encrypted, password)
}

/// Lowercase hex SHA-256 digest.
pub fn hash_sha256(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Standard base64 with padding.
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode standard base64, ignoring ASCII whitespace such as line breaks.
///
/// # Errors
///
/// Returns `CryptoError::Base64` on invalid input.
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    STANDARD
        .decode(compact)
        .map_err(|e| CryptoError::Base64(e).into())
}
