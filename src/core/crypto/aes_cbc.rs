//! AES-256-CBC with a PBKDF2-derived key.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use tracing::trace;
use zeroize::Zeroizing;

use super::{decode_base64, encode_base64, Cipher};
use crate::core::constants::{BLOCK_SIZE, KEY_SIZE, PBKDF2_ITERATIONS, SALT_SIZE};
use crate::error::{CryptoError, Result};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// PBKDF2-HMAC-SHA256 (10 000 rounds) + AES-256-CBC + PKCS#7.
///
/// Output layout before base64: 32-byte salt, 16-byte IV, ciphertext.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesCbc;

impl AesCbc {
    fn derive_key(password: &str, salt: &[u8]) -> Zeroizing<[u8; KEY_SIZE]> {
        let mut key = Zeroizing::new([0u8; KEY_SIZE]);
        pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut *key);
        key
    }

    fn random_bytes<const N: usize>() -> Result<[u8; N]> {
        let mut bytes = [0u8; N];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| CryptoError::Random(e.to_string()))?;
        Ok(bytes)
    }
}

impl Cipher for AesCbc {
    fn encrypt(&self, plaintext: &[u8], password: &str) -> Result<String> {
        let salt: [u8; SALT_SIZE] = Self::random_bytes()?;
        let iv: [u8; BLOCK_SIZE] = Self::random_bytes()?;
        let key = Self::derive_key(password, &salt);

        let ciphertext =
            Aes256CbcEnc::new(&(*key).into(), &iv.into()).encrypt_padded_vec_mut::<Pkcs7>(plaintext);
        trace!(
            plaintext = plaintext.len(),
            ciphertext = ciphertext.len(),
            "encrypted"
        );

        let mut blob = Vec::with_capacity(SALT_SIZE + BLOCK_SIZE + ciphertext.len());
        blob.extend_from_slice(&salt);
        blob.extend_from_slice(&iv);
        blob.extend_from_slice(&ciphertext);

        Ok(encode_base64(&blob))
    }

    fn decrypt(&self, encrypted: &str, password: &str) -> Result<Vec<u8>> {
        let data = decode_base64(encrypted)?;

        let min = SALT_SIZE + BLOCK_SIZE;
        if data.len() < min {
            return Err(CryptoError::TooShort {
                len: data.len(),
                min,
            }
            .into());
        }

        let (salt, rest) = data.split_at(SALT_SIZE);
        let (iv, ciphertext) = rest.split_at(BLOCK_SIZE);
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(CryptoError::DecryptionFailed.into());
        }

        let key = Self::derive_key(password, salt);
        let mut iv_block = [0u8; BLOCK_SIZE];
        iv_block.copy_from_slice(iv);

        let plaintext = Aes256CbcDec::new(&(*key).into(), &iv_block.into())
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| CryptoError::DecryptionFailed)?;
        trace!(plaintext = plaintext.len(), "decrypted");

        Ok(plaintext)
    }
}
