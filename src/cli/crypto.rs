//! File crypto commands: `encrypt`, `decrypt`, `hash` and `base64`.

use std::path::{Path, PathBuf};

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{output, prompt};
use crate::core::constants::{BASE64_EXT, ENCRYPTED_EXT};
use crate::core::crypto::{self, AesCbc, Cipher};
use crate::core::files;
use crate::error::{Error, Result};

/// Direction for the `base64` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Base64Action {
    Encode,
    Decode,
}

/// Password-encrypt `file`.
pub fn encrypt(file: &Path, out: Option<PathBuf>) -> Result<()> {
    info!(file = %file.display(), "encrypting");

    let plaintext = Zeroizing::new(read(file)?);
    let password = prompt::password(true)?;
    let encrypted = AesCbc.encrypt(&plaintext, &password)?;

    let out = out.unwrap_or_else(|| files::append_suffix(file, ENCRYPTED_EXT));
    files::write(&out, encrypted.as_bytes())?;

    output::success(&format!("encrypted to {}", output::path(&out)));
    Ok(())
}

/// Decrypt a file produced by [`encrypt`].
pub fn decrypt(file: &Path, out: Option<PathBuf>) -> Result<()> {
    info!(file = %file.display(), "decrypting");

    let encrypted = String::from_utf8_lossy(&read(file)?).into_owned();
    let password = prompt::password(false)?;
    let plaintext = Zeroizing::new(AesCbc.decrypt(&encrypted, &password)?);

    let out = out.unwrap_or_else(|| files::strip_suffix_or(file, ENCRYPTED_EXT, ".decrypted"));
    files::write_private(&out, &plaintext)?;

    output::success(&format!("decrypted to {}", output::path(&out)));
    Ok(())
}

/// Print the SHA-256 digest of `file`.
pub fn hash(file: &Path) -> Result<()> {
    info!(file = %file.display(), "hashing");

    println!("{}", crypto::hash_sha256(&read(file)?));
    Ok(())
}

/// Base64-encode or decode `file`.
pub fn base64(action: Base64Action, file: &Path, out: Option<PathBuf>) -> Result<()> {
    info!(file = %file.display(), ?action, "base64");

    let data = read(file)?;
    let (bytes, default_out) = match action {
        Base64Action::Encode => (
            crypto::encode_base64(&data).into_bytes(),
            files::append_suffix(file, BASE64_EXT),
        ),
        Base64Action::Decode => (
            crypto::decode_base64(&String::from_utf8_lossy(&data))?,
            files::replace_suffix(file, BASE64_EXT, ".decoded"),
        ),
    };

    let out = out.unwrap_or(default_out);
    files::write_private(&out, &bytes)?;

    output::success(&format!("wrote {}", output::path(&out)));
    Ok(())
}

fn read(file: &Path) -> Result<Vec<u8>> {
    if !file.exists() {
        return Err(Error::NotFound(file.to_path_buf()));
    }
    Ok(std::fs::read(file)?)
}
