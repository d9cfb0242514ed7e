//! Sealed-box backend implementation.
//!
//! Each call generates an ephemeral keypair, derives a shared key with the
//! recipient's public key and prefixes the ephemeral public key to the
//! ciphertext, so the output is `ephemeral_pk (32) || mac (16) || ciphertext`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use crypto_box::aead::OsRng;
use crypto_box::{PublicKey, SecretKey};
use tracing::trace;

use super::Cipher;
use crate::error::{CipherError, Result};

/// Anonymous libsodium-compatible sealed box.
pub struct SealedBox;

impl Cipher for SealedBox {
    type Recipient = PublicKey;
    type Identity = SecretKey;

    fn name(&self) -> &'static str {
        "sealed-box"
    }

    fn encrypt(&self, plaintext: &str, recipient: &PublicKey) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "sealing");

        let sealed = recipient
            .seal(&mut OsRng, plaintext.as_bytes())
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        trace!(ciphertext_len = sealed.len(), "sealed");

        Ok(BASE64.encode(sealed))
    }

    fn decrypt(&self, encrypted: &str, identity: &SecretKey) -> Result<String> {
        let sealed = BASE64
            .decode(encrypted.trim())
            .map_err(|e| CipherError::DecryptionFailed(format!("invalid base64: {}", e)))?;

        trace!(ciphertext_len = sealed.len(), "opening");

        let opened = identity
            .unseal(&sealed)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        String::from_utf8(opened)
            .map_err(|e| CipherError::DecryptionFailed(format!("UTF-8 error: {}", e)).into())
    }
}

/// Parse a base64-encoded raw X25519 public key.
///
/// # Errors
///
/// Returns `CipherError::InvalidBase64` if the key is not standard base64,
/// or `CipherError::InvalidKeyLength` if it does not decode to 32 bytes.
pub fn parse_recipient(key: &str) -> Result<PublicKey> {
    let bytes = BASE64
        .decode(key.trim())
        .map_err(|_| CipherError::InvalidBase64)?;

    let raw: [u8; 32] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| CipherError::InvalidKeyLength(bytes.len()))?;

    Ok(PublicKey::from(raw))
}
