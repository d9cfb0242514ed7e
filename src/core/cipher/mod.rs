//! Public-key encryption for organization secrets.
//!
//! GitHub only accepts secrets sealed with libsodium's anonymous sealed box
//! (X25519 + XSalsa20-Poly1305). The sender is not authenticated and no
//! signing step may be added: the secrets endpoint expects exactly this
//! format.

use crate::error::Result;

mod sealed;

pub use sealed::{parse_recipient, SealedBox};

/// Re-exported key types so callers don't need `crypto_box` directly.
pub use crypto_box::{PublicKey, SecretKey};

/// Cryptographic backend trait.
///
/// Abstracts encryption and decryption so the orchestration code does not
/// depend on a particular construction.
pub trait Cipher {
    /// Type representing a recipient public key.
    type Recipient;

    /// Type representing a private key.
    type Identity;

    /// Encrypt plaintext for a single recipient.
    ///
    /// # Returns
    ///
    /// Base64-encoded ciphertext, ready to embed in JSON.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    fn encrypt(&self, plaintext: &str, recipient: &Self::Recipient) -> Result<String>;

    /// Decrypt a base64-encoded ciphertext with a private key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the input is not valid base64, was sealed for
    /// another key, or has been tampered with.
    fn decrypt(&self, encrypted: &str, identity: &Self::Identity) -> Result<String>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// Seal `plaintext` for the holder of a base64-encoded X25519 public key.
///
/// This is a convenience wrapper around [`parse_recipient`] and
/// `SealedBox::encrypt`.
///
/// # Errors
///
/// Returns `CipherError` if the key is malformed or sealing fails.
pub fn encrypt(public_key_b64: &str, plaintext: &str) -> Result<String> {
    let recipient = parse_recipient(public_key_b64)?;
    SealedBox.encrypt(plaintext, &recipient)
}
