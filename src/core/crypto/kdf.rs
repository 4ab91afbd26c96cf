// src/core/crypto/kdf.rs
//! Key derivation: password + salt → AES key via PBKDF2-HMAC-SHA256

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use tracing::debug;
use zeroize::Zeroize;

use crate::aliases::{ExposeSecret, FileKey16, FileKey32};
use crate::consts::DEFAULT_KDF_ITERATIONS;
use crate::enums::KeyLength;
use crate::error::CoreError;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Work factor and output size for [`derive_key`]
///
/// Both values must match between encryption and decryption; neither is
/// stored in the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// PBKDF2 rounds (default: 100 000)
    pub iterations: u32,
    /// Derived key size (default: 256-bit)
    pub key_length: KeyLength,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_KDF_ITERATIONS,
            key_length: KeyLength::Aes256,
        }
    }
}

impl KdfParams {
    pub fn new(iterations: u32, key_length: KeyLength) -> Self {
        Self {
            iterations,
            key_length,
        }
    }
}

/// A password-derived AES key — zeroized on drop
pub enum DerivedKey {
    Aes128(FileKey16),
    Aes256(FileKey32),
}

impl DerivedKey {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            DerivedKey::Aes128(key) => key.expose_secret().as_slice(),
            DerivedKey::Aes256(key) => key.expose_secret().as_slice(),
        }
    }

    pub fn key_length(&self) -> KeyLength {
        match self {
            DerivedKey::Aes128(_) => KeyLength::Aes128,
            DerivedKey::Aes256(_) => KeyLength::Aes256,
        }
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("length", &self.key_length())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Derive an AES key from a password and salt.
///
/// Same `(password, salt, params)` always yields the same key. An empty salt
/// or zero iterations is a caller bug and returns [`CoreError::Precondition`].
pub fn derive_key(password: &[u8], salt: &[u8], params: &KdfParams) -> Result<DerivedKey> {
    if salt.is_empty() {
        return Err(CoreError::Precondition("KDF salt must not be empty"));
    }
    if params.iterations == 0 {
        return Err(CoreError::Precondition("KDF iterations must be at least 1"));
    }

    debug!(
        iterations = params.iterations,
        key_bits = params.key_length.bits(),
        "deriving key"
    );

    let key = match params.key_length {
        KeyLength::Aes128 => {
            let mut bytes = [0u8; 16];
            pbkdf2_hmac::<Sha256>(password, salt, params.iterations, &mut bytes);
            let key = FileKey16::new(Box::new(bytes));
            bytes.zeroize();
            DerivedKey::Aes128(key)
        }
        KeyLength::Aes256 => {
            let mut bytes = [0u8; 32];
            pbkdf2_hmac::<Sha256>(password, salt, params.iterations, &mut bytes);
            let key = FileKey32::new(Box::new(bytes));
            bytes.zeroize();
            DerivedKey::Aes256(key)
        }
    };

    Ok(key)
}
