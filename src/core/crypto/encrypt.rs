// src/core/crypto/encrypt.rs
use rand::RngCore;
use tracing::debug;

use crate::aliases::{ExposeSecret, FilePassword};
use crate::consts::{IV_LEN, SALT_LEN};
use crate::error::CoreError;

use super::cipher::encrypt_cbc;
use super::container::Container;
use super::kdf::{derive_key, KdfParams};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Encrypt plaintext with default KDF parameters → (salt, IV, ciphertext)
pub fn encrypt_file_contents(password: &FilePassword, plaintext: &[u8]) -> Result<Container> {
    encrypt_file_contents_with(password, plaintext, &KdfParams::default())
}

/// Encrypt plaintext under a fresh random salt and IV
pub fn encrypt_file_contents_with(
    password: &FilePassword,
    plaintext: &[u8],
    params: &KdfParams,
) -> Result<Container> {
    let password = password.expose_secret();
    if password.is_empty() {
        return Err(CoreError::EmptyPassword);
    }

    let mut salt = [0u8; SALT_LEN];
    let mut iv = [0u8; IV_LEN];
    let mut rng = rand::rng();
    rng.fill_bytes(&mut salt);
    rng.fill_bytes(&mut iv);

    let key = derive_key(password.as_bytes(), &salt, params)?;
    let ciphertext = encrypt_cbc(key.as_bytes(), &iv, plaintext)?;

    debug!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "encrypted buffer"
    );

    Ok(Container {
        salt,
        iv,
        ciphertext,
    })
}

/// Encrypt plaintext → serialized container bytes (in-memory)
pub fn encrypt_to_vec(
    password: &FilePassword,
    plaintext: &[u8],
    params: &KdfParams,
) -> Result<Vec<u8>> {
    Ok(encrypt_file_contents_with(password, plaintext, params)?.to_bytes())
}
