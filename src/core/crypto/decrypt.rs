// src/core/crypto/decrypt.rs
use tracing::debug;

use crate::aliases::{ExposeSecret, FilePassword};
use crate::consts::{IV_LEN, SALT_LEN};
use crate::error::CoreError;

use super::cipher::{check_ciphertext_len, decrypt_cbc};
use super::container::Container;
use super::kdf::{derive_key, KdfParams};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Decrypt with default KDF parameters
pub fn decrypt_file_contents(
    password: &FilePassword,
    salt: &[u8; SALT_LEN],
    iv: &[u8; IV_LEN],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    decrypt_file_contents_with(password, salt, iv, ciphertext, &KdfParams::default())
}

/// Re-derive the key from `salt` and undo the CBC transform.
///
/// Fails with [`CoreError::IntegrityOrPassword`] when the padding is invalid,
/// which is what a wrong password produces almost every time. It is not
/// guaranteed: roughly 1 in 256 wrong keys still yields valid-looking
/// padding and returns garbage.
pub fn decrypt_file_contents_with(
    password: &FilePassword,
    salt: &[u8; SALT_LEN],
    iv: &[u8; IV_LEN],
    ciphertext: &[u8],
    params: &KdfParams,
) -> Result<Vec<u8>> {
    let password = password.expose_secret();
    if password.is_empty() {
        return Err(CoreError::EmptyPassword);
    }
    // Reject before paying for the KDF
    check_ciphertext_len(ciphertext.len(), SALT_LEN + IV_LEN + ciphertext.len())?;

    let key = derive_key(password.as_bytes(), salt, params)?;
    let plaintext = decrypt_cbc(key.as_bytes(), iv, ciphertext)?;

    debug!(
        ciphertext_len = ciphertext.len(),
        plaintext_len = plaintext.len(),
        "decrypted buffer"
    );
    Ok(plaintext)
}

/// Decrypt serialized container bytes → plaintext (in-memory)
pub fn decrypt_to_vec(
    password: &FilePassword,
    container: &[u8],
    params: &KdfParams,
) -> Result<Vec<u8>> {
    if password.expose_secret().is_empty() {
        return Err(CoreError::EmptyPassword);
    }
    let Container {
        salt,
        iv,
        ciphertext,
    } = Container::from_bytes(container)?;
    decrypt_file_contents_with(password, &salt, &iv, &ciphertext, params)
}
