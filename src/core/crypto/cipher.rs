// src/core/crypto/cipher.rs
//! AES-CBC with PKCS#7 padding over in-memory buffers
//!
//! Key size picks the variant: 16 bytes → AES-128, 32 bytes → AES-256.

use aes::{Aes128, Aes256};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::consts::{BLOCK_SIZE, IV_LEN};
use crate::error::CoreError;

pub type Result<T> = std::result::Result<T, CoreError>;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

const BAD_KEY_LEN: &str = "AES key must be 16 or 32 bytes";
const BAD_IV_LEN: &str = "CBC IV must be 16 bytes";

/// Encrypt `plaintext` under `key`/`iv`.
///
/// Padding always adds 1..=16 bytes, so the result is
/// `(plaintext.len() / 16 + 1) * 16` bytes long.
pub fn encrypt_cbc(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    if iv.len() != IV_LEN {
        return Err(CoreError::Precondition(BAD_IV_LEN));
    }

    let ciphertext = match key.len() {
        16 => Aes128CbcEnc::new_from_slices(key, iv)
            .map_err(|_| CoreError::Precondition(BAD_KEY_LEN))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        32 => Aes256CbcEnc::new_from_slices(key, iv)
            .map_err(|_| CoreError::Precondition(BAD_KEY_LEN))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        _ => return Err(CoreError::Precondition(BAD_KEY_LEN)),
    };

    Ok(ciphertext)
}

/// Decrypt and unpad `ciphertext`.
///
/// A bad trailing padding block is the only integrity signal available and
/// surfaces as [`CoreError::IntegrityOrPassword`].
pub fn decrypt_cbc(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    if iv.len() != IV_LEN {
        return Err(CoreError::Precondition(BAD_IV_LEN));
    }
    check_ciphertext_len(ciphertext.len(), ciphertext.len())?;

    let plaintext = match key.len() {
        16 => Aes128CbcDec::new_from_slices(key, iv)
            .map_err(|_| CoreError::Precondition(BAD_KEY_LEN))?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
        32 => Aes256CbcDec::new_from_slices(key, iv)
            .map_err(|_| CoreError::Precondition(BAD_KEY_LEN))?
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext),
        _ => return Err(CoreError::Precondition(BAD_KEY_LEN)),
    };

    plaintext.map_err(|_| CoreError::IntegrityOrPassword)
}

/// Ciphertext must be a nonzero whole number of blocks.
///
/// `container_len` is only used for the error report.
pub(crate) fn check_ciphertext_len(ciphertext_len: usize, container_len: usize) -> Result<()> {
    if ciphertext_len == 0 {
        return Err(CoreError::MalformedContainer {
            len: container_len,
            reason: "no ciphertext after header",
        });
    }
    if ciphertext_len % BLOCK_SIZE != 0 {
        return Err(CoreError::MalformedContainer {
            len: container_len,
            reason: "ciphertext is not a multiple of the 16-byte block size",
        });
    }
    Ok(())
}
