// src/core/crypto/container.rs
//! On-disk framing: salt (16) ‖ IV (16) ‖ ciphertext
//!
//! No magic number and no version field. A container is recognized only by
//! its length: at least one ciphertext block after the 32-byte header.

use crate::consts::{HEADER_LEN, IV_LEN, SALT_LEN};
use crate::error::CoreError;

use super::cipher::check_ciphertext_len;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub salt: [u8; SALT_LEN],
    pub iv: [u8; IV_LEN],
    pub ciphertext: Vec<u8>,
}

impl Container {
    /// Split stored bytes into salt, IV and ciphertext
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(CoreError::MalformedContainer {
                len: data.len(),
                reason: "shorter than the 32-byte salt and IV header",
            });
        }

        let (salt, rest) = data.split_at(SALT_LEN);
        let (iv, ciphertext) = rest.split_at(IV_LEN);
        check_ciphertext_len(ciphertext.len(), data.len())?;

        let mut container = Container {
            salt: [0u8; SALT_LEN],
            iv: [0u8; IV_LEN],
            ciphertext: ciphertext.to_vec(),
        };
        container.salt.copy_from_slice(salt);
        container.iv.copy_from_slice(iv);
        Ok(container)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.ciphertext.len());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&self.ciphertext);
        out
    }
}

/// Cheap structural check without copying — does not prove the data decrypts
pub fn looks_like_container(data: &[u8]) -> bool {
    is_container_len(data.len())
}

/// Same check from a length alone, e.g. file metadata
pub fn is_container_len(len: usize) -> bool {
    len >= HEADER_LEN && check_ciphertext_len(len - HEADER_LEN, len).is_ok()
}
