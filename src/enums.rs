// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible cipher choices.

use serde::{Deserialize, Serialize};

/// AES key size, selected at derivation time
///
/// The container does not record which variant produced it, so decryption
/// must be run with the same choice as encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u16", into = "u16")]
pub enum KeyLength {
    /// 128-bit key, AES-128 (10 rounds)
    Aes128,
    /// 256-bit key, AES-256 (14 rounds)
    #[default]
    Aes256,
}

impl KeyLength {
    /// Key size in bytes
    pub const fn bytes(self) -> usize {
        match self {
            KeyLength::Aes128 => 16,
            KeyLength::Aes256 => 32,
        }
    }

    pub const fn bits(self) -> u16 {
        (self.bytes() * 8) as u16
    }

    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            128 => Some(KeyLength::Aes128),
            256 => Some(KeyLength::Aes256),
            _ => None,
        }
    }
}

impl TryFrom<u16> for KeyLength {
    type Error = String;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        KeyLength::from_bits(bits)
            .ok_or_else(|| format!("unsupported key size {bits} bits (expected 128 or 256)"))
    }
}

impl From<KeyLength> for u16 {
    fn from(len: KeyLength) -> Self {
        len.bits()
    }
}

impl std::fmt::Display for KeyLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AES-{}-CBC", self.bits())
    }
}
