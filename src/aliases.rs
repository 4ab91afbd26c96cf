// src/aliases.rs
//! Secret wrappers used throughout aes-cbc-encryptor
//!
//! All of them zeroize their contents on drop and redact `Debug`.

pub use secrecy::{ExposeSecret, SecretBox, SecretString};

// Fixed-size secrets
pub type FileKey16 = SecretBox<[u8; 16]>; // AES-128 key derived from a password
pub type FileKey32 = SecretBox<[u8; 32]>; // AES-256 key derived from a password

// Dynamic secrets
pub type FilePassword = SecretString; // User password, UTF-8 encoded before derivation
