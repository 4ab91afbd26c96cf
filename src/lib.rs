// src/lib.rs
//! aes-cbc-encryptor — password-based single-file encryption
//!
//! Features:
//! - PBKDF2-HMAC-SHA256 key derivation (100 000 rounds by default)
//! - AES-128/256 in CBC mode with PKCS#7 padding
//! - Fixed container layout: salt (16) ‖ IV (16) ‖ ciphertext
//! - Zeroize-on-drop key and password wrappers via secrecy
//!
//! The format carries no authentication tag: a wrong password and a
//! corrupted file are reported as the same error.

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;

// Re-export everything users need at the crate root
pub use aliases::{ExposeSecret, FileKey16, FileKey32, FilePassword};
pub use config::{load as load_config, Config};
pub use crate::core::{
    decrypt_file, decrypt_file_contents, decrypt_file_contents_with, decrypt_to_vec,
    derive_key, encrypt_file, encrypt_file_contents, encrypt_file_contents_with,
    encrypt_to_vec, Container, DerivedKey, KdfParams, Result as CoreResult,
};
pub use enums::KeyLength;
pub use error::CoreError;
