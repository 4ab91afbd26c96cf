// src/core/crypto/mod.rs
//! Pure cryptographic operations — no I/O
//!
//! All functions work exclusively on in-memory buffers and take every input
//! explicitly; there is no shared backend or global state.
mod cipher;
mod container;
mod decrypt;
mod encrypt;
mod kdf;

pub use cipher::{decrypt_cbc, encrypt_cbc};
pub use container::{is_container_len, looks_like_container, Container};
pub use decrypt::{decrypt_file_contents, decrypt_file_contents_with, decrypt_to_vec};
pub use encrypt::{encrypt_file_contents, encrypt_file_contents_with, encrypt_to_vec};
pub use kdf::{derive_key, DerivedKey, KdfParams};
