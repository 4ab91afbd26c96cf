// src/error.rs
//! Public error type for the entire crate

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("password must not be empty")]
    EmptyPassword,

    #[error("malformed container ({len} bytes): {reason}")]
    MalformedContainer { len: usize, reason: &'static str },

    /// Padding check failed after decryption. Without an authentication tag
    /// a wrong password and a corrupted file look identical.
    #[error("decryption failed: wrong password or corrupted/tampered data")]
    IntegrityOrPassword,

    #[error("precondition violated: {0}")]
    Precondition(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
