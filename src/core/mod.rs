// src/core/mod.rs
pub mod crypto;
pub mod file;

pub use crypto::*;
pub use file::*;

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
