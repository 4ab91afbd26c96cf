// src/config/mod.rs
//! Configuration system for aes-cbc-encryptor
//!
//! TOML file with per-field defaults, loaded explicitly by the caller.

pub use app::{load, load_from_path, Config, KdfSettings, OutputSettings, PromptSettings};

mod app;
mod defaults;
