// src/config/app.rs
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::defaults::*;
use crate::consts::{CONFIG_DIR_NAME, CONFIG_ENV_VAR};
use crate::core::crypto::KdfParams;
use crate::enums::KeyLength;
use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_kdf")]
    pub kdf: KdfSettings,
    #[serde(default = "default_output")]
    pub output: OutputSettings,
    #[serde(default = "default_prompts")]
    pub prompts: PromptSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KdfSettings {
    #[serde(default = "default_iterations")]
    pub iterations: NonZeroU32,
    #[serde(default = "default_key_bits")]
    pub key_bits: KeyLength,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    /// Without the leading dot
    #[serde(default = "default_encrypted_extension")]
    pub encrypted_extension: String,
    #[serde(default = "default_decrypted_suffix")]
    pub decrypted_suffix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptSettings {
    #[serde(default = "default_confirm_overwrite")]
    pub confirm_overwrite: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            kdf: default_kdf(),
            output: default_output(),
            prompts: default_prompts(),
        }
    }
}

impl Config {
    pub fn kdf_params(&self) -> KdfParams {
        KdfParams::new(self.kdf.iterations.get(), self.kdf.key_bits)
    }

    pub fn key_length(&self) -> KeyLength {
        self.kdf.key_bits
    }
}

/// Resolve and load the config
///
/// `explicit` (from `--config` or `AES_ENCRYPT_CONFIG`) must exist. Otherwise
/// the per-user config file is used if present, else built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config, CoreError> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) {
        return load_from_path(&path);
    }

    match user_config_path() {
        Some(path) if path.is_file() => load_from_path(&path),
        _ => {
            debug!("no config file found — using built-in defaults");
            Ok(Config::default())
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config, CoreError> {
    let content = std::fs::read_to_string(path)?;
    let conf: Config = toml::from_str(&content).map_err(|source| CoreError::Config {
        path: path.to_owned(),
        source,
    })?;
    debug!(path = %path.display(), "loaded config");
    Ok(conf)
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
}
