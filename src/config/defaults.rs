// src/config/defaults.rs
use std::num::NonZeroU32;

use crate::config::app::{KdfSettings, OutputSettings, PromptSettings};
use crate::consts::{DEFAULT_DECRYPTED_SUFFIX, DEFAULT_ENCRYPTED_EXTENSION, DEFAULT_KDF_ITERATIONS};
use crate::enums::KeyLength;

pub fn default_iterations() -> NonZeroU32 {
    NonZeroU32::new(DEFAULT_KDF_ITERATIONS).unwrap_or(NonZeroU32::MIN)
}

pub fn default_key_bits() -> KeyLength {
    KeyLength::Aes256
}

pub fn default_encrypted_extension() -> String {
    DEFAULT_ENCRYPTED_EXTENSION.into()
}

pub fn default_decrypted_suffix() -> String {
    DEFAULT_DECRYPTED_SUFFIX.into()
}

pub fn default_confirm_overwrite() -> bool {
    true
}

pub fn default_kdf() -> KdfSettings {
    KdfSettings {
        iterations: default_iterations(),
        key_bits: default_key_bits(),
    }
}

pub fn default_output() -> OutputSettings {
    OutputSettings {
        encrypted_extension: default_encrypted_extension(),
        decrypted_suffix: default_decrypted_suffix(),
    }
}

pub fn default_prompts() -> PromptSettings {
    PromptSettings {
        confirm_overwrite: default_confirm_overwrite(),
    }
}
