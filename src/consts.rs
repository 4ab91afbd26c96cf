// src/consts.rs
//! Shared constants — container layout and security parameters

/// Length of the random PBKDF2 salt stored at the start of every container
pub const SALT_LEN: usize = 16;

/// Length of the CBC initialization vector stored after the salt
pub const IV_LEN: usize = 16;

/// AES block size; ciphertext is always a nonzero multiple of this
pub const BLOCK_SIZE: usize = 16;

/// Salt ‖ IV — everything before the ciphertext
pub const HEADER_LEN: usize = SALT_LEN + IV_LEN;

/// Default PBKDF2-HMAC-SHA256 rounds
// Changing this breaks decryption of every existing container
pub const DEFAULT_KDF_ITERATIONS: u32 = 100_000;

/// Extension appended to encrypted files (without the dot)
pub const DEFAULT_ENCRYPTED_EXTENSION: &str = "enc";

/// Replaces the encrypted extension when naming decrypted output
pub const DEFAULT_DECRYPTED_SUFFIX: &str = "_decrypted";

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV_VAR: &str = "AES_ENCRYPT_CONFIG";

/// Directory under the platform config dir holding `config.toml`
pub const CONFIG_DIR_NAME: &str = "aes-encrypt";
