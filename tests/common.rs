// tests/common.rs
//! Shared test utilities — logging setup and cheap KDF parameters

use aes_cbc_encryptor::{FilePassword, KdfParams, KeyLength};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
#[allow(dead_code)]
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times
}

/// Fast KDF for tests that don't pin the work factor
#[allow(dead_code)]
pub fn fast_params() -> KdfParams {
    KdfParams::new(16, KeyLength::Aes256)
}

#[allow(dead_code)]
pub fn password(s: &str) -> FilePassword {
    FilePassword::from(s.to_owned())
}
