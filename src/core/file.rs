// src/core/file.rs
//! File-level encryption/decryption operations
//!
//! This module handles reading and writing whole files,
//! building on the pure crypto primitives from `core::crypto`.
//! Also derives the default output filenames.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::aliases::FilePassword;
use crate::core::crypto::{decrypt_to_vec, encrypt_to_vec, KdfParams};
use crate::CoreResult as Result;

/// Encrypt a file on disk
///
/// Reads the plaintext file, encrypts it in-memory, writes the container.
/// Returns the plaintext size in bytes.
pub fn encrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    password: &FilePassword,
    params: &KdfParams,
) -> Result<u64> {
    let plaintext = std::fs::read(input_path.as_ref())?;
    let container = encrypt_to_vec(password, &plaintext, params)?;
    write_atomic(output_path.as_ref(), &container)?;
    Ok(plaintext.len() as u64)
}

/// Decrypt a container file on disk
///
/// Nothing is written unless decryption succeeds.
/// Returns the plaintext size in bytes.
pub fn decrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    password: &FilePassword,
    params: &KdfParams,
) -> Result<u64> {
    let container = std::fs::read(input_path.as_ref())?;
    let plaintext = decrypt_to_vec(password, &container, params)?;
    write_atomic(output_path.as_ref(), &plaintext)?;
    Ok(plaintext.len() as u64)
}

/// Write via a sibling temp file + rename so readers never see a partial file
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    debug!(path = %path.display(), bytes = data.len(), "wrote output");
    Ok(())
}

/// `<input>.<extension>` — `report.pdf` → `report.pdf.enc`
pub fn encrypted_path(input: &Path, extension: &str) -> PathBuf {
    let mut name: OsString = input.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Replace a trailing `.<extension>` with `suffix`, or append `suffix`
///
/// `report.pdf.enc` → `report.pdf_decrypted`, `blob` → `blob_decrypted`.
/// The extension matches ASCII case-insensitively, as in [`has_extension`].
pub fn decrypted_path(input: &Path, extension: &str, suffix: &str) -> PathBuf {
    let name = input.to_string_lossy();
    let stem = strip_extension(&name, extension).unwrap_or(&name);
    PathBuf::from(format!("{stem}{suffix}"))
}

/// Does the file name end in `.<extension>` (ASCII case-insensitive)?
pub fn has_extension(path: &Path, extension: &str) -> bool {
    strip_extension(&path.to_string_lossy(), extension).is_some()
}

fn strip_extension<'a>(name: &'a str, extension: &str) -> Option<&'a str> {
    let split = name.len().checked_sub(extension.len() + 1)?;
    if !name.is_char_boundary(split) {
        return None;
    }
    let (stem, tail) = name.split_at(split);
    let matches = tail
        .strip_prefix('.')
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
    // A bare `.enc` (or `dir/.enc`) is a name, not an extension
    (matches && !stem.is_empty() && !stem.ends_with(['/', '\\'])).then_some(stem)
}
