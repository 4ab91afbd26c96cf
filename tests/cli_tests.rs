// tests/cli_tests.rs
//! End-to-end runs of the `aes-encrypt` binary
#![cfg(feature = "cli")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::{tempdir, TempDir};

const BIN: &str = env!("CARGO_BIN_EXE_aes-encrypt");

/// Temp dir with a fast-KDF config so runs don't pick up the user's config
fn workspace() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[kdf]\niterations = 16\n").unwrap();
    dir
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(BIN)
        .current_dir(dir)
        .arg("--config")
        .arg(dir.join("config.toml"))
        .args(args)
        .env_remove("AES_ENCRYPT_PASSWORD")
        .env_remove("AES_ENCRYPT_CONFIG")
        .stdin(Stdio::null())
        .output()
        .expect("spawn aes-encrypt")
}

fn code(output: &Output) -> i32 {
    output.status.code().expect("exited normally")
}

#[test]
fn test_encrypt_then_decrypt_with_default_names() {
    let dir = workspace();
    fs::write(dir.path().join("notes.txt"), b"meet at noon").unwrap();

    let out = run(dir.path(), &["encrypt", "notes.txt", "-p", "mypass123"]);
    assert_eq!(code(&out), 0, "{}", String::from_utf8_lossy(&out.stderr));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Encrypted: notes.txt -> notes.txt.enc"));

    let out = run(dir.path(), &["decrypt", "notes.txt.enc", "-p", "mypass123"]);
    assert_eq!(code(&out), 0, "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        fs::read(dir.path().join("notes.txt_decrypted")).unwrap(),
        b"meet at noon"
    );
}

#[test]
fn test_exit_codes() {
    let dir = workspace();
    fs::write(dir.path().join("a.txt"), b"payload").unwrap();
    fs::write(dir.path().join("short.enc"), [0u8; 33]).unwrap();

    // missing input
    assert_eq!(code(&run(dir.path(), &["encrypt", "absent.txt", "-p", "pw"])), 1);
    // empty password
    assert_eq!(code(&run(dir.path(), &["encrypt", "a.txt", "-p", ""])), 2);
    // malformed container
    assert_eq!(code(&run(dir.path(), &["decrypt", "short.enc", "-p", "pw"])), 3);

    assert_eq!(code(&run(dir.path(), &["encrypt", "a.txt", "-p", "right"])), 0);
    // A wrong key yields valid padding about 1 time in 256
    let wrong = (0..5)
        .map(|i| {
            code(&run(
                dir.path(),
                &["decrypt", "a.txt.enc", "-p", &format!("wrong-{i}"), "-y"],
            ))
        })
        .filter(|&c| c == 4)
        .count();
    assert!(wrong >= 4, "only {wrong}/5 wrong passwords rejected");
}

#[test]
fn test_existing_output_needs_confirmation() {
    let dir = workspace();
    fs::write(dir.path().join("a.txt"), b"new").unwrap();
    fs::write(dir.path().join("a.txt.enc"), b"keep me").unwrap();

    // stdin is closed, so the [y/N] prompt reads "no"
    let out = run(dir.path(), &["encrypt", "a.txt", "-p", "pw"]);
    assert_eq!(code(&out), 5);
    assert_eq!(fs::read(dir.path().join("a.txt.enc")).unwrap(), b"keep me");

    let out = run(dir.path(), &["encrypt", "a.txt", "-p", "pw", "-y"]);
    assert_eq!(code(&out), 0);
    assert_ne!(fs::read(dir.path().join("a.txt.enc")).unwrap(), b"keep me");
}
