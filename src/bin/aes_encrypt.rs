// src/bin/aes_encrypt.rs
//! aes-encrypt — encrypt or decrypt one file with a password

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use aes_cbc_encryptor::aliases::FilePassword;
use aes_cbc_encryptor::core::{
    decrypt_file, decrypted_path, encrypt_file, encrypted_path, has_extension, is_container_len,
};
use aes_cbc_encryptor::{load_config, Config, CoreError, KdfParams, KeyLength};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

#[derive(Parser, Debug)]
#[command(
    name = "aes-encrypt",
    version,
    about = "AES-128/256-CBC file encryptor with PBKDF2-HMAC-SHA256 key derivation"
)]
struct Cli {
    /// Config file (TOML)
    #[arg(long, global = true, env = "AES_ENCRYPT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt FILE into FILE.enc
    Encrypt(FileArgs),
    /// Decrypt FILE.enc into FILE_decrypted
    Decrypt(FileArgs),
}

#[derive(Args, Debug)]
struct FileArgs {
    /// Input file
    file: PathBuf,

    /// Password (prompted without echo when omitted)
    #[arg(short, long, env = "AES_ENCRYPT_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Output path (defaults to the derived name)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite an existing output without asking
    #[arg(short = 'y', long)]
    force: bool,

    /// AES key size: 128 or 256 (must match between encrypt and decrypt)
    #[arg(long, value_parser = parse_key_bits)]
    key_bits: Option<KeyLength>,

    /// PBKDF2 rounds (must match between encrypt and decrypt)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    iterations: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Encrypt,
    Decrypt,
}

/// Reported when the user declines to overwrite
#[derive(Debug)]
struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("operation cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Password entry failed policy before reaching the core
#[derive(Debug)]
struct PasswordMismatch;

impl std::fmt::Display for PasswordMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("passwords do not match")
    }
}

impl std::error::Error for PasswordMismatch {}

fn parse_key_bits(s: &str) -> std::result::Result<KeyLength, String> {
    let bits: u16 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number (expected 128 or 256)"))?;
    KeyLength::try_from(bits)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    let (mode, args) = match cli.command {
        Command::Encrypt(args) => (Mode::Encrypt, args),
        Command::Decrypt(args) => (Mode::Decrypt, args),
    };

    if !args.file.is_file() {
        bail!("File not found: {}", args.file.display());
    }

    let params = kdf_params(&config, &args);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&config, mode, &args.file));

    if mode == Mode::Encrypt && has_extension(&args.file, &config.output.encrypted_extension) {
        let len = std::fs::metadata(&args.file)
            .with_context(|| format!("failed to stat {}", args.file.display()))?
            .len();
        if usize::try_from(len).is_ok_and(is_container_len) {
            warn!(
                "{} already looks like an encrypted file; encrypting it again",
                args.file.display()
            );
        }
    }

    if needs_overwrite_prompt(output.exists(), args.force, &config) {
        confirm_overwrite(&output)?;
    }

    let password = read_password(args.password, mode)?;
    info!(?mode, key = %params.key_length, iterations = params.iterations, "starting");

    match mode {
        Mode::Encrypt => {
            encrypt_file(&args.file, &output, &password, &params)
                .with_context(|| format!("failed to encrypt {}", args.file.display()))?;
            println!("Encrypted: {} -> {}", args.file.display(), output.display());
        }
        Mode::Decrypt => {
            decrypt_file(&args.file, &output, &password, &params)
                .with_context(|| format!("failed to decrypt {}", args.file.display()))?;
            println!("Decrypted: {} -> {}", args.file.display(), output.display());
        }
    }

    Ok(())
}

fn kdf_params(config: &Config, args: &FileArgs) -> KdfParams {
    let mut params = config.kdf_params();
    if let Some(bits) = args.key_bits {
        params.key_length = bits;
    }
    if let Some(iterations) = args.iterations {
        params.iterations = iterations;
    }
    params
}

fn default_output(config: &Config, mode: Mode, input: &Path) -> PathBuf {
    match mode {
        Mode::Encrypt => encrypted_path(input, &config.output.encrypted_extension),
        Mode::Decrypt => decrypted_path(
            input,
            &config.output.encrypted_extension,
            &config.output.decrypted_suffix,
        ),
    }
}

fn needs_overwrite_prompt(output_exists: bool, force: bool, config: &Config) -> bool {
    output_exists && !force && config.prompts.confirm_overwrite
}

fn confirm_overwrite(output: &Path) -> Result<()> {
    print!("{} already exists. Overwrite? [y/N] ", output.display());
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(()),
        _ => Err(Cancelled.into()),
    }
}

fn read_password(given: Option<String>, mode: Mode) -> Result<FilePassword> {
    if let Some(pwd) = given {
        let pwd = Zeroizing::new(pwd);
        return Ok(FilePassword::from(pwd.as_str()));
    }

    let first = Zeroizing::new(
        rpassword::prompt_password("Password: ").context("failed to read password")?,
    );
    if mode == Mode::Encrypt && !first.is_empty() {
        let second = Zeroizing::new(
            rpassword::prompt_password("Confirm password: ").context("failed to read password")?,
        );
        check_confirmation(&first, &second)?;
    }
    Ok(FilePassword::from(first.as_str()))
}

fn check_confirmation(first: &str, second: &str) -> Result<()> {
    if first != second {
        return Err(PasswordMismatch.into());
    }
    Ok(())
}

/// Print a user-facing message and pick an exit status per error kind
fn report(err: &anyhow::Error) -> ExitCode {
    let (code, message) = classify(err);
    eprintln!("{message}");
    ExitCode::from(code)
}

/// Exit status and user-facing message for a failed run
fn classify(err: &anyhow::Error) -> (u8, String) {
    if err.downcast_ref::<Cancelled>().is_some() {
        return (5, "Cancelled; nothing was written.".into());
    }
    if err.downcast_ref::<PasswordMismatch>().is_some() {
        return (2, "Error: passwords do not match.".into());
    }

    match err.chain().find_map(|cause| cause.downcast_ref::<CoreError>()) {
        Some(CoreError::EmptyPassword) => (2, "Error: the password must not be empty.".into()),
        Some(CoreError::MalformedContainer { .. }) => (
            3,
            format!("Error: {err:#}\nThe input is not a file produced by aes-encrypt."),
        ),
        Some(CoreError::IntegrityOrPassword) => (
            4,
            "Error: decryption failed.\n\
             Either the password (or --key-bits/--iterations) is wrong, or the file is \
             corrupted. This format has no integrity tag, so the two cannot be told apart."
                .into(),
        ),
        _ => (1, format!("Error: {err:#}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of(err: anyhow::Error) -> u8 {
        classify(&err).0
    }

    #[test]
    fn test_exit_codes_per_error_kind() {
        assert_eq!(code_of(Cancelled.into()), 5);
        assert_eq!(code_of(PasswordMismatch.into()), 2);
        assert_eq!(code_of(CoreError::EmptyPassword.into()), 2);
        assert_eq!(
            code_of(
                CoreError::MalformedContainer {
                    len: 33,
                    reason: "test"
                }
                .into()
            ),
            3
        );
        assert_eq!(code_of(CoreError::IntegrityOrPassword.into()), 4);
        assert_eq!(code_of(CoreError::Precondition("test").into()), 1);
        assert_eq!(code_of(anyhow::anyhow!("File not found: x")), 1);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err = anyhow::Error::from(CoreError::IntegrityOrPassword)
            .context("failed to decrypt a.enc");
        let (code, message) = classify(&err);
        assert_eq!(code, 4);
        assert!(message.contains("cannot be told apart"));

        let err = anyhow::Error::from(Cancelled).context("while writing");
        assert_eq!(classify(&err).0, 5);
    }

    #[test]
    fn test_password_confirmation() {
        assert!(check_confirmation("hunter2", "hunter2").is_ok());
        let err = check_confirmation("hunter2", "hunter3").unwrap_err();
        assert_eq!(classify(&err).0, 2);
    }

    #[test]
    fn test_overwrite_prompt_rules() {
        let mut config = Config::default();
        assert!(needs_overwrite_prompt(true, false, &config));
        assert!(!needs_overwrite_prompt(true, true, &config));
        assert!(!needs_overwrite_prompt(false, false, &config));

        config.prompts.confirm_overwrite = false;
        assert!(!needs_overwrite_prompt(true, false, &config));
    }

    #[test]
    fn test_default_output_names() {
        let config = Config::default();
        assert_eq!(
            default_output(&config, Mode::Encrypt, Path::new("doc.txt")),
            Path::new("doc.txt.enc")
        );
        assert_eq!(
            default_output(&config, Mode::Decrypt, Path::new("doc.txt.enc")),
            Path::new("doc.txt_decrypted")
        );
        assert_eq!(
            default_output(&config, Mode::Decrypt, Path::new("DOC.ENC")),
            Path::new("DOC_decrypted")
        );
    }

    #[test]
    fn test_cli_flags_override_config() {
        let cli = Cli::parse_from([
            "aes-encrypt",
            "decrypt",
            "a.enc",
            "--key-bits",
            "128",
            "--iterations",
            "7",
        ]);
        let Command::Decrypt(args) = cli.command else {
            panic!("expected decrypt");
        };
        let params = kdf_params(&Config::default(), &args);
        assert_eq!(params, KdfParams::new(7, KeyLength::Aes128));

        assert!(Cli::try_parse_from(["aes-encrypt", "encrypt", "a", "--key-bits", "192"]).is_err());
        assert!(Cli::try_parse_from(["aes-encrypt", "encrypt", "a", "--iterations", "0"]).is_err());
    }
}
