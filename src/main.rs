use anyhow::Result;
use arq_keys::{Report, format, read_master_keys, verify};
use clap::Parser;
use clap::builder::{OsStringValueParser, TypedValueParser};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

#[derive(Debug, Parser)]
#[command(name = "arq-keys")]
#[command(
    version,
    about = "Checks a password against an Arq Cloud Backup encrypted_master_keys.dat file.",
    arg_required_else_help = true
)]
struct Cli {
    /// Path to encrypted_master_keys.dat
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Backup set password, passed to the KDF as raw bytes
    #[arg(
        value_name = "PASSWORD",
        value_parser = OsStringValueParser::new().try_map(non_empty_password)
    )]
    password: OsString,

    /// Only print the candidate results and the verdict
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Log filter for diagnostics on stderr (e.g. "debug")
    #[arg(long, value_name = "FILTER", env = "ARQ_KEYS_LOG", default_value = "warn")]
    log_level: String,
}

fn non_empty_password(value: OsString) -> Result<OsString, &'static str> {
    if value.is_empty() {
        return Err("password must not be empty");
    }
    Ok(value)
}

fn init_logging(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(&args.log_level)?;

    let password = Zeroizing::new(args.password.into_encoded_bytes());

    let data = read_master_keys(&args.path)?;
    let file = format::parse(&data)?;
    let verification = verify(&file, &password)?;
    drop(password);

    tracing::info!(verdict = ?verification.verdict(), "verification finished");

    print!("{}", Report::new(&file, &verification).quiet(args.quiet));

    Ok(())
}
