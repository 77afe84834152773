use anyhow::{Context, Result};
use chrono::DateTime;
use clap::{Parser, Subcommand};
use keyport::try_import;
use std::fs;
use std::path::PathBuf;

mod auth;

#[derive(Debug, Parser)]
#[command(name = "keyport")]
#[command(
    version,
    about = "Offline importer for encrypted polkadot{.js} extension account exports."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decrypts an exported account and prints the recovered keypair
    #[command(arg_required_else_help = true)]
    Import {
        /// Path to the exported account JSON file
        file: PathBuf,

        /// Also print the sr25519 secret key
        #[arg(long, default_value_t = false)]
        show_secret: bool,
    },

    /// Shows address, metadata and declared encoding without decrypting
    #[command(arg_required_else_help = true)]
    Info { file: PathBuf },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    match args.command {
        Commands::Import { file, show_secret } => {
            let raw = fs::read(&file).with_context(|| format!("cannot read {}", file.display()))?;
            let passphrase = auth::read_passphrase()?;

            let account = try_import(&raw, passphrase.as_bytes())?;
            drop(passphrase);

            println!("address    : {}", account.address());
            if !account.meta().name.is_empty() {
                println!("name       : {}", account.meta().name);
            }
            if let Some(created) = created_at(account.meta().when_created) {
                println!("created    : {created}");
            }
            println!("public key : 0x{}", hex::encode(account.public_key()));
            if show_secret {
                println!("secret key : 0x{}", hex::encode(account.private_key()));
            } else {
                println!("secret key : (hidden; pass --show-secret to print)");
            }
        }
        Commands::Info { file } => {
            let raw = fs::read(&file).with_context(|| format!("cannot read {}", file.display()))?;
            let account: keyport::ExportedAccount = serde_json::from_slice(&raw)
                .with_context(|| format!("{} is not an exported account file", file.display()))?;

            println!("address    : {}", account.address);
            if !account.meta.name.is_empty() {
                println!("name       : {}", account.meta.name);
            }
            if !account.meta.genesis_hash.is_empty() {
                println!("genesis    : {}", account.meta.genesis_hash);
            }
            println!("hidden     : {}", account.meta.is_hidden);
            if let Some(created) = created_at(account.meta.when_created) {
                println!("created    : {created}");
            }
            println!(
                "encoding   : v{} [{}] [{}]",
                account.encoding.version,
                account.encoding.content.join(", "),
                account.encoding.type_.join(", "),
            );
            println!(
                "supported  : {}",
                if account.encoding.is_supported() { "yes" } else { "no" }
            );
        }
    }

    Ok(())
}

fn created_at(when_created_ms: u64) -> Option<String> {
    if when_created_ms == 0 {
        return None;
    }
    let dt = DateTime::from_timestamp_millis(when_created_ms as i64)?;
    Some(dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}
