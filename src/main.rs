//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_reputation` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::process;

use url_reputation::initialization::init_logger_with;
use url_reputation::{ClientConfig, LogFormat, LogLevel, ReputationClient};

/// Scan URLs with the IP Quality Score malicious URL scanner.
#[derive(Parser, Debug)]
#[command(name = "url_reputation", version)]
struct Cli {
    /// URLs to scan
    #[arg(required = true)]
    urls: Vec<String>,

    /// IP Quality Score API key
    #[arg(long, env = "IPQS_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Scan strictness forwarded to the service (any integer)
    #[arg(long, env = "IPQS_STRICTNESS", default_value_t = 0, allow_negative_numbers = true)]
    strictness: i64,

    /// Color the summary with a rainbow gradient
    #[arg(long, conflicts_with = "json")]
    rainbow: bool,

    /// Print the full normalized result as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), first from the
    // current directory, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let mut client = ReputationClient::from_config(ClientConfig::new(cli.api_key, cli.strictness))
        .context("Failed to create reputation client")?;

    let mut failed = 0usize;
    for (i, url) in cli.urls.iter().enumerate() {
        client.fetch(url).await;
        let result = client.result();
        if !result.success() {
            failed += 1;
        }

        if cli.json {
            let json = serde_json::to_string_pretty(result)
                .context("Failed to serialize scan result")?;
            println!("{json}");
        } else {
            if i > 0 {
                println!();
            }
            client.print(cli.rainbow);
        }
    }

    info!(
        "Scanned {} URL{} ({} failed)",
        cli.urls.len(),
        if cli.urls.len() == 1 { "" } else { "s" },
        failed
    );

    if failed > 0 {
        process::exit(1);
    }
    Ok(())
}
