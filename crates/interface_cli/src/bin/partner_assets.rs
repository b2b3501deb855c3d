//! Partner Assets - command-line valuation of partner ownership trees
//!
//! # Usage
//!
//! ```bash
//! # Value the built-in sample group
//! cargo run --bin partner-assets
//!
//! # Value a tree read from JSON, reporting every problem first
//! cargo run --bin partner-assets -- --input tree.json --audit
//! ```
//!
//! # Environment Variables
//!
//! * `PARTNER_ASSETS_INPUT` - Partner tree JSON file (default: sample group)
//! * `PARTNER_ASSETS_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `PARTNER_ASSETS_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use interface_cli::config::{CliConfig, LogFormat};
use interface_cli::error::CliError;
use interface_cli::logging::init_tracing;

/// Values a partner ownership tree, counting every partner once
#[derive(Debug, Parser)]
#[command(name = "partner-assets", version, about)]
struct Args {
    /// JSON file holding the partner tree
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Report every invalid document and conflicting duplicate before valuing
    #[arg(long)]
    audit: bool,

    /// Log level or filter directive
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

/// Main entry point for the valuation tool.
///
/// Loads configuration, initializes logging, values the tree, and prints the
/// rounded total.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the input cannot be read
/// or parsed, or any document in the tree is invalid.
fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = CliConfig::from_env().context("Invalid PARTNER_ASSETS_* configuration")?;

    let log_level = args.log_level.unwrap_or(config.log_level);
    let log_format = args.log_format.unwrap_or(config.log_format);
    init_tracing(&log_level, log_format);

    let input = args.input.or(config.input);
    tracing::info!(input = ?input, audit = args.audit, "Valuing partner tree");

    let report = match interface_cli::run(input.as_deref(), args.audit) {
        Ok(report) => report,
        Err(err) => {
            if let CliError::Audit { audit, .. } = &err {
                print!("{}", interface_cli::render_audit(audit));
            }
            tracing::error!(error = %err, "Valuation failed");
            return Err(err.into());
        }
    };

    print!("{}", interface_cli::render(&report));
    Ok(())
}
