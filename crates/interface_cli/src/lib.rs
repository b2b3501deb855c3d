//! Command-Line Interface
//!
//! This crate provides the `partner-assets` tool, which values a partner
//! ownership tree and prints its total asset value.
//!
//! # Architecture
//!
//! - **Config**: environment-driven settings (`PARTNER_ASSETS_*`)
//! - **Error Handling**: read, parse, and valuation failures
//! - **Logging**: `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust
//! use interface_cli::{render, run};
//!
//! let report = run(None, false).unwrap();
//! assert_eq!(
//!     render(&report),
//!     "Total asset value of 41720647000175: 3695164.72\n"
//! );
//! ```

pub mod config;
pub mod error;
pub mod logging;

use std::fmt::Write;
use std::path::Path;

use domain_partner::{
    calculate_valuation, sample, AssetValuation, Partner, PartnerValidator, ValidationResult,
};

use crate::error::CliError;

/// Outcome of one run of the tool
#[derive(Debug, Clone)]
pub struct Report {
    /// Valuation of the tree
    pub valuation: AssetValuation,
    /// Audit of the tree, when requested
    pub audit: Option<ValidationResult>,
}

/// Loads the partner tree from a JSON file, or the sample group without one
///
/// # Errors
///
/// Returns `CliError::Read` or `CliError::Parse` when the file cannot be used.
pub fn load_partner(input: Option<&Path>) -> Result<Partner, CliError> {
    let Some(path) = input else {
        tracing::debug!("No input given, using the sample partner group");
        return Ok(sample::holding());
    };

    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads, optionally audits, and values a partner tree
///
/// The audit runs first so every problem in the tree is reported before
/// valuation stops at the first invalid document.
///
/// # Errors
///
/// Returns an error if the tree cannot be loaded or contains an invalid document.
/// When the tree was audited, the failure is `CliError::Audit` and carries the
/// audit.
pub fn run(input: Option<&Path>, audit: bool) -> Result<Report, CliError> {
    let partner = load_partner(input)?;
    tracing::debug!(
        root = partner.document(),
        nodes = partner.node_count(),
        depth = partner.depth(),
        "Partner tree loaded"
    );

    let audit = audit.then(|| {
        let result = PartnerValidator::validate(&partner);
        for error in &result.errors {
            tracing::error!(%error, "Audit error");
        }
        for warning in &result.warnings {
            tracing::warn!(%warning, "Audit warning");
        }
        result
    });

    let valuation = match calculate_valuation(&partner) {
        Ok(valuation) => valuation,
        Err(source) => {
            return Err(match audit {
                Some(audit) => CliError::Audit { audit, source },
                None => CliError::Partner(source),
            })
        }
    };

    Ok(Report { valuation, audit })
}

/// Renders audit errors and warnings, one per line
pub fn render_audit(audit: &ValidationResult) -> String {
    let mut out = String::new();
    for error in &audit.errors {
        let _ = writeln!(out, "error: {}", error);
    }
    for warning in &audit.warnings {
        let _ = writeln!(out, "warning: {}", warning);
    }
    out
}

/// Renders a report for the terminal
pub fn render(report: &Report) -> String {
    let mut out = report.audit.as_ref().map(render_audit).unwrap_or_default();

    let _ = writeln!(
        out,
        "Total asset value of {}: {:.2}",
        report.valuation.root_document, report.valuation.total
    );
    out
}
