//! CLI error handling

use std::path::PathBuf;

use thiserror::Error;

use domain_partner::{PartnerError, ValidationResult};

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse partner tree in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Partner(#[from] PartnerError),

    /// Valuation failed on a tree that was audited first; the audit lists
    /// every problem, not just the one valuation stopped at
    #[error("{source} (audit found {} error(s))", .audit.errors.len())]
    Audit {
        audit: ValidationResult,
        #[source]
        source: PartnerError,
    },
}
