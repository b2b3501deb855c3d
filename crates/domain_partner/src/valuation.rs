//! Asset valuation of partner ownership trees
//!
//! The value of a partner is its own declared value plus, for a company, the
//! value of every partner reachable through its ownership tree. A partner that
//! appears more than once (shared ownership across subsidiaries) is counted
//! exactly once, at the value of its first occurrence in depth-first order.
//!
//! Every visited document is validated before its value is used; a single
//! invalid document aborts the whole valuation and no partial total is returned.
//!
//! # Examples
//!
//! ```rust
//! use domain_partner::partner::Partner;
//! use domain_partner::valuation::calculate_total_assets_value;
//! use rust_decimal_macros::dec;
//!
//! let shared = Partner::individual("31464238049", dec!(145789.12));
//! let holding = Partner::company(
//!     "41720647000175",
//!     dec!(556587),
//!     vec![
//!         shared.clone(),
//!         Partner::company("20955843000159", dec!(999457), vec![shared]),
//!     ],
//! );
//!
//! let total = calculate_total_assets_value(&holding).unwrap();
//! assert_eq!(total, dec!(1701833.12));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{document, AssetValue};

use crate::error::PartnerError;
use crate::partner::Partner;

/// Outcome of valuing one ownership tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetValuation {
    /// Document of the partner the tree is rooted at
    pub root_document: String,
    /// Total value rounded half-up to two decimal places
    pub total: Decimal,
    /// Number of distinct documents whose value was counted
    pub counted_partners: usize,
    /// Number of repeat occurrences that contributed nothing
    pub skipped_duplicates: usize,
    /// When the valuation was computed
    pub calculated_at: DateTime<Utc>,
}

/// Calculates the total asset value of a partner and everything it owns
///
/// # Errors
///
/// Returns `PartnerError::InvalidDocument` for the first document, in
/// depth-first order, that is neither a valid personal nor company ID.
pub fn calculate_total_assets_value(partner: &Partner) -> Result<Decimal, PartnerError> {
    Ok(calculate_valuation(partner)?.total)
}

/// Values a partner tree and reports how the total was reached
///
/// # Errors
///
/// Returns `PartnerError::InvalidDocument` if any document in the tree is invalid.
pub fn calculate_valuation(partner: &Partner) -> Result<AssetValuation, PartnerError> {
    let mut valuator = AssetValuator::new();
    let raw = valuator.value(partner)?;
    let total = raw.round_for_reporting().amount();

    tracing::info!(
        root = partner.document(),
        %total,
        counted = valuator.counted_partners(),
        skipped = valuator.skipped_duplicates(),
        "Partner tree valued"
    );

    Ok(AssetValuation {
        root_document: partner.document().to_string(),
        total,
        counted_partners: valuator.counted_partners(),
        skipped_duplicates: valuator.skipped_duplicates(),
        calculated_at: Utc::now(),
    })
}

/// Traversal context for one valuation
///
/// Holds the documents already counted, mapped to the value they were counted
/// at. A valuator is meant to live for a single top-level call; reusing it for a
/// second tree would treat partners shared with the first tree as duplicates.
#[derive(Debug, Default)]
pub struct AssetValuator {
    processed: HashMap<String, Decimal>,
    skipped_duplicates: usize,
}

impl AssetValuator {
    /// Creates a valuator with an empty set of processed documents
    pub fn new() -> Self {
        Self::default()
    }

    /// Values `partner` and, for a company, each of its partners in order
    ///
    /// Returns the unrounded sum of every document not processed before.
    ///
    /// # Errors
    ///
    /// Returns `PartnerError::InvalidDocument` as soon as an invalid document is
    /// visited.
    pub fn value(&mut self, partner: &Partner) -> Result<AssetValue, PartnerError> {
        let document = partner.document();
        document::validate_document(document)?;

        if let Some(first_value) = self.processed.get(document) {
            if *first_value != partner.total_value() {
                tracing::warn!(
                    document,
                    kept = %first_value,
                    ignored = %partner.total_value(),
                    "Duplicate partner declares a different value, keeping the first"
                );
            }
            tracing::debug!(document, "Skipping already valued partner");
            self.skipped_duplicates += 1;
            return Ok(AssetValue::zero());
        }

        self.processed
            .insert(document.to_string(), partner.total_value());

        let mut total = partner.asset_value();
        if let Partner::Company(company) = partner {
            for member in &company.partners {
                total += self.value(member)?;
            }
        }

        Ok(total)
    }

    /// Returns true if the document has already been counted
    pub fn is_processed(&self, document: &str) -> bool {
        self.processed.contains_key(document)
    }

    /// Number of distinct documents counted so far
    pub fn counted_partners(&self) -> usize {
        self.processed.len()
    }

    /// Number of repeat occurrences skipped so far
    pub fn skipped_duplicates(&self) -> usize {
        self.skipped_duplicates
    }
}
