//! Partner tree validation rules
//!
//! Valuation stops at the first invalid document. Before a tree is valued it is
//! often more useful to see everything that is wrong with it at once, so this
//! module walks the whole tree and collects every problem instead.
//!
//! # Validation Rules
//!
//! ## Errors
//! - Every document must be a valid personal ID or company ID
//! - Declared values cannot be negative
//!
//! ## Warnings
//! - A document that appears again with a different declared value (the first
//!   value is the one valuation keeps)
//! - A company with no partners

use std::collections::HashMap;

use rust_decimal::Decimal;

use core_kernel::document;

use crate::error::PartnerError;
use crate::partner::Partner;

/// Result of partner tree validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the tree is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Creates a failed validation result with errors
    pub fn fail(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Converts the result into an error when it is not valid
    ///
    /// # Errors
    ///
    /// Returns `PartnerError::ValidationFailed` joining every error message.
    pub fn into_result(self) -> Result<Vec<String>, PartnerError> {
        if self.is_valid {
            Ok(self.warnings)
        } else {
            Err(PartnerError::validation_failed(self.errors))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for partner ownership trees
///
/// # Examples
///
/// ```rust
/// use domain_partner::partner::Partner;
/// use domain_partner::validation::PartnerValidator;
/// use rust_decimal_macros::dec;
///
/// let partner = Partner::company(
///     "41720647000175",
///     dec!(556587),
///     vec![Partner::individual("12345678900", dec!(10))],
/// );
/// let result = PartnerValidator::validate(&partner);
///
/// assert!(!result.is_valid);
/// assert!(result.errors[0].contains("12345678900"));
/// ```
pub struct PartnerValidator;

impl PartnerValidator {
    /// Validates every partner of the tree rooted at `partner`
    ///
    /// Unlike valuation, this never stops early and descends into repeated
    /// documents too, so problems below a duplicate are still reported.
    pub fn validate(partner: &Partner) -> ValidationResult {
        let mut seen = HashMap::new();
        let mut result = ValidationResult::ok();
        Self::validate_node(partner, &mut seen, &mut result);
        result
    }

    /// Validates a single partner without looking at the partners it owns
    pub fn validate_partner(partner: &Partner) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if !document::is_valid_document(partner.document()) {
            result.add_error(format!("Invalid document: {}", partner.document()));
        }

        if partner.asset_value().is_negative() {
            result.add_error(format!(
                "Declared value cannot be negative for {}: {}",
                partner.document(),
                partner.total_value()
            ));
        }

        if let Partner::Company(company) = partner {
            if company.partners.is_empty() {
                result.add_warning(format!("Company {} has no partners", company.document));
            }
        }

        result
    }

    fn validate_node(
        partner: &Partner,
        seen: &mut HashMap<String, Decimal>,
        result: &mut ValidationResult,
    ) {
        match seen.get(partner.document()) {
            Some(first_value) => {
                if *first_value != partner.total_value() {
                    result.add_warning(format!(
                        "Duplicate document {} declares {} but {} was declared first",
                        partner.document(),
                        partner.total_value(),
                        first_value
                    ));
                }
            }
            None => {
                seen.insert(partner.document().to_string(), partner.total_value());
                result.merge(Self::validate_partner(partner));
            }
        }

        for member in partner.partners() {
            Self::validate_node(member, seen, result);
        }
    }
}
