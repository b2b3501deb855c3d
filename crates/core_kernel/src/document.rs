//! National tax document validation
//!
//! Partners are identified by a digit-only tax document:
//!
//! - **Personal ID** (CPF-style): 11 digits, the last two being check digits
//! - **Company ID** (CNPJ-style): 14 digits, the last two being check digits
//!
//! Both check digits are computed with the same weighted-sum-modulo-11 rule; the
//! two document kinds differ only in the weights applied to each digit.
//!
//! The boolean validators never fail: malformed input (wrong length, non-digit
//! characters, a single repeated digit) is simply not a valid document.
//! [`validate_document`] is the guard form that surfaces the failure as an error.
//!
//! # Examples
//!
//! ```rust
//! use core_kernel::document::{self, DocumentKind};
//!
//! assert!(document::is_valid_personal_id("42156492859"));
//! assert!(document::is_valid_company_id("41720647000175"));
//! assert_eq!(DocumentKind::classify("02712943961"), Some(DocumentKind::Personal));
//! assert!(document::validate_document("12345678900").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Length of a personal ID
pub const PERSONAL_ID_LENGTH: usize = 11;

/// Length of a company ID
pub const COMPANY_ID_LENGTH: usize = 14;

/// Weights for the first company check digit (over the first 12 digits)
const COMPANY_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second company check digit (over the first 13 digits)
const COMPANY_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Errors raised by document validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// The document is neither a valid personal ID nor a valid company ID
    #[error("The document \"{0}\" does not comply with the required format.")]
    InvalidDocument(String),
}

impl DocumentError {
    /// Returns the offending document string
    pub fn document(&self) -> &str {
        match self {
            DocumentError::InvalidDocument(document) => document,
        }
    }
}

/// The kind of a structurally valid tax document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// 11-digit personal ID
    Personal,
    /// 14-digit company ID
    Company,
}

impl DocumentKind {
    /// Classifies a document, returning `None` when it is not valid as either kind
    pub fn classify(document: &str) -> Option<Self> {
        if is_valid_personal_id(document) {
            Some(DocumentKind::Personal)
        } else if is_valid_company_id(document) {
            Some(DocumentKind::Company)
        } else {
            None
        }
    }

    /// Returns the number of digits a document of this kind carries
    pub fn length(&self) -> usize {
        match self {
            DocumentKind::Personal => PERSONAL_ID_LENGTH,
            DocumentKind::Company => COMPANY_ID_LENGTH,
        }
    }

    /// Appends the two check digits to a base number
    ///
    /// The base must hold every digit but the last two (9 for a personal ID, 12
    /// for a company ID). Returns `None` when it does not, or when the completed
    /// document would be a single repeated digit.
    pub fn complete(&self, base: &str) -> Option<String> {
        let base_length = self.length() - 2;
        if base.chars().count() != base_length {
            return None;
        }

        let mut digits = base
            .chars()
            .map(|c| c.to_digit(10))
            .collect::<Option<Vec<u32>>>()?;

        for position in [base_length, base_length + 1] {
            let next = match self {
                DocumentKind::Personal => personal_check_digit(&digits, position),
                DocumentKind::Company if position == 12 => {
                    check_digit(&digits, &COMPANY_FIRST_WEIGHTS)
                }
                DocumentKind::Company => check_digit(&digits, &COMPANY_SECOND_WEIGHTS),
            };
            digits.push(next);
        }

        let document: String = digits
            .iter()
            .filter_map(|d| char::from_digit(*d, 10))
            .collect();

        DocumentKind::classify(&document).map(|_| document)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Personal => write!(f, "personal"),
            DocumentKind::Company => write!(f, "company"),
        }
    }
}

/// Validates a document, failing with [`DocumentError::InvalidDocument`] when it is
/// neither a valid personal ID nor a valid company ID
///
/// # Errors
///
/// Returns `DocumentError::InvalidDocument` carrying the offending string.
pub fn validate_document(document: &str) -> Result<DocumentKind, DocumentError> {
    DocumentKind::classify(document)
        .ok_or_else(|| DocumentError::InvalidDocument(document.to_string()))
}

/// Returns true if the document is a valid personal ID or a valid company ID
pub fn is_valid_document(document: &str) -> bool {
    is_valid_personal_id(document) || is_valid_company_id(document)
}

/// Checks whether the value is a valid 11-digit personal ID
///
/// The first check digit is computed over the first 9 digits and the second over
/// the first 10, each with the descending weight ramp `length + 1 - i`.
pub fn is_valid_personal_id(document: &str) -> bool {
    let Some(digits) = to_digits(document, PERSONAL_ID_LENGTH) else {
        return false;
    };

    let first = personal_check_digit(&digits, 9);
    let second = personal_check_digit(&digits, 10);

    digits[9] == first && digits[10] == second
}

/// Checks whether the value is a valid 14-digit company ID
///
/// The check digits are computed over the first 12 and first 13 digits using the
/// fixed company weight tables.
pub fn is_valid_company_id(document: &str) -> bool {
    let Some(digits) = to_digits(document, COMPANY_ID_LENGTH) else {
        return false;
    };

    let first = check_digit(&digits[..12], &COMPANY_FIRST_WEIGHTS);
    let second = check_digit(&digits[..13], &COMPANY_SECOND_WEIGHTS);

    digits[12] == first && digits[13] == second
}

/// Personal-ID check digit over the first `length` digits
fn personal_check_digit(digits: &[u32], length: usize) -> u32 {
    let weights: Vec<u32> = (0..length).map(|i| (length + 1 - i) as u32).collect();
    check_digit(&digits[..length], &weights)
}

/// Weighted-sum-modulo-11 check digit
///
/// A remainder below 2 maps to 0, anything else to `11 - remainder`.
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;

    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// Splits a document into its digits
///
/// Returns `None` for the wrong length, any non-digit character, or a document made
/// of a single repeated digit.
fn to_digits(document: &str, expected_length: usize) -> Option<Vec<u32>> {
    if document.chars().count() != expected_length {
        return None;
    }

    let digits = document
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()?;

    if digits.iter().all(|d| *d == digits[0]) {
        return None;
    }

    Some(digits)
}
