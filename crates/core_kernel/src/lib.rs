//! Core Kernel - Foundational types for partner asset valuation
//!
//! This crate provides the building blocks used by the partner domain:
//! - Tax document validation (personal and company IDs with check digits)
//! - Asset value types with precise decimal arithmetic and half-up rounding

pub mod document;
pub mod money;

pub use document::{
    DocumentError, DocumentKind, is_valid_company_id, is_valid_document,
    is_valid_personal_id, validate_document,
};
pub use money::{AssetValue, REPORTING_DECIMAL_PLACES};
