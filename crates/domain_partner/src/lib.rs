//! Partner Domain
//!
//! This crate models the partners that hold assets and computes the total
//! asset value of an ownership tree.
//!
//! # Ownership Model
//!
//! - **Individual**: a natural person, identified by an 11-digit personal ID
//! - **Company**: a legal entity, identified by a 14-digit company ID, that is
//!   composed of other individuals or companies
//!
//! The same partner can appear in several places of a tree (for example a
//! person holding shares both directly and through a subsidiary). Valuation
//! counts each document exactly once.
//!
//! # Examples
//!
//! ```rust
//! use domain_partner::{calculate_total_assets_value, Partner};
//! use rust_decimal_macros::dec;
//!
//! let subsidiary = Partner::company(
//!     "20955843000159",
//!     dec!(999457),
//!     vec![
//!         Partner::individual("42156492859", dec!(489678.98)),
//!         Partner::individual("31464238049", dec!(145789.12)),
//!     ],
//! );
//!
//! let holding = Partner::company(
//!     "41720647000175",
//!     dec!(556587),
//!     vec![
//!         Partner::individual("31464238049", dec!(145789.12)),
//!         subsidiary,
//!     ],
//! );
//!
//! // 31464238049 is counted once
//! let total = calculate_total_assets_value(&holding).unwrap();
//! assert_eq!(total, dec!(2191512.10));
//! ```

pub mod partner;
pub mod valuation;
pub mod validation;
pub mod error;
pub mod sample;

pub use partner::{Partner, IndividualPartner, CompanyPartner};
pub use valuation::{AssetValuation, AssetValuator, calculate_total_assets_value, calculate_valuation};
pub use validation::{PartnerValidator, ValidationResult};
pub use error::PartnerError;
