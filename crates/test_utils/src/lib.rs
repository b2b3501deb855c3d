//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! partner valuation test suite.
//!
//! # Modules
//!
//! - `fixtures`: The sample partner group and well-known documents
//! - `builders`: Builder patterns for ownership trees
//! - `assertions`: Custom assertion helpers for valuation results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
