//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for valuation results that give
//! more meaningful error messages than standard assertions.

use std::collections::HashSet;

use rust_decimal::Decimal;

use domain_partner::{Partner, PartnerError};

/// Asserts that a valuation failed because of the given document
///
/// # Panics
///
/// Panics if the result is a total or a different error.
pub fn assert_invalid_document<T: std::fmt::Debug>(
    result: &Result<T, PartnerError>,
    document: &str,
) {
    match result {
        Err(PartnerError::InvalidDocument(actual)) => assert_eq!(
            actual, document,
            "Valuation failed on {} but {} was expected",
            actual, document
        ),
        other => panic!(
            "Expected InvalidDocument({}), got {:?}",
            document, other
        ),
    }
}

/// Asserts that a total carries at most two decimal places
pub fn assert_reporting_precision(total: Decimal) {
    assert!(
        total.scale() <= 2,
        "Expected at most 2 decimal places, got {} ({} places)",
        total,
        total.scale()
    );
}

/// Sums the first-seen value of every distinct document in depth-first order
///
/// Independent reference for valuation results, with no validation and no
/// rounding. A repeated document is not descended into.
pub fn distinct_first_seen_sum(partner: &Partner) -> Decimal {
    fn walk(partner: &Partner, seen: &mut HashSet<String>) -> Decimal {
        if !seen.insert(partner.document().to_string()) {
            return Decimal::ZERO;
        }
        partner.total_value()
            + partner
                .partners()
                .iter()
                .map(|member| walk(member, seen))
                .sum::<Decimal>()
    }

    walk(partner, &mut HashSet::new())
}
