//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating documents and ownership trees
//! that maintain domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::DocumentKind;
use domain_partner::Partner;

/// Strategy for generating valid 11-digit personal IDs
pub fn personal_id_strategy() -> impl Strategy<Value = String> {
    "[0-9]{9}".prop_filter_map("repeated-digit base", |base| {
        DocumentKind::Personal.complete(&base)
    })
}

/// Strategy for generating valid 14-digit company IDs
pub fn company_id_strategy() -> impl Strategy<Value = String> {
    "[0-9]{12}".prop_filter_map("repeated-digit base", |base| {
        DocumentKind::Company.complete(&base)
    })
}

/// Strategy for generating strings that are never valid documents
pub fn malformed_document_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{0,10}",
        "[0-9]{12,13}",
        "[0-9]{15,20}",
        "[0-9]{5}[a-z./-][0-9]{5}",
        "[0-9]{6}[a-z./-][0-9]{7}",
    ]
}

/// Strategy for generating declared values with two decimal places
pub fn declared_value_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000_00i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating declared values with up to four decimal places
pub fn fractional_value_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_0000i64, 0u32..5u32).prop_map(|(m, s)| Decimal::new(m, s))
}

/// Strategy for generating ownership trees whose documents are drawn from
/// small pools, so the same partner regularly shows up more than once
///
/// Individuals may declare values with more than two decimal places, so the
/// total regularly needs rounding.
pub fn partner_tree_strategy() -> impl Strategy<Value = Partner> {
    let pools = (
        proptest::collection::vec(personal_id_strategy(), 1..6),
        proptest::collection::vec(company_id_strategy(), 1..4),
    );

    pools.prop_flat_map(|(individuals, companies)| {
        let value = prop_oneof![declared_value_strategy(), fractional_value_strategy()];
        let leaf = (proptest::sample::select(individuals), value)
            .prop_map(|(document, value)| Partner::individual(document, value));

        leaf.prop_recursive(4, 32, 5, move |inner| {
            (
                proptest::sample::select(companies.clone()),
                declared_value_strategy(),
                proptest::collection::vec(inner, 0..5),
            )
                .prop_map(|(document, value, partners)| {
                    Partner::company(document, value, partners)
                })
        })
    })
}
