//! Comprehensive tests for domain_partner

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use domain_partner::{
    calculate_total_assets_value, calculate_valuation, AssetValuator, Partner, PartnerError,
    PartnerValidator,
};
use test_utils::{
    assert_invalid_document, assert_reporting_precision, distinct_first_seen_sum,
    CompanyBuilder, DocumentFixtures, PartnerFixtures,
};

// ============================================================================
// Valuation Tests
// ============================================================================

mod valuation_tests {
    use super::*;

    #[test]
    fn test_sample_group_total() {
        let holding = PartnerFixtures::holding();

        let total = calculate_total_assets_value(&holding).unwrap();

        assert_eq!(total, PartnerFixtures::expected_total());
    }

    #[test]
    fn test_sample_group_total_matches_sum_of_totals() {
        let sum: Decimal = PartnerFixtures::TOTALS.iter().sum();
        let total = calculate_total_assets_value(&PartnerFixtures::holding()).unwrap();

        assert_eq!(
            total,
            sum.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        );
    }

    #[test]
    fn test_sample_individuals_are_personal_ids() {
        for (index, document) in DocumentFixtures::INDIVIDUALS.iter().enumerate() {
            assert_eq!(PartnerFixtures::individual(index).document(), *document);
            assert_eq!(
                core_kernel::DocumentKind::classify(document),
                Some(core_kernel::DocumentKind::Personal)
            );
        }
    }

    #[test]
    fn test_sample_group_report() {
        let valuation = calculate_valuation(&PartnerFixtures::holding()).unwrap();

        assert_eq!(valuation.root_document, DocumentFixtures::HOLDING);
        assert_eq!(valuation.total, dec!(3695164.72));
        assert_eq!(valuation.counted_partners, 7);
        assert_eq!(valuation.skipped_duplicates, 1);
    }

    #[test]
    fn test_subsidiary_alone() {
        let total = calculate_total_assets_value(&PartnerFixtures::subsidiary()).unwrap();
        assert_eq!(total, dec!(999457) + dec!(489678.98) + dec!(879546.25) + dec!(145789.12));
    }

    #[test]
    fn test_shared_individual_counted_once_in_either_order() {
        let shared = || Partner::individual(DocumentFixtures::SHARED_INDIVIDUAL, dec!(100));
        let sub = || {
            CompanyBuilder::new()
                .with_document(DocumentFixtures::SUBSIDIARY)
                .with_value(dec!(10))
                .with_partner(shared())
                .build()
        };

        let direct_first = CompanyBuilder::new()
            .with_value(dec!(1))
            .with_partner(shared())
            .with_partner(sub())
            .build();
        let nested_first = CompanyBuilder::new()
            .with_value(dec!(1))
            .with_partner(sub())
            .with_partner(shared())
            .build();

        assert_eq!(calculate_total_assets_value(&direct_first).unwrap(), dec!(111));
        assert_eq!(calculate_total_assets_value(&nested_first).unwrap(), dec!(111));
    }

    #[test]
    fn test_root_repeated_below_itself_contributes_once() {
        let inner = Partner::company(DocumentFixtures::HOLDING, dec!(500), vec![]);
        let root = Partner::company(DocumentFixtures::HOLDING, dec!(1), vec![inner]);

        assert_eq!(calculate_total_assets_value(&root).unwrap(), dec!(1));
    }

    #[test]
    fn test_reversed_sibling_order_gives_same_total() {
        let mut partners = PartnerFixtures::holding_partners();
        partners.reverse();
        let reversed = Partner::company(
            DocumentFixtures::HOLDING,
            PartnerFixtures::TOTALS[6],
            partners,
        );

        assert_eq!(
            calculate_total_assets_value(&reversed).unwrap(),
            PartnerFixtures::expected_total()
        );
    }

    #[test]
    fn test_half_up_rounding_of_total() {
        let partner = CompanyBuilder::new()
            .with_value(dec!(1234))
            .with_individual("42156492859", dec!(0.565))
            .build();
        assert_eq!(calculate_total_assets_value(&partner).unwrap(), dec!(1234.57));

        let partner = CompanyBuilder::new()
            .with_value(dec!(1234))
            .with_individual("42156492859", dec!(0.564))
            .build();
        assert_eq!(calculate_total_assets_value(&partner).unwrap(), dec!(1234.56));
    }

    #[test]
    fn test_valuation_does_not_mutate_tree() {
        let holding = PartnerFixtures::holding();
        let before = holding.clone();

        calculate_total_assets_value(&holding).unwrap();

        assert_eq!(holding, before);
    }

    #[test]
    fn test_independent_calls_do_not_share_state() {
        let holding = PartnerFixtures::holding();

        let first = calculate_total_assets_value(&holding).unwrap();
        let second = calculate_total_assets_value(&holding).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_valuations_of_shared_tree() {
        let holding = PartnerFixtures::holding();

        let totals: Vec<Decimal> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| calculate_total_assets_value(&holding).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(totals.iter().all(|t| *t == PartnerFixtures::expected_total()));
    }

    #[test]
    fn test_reused_valuator_treats_previous_tree_as_seen() {
        let mut valuator = AssetValuator::new();
        let individual = PartnerFixtures::individual(0);

        assert_eq!(valuator.value(&individual).unwrap().amount(), PartnerFixtures::TOTALS[0]);
        assert!(valuator.value(&individual).unwrap().is_zero());
        assert_eq!(valuator.counted_partners(), 1);
    }
}

// ============================================================================
// Invalid Document Tests
// ============================================================================

mod invalid_document_tests {
    use super::*;

    #[test]
    fn test_invalid_root_individual() {
        let partner = Partner::individual(DocumentFixtures::BAD_CHECKSUM_PERSONAL, dec!(10));
        let result = calculate_total_assets_value(&partner);

        assert_invalid_document(&result, "12345678900");
    }

    #[test]
    fn test_invalid_nested_document_aborts_whole_tree() {
        let sub = CompanyBuilder::new()
            .with_document(DocumentFixtures::SUBSIDIARY)
            .with_individual("42156492859", dec!(1))
            .with_individual(DocumentFixtures::REPEATED_PERSONAL, dec!(1))
            .build();
        let root = CompanyBuilder::new().with_partner(sub).build();

        let result = calculate_valuation(&root);

        assert_invalid_document(&result, DocumentFixtures::REPEATED_PERSONAL);
    }

    #[test]
    fn test_first_invalid_document_in_depth_first_order_is_reported() {
        let root = CompanyBuilder::new()
            .with_partner(
                CompanyBuilder::new()
                    .with_document(DocumentFixtures::SUBSIDIARY)
                    .with_individual("4215649285x", dec!(1))
                    .build(),
            )
            .with_individual(DocumentFixtures::BAD_CHECKSUM_PERSONAL, dec!(1))
            .build();

        assert_invalid_document(&calculate_total_assets_value(&root), "4215649285x");
    }

    #[test]
    fn test_invalid_company_root() {
        let root = CompanyBuilder::new()
            .with_document(DocumentFixtures::BAD_CHECKSUM_COMPANY)
            .with_individual("42156492859", dec!(1))
            .build();

        assert_eq!(
            calculate_total_assets_value(&root),
            Err(PartnerError::InvalidDocument(DocumentFixtures::BAD_CHECKSUM_COMPANY.to_string()))
        );
    }

    #[test]
    fn test_error_display() {
        let err = calculate_total_assets_value(&Partner::individual("123", dec!(1))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The document \"123\" does not comply with the required format."
        );
    }
}

// ============================================================================
// Audit Tests
// ============================================================================

mod audit_tests {
    use super::*;

    #[test]
    fn test_sample_group_passes_audit() {
        let result = PartnerValidator::validate(&PartnerFixtures::holding());
        assert!(result.is_valid, "Errors: {:?}", result.errors);
        assert!(result.warnings.is_empty(), "Warnings: {:?}", result.warnings);
    }

    #[test]
    fn test_audit_reports_what_valuation_stops_at() {
        let root = CompanyBuilder::new()
            .with_individual(DocumentFixtures::BAD_CHECKSUM_PERSONAL, dec!(1))
            .with_individual(DocumentFixtures::REPEATED_PERSONAL, dec!(1))
            .build();

        let result = PartnerValidator::validate(&root);

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
        assert!(result.into_result().is_err());
    }

    #[test]
    fn test_audit_warns_on_conflicting_duplicate() {
        let root = CompanyBuilder::new()
            .with_individual(DocumentFixtures::SHARED_INDIVIDUAL, dec!(1))
            .with_individual(DocumentFixtures::SHARED_INDIVIDUAL, dec!(2))
            .build();

        let warnings = PartnerValidator::validate(&root).into_result().unwrap();

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains(DocumentFixtures::SHARED_INDIVIDUAL));
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

mod serialization_tests {
    use super::*;

    #[test]
    fn test_sample_group_json_round_trip() {
        let json = PartnerFixtures::holding_json();
        let parsed: Partner = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, PartnerFixtures::holding());
    }

    #[test]
    fn test_parse_tagged_tree() {
        let json = r#"{
            "type": "company",
            "document": "20955843000159",
            "total_value": "999457",
            "partners": [
                { "type": "individual", "document": "42156492859", "total_value": "489678.98" },
                { "type": "individual", "document": "02712943961", "total_value": "879546.25" }
            ]
        }"#;

        let partner: Partner = serde_json::from_str(json).unwrap();

        assert!(partner.is_company());
        assert_eq!(partner.partners()[1].document(), "02712943961");
        assert_eq!(calculate_total_assets_value(&partner).unwrap(), dec!(2368682.23));
    }

    #[test]
    fn test_company_without_partners_field() {
        let json = r#"{ "type": "company", "document": "20955843000159", "total_value": "5" }"#;
        let partner: Partner = serde_json::from_str(json).unwrap();

        assert!(partner.partners().is_empty());
    }

    #[test]
    fn test_leading_zero_document_survives_json() {
        let partner = PartnerFixtures::individual(1);
        let json = serde_json::to_string(&partner).unwrap();

        assert!(json.contains("\"02712943961\""));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::generators::*;

    proptest! {
        #[test]
        fn total_is_rounded_sum_of_distinct_first_seen_values(tree in partner_tree_strategy()) {
            let total = calculate_total_assets_value(&tree).unwrap();

            assert_reporting_precision(total);
            let expected = distinct_first_seen_sum(&tree)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            prop_assert_eq!(total, expected);
        }

        #[test]
        fn counted_partners_never_exceed_nodes(tree in partner_tree_strategy()) {
            let valuation = calculate_valuation(&tree).unwrap();

            prop_assert!(valuation.counted_partners + valuation.skipped_duplicates <= tree.node_count());
        }

        #[test]
        fn flat_sibling_order_does_not_change_total(
            pool in proptest::collection::vec((personal_id_strategy(), declared_value_strategy()), 1..6),
            picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..12),
        ) {
            let members: Vec<Partner> = picks
                .iter()
                .map(|pick| {
                    let (document, value) = pick.get(&pool);
                    Partner::individual(document.clone(), *value)
                })
                .collect();
            let mut reversed = members.clone();
            reversed.reverse();

            // Documents repeated in the pool with another value would make order matter
            let unique: std::collections::HashSet<_> = pool.iter().map(|(d, _)| d).collect();
            prop_assume!(unique.len() == pool.len());

            let forward = Partner::company(DocumentFixtures::HOLDING, dec!(1), members);
            let backward = Partner::company(DocumentFixtures::HOLDING, dec!(1), reversed);

            prop_assert_eq!(
                calculate_total_assets_value(&forward).unwrap(),
                calculate_total_assets_value(&backward).unwrap()
            );
        }

        #[test]
        fn midpoint_totals_round_up(cents in 0i64..1_000_000i64) {
            // A value ending in 5 at the third place sits on a half-cent midpoint
            let half = Decimal::new(cents * 10 + 5, 3);
            let root = CompanyBuilder::new()
                .with_value(Decimal::ZERO)
                .with_individual("42156492859", half)
                .build();

            let total = calculate_total_assets_value(&root).unwrap();

            prop_assert_eq!(total, Decimal::new(cents + 1, 2));
        }

        #[test]
        fn malformed_root_is_rejected(document in malformed_document_strategy(), value in declared_value_strategy()) {
            let result = calculate_total_assets_value(&Partner::individual(document.clone(), value));
            prop_assert_eq!(result, Err(PartnerError::InvalidDocument(document)));
        }
    }
}
