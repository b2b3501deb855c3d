//! Pre-built Test Fixtures
//!
//! Provides well-known documents and the sample partner group, which the
//! command-line tool also values when no input file is given.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_partner::{sample, Partner};

/// Well-known valid and invalid documents
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// Document of the holding company at the root of the sample group
    pub const HOLDING: &'static str = sample::HOLDING_DOCUMENT;
    /// Document of the subsidiary
    pub const SUBSIDIARY: &'static str = sample::SUBSIDIARY_DOCUMENT;
    /// Individuals of the sample group, in declaration order
    pub const INDIVIDUALS: [&'static str; 5] = sample::INDIVIDUAL_DOCUMENTS;
    /// An individual holding a stake both directly and through the subsidiary
    pub const SHARED_INDIVIDUAL: &'static str = "31464238049";
    /// Well-formed personal ID with wrong check digits
    pub const BAD_CHECKSUM_PERSONAL: &'static str = "12345678900";
    /// Well-formed company ID with wrong check digits
    pub const BAD_CHECKSUM_COMPANY: &'static str = "41720647000170";
    /// Repeated-digit personal ID
    pub const REPEATED_PERSONAL: &'static str = "11111111111";
    /// Repeated-digit company ID
    pub const REPEATED_COMPANY: &'static str = "11111111111111";
}

/// Fixture for the sample partner group
pub struct PartnerFixtures;

impl PartnerFixtures {
    /// Declared values of the sample group
    ///
    /// Indices 0..=4 belong to the individuals, 5 to the subsidiary and 6 to
    /// the holding company.
    pub const TOTALS: [Decimal; 7] = sample::TOTALS;

    /// Total value of the sample group, each partner counted once
    pub fn expected_total() -> Decimal {
        dec!(3695164.72)
    }

    /// Individual partner `index` of the sample group
    pub fn individual(index: usize) -> Partner {
        sample::individual(index)
    }

    /// The subsidiary, owned by the first three individuals
    pub fn subsidiary() -> Partner {
        sample::subsidiary()
    }

    /// Partners of the holding company: three individuals and the subsidiary
    pub fn holding_partners() -> Vec<Partner> {
        sample::holding_partners()
    }

    /// The holding company at the root of the sample group
    pub fn holding() -> Partner {
        sample::holding()
    }

    /// The sample group as JSON, in the format the command-line tool reads
    pub fn holding_json() -> String {
        serde_json::to_string_pretty(&Self::holding()).unwrap_or_default()
    }
}
