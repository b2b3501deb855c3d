//! Sample partner group
//!
//! A holding company owning three individuals and one subsidiary. The
//! subsidiary is owned by three individuals, one of whom also holds a direct
//! stake in the holding, so the group exercises duplicate suppression.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::partner::Partner;

/// Document of the holding company at the root of the group
pub const HOLDING_DOCUMENT: &str = "41720647000175";

/// Document of the subsidiary
pub const SUBSIDIARY_DOCUMENT: &str = "20955843000159";

/// Individuals of the group, in declaration order
pub const INDIVIDUAL_DOCUMENTS: [&str; 5] = [
    "42156492859",
    "02712943961",
    "31464238049",
    "98089811868",
    "21960671804",
];

/// Declared values: indices 0..=4 for the individuals, 5 for the subsidiary,
/// 6 for the holding
pub const TOTALS: [Decimal; 7] = [
    dec!(489678.98),
    dec!(879546.25),
    dec!(145789.12),
    dec!(478578.25),
    dec!(145528.12),
    dec!(999457),
    dec!(556587),
];

/// Individual `index` of the group
///
/// # Panics
///
/// Panics if `index` is not below 5.
pub fn individual(index: usize) -> Partner {
    Partner::individual(INDIVIDUAL_DOCUMENTS[index], TOTALS[index])
}

/// The subsidiary, owned by the first three individuals
pub fn subsidiary() -> Partner {
    Partner::company(
        SUBSIDIARY_DOCUMENT,
        TOTALS[5],
        vec![individual(0), individual(1), individual(2)],
    )
}

/// Partners of the holding: the last three individuals and the subsidiary
pub fn holding_partners() -> Vec<Partner> {
    vec![individual(2), individual(3), individual(4), subsidiary()]
}

/// The holding company at the root of the group
pub fn holding() -> Partner {
    Partner::company(HOLDING_DOCUMENT, TOTALS[6], holding_partners())
}
