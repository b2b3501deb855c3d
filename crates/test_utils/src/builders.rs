//! Test Data Builders
//!
//! Provides builder patterns for constructing ownership trees with sensible
//! defaults, so tests only spell out the partners that matter to them.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_partner::Partner;

use crate::fixtures::DocumentFixtures;

/// Builder for constructing company partners
pub struct CompanyBuilder {
    document: String,
    total_value: Decimal,
    partners: Vec<Partner>,
}

impl Default for CompanyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanyBuilder {
    /// Creates a new builder for the sample holding document with no value
    pub fn new() -> Self {
        Self {
            document: DocumentFixtures::HOLDING.to_string(),
            total_value: dec!(0),
            partners: Vec::new(),
        }
    }

    /// Sets the company document
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = document.into();
        self
    }

    /// Sets the company's own declared value
    pub fn with_value(mut self, value: Decimal) -> Self {
        self.total_value = value;
        self
    }

    /// Adds an individual partner
    pub fn with_individual(mut self, document: impl Into<String>, value: Decimal) -> Self {
        self.partners.push(Partner::individual(document, value));
        self
    }

    /// Adds any partner, including a sub-company
    pub fn with_partner(mut self, partner: Partner) -> Self {
        self.partners.push(partner);
        self
    }

    /// Builds the company partner
    pub fn build(self) -> Partner {
        Partner::company(self.document, self.total_value, self.partners)
    }
}
