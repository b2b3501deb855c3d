//! Partner entity and ownership model
//!
//! A partner is anyone that can hold assets: a natural person or a company.
//! Companies are themselves owned by partners, so a company partner carries the
//! ordered list of partners it is composed of, forming an ownership tree.
//!
//! # Partner Composition
//!
//! - **Individual**: a natural person identified by an 11-digit personal ID
//! - **Company**: a legal entity identified by a 14-digit company ID, owning
//!   other individuals or sub-companies
//!
//! A company's own declared value and the values of its partners are distinct;
//! both count toward the value of the ownership tree.
//!
//! # Examples
//!
//! ```rust
//! use domain_partner::partner::Partner;
//! use rust_decimal_macros::dec;
//!
//! let holding = Partner::company(
//!     "41720647000175",
//!     dec!(556587),
//!     vec![
//!         Partner::individual("31464238049", dec!(145789.12)),
//!         Partner::individual("98089811868", dec!(478578.25)),
//!     ],
//! );
//!
//! assert!(holding.is_company());
//! assert_eq!(holding.partners().len(), 2);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{AssetValue, DocumentKind};

/// A natural person holding assets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualPartner {
    /// 11-digit personal ID
    pub document: String,
    /// Declared value of the person's own assets
    pub total_value: Decimal,
}

/// A company holding assets and owned by other partners
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPartner {
    /// 14-digit company ID
    pub document: String,
    /// Declared value of the company's own assets
    pub total_value: Decimal,
    /// Partners composing the company, in declaration order
    #[serde(default)]
    pub partners: Vec<Partner>,
}

/// A node of the ownership tree
///
/// Documents are kept exactly as supplied; they are checked when the tree is
/// valued or audited, not at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Partner {
    /// A natural person (leaf)
    Individual(IndividualPartner),
    /// A company with its own partners (internal node)
    Company(CompanyPartner),
}

impl Partner {
    /// Creates an individual partner
    pub fn individual(document: impl Into<String>, total_value: Decimal) -> Self {
        Partner::Individual(IndividualPartner {
            document: document.into(),
            total_value,
        })
    }

    /// Creates a company partner owning the given partners
    pub fn company(
        document: impl Into<String>,
        total_value: Decimal,
        partners: Vec<Partner>,
    ) -> Self {
        Partner::Company(CompanyPartner {
            document: document.into(),
            total_value,
            partners,
        })
    }

    /// Returns the partner's tax document
    pub fn document(&self) -> &str {
        match self {
            Partner::Individual(individual) => &individual.document,
            Partner::Company(company) => &company.document,
        }
    }

    /// Returns the partner's own declared value, excluding any owned partners
    pub fn total_value(&self) -> Decimal {
        match self {
            Partner::Individual(individual) => individual.total_value,
            Partner::Company(company) => company.total_value,
        }
    }

    /// Returns the declared value as an [`AssetValue`]
    pub fn asset_value(&self) -> AssetValue {
        AssetValue::new(self.total_value())
    }

    /// Returns the partners this partner is composed of
    ///
    /// Individuals have none.
    pub fn partners(&self) -> &[Partner] {
        match self {
            Partner::Individual(_) => &[],
            Partner::Company(company) => &company.partners,
        }
    }

    /// Returns true for a company partner
    pub fn is_company(&self) -> bool {
        matches!(self, Partner::Company(_))
    }

    /// Returns the kind of document this partner carries, if it is valid
    pub fn document_kind(&self) -> Option<DocumentKind> {
        DocumentKind::classify(self.document())
    }

    /// Counts the nodes of the tree rooted at this partner, repeats included
    pub fn node_count(&self) -> usize {
        1 + self.partners().iter().map(Partner::node_count).sum::<usize>()
    }

    /// Returns the depth of the tree rooted at this partner (1 for a leaf)
    pub fn depth(&self) -> usize {
        1 + self.partners().iter().map(Partner::depth).max().unwrap_or(0)
    }
}
