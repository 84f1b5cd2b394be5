//! Variant domain model

use serde::{Deserialize, Serialize};

use crate::VariantKind;

/// Everything that differs between processing variants.
///
/// One generic pipeline consumes this record; adding a variant means adding
/// data, not code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSpec {
    pub kind: VariantKind,
    /// Name of the product array in the catalog response
    pub list_field: String,
    /// Product key holding the price shown in the token
    pub amount_field: String,
    pub exclude: ExclusionRules,
}

impl VariantSpec {
    pub fn recharge() -> Self {
        Self {
            kind: VariantKind::Recharge,
            list_field: "paket".to_string(),
            amount_field: "total_".to_string(),
            exclude: ExclusionRules {
                quota_patterns: vec!["Music RBT/NSP".to_string()],
                ..ExclusionRules::default()
            },
        }
    }

    pub fn activation() -> Self {
        Self {
            kind: VariantKind::Activation,
            list_field: "res".to_string(),
            amount_field: "price".to_string(),
            exclude: ExclusionRules::default(),
        }
    }

    /// Built-in defaults for a variant kind
    pub fn for_kind(kind: VariantKind) -> Self {
        match kind {
            VariantKind::Recharge => Self::recharge(),
            VariantKind::Activation => Self::activation(),
        }
    }
}

/// Per-stage exclusion lists. Blank entries never match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionRules {
    /// Exact subcategory matches
    #[serde(default)]
    pub subcategories: Vec<String>,
    /// Case-insensitive product name prefixes
    #[serde(default)]
    pub name_prefixes: Vec<String>,
    /// Case-insensitive quota substrings
    #[serde(default)]
    pub quota_patterns: Vec<String>,
}
