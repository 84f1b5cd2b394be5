//! Category to variant lookup

use std::collections::HashMap;

use trim_core::{
    ACTIVATION_CATEGORIES, Category, RECHARGE_CATEGORIES, Result, TrimError, VariantKind,
    VariantSpec,
};

/// Maps categories to the variant that processes them
#[derive(Debug, Clone)]
pub struct ProcessorFactory {
    table: HashMap<Category, VariantKind>,
    recharge: VariantSpec,
    activation: VariantSpec,
}

impl ProcessorFactory {
    /// Factory over the built-in category sets
    pub fn new(recharge: VariantSpec, activation: VariantSpec) -> Result<Self> {
        Self::with_categories(RECHARGE_CATEGORIES, ACTIVATION_CATEGORIES, recharge, activation)
    }

    /// Factory over explicit category sets, which must be disjoint
    pub fn with_categories(
        recharge_categories: &[Category],
        activation_categories: &[Category],
        recharge: VariantSpec,
        activation: VariantSpec,
    ) -> Result<Self> {
        debug_assert_eq!(recharge.kind, VariantKind::Recharge);
        debug_assert_eq!(activation.kind, VariantKind::Activation);

        let mut table = HashMap::new();
        for (categories, kind) in [
            (recharge_categories, VariantKind::Recharge),
            (activation_categories, VariantKind::Activation),
        ] {
            for category in categories {
                if let Some(previous) = table.insert(*category, kind)
                    && previous != kind
                {
                    return Err(TrimError::OverlappingCategories(category.to_string()));
                }
            }
        }

        Ok(Self {
            table,
            recharge,
            activation,
        })
    }

    /// Pick the variant for a category name (case-insensitive)
    pub fn select(&self, category: &str) -> Result<&VariantSpec> {
        self.resolve(category).map(|(_, spec)| spec)
    }

    /// Parse the category name and pick its variant
    pub fn resolve(&self, category: &str) -> Result<(Category, &VariantSpec)> {
        let parsed: Category = category
            .parse()
            .map_err(|_| self.unsupported(category))?;
        let kind = self
            .table
            .get(&parsed)
            .copied()
            .ok_or_else(|| self.unsupported(category))?;
        Ok((parsed, self.spec(kind)))
    }

    /// Spec bound to a variant kind
    pub fn spec(&self, kind: VariantKind) -> &VariantSpec {
        match kind {
            VariantKind::Recharge => &self.recharge,
            VariantKind::Activation => &self.activation,
        }
    }

    pub fn processor_type(&self, category: &str) -> Result<VariantKind> {
        self.resolve(category).map(|(_, spec)| spec.kind)
    }

    pub fn is_supported(&self, category: &str) -> bool {
        self.resolve(category).is_ok()
    }

    /// Every category this factory accepts, sorted by name
    pub fn supported_categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.table.keys().copied().collect();
        categories.sort_by_key(|category| category.as_str());
        categories
    }

    fn unsupported(&self, category: &str) -> TrimError {
        let names: Vec<&str> = self
            .supported_categories()
            .iter()
            .map(Category::as_str)
            .collect();

        TrimError::UnsupportedCategory {
            category: category.to_string(),
            supported: names.join(", "),
        }
    }
}
