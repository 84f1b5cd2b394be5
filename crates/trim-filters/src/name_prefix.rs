use trim_core::ProductRecord;

use crate::filter::{FilterStage, ProductFilter, active_entries};

/// Drops products whose name starts with an excluded prefix, ignoring case
pub struct NamePrefixFilter {
    prefixes: Vec<String>,
}

impl NamePrefixFilter {
    pub fn new(prefixes: &[String]) -> Self {
        Self {
            prefixes: active_entries(prefixes)
                .iter()
                .map(|prefix| prefix.to_lowercase())
                .collect(),
        }
    }
}

impl ProductFilter for NamePrefixFilter {
    fn stage(&self) -> FilterStage {
        FilterStage::ProductName
    }

    fn is_active(&self) -> bool {
        !self.prefixes.is_empty()
    }

    fn excludes(&self, record: &ProductRecord) -> bool {
        let name = record.name.to_lowercase();
        self.prefixes.iter().any(|prefix| name.starts_with(prefix))
    }
}
