use trim_core::ProductRecord;

use crate::filter::{FilterStage, ProductFilter, active_entries};

/// Drops products whose subcategory exactly equals an excluded value
pub struct SubcategoryFilter {
    excluded: Vec<String>,
}

impl SubcategoryFilter {
    pub fn new(excluded: &[String]) -> Self {
        Self {
            excluded: active_entries(excluded),
        }
    }

    /// Get the exclusion entry that matches, if any
    pub fn matching_entry(&self, record: &ProductRecord) -> Option<&str> {
        self.excluded
            .iter()
            .find(|entry| **entry == record.subcategory)
            .map(String::as_str)
    }
}

impl ProductFilter for SubcategoryFilter {
    fn stage(&self) -> FilterStage {
        FilterStage::Subcategory
    }

    fn is_active(&self) -> bool {
        !self.excluded.is_empty()
    }

    fn excludes(&self, record: &ProductRecord) -> bool {
        self.matching_entry(record).is_some()
    }
}
