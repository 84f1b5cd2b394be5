use trim_core::ProductRecord;

use crate::filter::{FilterStage, ProductFilter, active_entries};

/// Drops products whose quota contains an excluded substring, ignoring case
pub struct QuotaPatternFilter {
    patterns: Vec<String>,
}

impl QuotaPatternFilter {
    pub fn new(patterns: &[String]) -> Self {
        Self {
            patterns: active_entries(patterns)
                .iter()
                .map(|pattern| pattern.to_lowercase())
                .collect(),
        }
    }
}

impl ProductFilter for QuotaPatternFilter {
    fn stage(&self) -> FilterStage {
        FilterStage::QuotaMetadata
    }

    fn is_active(&self) -> bool {
        !self.patterns.is_empty()
    }

    fn excludes(&self, record: &ProductRecord) -> bool {
        let quota = record.quota.to_lowercase();
        self.patterns.iter().any(|pattern| quota.contains(pattern.as_str()))
    }
}
