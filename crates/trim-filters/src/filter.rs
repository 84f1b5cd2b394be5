//! Product filter trait and the fixed stage chain

use serde::{Deserialize, Serialize};
use std::fmt;
use trim_core::{ExclusionRules, ProductRecord};

use crate::{NamePrefixFilter, QuotaPatternFilter, SubcategoryFilter};

/// Identifies a filter stage in logs and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterStage {
    Subcategory,
    ProductName,
    QuotaMetadata,
}

impl FilterStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterStage::Subcategory => "subcategory",
            FilterStage::ProductName => "product_name",
            FilterStage::QuotaMetadata => "quota_metadata",
        }
    }
}

impl fmt::Display for FilterStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product counts around one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCount {
    pub stage: FilterStage,
    pub before: usize,
    pub after: usize,
}

/// A predicate that removes unwanted products
pub trait ProductFilter: Send + Sync {
    fn stage(&self) -> FilterStage;

    /// False when the exclusion list has no usable entry; the stage is a no-op
    fn is_active(&self) -> bool;

    /// Check if a record should be dropped
    fn excludes(&self, record: &ProductRecord) -> bool;

    /// Keep records that are not excluded, preserving order
    fn apply(&self, records: Vec<ProductRecord>) -> Vec<ProductRecord> {
        if !self.is_active() {
            return records;
        }
        records
            .into_iter()
            .filter(|record| !self.excludes(record))
            .collect()
    }
}

/// The three stages in their fixed order
pub struct FilterChain {
    filters: Vec<Box<dyn ProductFilter>>,
}

impl FilterChain {
    pub fn from_rules(rules: &ExclusionRules) -> Self {
        let filters: Vec<Box<dyn ProductFilter>> = vec![
            Box::new(SubcategoryFilter::new(&rules.subcategories)),
            Box::new(NamePrefixFilter::new(&rules.name_prefixes)),
            Box::new(QuotaPatternFilter::new(&rules.quota_patterns)),
        ];

        Self { filters }
    }

    pub fn stages(&self) -> impl Iterator<Item = &dyn ProductFilter> {
        self.filters.iter().map(|filter| &**filter)
    }

    /// Run every stage and record counts around each one
    pub fn apply(&self, records: Vec<ProductRecord>) -> (Vec<ProductRecord>, Vec<StageCount>) {
        let mut counts = Vec::with_capacity(self.filters.len());
        let mut current = records;

        for filter in self.stages() {
            let before = current.len();
            current = filter.apply(current);
            counts.push(StageCount {
                stage: filter.stage(),
                before,
                after: current.len(),
            });
        }

        (current, counts)
    }
}

/// Non-blank entries of an exclusion list
pub(crate) fn active_entries(list: &[String]) -> Vec<String> {
    list.iter()
        .filter(|entry| !entry.trim().is_empty())
        .cloned()
        .collect()
}
