//! Product exclusion filters
//!
//! Three independent stages, always run in this order:
//! - subcategory (exact match)
//! - product name prefix (case-insensitive)
//! - quota substring (case-insensitive)

pub mod filter;
pub mod name_prefix;
pub mod quota;
pub mod subcategory;

pub use filter::{FilterChain, FilterStage, ProductFilter, StageCount};
pub use name_prefix::NamePrefixFilter;
pub use quota::QuotaPatternFilter;
pub use subcategory::SubcategoryFilter;
