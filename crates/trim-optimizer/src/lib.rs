//! Quota text optimizer
//!
//! Lossy, idempotent rewriting of free-text quota descriptions. Rules run in
//! a fixed order; later rules assume earlier ones already ran.

pub mod optimizer;
pub mod rules;

pub use optimizer::{QuotaOptimizer, RewriteInfo, optimize_quota, strip_metadata};
pub use rules::{RewriteRule, default_rules};
