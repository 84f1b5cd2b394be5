use serde::{Deserialize, Serialize};
use trim_core::{Category, VariantKind};
use trim_filters::StageCount;
use trim_optimizer::RewriteInfo;

/// Result of one trimming run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrimReport {
    pub category: Category,
    pub variant: VariantKind,
    /// Character count of the raw payload; drives the optimization decision
    pub input_chars: usize,
    pub stages: Vec<StageCount>,
    pub optimized: bool,
    /// Rewrite totals across all surviving quotas, in first-fired order
    pub rewrites: Vec<RewriteInfo>,
    pub products: usize,
    pub output_chars: usize,
    pub payload_hash: String,
    pub elapsed_ms: u64,
    pub payload: String,
}

/// Add per-quota rewrite counts into running totals
pub(crate) fn merge_rewrites(totals: &mut Vec<RewriteInfo>, fired: Vec<RewriteInfo>) {
    for info in fired {
        match totals.iter_mut().find(|total| total.rule == info.rule) {
            Some(total) => total.count += info.count,
            None => totals.push(info),
        }
    }
}
