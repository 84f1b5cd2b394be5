use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::rules::{RewriteRule, default_rules};

/// Rule name reported for the metadata strip step
pub const METADATA_RULE: &str = "metadata";

lazy_static! {
    static ref DEFAULT_OPTIMIZER: QuotaOptimizer = QuotaOptimizer::new();
}

/// How often a rule rewrote a quota
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteInfo {
    pub rule: String,
    pub count: usize,
}

/// Ordered rewrite engine for quota descriptions
#[derive(Debug, Clone)]
pub struct QuotaOptimizer {
    rules: Vec<RewriteRule>,
}

impl QuotaOptimizer {
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Use a custom rule list. The metadata strip always runs first.
    pub fn with_rules(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Shorten a quota description
    pub fn optimize(&self, quota: &str) -> String {
        self.optimize_traced(quota).0
    }

    /// Shorten a quota description and report which rules fired
    pub fn optimize_traced(&self, quota: &str) -> (String, Vec<RewriteInfo>) {
        if quota.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut rewrites = Vec::new();

        let (mut result, stripped) = strip_metadata(quota);
        if stripped > 0 {
            rewrites.push(RewriteInfo {
                rule: METADATA_RULE.to_string(),
                count: stripped,
            });
        }

        for rule in &self.rules {
            let (rewritten, count) = rule.apply(&result);
            if count > 0 {
                rewrites.push(RewriteInfo {
                    rule: rule.name.clone(),
                    count,
                });
            }
            result = rewritten;
        }

        (result.trim().to_string(), rewrites)
    }
}

impl Default for QuotaOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Optimize with the built-in rule set
pub fn optimize_quota(quota: &str) -> String {
    DEFAULT_OPTIMIZER.optimize(quota)
}

/// Drop the category label in front of each comma separated item.
///
/// `"DATA National/Internet 30 Days"` keeps only `"Internet 30 Days"`.
/// Items without a `/` are kept as they are; blank ones are dropped.
/// Returns the rejoined text and the number of items that had a label.
pub fn strip_metadata(quota: &str) -> (String, usize) {
    let mut stripped = 0;
    let items: Vec<&str> = quota
        .split(',')
        .map(str::trim)
        .filter_map(|item| match item.split_once('/') {
            Some((_, description)) => {
                stripped += 1;
                Some(description.trim())
            }
            None if !item.is_empty() => Some(item),
            None => None,
        })
        .collect();

    (items.join(","), stripped)
}
