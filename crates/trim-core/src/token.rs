//! Compact token rendering
//!
//! Output must be deterministic: the same records in the same order always
//! render to the same payload.

use crate::ProductRecord;

/// Render one record as `#id|name(quota)|amount`
pub fn format_token(record: &ProductRecord) -> String {
    format!(
        "#{}|{}({})|{}",
        record.id, record.name, record.quota, record.amount
    )
}

/// Concatenate tokens for every record with no separator
pub fn render_tokens(records: &[ProductRecord]) -> String {
    records.iter().map(format_token).collect()
}
