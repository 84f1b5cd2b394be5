use thiserror::Error;

use crate::VariantKind;

#[derive(Error, Debug)]
pub enum TrimError {
    #[error("Unsupported category: {category}. Supported: {supported}")]
    UnsupportedCategory { category: String, supported: String },

    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Category {category} is not a {expected} category")]
    VariantMismatch {
        category: String,
        expected: VariantKind,
    },

    #[error("Category listed under more than one variant: {0}")]
    OverlappingCategories(String),
}

pub type Result<T> = std::result::Result<T, TrimError>;
