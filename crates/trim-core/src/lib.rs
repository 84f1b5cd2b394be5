//! Core domain models for the catalog trimmer
//!
//! This crate contains:
//! - Domain models (Category, VariantSpec, ProductRecord, CatalogResponse)
//! - Token formatting (compact `#id|name(quota)|amount` output)
//! - The shared error type

pub mod catalog;
pub mod category;
pub mod error;
pub mod product;
pub mod token;
pub mod variant;

pub use catalog::CatalogResponse;
pub use category::{ACTIVATION_CATEGORIES, Category, RECHARGE_CATEGORIES, VariantKind};
pub use error::{Result, TrimError};
pub use product::ProductRecord;
pub use token::{format_token, render_tokens};
pub use variant::{ExclusionRules, VariantSpec};
