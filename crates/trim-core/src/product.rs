use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const PRODUCT_ID_KEY: &str = "productId";
pub const PRODUCT_NAME_KEY: &str = "productName";
pub const SUBCATEGORY_KEY: &str = "productSubCategory";
pub const QUOTA_KEY: &str = "quota";

/// One product listing from the upstream catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub subcategory: String,
    pub quota: String,
    pub amount: String,
}

impl ProductRecord {
    /// Build a record from a raw product object.
    ///
    /// Missing or null fields become empty strings so an incomplete upstream
    /// record still yields a token.
    pub fn from_json(object: &Map<String, Value>, amount_field: &str) -> Self {
        Self {
            id: lenient_field(object, PRODUCT_ID_KEY),
            name: lenient_field(object, PRODUCT_NAME_KEY),
            subcategory: lenient_field(object, SUBCATEGORY_KEY),
            quota: lenient_field(object, QUOTA_KEY),
            amount: lenient_field(object, amount_field),
        }
    }
}

fn lenient_field(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        // Numbers, booleans and nested values keep their compact JSON text
        Some(other) => other.to_string(),
    }
}
