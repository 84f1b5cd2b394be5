//! Catalog response parsing

use serde_json::{Map, Value};

use crate::{ProductRecord, Result, TrimError, VariantSpec};

/// A parsed upstream catalog response
#[derive(Debug, Clone, Default)]
pub struct CatalogResponse {
    /// Products from the variant's list field, in payload order
    pub products: Vec<ProductRecord>,
    /// Every other top-level field, carried along unread
    pub metadata: Map<String, Value>,
}

impl CatalogResponse {
    /// Parse a raw payload using the variant's field names.
    ///
    /// A missing or null product list is an empty catalog. Anything that is
    /// not a JSON object at the top level, a non-array list, or a non-object
    /// product is rejected.
    pub fn parse(raw: &str, spec: &VariantSpec) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;

        let Value::Object(mut root) = value else {
            return Err(TrimError::InvalidCatalog(
                "expected a JSON object at the top level".to_string(),
            ));
        };

        let products = match root.remove(&spec.list_field) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::Object(object) => {
                        Ok(ProductRecord::from_json(object, &spec.amount_field))
                    }
                    _ => Err(TrimError::InvalidCatalog(format!(
                        "{}[{}] is not an object",
                        spec.list_field, index
                    ))),
                })
                .collect::<Result<Vec<_>>>()?,
            Some(_) => {
                return Err(TrimError::InvalidCatalog(format!(
                    "field '{}' is not an array",
                    spec.list_field
                )));
            }
        };

        Ok(Self {
            products,
            metadata: root,
        })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recharge_payload() {
        let raw = r#"{"to":"0812","paket":[{"productId":"1","productName":"A","total_":"5"}]}"#;

        let catalog = CatalogResponse::parse(raw, &VariantSpec::recharge()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products[0].amount, "5");
        assert_eq!(catalog.metadata.get("to").unwrap(), "0812");
    }

    #[test]
    fn test_activation_reads_res_field() {
        let raw = r#"{"req":{},"res":[{"productId":"9","price":"500"}],"paket":[{}]}"#;

        let catalog = CatalogResponse::parse(raw, &VariantSpec::activation()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products[0].id, "9");
        assert!(catalog.metadata.contains_key("paket"));
    }

    #[test]
    fn test_missing_list_is_empty() {
        let catalog = CatalogResponse::parse(r#"{"other":1}"#, &VariantSpec::recharge()).unwrap();
        assert!(catalog.is_empty());

        let catalog = CatalogResponse::parse(r#"{"paket":null}"#, &VariantSpec::recharge()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = CatalogResponse::parse("{not json", &VariantSpec::recharge()).unwrap_err();
        assert!(matches!(err, TrimError::MalformedPayload(_)));
    }

    #[test]
    fn test_wrong_shapes_are_rejected() {
        let spec = VariantSpec::recharge();

        let err = CatalogResponse::parse("[1,2]", &spec).unwrap_err();
        assert!(matches!(err, TrimError::InvalidCatalog(_)));

        let err = CatalogResponse::parse(r#"{"paket":"none"}"#, &spec).unwrap_err();
        assert!(matches!(err, TrimError::InvalidCatalog(_)));

        let err = CatalogResponse::parse(r#"{"paket":[{},3]}"#, &spec).unwrap_err();
        assert_eq!(err.to_string(), "Invalid catalog: paket[1] is not an object");
    }
}
