//! Product record and its wire-format deserialization.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One listed or detailed Coupang product.
///
/// Deserialized from the API's camelCase JSON. The required fields
/// (`productId`, `productName`, `productPrice`, `productImage`,
/// `productUrl`) make or break the record: a source item missing any
/// of them fails deserialization and is dropped by the batch parser.
/// Optional fields stay `None` when absent, which is distinct from a
/// present-but-false/zero value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product id, normalized to a string even when the source
    /// sends a number.
    #[serde(deserialize_with = "id_string")]
    pub product_id: String,
    /// Display name
    pub product_name: String,
    /// Price in KRW (smallest whole currency unit)
    pub product_price: i64,
    /// Main image URL
    pub product_image: String,
    /// Affiliate product URL
    pub product_url: String,

    /// Category name, when the endpoint reports one
    #[serde(default)]
    pub category_name: Option<String>,
    /// Rocket-delivery flag
    #[serde(default)]
    pub is_rocket: Option<bool>,
    /// Free-shipping flag
    #[serde(default)]
    pub is_free_shipping: Option<bool>,
    /// Discount percentage
    #[serde(default)]
    pub discount_rate: Option<i64>,
    /// Price before discount
    #[serde(default)]
    pub original_price: Option<i64>,
}

/// Accept a JSON string or number and normalize it to a string.
///
/// The API is inconsistent about `productId`: search responses carry
/// numbers, other endpoints carry strings.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "productId must be a string or number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_id_normalized_to_string() {
        let product: Product = serde_json::from_value(json!({
            "productId": 123,
            "productName": "Samsung Galaxy S24",
            "productPrice": 999000,
            "productImage": "https://thumbnail.coupangcdn.com/x.jpg",
            "productUrl": "https://link.coupang.com/x"
        }))
        .unwrap();

        assert_eq!(product.product_id, "123");
        assert_eq!(product.product_price, 999000);
    }

    #[test]
    fn test_string_id_passes_through() {
        let product: Product = serde_json::from_value(json!({
            "productId": "1234567890",
            "productName": "Laptop",
            "productPrice": 1500000,
            "productImage": "https://img",
            "productUrl": "https://url"
        }))
        .unwrap();

        assert_eq!(product.product_id, "1234567890");
    }

    #[test]
    fn test_optional_fields_absent_is_none() {
        let product: Product = serde_json::from_value(json!({
            "productId": "1",
            "productName": "Item",
            "productPrice": 1000,
            "productImage": "https://img",
            "productUrl": "https://url"
        }))
        .unwrap();

        assert_eq!(product.category_name, None);
        assert_eq!(product.is_rocket, None);
        assert_eq!(product.is_free_shipping, None);
        assert_eq!(product.discount_rate, None);
        assert_eq!(product.original_price, None);
    }

    #[test]
    fn test_optional_fields_present_false_is_not_none() {
        let product: Product = serde_json::from_value(json!({
            "productId": "1",
            "productName": "Item",
            "productPrice": 1000,
            "productImage": "https://img",
            "productUrl": "https://url",
            "isRocket": false,
            "isFreeShipping": true,
            "discountRate": 15,
            "originalPrice": 1175,
            "categoryName": "Electronics"
        }))
        .unwrap();

        assert_eq!(product.is_rocket, Some(false));
        assert_eq!(product.is_free_shipping, Some(true));
        assert_eq!(product.discount_rate, Some(15));
        assert_eq!(product.original_price, Some(1175));
        assert_eq!(product.category_name.as_deref(), Some("Electronics"));
    }

    #[test]
    fn test_missing_required_field_fails() {
        // No productPrice
        let result: Result<Product, _> = serde_json::from_value(json!({
            "productId": "1",
            "productName": "Item",
            "productImage": "https://img",
            "productUrl": "https://url"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_scalar_id_fails() {
        let result: Result<Product, _> = serde_json::from_value(json!({
            "productId": {"nested": true},
            "productName": "Item",
            "productPrice": 1,
            "productImage": "https://img",
            "productUrl": "https://url"
        }));
        assert!(result.is_err());
    }
}
