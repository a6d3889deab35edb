//! Tolerant extraction of records from loosely typed API responses.
//!
//! Coupang wraps payloads as `{"rCode": "0", "rMessage": "", "data": ...}`
//! but is not consistent about where the item array lives. The search
//! endpoint nests it at `data.productData`; the category and deeplink
//! endpoints put the array directly in `data`. Shape resolution is an
//! explicit fallback chain, and batch conversion isolates per-item
//! failures: a malformed element is logged and skipped, never fatal.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Where a response's item array was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ItemShape {
    /// `data.productData` array (search responses)
    Nested,
    /// `data` array
    Flat,
    /// No `data` key, or not an array
    Missing,
}

/// Resolve the item array of a search response.
///
/// Tries `data.productData`, then `data` itself, then gives up and
/// reports an empty collection.
pub(crate) fn search_items(body: &Value) -> (&[Value], ItemShape) {
    if let Some(items) = body
        .get("data")
        .and_then(|d| d.get("productData"))
        .and_then(Value::as_array)
    {
        return (items, ItemShape::Nested);
    }
    if let Some(items) = body.get("data").and_then(Value::as_array) {
        return (items, ItemShape::Flat);
    }
    (&[], ItemShape::Missing)
}

/// Resolve the item array of a response that carries it at `data`.
///
/// Used by the category best-seller and deeplink endpoints, which have
/// no nested fallback.
pub(crate) fn data_items(body: &Value) -> (&[Value], ItemShape) {
    match body.get("data").and_then(Value::as_array) {
        Some(items) => (items, ItemShape::Flat),
        None => (&[], ItemShape::Missing),
    }
}

/// Resolve the single item of a detail response.
///
/// Uses `data` when present, otherwise the whole body.
pub(crate) fn detail_item(body: &Value) -> &Value {
    body.get("data").unwrap_or(body)
}

/// Convert raw items to records, skipping elements that fail.
///
/// Preserves the relative order of surviving items. Failures go to the
/// diagnostic log with their index; they never abort the batch.
pub(crate) fn collect_records<T: DeserializeOwned>(items: &[Value], kind: &str) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item.clone()) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping malformed {} at index {}: {}", kind, index, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeepLink, Product};
    use serde_json::json;

    fn product_item(id: u64) -> Value {
        json!({
            "productId": id,
            "productName": format!("Item {}", id),
            "productPrice": 1000 * id,
            "productImage": "https://img",
            "productUrl": "https://url"
        })
    }

    #[test]
    fn test_search_items_nested_shape() {
        let body = json!({"rCode": "0", "data": {"productData": [product_item(1), product_item(2)]}});
        let (items, shape) = search_items(&body);
        assert_eq!(shape, ItemShape::Nested);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_search_items_flat_fallback() {
        let body = json!({"rCode": "0", "data": [product_item(1)]});
        let (items, shape) = search_items(&body);
        assert_eq!(shape, ItemShape::Flat);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_search_items_missing_data() {
        let body = json!({"rCode": "0", "rMessage": ""});
        let (items, shape) = search_items(&body);
        assert_eq!(shape, ItemShape::Missing);
        assert!(items.is_empty());
    }

    #[test]
    fn test_data_items_has_no_nested_fallback() {
        // Unlike search, a nested productData under data is NOT unwrapped.
        let body = json!({"data": {"productData": [product_item(1)]}});
        let (items, shape) = data_items(&body);
        assert_eq!(shape, ItemShape::Missing);
        assert!(items.is_empty());

        let body = json!({"data": [product_item(1), product_item(2), product_item(3)]});
        let (items, shape) = data_items(&body);
        assert_eq!(shape, ItemShape::Flat);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_detail_item_prefers_data() {
        let body = json!({"data": product_item(7)});
        assert_eq!(detail_item(&body)["productId"], 7);

        let body = product_item(9);
        assert_eq!(detail_item(&body)["productId"], 9);
    }

    #[test]
    fn test_collect_records_skips_malformed_preserving_order() {
        let items = vec![
            product_item(1),
            json!({"productId": 2}), // missing required fields
            product_item(3),
            json!("not an object"),
            product_item(4),
        ];

        let products: Vec<Product> = collect_records(&items, "product");
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].product_id, "1");
        assert_eq!(products[1].product_id, "3");
        assert_eq!(products[2].product_id, "4");
    }

    #[test]
    fn test_collect_records_all_malformed_yields_empty() {
        let items = vec![json!({}), json!(42)];
        let products: Vec<Product> = collect_records(&items, "product");
        assert!(products.is_empty());
    }

    #[test]
    fn test_collect_deeplinks() {
        let items = vec![
            json!({
                "originalUrl": "https://www.coupang.com/vp/products/1",
                "shortenUrl": "https://coupa.ng/a",
                "landingUrl": "https://link.coupang.com/a"
            }),
            json!({"originalUrl": "https://www.coupang.com/vp/products/2"}),
        ];

        let links: Vec<DeepLink> = collect_records(&items, "deeplink");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].shorten_url, "https://coupa.ng/a");
    }
}
