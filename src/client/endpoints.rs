//! Coupang affiliate open-API endpoint paths.
//!
//! Paths are signed as part of the request, so they are centralized
//! here and built exactly once per call.

const API_ROOT: &str = "/v2/providers/affiliate_open_api/apis/openapi";

/// Keyword product search.
pub const PRODUCT_SEARCH: &str =
    "/v2/providers/affiliate_open_api/apis/openapi/products/search";

/// Deeplink creation.
pub const DEEPLINK: &str = "/v2/providers/affiliate_open_api/apis/openapi/deeplink";

/// Detail lookup for a single product.
pub fn product_details(product_id: &str) -> String {
    format!("{}/products/{}", API_ROOT, product_id)
}

/// Best sellers for a category.
pub fn best_category(category_id: &str) -> String {
    format!("{}/products/bestcategories/{}", API_ROOT, category_id)
}
