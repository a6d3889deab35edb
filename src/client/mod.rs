//! HTTP client for the Coupang affiliate API.
//!
//! One [`CoupangClient`] owns one `reqwest` connection pool and a
//! signer. Each operation is a single stateless request/response round
//! trip: build the path and query, sign exactly the bytes that go on
//! the wire, issue the call, and map the loosely typed JSON into
//! validated domain records. No retries, no caching.

pub mod endpoints;
pub(crate) mod parse;

use reqwest::{header, Method};
use serde_json::Value;
use tracing::debug;
use url::form_urlencoded;

use crate::auth::CoupangHmacSigner;
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{validate_limit, DeepLink, DeeplinkRequest, Product, SearchParams};

/// Client for the Coupang affiliate open API.
///
/// Construct one per process from a [`Config`] and share it; the
/// underlying pool is safe for concurrent independent requests. The
/// configured request timeout bounds every call. Dropping the client
/// releases the pool.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = CoupangClient::new(&config)?;
///
/// let products = client.search_products("laptop", 10).await?;
/// for product in &products {
///     println!("{}: {} KRW", product.product_name, product.product_price);
/// }
/// ```
#[derive(Debug)]
pub struct CoupangClient {
    /// Shared connection pool
    http: reqwest::Client,
    /// Request signer
    signer: CoupangHmacSigner,
    /// API gateway base URL
    base_url: String,
    /// Default tracking sub-id for deeplinks
    default_sub_id: Option<String>,
}

impl CoupangClient {
    /// Create a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if any credential is empty
    /// or the HTTP client cannot be built.
    pub fn new(config: &Config) -> ApiResult<Self> {
        if config.access_key.is_empty() || config.secret_key.is_empty() || config.partner_id.is_empty()
        {
            return Err(ApiError::Configuration(
                "Missing required Coupang API credentials".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                ApiError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            signer: CoupangHmacSigner::new(&config.access_key, &config.secret_key),
            base_url: config.api_base_url.clone(),
            default_sub_id: config.sub_id.clone(),
        })
    }

    /// Search products by keyword.
    ///
    /// `limit` must be in `[1, 100]`; the range is checked before any
    /// network activity. Malformed individual items in the response
    /// are skipped, so the returned list may be shorter than `limit`
    /// even when the API reports more matches.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] for an out-of-range limit, otherwise
    /// the shared request-path errors (status, transport, parse).
    pub async fn search_products(&self, keyword: &str, limit: u32) -> ApiResult<Vec<Product>> {
        let params = SearchParams::new(keyword, limit)?;

        let query = build_query(&[
            ("keyword", params.keyword.as_str()),
            ("limit", &params.limit.to_string()),
        ]);
        let body = self
            .request(Method::GET, endpoints::PRODUCT_SEARCH, &query, None)
            .await?;

        let (items, shape) = parse::search_items(&body);
        debug!("search '{}' returned {} raw items ({:?})", keyword, items.len(), shape);

        Ok(parse::collect_records(items, "product"))
    }

    /// Fetch details for a single product.
    ///
    /// Returns `Ok(None)` when the API answers 404; every other error
    /// propagates.
    pub async fn get_product_details(&self, product_id: &str) -> ApiResult<Option<Product>> {
        let path = endpoints::product_details(product_id);

        let body = match self.request(Method::GET, &path, "", None).await {
            Ok(body) => body,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };

        let item = parse::detail_item(&body);
        let product = serde_json::from_value(item.clone())
            .map_err(|e| ApiError::Parse(format!("Invalid product detail: {}", e)))?;
        Ok(Some(product))
    }

    /// List best-selling products for a category.
    ///
    /// Same limit contract as [`Self::search_products`]. The category
    /// endpoint carries its items directly under `data`; there is no
    /// nested fallback here.
    pub async fn get_best_products_by_category(
        &self,
        category_id: &str,
        limit: u32,
    ) -> ApiResult<Vec<Product>> {
        validate_limit(limit)?;

        let path = endpoints::best_category(category_id);
        let query = build_query(&[("limit", &limit.to_string())]);
        let body = self.request(Method::GET, &path, &query, None).await?;

        let (items, shape) = parse::data_items(&body);
        debug!(
            "category {} returned {} raw items ({:?})",
            category_id,
            items.len(),
            shape
        );

        Ok(parse::collect_records(items, "product"))
    }

    /// Convert Coupang URLs into tracked deeplinks.
    ///
    /// `sub_id` falls back to the configured default; when neither is
    /// set the request body omits `subId` entirely.
    pub async fn create_deeplinks(
        &self,
        coupang_urls: &[String],
        sub_id: Option<&str>,
    ) -> ApiResult<Vec<DeepLink>> {
        let request = DeeplinkRequest {
            coupang_urls: coupang_urls.to_vec(),
            sub_id: self.effective_sub_id(sub_id),
        };
        let json_body = serde_json::to_value(&request)
            .map_err(|e| ApiError::Parse(format!("Invalid deeplink request: {}", e)))?;

        let body = self
            .request(Method::POST, endpoints::DEEPLINK, "", Some(json_body))
            .await?;

        let (items, _) = parse::data_items(&body);
        Ok(parse::collect_records(items, "deeplink"))
    }

    /// Resolve the sub-id for a deeplink request: explicit argument,
    /// else the configured default, else none.
    fn effective_sub_id(&self, sub_id: Option<&str>) -> Option<String> {
        sub_id
            .map(str::to_string)
            .or_else(|| self.default_sub_id.clone())
    }

    /// Shared request path for all operations.
    ///
    /// `query` is the raw query string (no leading `?`, empty when
    /// absent); the same bytes are signed and transmitted. A non-2xx
    /// status becomes [`ApiError::Status`] with the body verbatim, a
    /// transport failure becomes [`ApiError::Transport`] or
    /// [`ApiError::Timeout`], and a non-JSON success body is fatal.
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &str,
        json_body: Option<Value>,
    ) -> ApiResult<Value> {
        let headers = self.auth_headers(method.as_str(), path, query);

        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }

        debug!("{} {}", method, path);

        let mut builder = self.http.request(method, &url).headers(headers);
        if let Some(body) = json_body {
            builder = builder.json(&body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text)
            .map_err(|e| ApiError::Parse(format!("{} - body: {}", e, text)))
    }

    /// Build a `HeaderMap` from the signer's header pairs.
    fn auth_headers(&self, method: &str, path: &str, query: &str) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        for (name, value) in self.signer.headers(method, path, query) {
            if let (Ok(name), Ok(value)) = (
                header::HeaderName::from_bytes(name.as_bytes()),
                header::HeaderValue::from_str(&value),
            ) {
                headers.insert(name, value);
            }
        }
        headers
    }
}

/// URL-encode query parameters, preserving insertion order.
///
/// Built once per call and reused for both signing and transmission so
/// the signed bytes match the wire bytes exactly.
fn build_query(params: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_encodes_and_preserves_order() {
        let query = build_query(&[("keyword", "laptop"), ("limit", "10")]);
        assert_eq!(query, "keyword=laptop&limit=10");

        let query = build_query(&[("keyword", "노트북 거치대"), ("limit", "5")]);
        assert!(query.starts_with("keyword=%EB%85%B8%ED%8A%B8%EB%B6%81"));
        assert!(query.contains('+')); // space, form-encoded
        assert!(query.ends_with("&limit=5"));
    }

    #[test]
    fn test_build_query_empty() {
        assert_eq!(build_query(&[]), "");
    }

    #[test]
    fn test_new_rejects_empty_credentials() {
        let config = Config::new("", "sk", "partner");
        let err = CoupangClient::new(&config).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn test_effective_sub_id_fallback_chain() {
        let with_default = CoupangClient::new(
            &Config::new("ak", "sk", "partner").with_sub_id("configured"),
        )
        .unwrap();
        assert_eq!(
            with_default.effective_sub_id(Some("explicit")).as_deref(),
            Some("explicit")
        );
        assert_eq!(
            with_default.effective_sub_id(None).as_deref(),
            Some("configured")
        );

        let without_default = CoupangClient::new(&Config::new("ak", "sk", "partner")).unwrap();
        assert_eq!(without_default.effective_sub_id(None), None);
    }

    #[tokio::test]
    async fn test_limit_validation_precedes_network() {
        // Base URL points nowhere; a network attempt would fail with a
        // transport error, so a validation error proves the check runs
        // before any I/O.
        let config = Config::new("ak", "sk", "partner").with_base_url("http://127.0.0.1:1");
        let client = CoupangClient::new(&config).unwrap();

        let err = client.search_products("laptop", 0).await.unwrap_err();
        assert!(err.is_validation());

        let err = client.search_products("laptop", 101).await.unwrap_err();
        assert!(err.is_validation());

        let err = client
            .get_best_products_by_category("1016", 101)
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }
}
