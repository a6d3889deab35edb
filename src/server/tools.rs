//! Tool definitions, dispatch, and result formatting.
//!
//! Three tools are exposed: keyword search, category best sellers, and
//! deeplink creation. Results are rendered as human-readable text;
//! given the same records the rendering is deterministic. API and
//! validation failures become `Error: ...` text content rather than
//! protocol errors, so a bad call never takes the server down.

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::categories::category_list_text;
use crate::client::CoupangClient;
use crate::models::{DeepLink, Product};

/// Tool descriptors for `tools/list`.
pub(super) fn tools_list() -> Value {
    json!({
        "tools": [
            {
                "name": "search_products",
                "description": "Search for products on Coupang by keyword. \
                    Returns a list of products with names, prices, images, and affiliate URLs. \
                    Useful for finding products, comparing prices, or discovering items.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "keyword": {
                            "type": "string",
                            "description": "Search query keyword (e.g., 'laptop', 'iPhone 15', 'coffee maker')"
                        },
                        "limit": {
                            "type": "integer",
                            "description": "Maximum number of results to return (1-100, default: 10)",
                            "minimum": 1,
                            "maximum": 100,
                            "default": 10
                        }
                    },
                    "required": ["keyword"]
                }
            },
            {
                "name": "get_best_products_by_category",
                "description": format!(
                    "Get best-selling products in a specific Coupang category. \
                     Returns a list of top products in the category with names, prices, and affiliate URLs. \
                     Useful for finding popular items in specific categories.\n\n\
                     Available categories:\n{}",
                    category_list_text()
                ),
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category_id": {
                            "type": "string",
                            "description": "Coupang category ID (e.g., '1016' for 가전디지털)"
                        },
                        "limit": {
                            "type": "integer",
                            "description": "Maximum number of results to return (1-100, default: 20)",
                            "minimum": 1,
                            "maximum": 100,
                            "default": 20
                        }
                    },
                    "required": ["category_id"]
                }
            },
            {
                "name": "create_deeplinks",
                "description": "Convert Coupang product URLs to affiliate tracking deeplinks. \
                    Takes regular Coupang URLs and converts them to shortened tracking URLs with your affiliate code. \
                    Useful for creating trackable links from search results or specific product pages.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "coupang_urls": {
                            "type": "array",
                            "items": {"type": "string"},
                            "description": "List of Coupang product URLs to convert (e.g., ['https://www.coupang.com/vp/products/184614775'])"
                        },
                        "sub_id": {
                            "type": "string",
                            "description": "Optional tracking/sub ID for analytics (uses environment default if not provided)"
                        }
                    },
                    "required": ["coupang_urls"]
                }
            }
        ]
    })
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    keyword: String,
    #[serde(default = "default_search_limit")]
    limit: u32,
}

fn default_search_limit() -> u32 {
    10
}

#[derive(Debug, Deserialize)]
struct CategoryArgs {
    category_id: String,
    #[serde(default = "default_category_limit")]
    limit: u32,
}

fn default_category_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize)]
struct DeeplinkArgs {
    coupang_urls: Vec<String>,
    sub_id: Option<String>,
}

/// Dispatch one `tools/call` to its handler.
///
/// Returns `Err` only for an unknown tool name; every other failure is
/// rendered as text content in the success envelope.
pub(super) async fn handle_tool_call(
    client: &CoupangClient,
    name: &str,
    args: Value,
) -> Result<Value, String> {
    match name {
        "search_products" => Ok(handle_search(client, args).await),
        "get_best_products_by_category" => Ok(handle_category_best(client, args).await),
        "create_deeplinks" => Ok(handle_create_deeplinks(client, args).await),
        _ => Err(format!("Unknown tool: {}", name)),
    }
}

/// Wrap text in the MCP tool-result content shape.
fn text_content(text: String) -> Value {
    json!({
        "content": [{ "type": "text", "text": text }]
    })
}

async fn handle_search(client: &CoupangClient, args: Value) -> Value {
    let args: SearchArgs = match serde_json::from_value(args) {
        Ok(args) => args,
        Err(e) => return text_content(format!("Error: Invalid parameters. {}", e)),
    };

    info!("Searching products: keyword='{}', limit={}", args.keyword, args.limit);

    match client.search_products(&args.keyword, args.limit).await {
        Ok(products) if products.is_empty() => {
            text_content(format!("No products found for keyword: '{}'", args.keyword))
        }
        Ok(products) => text_content(format_products(
            &format!("Found {} product(s) for '{}':", products.len(), args.keyword),
            &products,
            false,
        )),
        Err(e) => {
            error!("search_products failed: {}", e);
            text_content(format!("Error: Failed to fetch data from Coupang API. {}", e))
        }
    }
}

async fn handle_category_best(client: &CoupangClient, args: Value) -> Value {
    let args: CategoryArgs = match serde_json::from_value(args) {
        Ok(args) => args,
        Err(e) => return text_content(format!("Error: Invalid parameters. {}", e)),
    };

    info!(
        "Fetching best products for category: category_id='{}', limit={}",
        args.category_id, args.limit
    );

    match client
        .get_best_products_by_category(&args.category_id, args.limit)
        .await
    {
        Ok(products) if products.is_empty() => {
            text_content(format!("No products found for category: '{}'", args.category_id))
        }
        Ok(products) => text_content(format_products(
            &format!(
                "Found {} best product(s) in category '{}':",
                products.len(),
                args.category_id
            ),
            &products,
            true,
        )),
        Err(e) => {
            error!("get_best_products_by_category failed: {}", e);
            text_content(format!("Error: Failed to fetch data from Coupang API. {}", e))
        }
    }
}

async fn handle_create_deeplinks(client: &CoupangClient, args: Value) -> Value {
    let args: DeeplinkArgs = match serde_json::from_value(args) {
        Ok(args) => args,
        Err(e) => return text_content(format!("Error: Invalid parameters. {}", e)),
    };

    if args.coupang_urls.is_empty() {
        return text_content("Error: 'coupang_urls' must be a non-empty list of URLs".to_string());
    }

    info!(
        "Creating deeplinks for {} URL(s), sub_id={}",
        args.coupang_urls.len(),
        args.sub_id.as_deref().unwrap_or("default")
    );

    match client
        .create_deeplinks(&args.coupang_urls, args.sub_id.as_deref())
        .await
    {
        Ok(links) if links.is_empty() => {
            text_content("No deeplinks created for provided URLs".to_string())
        }
        Ok(links) => text_content(format_deeplinks(&links, args.sub_id.as_deref())),
        Err(e) => {
            error!("create_deeplinks failed: {}", e);
            text_content(format!("Error: Failed to fetch data from Coupang API. {}", e))
        }
    }
}

/// Group an amount into comma-separated thousands with the KRW suffix.
fn format_krw(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-{}원", grouped)
    } else {
        format!("{}원", grouped)
    }
}

/// Render a numbered product listing under a header line.
fn format_products(header: &str, products: &[Product], include_category: bool) -> String {
    let mut lines = vec![header.to_string(), String::new()];

    for (i, product) in products.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, product.product_name));
        lines.push(format!("   Price: {}", format_krw(product.product_price)));
        lines.push(format!("   ID: {}", product.product_id));

        if include_category {
            if let Some(category) = &product.category_name {
                lines.push(format!("   Category: {}", category));
            }
        }
        if product.is_rocket == Some(true) {
            lines.push("   🚀 Rocket Delivery".to_string());
        }
        if product.is_free_shipping == Some(true) {
            lines.push("   📦 Free Shipping".to_string());
        }
        if let Some(rate) = product.discount_rate {
            if rate != 0 {
                lines.push(format!("   💰 Discount: {}%", rate));
            }
        }

        lines.push(format!("   URL: {}", product.product_url));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render a numbered deeplink listing.
fn format_deeplinks(links: &[DeepLink], sub_id: Option<&str>) -> String {
    let mut lines = vec![format!("Created {} deeplink(s):", links.len()), String::new()];

    for (i, link) in links.iter().enumerate() {
        lines.push(format!("{}. Original: {}", i + 1, link.original_url));
        lines.push(format!("   Shortened: {}", link.shorten_url));
        lines.push(format!("   Landing: {}", link.landing_url));
        lines.push(String::new());
    }

    if let Some(sub_id) = sub_id {
        lines.push(format!("Tracking ID: {}", sub_id));
    }

    lines.join("\n")
}
