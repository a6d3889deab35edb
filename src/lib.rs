//! Coupang affiliate API client and MCP server.
//!
//! Exposes the Coupang Partners open API (product search, category
//! best sellers, deeplink conversion) as Model Context Protocol tools
//! an AI assistant can call. The library splits into:
//!
//! - [`auth`]: per-request HMAC-SHA256 signing (CEA scheme)
//! - [`client`]: authenticated HTTP operations and tolerant response
//!   mapping with per-item failure isolation
//! - [`models`]: validated domain records
//! - [`server`]: JSON-RPC tool dispatch over stdio
//!
//! # Example
//!
//! ```ignore
//! use coupang_mcp::{client::CoupangClient, config::Config};
//!
//! let config = Config::from_env()?;
//! let client = CoupangClient::new(&config)?;
//! let products = client.search_products("laptop", 10).await?;
//! ```

pub mod auth;
pub mod categories;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod server;

pub use client::CoupangClient;
pub use config::Config;
pub use error::{ApiError, ApiResult};
