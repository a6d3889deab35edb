//! Domain records for the Coupang affiliate API.
//!
//! All records are transient: built from one HTTP response, handed to
//! the caller, never mutated or cached.

mod deeplink;
mod product;

pub use deeplink::{DeepLink, DeeplinkRequest};
pub use product::Product;

use crate::error::{ApiError, ApiResult};

/// Inclusive bounds for the `limit` parameter of list operations.
pub const LIMIT_MIN: u32 = 1;
/// Upper inclusive bound for the `limit` parameter.
pub const LIMIT_MAX: u32 = 100;

/// Reject an out-of-range result limit before any network activity.
pub fn validate_limit(limit: u32) -> ApiResult<()> {
    if !(LIMIT_MIN..=LIMIT_MAX).contains(&limit) {
        return Err(ApiError::Validation(format!(
            "Limit must be between {} and {}, got {}",
            LIMIT_MIN, LIMIT_MAX, limit
        )));
    }
    Ok(())
}

/// Validated parameters for a product search.
///
/// The keyword may be empty; only the limit is range-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub keyword: String,
    pub limit: u32,
}

impl SearchParams {
    /// Default result limit for searches.
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Create search parameters, rejecting an out-of-range limit.
    pub fn new(keyword: impl Into<String>, limit: u32) -> ApiResult<Self> {
        validate_limit(limit)?;
        Ok(Self {
            keyword: keyword.into(),
            limit,
        })
    }
}
