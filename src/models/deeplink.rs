//! Deeplink conversion records.

use serde::{Deserialize, Serialize};

/// One URL conversion result.
///
/// All three URLs are required; a response item missing any of them is
/// dropped from its batch, mirroring [`super::Product`]'s
/// partial-failure policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepLink {
    /// The Coupang URL that was submitted
    pub original_url: String,
    /// Shortened tracking URL
    pub shorten_url: String,
    /// Full landing URL with tracking parameters
    pub landing_url: String,
}

/// Request body for deeplink creation.
///
/// `sub_id` is skipped entirely when unset; the API distinguishes an
/// absent `subId` from a null one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeeplinkRequest {
    pub coupang_urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_id: Option<String>,
}
