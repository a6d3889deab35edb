//! Environment-sourced configuration.
//!
//! # Environment Variables
//!
//! - `COUPANG_ACCESS_KEY`: API access key (required)
//! - `COUPANG_SECRET_KEY`: API secret key (required)
//! - `COUPANG_PARTNER_ID`: partner/affiliate id (required)
//! - `COUPANG_SUB_ID`: default tracking sub-id (optional)
//! - `COUPANG_TIMEOUT_SECS`: per-request deadline, default 30 (optional)

use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{ApiError, ApiResult};

/// Production API gateway.
pub const DEFAULT_BASE_URL: &str = "https://api-gateway.coupang.com";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Credentials and settings for the Coupang API client.
#[derive(Clone)]
pub struct Config {
    /// API access key
    pub access_key: String,
    /// API secret key
    pub secret_key: String,
    /// Partner/affiliate id
    pub partner_id: String,
    /// Default tracking sub-id for deeplink creation
    pub sub_id: Option<String>,
    /// API gateway base URL
    pub api_base_url: String,
    /// Deadline applied to every outbound request
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] naming every missing
    /// required variable. Missing credentials are a fatal startup
    /// condition; the client cannot be constructed without them.
    pub fn from_env() -> ApiResult<Self> {
        let access_key = env::var("COUPANG_ACCESS_KEY").ok().filter(|v| !v.is_empty());
        let secret_key = env::var("COUPANG_SECRET_KEY").ok().filter(|v| !v.is_empty());
        let partner_id = env::var("COUPANG_PARTNER_ID").ok().filter(|v| !v.is_empty());

        let mut missing = Vec::new();
        if access_key.is_none() {
            missing.push("COUPANG_ACCESS_KEY");
        }
        if secret_key.is_none() {
            missing.push("COUPANG_SECRET_KEY");
        }
        if partner_id.is_none() {
            missing.push("COUPANG_PARTNER_ID");
        }
        if !missing.is_empty() {
            return Err(ApiError::Configuration(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        let timeout_secs = env::var("COUPANG_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            access_key: access_key.unwrap(),
            secret_key: secret_key.unwrap(),
            partner_id: partner_id.unwrap(),
            sub_id: env::var("COUPANG_SUB_ID").ok().filter(|v| !v.is_empty()),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Construct a configuration directly, for tests and embedding.
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        partner_id: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            partner_id: partner_id.into(),
            sub_id: None,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the default tracking sub-id.
    pub fn with_sub_id(mut self, sub_id: impl Into<String>) -> Self {
        self.sub_id = Some(sub_id.into());
        self
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }

    /// Override the per-request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

// Manual Debug so key material never lands in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &"********")
            .field("secret_key", &"********")
            .field("partner_id", &self.partner_id)
            .field("sub_id", &self.sub_id)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
