//! HMAC-SHA256 request signing for the Coupang affiliate API.
//!
//! Coupang's open API uses a CEA authorization scheme:
//! 1. Build a signed-date timestamp (`yyMMdd'T'HHmmss'Z'`, UTC)
//! 2. Compute HMAC-SHA256 over `timestamp + method + path + query`
//! 3. Assemble the `CEA algorithm=..., access-key=..., signed-date=...,
//!    signature=...` authorization header
//!
//! The query string must be byte-for-byte identical to what is sent on
//! the wire: no decoding, re-encoding, or parameter sorting happens
//! here. An empty query contributes nothing to the signed message.

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Algorithm token carried in the authorization header.
pub const ALGORITHM: &str = "HmacSHA256";

/// Content type sent with every request.
pub const CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// HMAC-SHA256 request signer for the Coupang affiliate API.
///
/// Holds the two long-lived credentials and nothing else; signing has
/// no network or state dependency and never fails, whatever bytes it
/// is given. Credential presence is validated by the caller.
///
/// # Example
///
/// ```ignore
/// let signer = CoupangHmacSigner::new("access_key", "secret_key");
/// let headers = signer.headers("GET", "/v2/.../products/search", "keyword=laptop&limit=10");
/// ```
#[derive(Clone, Debug)]
pub struct CoupangHmacSigner {
    access_key: String,
    secret_key: String,
}

impl CoupangHmacSigner {
    /// Create a new signer from an access key and secret key.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Current UTC time in Coupang's signed-date format.
    ///
    /// Format is `yyMMdd'T'HHmmss'Z'` (14 characters, e.g.
    /// `250101T000000Z`). The value doubles as a nonce and freshness
    /// token on the remote side, so it is generated fresh at
    /// header-build time and never cached.
    pub fn timestamp() -> String {
        Utc::now().format("%y%m%dT%H%M%SZ").to_string()
    }

    /// Compute the request signature for a given timestamp.
    ///
    /// The signed message is the exact concatenation
    /// `timestamp + method + path + query`, where `query` is the raw
    /// query string without a leading `?` (empty when there are no
    /// parameters). Returns the lowercase hex HMAC-SHA256 digest.
    pub fn signature(&self, method: &str, path: &str, query: &str, timestamp: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret_key.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(timestamp.as_bytes());
        mac.update(method.as_bytes());
        mac.update(path.as_bytes());
        mac.update(query.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Build the authentication headers for one request.
    ///
    /// Computes a fresh timestamp and signature, then returns the
    /// content-type and authorization header pairs. The authorization
    /// value has the fixed field order
    /// `algorithm, access-key, signed-date, signature`.
    pub fn headers(&self, method: &str, path: &str, query: &str) -> Vec<(&'static str, String)> {
        let timestamp = Self::timestamp();
        let signature = self.signature(method, path, query, &timestamp);

        vec![
            ("Content-Type", CONTENT_TYPE.to_string()),
            (
                "Authorization",
                format!(
                    "CEA algorithm={}, access-key={}, signed-date={}, signature={}",
                    ALGORITHM, self.access_key, timestamp, signature
                ),
            ),
        ]
    }

    /// Get the access key.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }
}
