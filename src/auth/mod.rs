//
//  roblox-cloud
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Open Cloud authenticates every request with a static API key sent in the
//! `X-API-KEY` header. Keys are created on the Creator Dashboard and scoped
//! per resource; a missing scope surfaces as a 403
//! ([`ResponseCode::PermissionDenied`](crate::api::common::ResponseCode)).
//!
//! ## Example
//!
//! ```rust
//! use roblox_cloud::auth::ApiKey;
//!
//! let key = ApiKey::new("my-secret-key").unwrap();
//! assert_eq!(format!("{:?}", key), "ApiKey(***)");
//! assert!(ApiKey::new("").is_err());
//! ```

use std::fmt;
use std::sync::Arc;

use reqwest::RequestBuilder;

use crate::api::common::ApiError;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// An Open Cloud API key.
///
/// The key is immutable once created and shared cheaply between client
/// clones. `Debug` output never includes the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    /// Wraps a raw API key.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NoApiKey`] if `key` is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ApiError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ApiError::NoApiKey);
        }
        Ok(Self(Arc::from(key)))
    }

    /// Returns the raw key.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Applies the `X-API-KEY` header to an HTTP request.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use roblox_cloud::auth::ApiKey;
    /// use reqwest::Client;
    ///
    /// async fn make_authenticated_request(key: &ApiKey) {
    ///     let client = Client::new();
    ///     let request = client.get("https://apis.roblox.com/cloud/v2/users/1");
    ///     let response = key.apply_to_request(request).send().await;
    /// }
    /// ```
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(API_KEY_HEADER, self.expose())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(ApiKey::new(""), Err(ApiError::NoApiKey)));
    }

    #[test]
    fn test_key_is_redacted() {
        let key = ApiKey::new("abc123").unwrap();
        assert_eq!(key.expose(), "abc123");
        assert!(!format!("{:?}", key).contains("abc123"));
    }
}
