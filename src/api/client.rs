//
//  roblox-cloud
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Roblox APIs
//!
//! This module provides the core HTTP client used by every accessor. It owns
//! the API key, the underlying `reqwest` client and the endpoint
//! configuration, and implements the single-request transport.
//!
//! ## Features
//!
//! - `X-API-KEY` header injection on every request
//! - Fixed `User-Agent` client identifier
//! - Query parameter merging into pre-existing query strings
//! - JSON bodies (with `Content-Type: application/json`) only when supplied
//! - Status classification through [`classify`]
//!
//! ## Request Lifecycle
//!
//! Every call performs exactly one round trip. The response body is always
//! read to completion, on success and on failure, before the status is
//! classified. There are no retries at this layer.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use super::common::{classify, decode, ApiError, Paginator};
use crate::auth::ApiKey;
use crate::config::{ClientConfig, Endpoints};

/// The main HTTP client for the Roblox Open Cloud and legacy APIs.
///
/// A client is cheap to clone: the `reqwest` connection pool and the
/// configuration are shared. Entities returned by the accessors keep a clone
/// so they can make further calls scoped to themselves.
///
/// Nothing on the client is mutated after construction, so a single instance
/// may be shared freely between tasks.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use roblox_cloud::api::RobloxClient;
///
/// # async fn example() -> Result<(), roblox_cloud::api::ApiError> {
/// let client = RobloxClient::new("your-api-key")?;
/// let group = client.group_by_id("7").await?;
/// println!("{} has {} members", group.name, group.member_count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RobloxClient {
    /// The underlying HTTP client
    http: Client,
    /// The credential attached to every request
    api_key: ApiKey,
    /// Endpoints, page sizes and the pagination interval
    config: Arc<ClientConfig>,
}

impl RobloxClient {
    /// Creates a client for the default Roblox endpoints.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NoApiKey`] if `api_key` is empty
    /// - [`ApiError::Network`] if the HTTP client could not be built
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Creates a client with an explicit configuration.
    ///
    /// Used to point the client at a mock server or to shrink the page
    /// interval in tests.
    ///
    /// # Example
    ///
    /// ```rust
    /// use roblox_cloud::api::RobloxClient;
    /// use roblox_cloud::config::{ClientConfig, Endpoints};
    ///
    /// let config = ClientConfig {
    ///     endpoints: Endpoints::with_base("http://127.0.0.1:1234"),
    ///     ..ClientConfig::default()
    /// };
    /// let client = RobloxClient::with_config("key", config).unwrap();
    /// assert_eq!(client.endpoints().cloud, "http://127.0.0.1:1234/cloud/v2/");
    /// ```
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self, ApiError> {
        let api_key = ApiKey::new(api_key)?;
        let http = Client::builder()
            .user_agent(crate::CLIENT_IDENTIFIER)
            .build()?;

        Ok(Self {
            http,
            api_key,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.config.endpoints
    }

    /// Returns a paginator using the configured interval.
    pub fn paginator(&self, page_size: u32) -> Paginator {
        Paginator::new(page_size, self.config.page_interval())
    }

    /// Issues a single HTTP request and returns the raw response body.
    ///
    /// # Parameters
    ///
    /// * `method` - The HTTP method
    /// * `url` - The full endpoint URL, possibly with an existing query string
    /// * `query` - Parameters merged into the query string (these win on collision)
    /// * `headers` - Extra headers, applied last; each replaces any fixed
    ///   header of the same name
    /// * `body` - Optional JSON body
    ///
    /// # Returns
    ///
    /// The raw body text when the status is 200.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidUrl`] if `url` cannot be parsed
    /// - [`ApiError::InvalidHeader`] if a caller header is malformed
    /// - [`ApiError::Network`] on connection or body read failures
    /// - [`ApiError::Status`] / [`ApiError::Http`] for any non-200 status,
    ///   carrying the raw body
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, &str)],
        headers: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<String, ApiError> {
        let url = merge_query(url, query)?;
        debug!(%method, %url, "Sending request");

        let extra = header_map(headers)?;
        let mut request = self.api_key.apply_to_request(self.http.request(method, url));
        if let Some(body) = body {
            request = request.json(body);
        }
        if !extra.is_empty() {
            request = request.headers(extra);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        debug!(status, bytes = text.len(), "Received response");

        match classify(status, &text) {
            Some(err) => Err(err),
            None => Ok(text),
        }
    }

    /// Makes an HTTP GET request and returns the raw body.
    pub async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String, ApiError> {
        self.execute::<()>(Method::GET, url, query, &[], None).await
    }

    /// Makes an HTTP GET request and decodes the JSON response into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        decode(&self.get(url, query).await?)
    }

    /// Makes an HTTP POST request with a JSON body and returns the raw body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<String, ApiError> {
        self.execute(Method::POST, url, query, &[], Some(body)).await
    }

    /// Makes an HTTP POST request and decodes the JSON response into `T`.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        decode(&self.post(url, &[], body).await?)
    }

    /// Makes an HTTP PATCH request with a JSON body and returns the raw body.
    pub async fn patch<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<String, ApiError> {
        self.execute(Method::PATCH, url, &[], &[], Some(body)).await
    }

    /// Makes an HTTP DELETE request. No body is sent.
    pub async fn delete(&self, url: &str) -> Result<(), ApiError> {
        self.execute::<()>(Method::DELETE, url, &[], &[], None)
            .await
            .map(|_| ())
    }
}

fn header_map(headers: &[(&str, &str)]) -> Result<HeaderMap, ApiError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ApiError::InvalidHeader(name.to_string()))?;
        let value =
            HeaderValue::from_str(value).map_err(|_| ApiError::InvalidHeader(name.to_string()))?;
        map.insert(name, value);
    }
    Ok(map)
}

/// Merges `query` into the query string already present on `base`.
///
/// Existing pairs whose key is not in `query` keep their position; pairs with
/// a colliding key are replaced by the caller's values, which are appended
/// in the order given.
pub fn merge_query(base: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
    let mut url = Url::parse(base)?;
    if query.is_empty() {
        return Ok(url);
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .into_owned()
        .filter(|(key, _)| !query.iter().any(|(name, _)| *name == key.as_str()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept.iter())
        .extend_pairs(query.iter());

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::ResponseCode;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> RobloxClient {
        let config = ClientConfig {
            endpoints: Endpoints::with_base(&server.url()),
            ..ClientConfig::default()
        };
        RobloxClient::with_config("abc123", config).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_key() {
        assert!(matches!(RobloxClient::new(""), Err(ApiError::NoApiKey)));
        assert!(RobloxClient::new("abc123").is_ok());
    }

    #[test]
    fn test_merge_query_caller_wins() {
        let url = merge_query("https://example.com/a?x=1&y=2", &[("y", "3"), ("z", "4")]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/a?x=1&y=3&z=4");
    }

    #[test]
    fn test_merge_query_without_params_keeps_url() {
        let url = merge_query("https://example.com/a?x=1", &[]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/a?x=1");
        let url = merge_query("https://example.com/a", &[("name", "a b")]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/a?name=a+b");
    }

    #[test]
    fn test_merge_query_rejects_bad_url() {
        assert!(matches!(
            merge_query("not a url", &[]),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_get_sends_fixed_headers_without_content_type() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/thing")
            .match_header("x-api-key", "abc123")
            .match_header("user-agent", crate::CLIENT_IDENTIFIER)
            .match_header("content-type", Matcher::Missing)
            .match_query(Matcher::UrlEncoded("a".into(), "1".into()))
            .with_status(200)
            .with_body("ok")
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        let body = client
            .get(&format!("{}/thing", server.url()), &[("a", "1")])
            .await
            .unwrap();

        assert_eq!(body, "ok");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/thing")
            .match_header("x-api-key", "abc123")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"usernames": ["builderman"]})))
            .with_status(200)
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        client
            .post(
                &format!("{}/thing", server.url()),
                &[],
                &json!({"usernames": ["builderman"]}),
            )
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_caller_headers_replace_fixed_ones() {
        let mut server = mockito::Server::new_async().await;
        let fixed = server
            .mock("GET", "/thing")
            .match_header("x-api-key", "abc123")
            .with_status(200)
            .expect(0)
            .create_async()
            .await;
        let replaced = server
            .mock("GET", "/thing")
            .match_header("x-api-key", "other")
            .match_header("x-trace", "1")
            .with_status(200)
            .with_body("ok")
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        let body = client
            .execute::<()>(
                Method::GET,
                &format!("{}/thing", server.url()),
                &[],
                &[("X-API-KEY", "other"), ("X-Trace", "1")],
                None,
            )
            .await
            .unwrap();

        assert_eq!(body, "ok");
        fixed.assert_async().await;
        replaced.assert_async().await;
    }

    #[tokio::test]
    async fn test_malformed_caller_header_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client
            .execute::<()>(
                Method::GET,
                &format!("{}/thing", server.url()),
                &[],
                &[("bad header", "1")],
                None,
            )
            .await;

        assert!(matches!(result, Err(ApiError::InvalidHeader(name)) if name == "bad header"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_sends_no_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/thing")
            .match_header("content-type", Matcher::Missing)
            .match_body("")
            .with_status(200)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server);
        client.delete(&format!("{}/thing", server.url())).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_200_keeps_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body(r#"{"code":"NOT_FOUND"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .get(&format!("{}/missing", server.url()), &[])
            .await
            .unwrap_err();

        match err {
            ApiError::Status { status, code, body } => {
                assert_eq!(status, 404);
                assert_eq!(code, ResponseCode::NotFound);
                assert_eq!(body, r#"{"code":"NOT_FOUND"}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_created_is_not_success() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/thing")
            .with_status(201)
            .with_body("created")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .post(&format!("{}/thing", server.url()), &[], &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 201, .. }));
    }

    #[tokio::test]
    async fn test_get_json_surfaces_decode_errors() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/thing")
            .with_status(200)
            .with_body("[1, 2")
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .get_json::<Vec<u32>>(&format!("{}/thing", server.url()), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
