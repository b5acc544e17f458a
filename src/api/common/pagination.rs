//
//  roblox-cloud
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cursor Pagination for Open Cloud Collections
//!
//! Open Cloud list endpoints return one page per request together with an
//! opaque `nextPageToken`. An empty (or missing) token marks the last page.
//!
//! | Parameter | Direction | Meaning |
//! |-----------|-----------|---------|
//! | `maxPageSize` | query | Items per page (100 for memberships, 20 for roles) |
//! | `pageToken` | query | Cursor returned by the previous page |
//! | `nextPageToken` | response | Cursor for the following page, empty on the last |
//!
//! # Rate Limiting
//!
//! The membership endpoint is limited to 300 requests per minute. The
//! [`Paginator`] sleeps a fixed interval (200 ms by default) before every page
//! request so a full walk stays under that quota. The delay does not adapt:
//! a 429 response simply ends the walk with [`ApiError::Status`].
//!
//! # Long Running Walks
//!
//! [`Paginator::collect`] has no iteration bound; it stops only when the
//! server stops returning a cursor. For large groups, and especially when the
//! item mapper performs extra lookups per item, a walk can take minutes.
//! Callers that need a deadline should wrap the call in
//! `tokio::time::timeout`.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::ApiError;
use crate::api::client::RobloxClient;

/// One page of an Open Cloud collection.
///
/// Each endpoint names its item array differently (`groupMemberships`,
/// `groupRoles`, `groupJoinRequests`); the aliases let one type decode all of
/// them.
///
/// # Example
///
/// ```rust
/// use roblox_cloud::api::common::CursorPage;
///
/// let json = r#"{"groupRoles": [1, 2], "nextPageToken": "abc"}"#;
/// let page: CursorPage<u32> = serde_json::from_str(json).unwrap();
///
/// assert_eq!(page.items, vec![1, 2]);
/// assert!(page.has_next());
/// assert_eq!(page.next_token(), Some("abc"));
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct CursorPage<T> {
    /// Items in the current page.
    #[serde(
        default,
        alias = "groupMemberships",
        alias = "groupRoles",
        alias = "groupJoinRequests"
    )]
    pub items: Vec<T>,

    /// Cursor for the next page; empty or absent on the last page.
    #[serde(default, rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

impl<T> CursorPage<T> {
    /// Checks if another page follows this one.
    pub fn has_next(&self) -> bool {
        self.next_token().is_some()
    }

    /// Returns the cursor for the next page, treating an empty token as none.
    pub fn next_token(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Splits the page into its items and the non-empty next cursor.
    pub fn into_parts(self) -> (Vec<T>, Option<String>) {
        let next = self.next_page_token.filter(|t| !t.is_empty());
        (self.items, next)
    }
}

/// Drives a cursor-paginated endpoint to completion.
///
/// Created by [`RobloxClient::paginator`] with the page size for the
/// collection being walked and the configured inter-request interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: u32,
    interval: Duration,
}

impl Paginator {
    /// Creates a paginator with an explicit page size and interval.
    pub fn new(page_size: u32, interval: Duration) -> Self {
        Self {
            page_size,
            interval,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Collects every page of `url`, mapping each raw item through `mapper`.
    ///
    /// Each iteration waits for the interval, then issues exactly one GET with
    /// `maxPageSize` and (when set) `pageToken` merged into `query`.
    ///
    /// # Parameters
    ///
    /// * `client` - The client used for every page request
    /// * `url` - The collection endpoint
    /// * `query` - Extra query parameters sent with every page (e.g. `filter`)
    /// * `mapper` - Turns a raw item into the output type; may perform lookups
    ///
    /// # Returns
    ///
    /// All mapped items in page order. Items whose mapper fails are skipped,
    /// so the result may be shorter than the collection with no error
    /// reported. Transport and decode failures on any page abort the walk and
    /// discard the items gathered so far.
    pub async fn collect<R, T, F, Fut>(
        &self,
        client: &RobloxClient,
        url: &str,
        query: &[(&str, &str)],
        mut mapper: F,
    ) -> Result<Vec<T>, ApiError>
    where
        R: DeserializeOwned,
        F: FnMut(R) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let page_size = self.page_size.to_string();
        let mut cursor: Option<String> = None;
        let mut collected = Vec::new();
        let mut pages = 0usize;

        loop {
            tokio::time::sleep(self.interval).await;

            let page: CursorPage<R> = {
                let mut params: Vec<(&str, &str)> = query.to_vec();
                params.push(("maxPageSize", page_size.as_str()));
                if let Some(token) = cursor.as_deref() {
                    params.push(("pageToken", token));
                }
                client.get_json(url, &params).await?
            };
            pages += 1;

            let (items, next) = page.into_parts();
            for item in items {
                match mapper(item).await {
                    Ok(mapped) => collected.push(mapped),
                    Err(err) => debug!(url, error = %err, "Skipping item"),
                }
            }

            match next {
                Some(token) => cursor = Some(token),
                None => break,
            }
        }

        debug!(url, pages, items = collected.len(), "Pagination complete");
        Ok(collected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientConfig, Endpoints};
    use mockito::Matcher;
    use serde::Deserialize;
    use std::time::Instant;

    #[derive(Debug, Deserialize)]
    struct Item {
        id: u32,
    }

    fn client_for(server: &mockito::ServerGuard, interval_ms: u64) -> RobloxClient {
        let config = ClientConfig {
            endpoints: Endpoints::with_base(&server.url()),
            page_interval_ms: interval_ms,
            ..ClientConfig::default()
        };
        RobloxClient::with_config("test-key", config).unwrap()
    }

    #[test]
    fn test_cursor_page_empty_token() {
        let page: CursorPage<u32> =
            serde_json::from_str(r#"{"groupMemberships": [1], "nextPageToken": ""}"#).unwrap();
        assert!(!page.has_next());
        assert_eq!(page.into_parts(), (vec![1], None));

        let page: CursorPage<u32> = serde_json::from_str(r#"{}"#).unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_next());
    }

    #[test]
    fn test_cursor_page_of_items_without_default() {
        let page: CursorPage<Item> =
            serde_json::from_str(r#"{"groupJoinRequests": [{"id": 4}]}"#).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 4);

        let page: CursorPage<Item> = serde_json::from_str(r#"{"nextPageToken": ""}"#).unwrap();
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_collect_concatenates_pages_in_order() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/items")
            .match_query(Matcher::Regex("^maxPageSize=2$".into()))
            .with_status(200)
            .with_body(r#"{"items": [{"id": 1}, {"id": 2}], "nextPageToken": "p2"}"#)
            .expect(1)
            .create_async()
            .await;
        let second = server
            .mock("GET", "/items")
            .match_query(Matcher::UrlEncoded("pageToken".into(), "p2".into()))
            .with_status(200)
            .with_body(r#"{"items": [{"id": 3}], "nextPageToken": "p3"}"#)
            .expect(1)
            .create_async()
            .await;
        let third = server
            .mock("GET", "/items")
            .match_query(Matcher::UrlEncoded("pageToken".into(), "p3".into()))
            .with_status(200)
            .with_body(r#"{"items": [{"id": 4}], "nextPageToken": ""}"#)
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server, 1);
        let url = format!("{}/items", server.url());
        let ids = Paginator::new(2, Duration::from_millis(1))
            .collect(&client, &url, &[], |item: Item| async move {
                Ok::<_, ApiError>(item.id)
            })
            .await
            .unwrap();

        assert_eq!(ids, vec![1, 2, 3, 4]);
        first.assert_async().await;
        second.assert_async().await;
        third.assert_async().await;
    }

    #[tokio::test]
    async fn test_collect_skips_failed_items() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/items")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"items": [{"id": 1}, {"id": 2}, {"id": 3}]}"#)
            .create_async()
            .await;

        let client = client_for(&server, 1);
        let url = format!("{}/items", server.url());
        let ids = Paginator::new(100, Duration::from_millis(1))
            .collect(&client, &url, &[], |item: Item| async move {
                if item.id == 2 {
                    Err(ApiError::NoUserId)
                } else {
                    Ok(item.id)
                }
            })
            .await
            .unwrap();

        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_collect_stops_on_rate_limit() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/items")
            .match_query(Matcher::Regex("^maxPageSize=100$".into()))
            .with_status(200)
            .with_body(r#"{"items": [{"id": 1}], "nextPageToken": "next"}"#)
            .create_async()
            .await;
        let limited = server
            .mock("GET", "/items")
            .match_query(Matcher::UrlEncoded("pageToken".into(), "next".into()))
            .with_status(429)
            .with_body("slow down")
            .expect(1)
            .create_async()
            .await;

        let client = client_for(&server, 1);
        let url = format!("{}/items", server.url());
        let err = Paginator::new(100, Duration::from_millis(1))
            .collect(&client, &url, &[], |item: Item| async move {
                Ok::<_, ApiError>(item.id)
            })
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(429));
        limited.assert_async().await;
    }

    #[tokio::test]
    async fn test_collect_waits_between_pages() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/items")
            .match_query(Matcher::Regex("^maxPageSize=100$".into()))
            .with_status(200)
            .with_body(r#"{"items": [], "nextPageToken": "b"}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/items")
            .match_query(Matcher::UrlEncoded("pageToken".into(), "b".into()))
            .with_status(200)
            .with_body(r#"{"items": []}"#)
            .create_async()
            .await;

        let client = client_for(&server, 50);
        let url = format!("{}/items", server.url());
        let started = Instant::now();
        let ids = Paginator::new(100, Duration::from_millis(50))
            .collect(&client, &url, &[], |item: Item| async move {
                Ok::<_, ApiError>(item.id)
            })
            .await
            .unwrap();

        assert!(ids.is_empty());
        assert!(started.elapsed() >= Duration::from_millis(100));
    }
}
