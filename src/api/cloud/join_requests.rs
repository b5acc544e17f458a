//
//  roblox-cloud
//  api/cloud/join_requests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud group join request types and accessors.
//!
//! Groups that do not allow public entry queue requests to join. A request is
//! identified by the group and the requesting user, and is resolved with the
//! `:accept` or `:decline` action.
//!
//! # Listing Policy
//!
//! The listing is one request, not a pagination walk. Each entry is then
//! enriched with the requester's display name:
//!
//! - when the account lookup fails, the entry is dropped
//! - when `createTime` is not RFC3339, the entry is kept with
//!   `requested_at: None` and a warning is logged
//!
//! A shorter list therefore does not mean fewer pending requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::client::RobloxClient;
use crate::api::common::{
    parse_timestamp, require, strip_relation_prefix, ApiError, CursorPage, USERS_PREFIX,
};

/// A join request as sent by `groups/{id}/join-requests`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequestResource {
    #[serde(default)]
    pub path: String,

    /// `users/{userId}`
    pub user: String,

    /// Kept raw so a malformed value can be reported instead of failing the page.
    #[serde(default)]
    pub create_time: Option<String>,
}

/// Body of the `:accept` and `:decline` actions. Always `{}`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct JoinRequestAction {}

/// A pending request to join a group.
#[derive(Debug, Clone, Serialize)]
pub struct JoinRequest {
    pub user_id: String,
    pub display_name: String,
    pub requested_at: Option<DateTime<Utc>>,
    pub group_id: String,

    #[serde(skip)]
    client: RobloxClient,
}

impl JoinRequest {
    pub async fn accept(&self) -> Result<(), ApiError> {
        self.client
            .accept_join_request(&self.group_id, &self.user_id)
            .await
    }

    pub async fn decline(&self) -> Result<(), ApiError> {
        self.client
            .decline_join_request(&self.group_id, &self.user_id)
            .await
    }
}

impl RobloxClient {
    /// Lists the pending join requests of `group_id`.
    ///
    /// See the module docs for how individual entries can be dropped.
    pub async fn join_requests(&self, group_id: &str) -> Result<Vec<JoinRequest>, ApiError> {
        let group_id = require(group_id, ApiError::NoGroupId)?;
        let url = self
            .endpoints()
            .cloud_url(&format!("groups/{}/join-requests", group_id));
        let page: CursorPage<JoinRequestResource> = self.get_json(&url, &[]).await?;

        let mut requests = Vec::with_capacity(page.items.len());
        for resource in page.items {
            let user_id = strip_relation_prefix(&resource.user, USERS_PREFIX).to_string();
            let account = match self.user_by_id(&user_id).await {
                Ok(account) => account,
                Err(err) => {
                    debug!(group_id, user_id = %user_id, error = %err, "Skipping join request");
                    continue;
                }
            };

            let requested_at = match resource.create_time.as_deref() {
                Some(raw) => {
                    let parsed = parse_timestamp(raw);
                    if parsed.is_none() {
                        warn!(group_id, user_id = %user_id, raw, "Unparseable join request timestamp");
                    }
                    parsed
                }
                None => None,
            };

            requests.push(JoinRequest {
                user_id,
                display_name: account.preferred_name().to_string(),
                requested_at,
                group_id: group_id.to_string(),
                client: self.clone(),
            });
        }

        Ok(requests)
    }

    /// Accepts the join request of `user_id`.
    pub async fn accept_join_request(&self, group_id: &str, user_id: &str) -> Result<(), ApiError> {
        self.join_request_action(group_id, user_id, "accept").await
    }

    /// Declines the join request of `user_id`.
    pub async fn decline_join_request(&self, group_id: &str, user_id: &str) -> Result<(), ApiError> {
        self.join_request_action(group_id, user_id, "decline").await
    }

    async fn join_request_action(
        &self,
        group_id: &str,
        user_id: &str,
        action: &str,
    ) -> Result<(), ApiError> {
        let group_id = require(group_id, ApiError::NoGroupId)?;
        let user_id = require(user_id, ApiError::NoUserId)?;
        let url = self.endpoints().cloud_url(&format!(
            "groups/{}/join-requests/{}:{}",
            group_id, user_id, action
        ));
        self.post(&url, &[], &JoinRequestAction::default())
            .await
            .map(|_| ())
    }
}
