//
//  roblox-cloud
//  api/legacy/groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Legacy groups API types and accessors.
//!
//! # Endpoints
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | GET | `v1/groups/search/lookup?groupName=` | Exact-name group search |
//! | GET | `v1/users/{userId}/groups/roles` | Every group a user is in, with their role |
//! | DELETE | `v1/groups/{groupId}/users/{userId}` | Remove a member |
//!
//! Roles here use the legacy shape (`name`/`rank`), decoded into
//! [`LegacyRole`]. The cloud shape (`displayName`/`rank`) is
//! [`Role`](crate::api::cloud::Role); the two are never interchanged.

use serde::{Deserialize, Serialize};

use super::LegacyData;
use crate::api::client::RobloxClient;
use crate::api::common::{optional_count, require, string_or_number, ApiError};

/// A lightweight group record returned by the name lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyGroup {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    pub name: String,

    #[serde(default, deserialize_with = "optional_count")]
    pub member_count: Option<u64>,

    #[serde(default)]
    pub has_verified_badge: bool,
}

/// A group role in the legacy shape.
///
/// # Example
///
/// ```rust
/// use roblox_cloud::api::legacy::LegacyRole;
///
/// let role: LegacyRole = serde_json::from_str(
///     r#"{"id": 35, "name": "Member", "rank": 1, "memberCount": 12}"#,
/// ).unwrap();
/// assert_eq!(role.id, "35");
/// assert_eq!(role.name, "Member");
/// assert_eq!(role.member_count, Some(12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyRole {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    pub name: String,

    pub rank: u32,

    #[serde(default, deserialize_with = "optional_count")]
    pub member_count: Option<u64>,
}

/// The group half of a [`UserGroupRole`] entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyGroupRef {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    pub name: String,

    #[serde(default, deserialize_with = "optional_count")]
    pub member_count: Option<u64>,
}

/// One group a user belongs to, with the role they hold in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroupRole {
    pub group: LegacyGroupRef,
    pub role: LegacyRole,
}

impl RobloxClient {
    /// Searches groups by exact name.
    ///
    /// Roblox returns candidates in its own relevance order; callers decide
    /// what counts as a match.
    pub async fn search_groups(&self, name: &str) -> Result<Vec<LegacyGroup>, ApiError> {
        let url = self.endpoints().groups_url("v1/groups/search/lookup");
        let response: LegacyData<LegacyGroup> =
            self.get_json(&url, &[("groupName", name)]).await?;
        Ok(response.data)
    }

    /// Lists every group `user_id` belongs to together with their role.
    pub async fn user_group_roles(&self, user_id: &str) -> Result<Vec<UserGroupRole>, ApiError> {
        let user_id = require(user_id, ApiError::NoUserId)?;
        let url = self
            .endpoints()
            .groups_url(&format!("v1/users/{}/groups/roles", user_id));
        let response: LegacyData<UserGroupRole> = self.get_json(&url, &[]).await?;
        Ok(response.data)
    }

    /// Removes `user_id` from `group_id`.
    pub async fn remove_group_member(&self, group_id: &str, user_id: &str) -> Result<(), ApiError> {
        let group_id = require(group_id, ApiError::NoGroupId)?;
        let user_id = require(user_id, ApiError::NoUserId)?;
        let url = self
            .endpoints()
            .groups_url(&format!("v1/groups/{}/users/{}", group_id, user_id));
        self.delete(&url).await
    }
}
