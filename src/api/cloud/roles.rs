//
//  roblox-cloud
//  api/cloud/roles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud group role types.
//!
//! Roles in the cloud API are keyed by `displayName`/`rank`. The legacy API
//! uses `name`/`rank` instead; that shape is
//! [`LegacyRole`](crate::api::legacy::LegacyRole).

use serde::{Deserialize, Serialize};

use super::memberships::role_filter;
use crate::api::client::RobloxClient;
use crate::api::common::{optional_count, string_or_number, ApiError};

/// A role as sent by `groups/{id}/roles`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleResource {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    pub display_name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub rank: u32,

    /// Absent for the guest role.
    #[serde(default, deserialize_with = "optional_count")]
    pub member_count: Option<u64>,
}

/// A role within a group.
///
/// Ranks run from 0 (guest) to 255 (owner).
#[derive(Debug, Clone, Serialize)]
pub struct Role {
    pub id: String,
    pub group_id: String,
    pub name: String,
    pub description: Option<String>,
    pub rank: u32,
    pub member_count: Option<u64>,

    #[serde(skip)]
    client: RobloxClient,
}

impl Role {
    pub(crate) fn from_resource(resource: RoleResource, group_id: &str, client: RobloxClient) -> Self {
        Self {
            id: resource.id,
            group_id: group_id.to_string(),
            name: resource.display_name,
            description: resource.description.filter(|d| !d.is_empty()),
            rank: resource.rank,
            member_count: resource.member_count,
            client,
        }
    }

    /// The role's resource path, `groups/{groupId}/roles/{roleId}`.
    pub fn path(&self) -> String {
        format!("groups/{}/roles/{}", self.group_id, self.id)
    }

    /// User ids of every member holding this role.
    ///
    /// Walks the membership collection with a role filter, so this is as
    /// slow as any membership walk.
    pub async fn member_ids(&self) -> Result<Vec<String>, ApiError> {
        let filter = role_filter(&self.group_id, &self.id);
        self.client
            .membership_user_ids(&self.group_id, Some(&filter))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_resource() {
        let resource: RoleResource = serde_json::from_str(
            r#"{"path": "groups/7/roles/99", "id": "99", "displayName": "Member",
                "description": "", "rank": 1, "memberCount": "12"}"#,
        )
        .unwrap();
        let client = RobloxClient::new("abc123").unwrap();
        let role = Role::from_resource(resource, "7", client);

        assert_eq!(role.name, "Member");
        assert_eq!(role.description, None);
        assert_eq!(role.member_count, Some(12));
        assert_eq!(role.path(), "groups/7/roles/99");
    }

    #[test]
    fn test_legacy_shape_is_not_a_role() {
        let result: Result<RoleResource, _> =
            serde_json::from_str(r#"{"id": 99, "name": "Member", "rank": 1}"#);
        assert!(result.is_err());
    }
}
