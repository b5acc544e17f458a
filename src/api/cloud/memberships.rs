//
//  roblox-cloud
//  api/cloud/memberships.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud group membership types and accessors.
//!
//! A membership links a user to the one role they hold in a group:
//!
//! ```json
//! {
//!   "path": "groups/7/memberships/NTYxNDU5NjM",
//!   "user": "users/156",
//!   "role": "groups/7/roles/99"
//! }
//! ```
//!
//! The membership collection is the only way to enumerate a group's members
//! through Open Cloud. It is limited to 100 items per page and 300 requests
//! per minute, which is why walks go through the rate-limited
//! [`Paginator`](crate::api::common::Paginator).
//!
//! # Filters
//!
//! The collection accepts a CEL-style `filter` query parameter:
//!
//! | Filter | Selects |
//! |--------|---------|
//! | `user == 'users/156'` | the membership of one user |
//! | `role == 'groups/7/roles/99'` | every member holding one role |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::roles::Role;
use super::users::Account;
use crate::api::client::RobloxClient;
use crate::api::common::{
    decode, last_path_segment, lenient_timestamp, require, strip_relation_prefix, ApiError, CursorPage,
    USERS_PREFIX,
};

/// A membership as sent by the cloud API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResource {
    /// `groups/{groupId}/memberships/{membershipId}`
    #[serde(default)]
    pub path: String,

    /// `users/{userId}`
    #[serde(default)]
    pub user: String,

    /// `groups/{groupId}/roles/{roleId}`
    #[serde(default)]
    pub role: String,

    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub update_time: Option<DateTime<Utc>>,
}

impl MembershipResource {
    /// The member's bare user id.
    pub fn user_id(&self) -> &str {
        strip_relation_prefix(&self.user, USERS_PREFIX)
    }

    /// The bare id of the member's role.
    pub fn role_id(&self) -> &str {
        last_path_segment(&self.role)
    }
}

/// Body of the membership PATCH that changes a member's role.
///
/// All three fields are required by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateMembershipRequest {
    pub path: String,
    pub user: String,
    pub role: String,
}

/// A member of a group, resolved to their account and role.
///
/// Produced only by [`Group::members`](super::Group::members).
#[derive(Debug, Clone, Serialize)]
pub struct Membership {
    pub path: String,
    pub group_id: String,
    pub account: Account,
    pub role: Role,

    #[serde(skip)]
    client: RobloxClient,
}

impl Membership {
    pub(crate) fn new(
        path: String,
        group_id: &str,
        account: Account,
        role: Role,
        client: RobloxClient,
    ) -> Self {
        Self {
            path,
            group_id: group_id.to_string(),
            account,
            role,
            client,
        }
    }

    /// Moves this member to another role.
    pub async fn set_role(&self, role_id: &str) -> Result<MembershipResource, ApiError> {
        self.client
            .set_member_role(&self.group_id, &self.account.id, role_id)
            .await
    }

    /// Removes this member from the group.
    pub async fn remove(&self) -> Result<(), ApiError> {
        self.client
            .remove_group_member(&self.group_id, &self.account.id)
            .await
    }
}

/// `filter` value selecting one user's membership.
pub fn user_filter(user_id: &str) -> String {
    format!("user == '{}{}'", USERS_PREFIX, user_id)
}

/// `filter` value selecting every member of one role.
pub fn role_filter(group_id: &str, role_id: &str) -> String {
    format!("role == 'groups/{}/roles/{}'", group_id, role_id)
}

impl RobloxClient {
    pub(crate) fn memberships_url(&self, group_id: &str) -> String {
        self.endpoints()
            .cloud_url(&format!("groups/{}/memberships", group_id))
    }

    /// Walks the membership collection of `group_id` and returns user ids.
    ///
    /// No per-member lookups are made. `filter` narrows the walk (see
    /// [`role_filter`]). Like every pagination walk this may run for a long
    /// time on large groups.
    pub async fn membership_user_ids(
        &self,
        group_id: &str,
        filter: Option<&str>,
    ) -> Result<Vec<String>, ApiError> {
        let group_id = require(group_id, ApiError::NoGroupId)?;
        let url = self.memberships_url(group_id);
        let query: Vec<(&str, &str)> = filter.map(|f| ("filter", f)).into_iter().collect();

        self.paginator(self.config().member_page_size)
            .collect(self, &url, &query, |m: MembershipResource| {
                std::future::ready(Ok(m.user_id().to_string()))
            })
            .await
    }

    /// Finds the membership of `user_id` in `group_id`.
    ///
    /// # Errors
    ///
    /// [`ApiError::UserHasNoRole`] when the user is not a member.
    pub async fn find_membership(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> Result<MembershipResource, ApiError> {
        let group_id = require(group_id, ApiError::NoGroupId)?;
        let user_id = require(user_id, ApiError::NoUserId)?;
        let url = self.memberships_url(group_id);
        let filter = user_filter(user_id);

        let page: CursorPage<MembershipResource> =
            self.get_json(&url, &[("filter", filter.as_str())]).await?;
        page.items
            .into_iter()
            .next()
            .ok_or(ApiError::UserHasNoRole)
    }

    /// Moves `user_id` to `role_id` within `group_id`.
    ///
    /// Looks up the membership first, then PATCHes it.
    pub async fn set_member_role(
        &self,
        group_id: &str,
        user_id: &str,
        role_id: &str,
    ) -> Result<MembershipResource, ApiError> {
        let group_id = require(group_id, ApiError::NoGroupId)?;
        let user_id = require(user_id, ApiError::NoUserId)?;
        let role_id = require(role_id, ApiError::NoRoleId)?;

        let membership = self.find_membership(group_id, user_id).await?;
        let request = UpdateMembershipRequest {
            path: membership.path.clone(),
            user: membership.user.clone(),
            role: format!("groups/{}/roles/{}", group_id, role_id),
        };
        let url = self.endpoints().cloud_url(&membership.path);
        let body = self.patch(&url, &request).await?;
        decode(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientConfig, Endpoints};
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> RobloxClient {
        let config = ClientConfig {
            endpoints: Endpoints::with_base(&server.url()),
            page_interval_ms: 1,
            ..ClientConfig::default()
        };
        RobloxClient::with_config("abc123", config).unwrap()
    }

    #[test]
    fn test_resource_ids() {
        let m = MembershipResource {
            user: "users/156".into(),
            role: "groups/7/roles/99".into(),
            ..MembershipResource::default()
        };
        assert_eq!(m.user_id(), "156");
        assert_eq!(m.role_id(), "99");
    }

    #[test]
    fn test_filters() {
        assert_eq!(user_filter("156"), "user == 'users/156'");
        assert_eq!(role_filter("7", "99"), "role == 'groups/7/roles/99'");
    }

    #[tokio::test]
    async fn test_membership_user_ids_with_filter() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/cloud/v2/groups/7/memberships")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("filter".into(), "role == 'groups/7/roles/99'".into()),
                Matcher::UrlEncoded("maxPageSize".into(), "100".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"groupMemberships": [
                    {"path": "groups/7/memberships/a", "user": "users/1", "role": "groups/7/roles/99"},
                    {"path": "groups/7/memberships/b", "user": "users/2", "role": "groups/7/roles/99"}
                ], "nextPageToken": ""}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let filter = role_filter("7", "99");
        let ids = client_for(&server)
            .membership_user_ids("7", Some(&filter))
            .await
            .unwrap();

        assert_eq!(ids, vec!["1", "2"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_find_membership_no_match() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/cloud/v2/groups/7/memberships")
            .match_query(Matcher::UrlEncoded("filter".into(), "user == 'users/5'".into()))
            .with_status(200)
            .with_body(r#"{"groupMemberships": [], "nextPageToken": ""}"#)
            .create_async()
            .await;

        let err = client_for(&server).find_membership("7", "5").await.unwrap_err();
        assert!(matches!(err, ApiError::UserHasNoRole));
    }

    #[tokio::test]
    async fn test_set_member_role_patches_membership() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/cloud/v2/groups/7/memberships")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"groupMemberships": [
                    {"path": "groups/7/memberships/abc", "user": "users/156", "role": "groups/7/roles/1"}
                ]}"#,
            )
            .create_async()
            .await;
        let patch = server
            .mock("PATCH", "/cloud/v2/groups/7/memberships/abc")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "path": "groups/7/memberships/abc",
                "user": "users/156",
                "role": "groups/7/roles/99"
            })))
            .with_status(200)
            .with_body(
                r#"{"path": "groups/7/memberships/abc", "user": "users/156", "role": "groups/7/roles/99"}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let updated = client_for(&server)
            .set_member_role("7", "156", "99")
            .await
            .unwrap();

        assert_eq!(updated.role_id(), "99");
        patch.assert_async().await;
    }

    #[tokio::test]
    async fn test_set_member_role_validation() {
        let client = RobloxClient::new("abc123").unwrap();
        assert!(matches!(
            client.set_member_role("7", "", "99").await,
            Err(ApiError::NoUserId)
        ));
        assert!(matches!(
            client.set_member_role("7", "156", "").await,
            Err(ApiError::NoRoleId)
        ));
    }
}
