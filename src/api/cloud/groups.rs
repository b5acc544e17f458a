//
//  roblox-cloud
//  api/cloud/groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud group API types and accessors.
//!
//! # Overview
//!
//! A [`Group`] is the entry point for everything group-scoped: members,
//! roles, join requests and the icon. Most operations delegate to the
//! id-based accessors on [`RobloxClient`], so the same calls are available
//! without fetching the group first.
//!
//! # Group Operations
//!
//! | Operation | API | Requests |
//! |-----------|-----|----------|
//! | [`Group::member_ids`] | cloud memberships | one per page |
//! | [`Group::members`] | cloud memberships, users, roles | one per page plus two per member |
//! | [`Group::roles`] | cloud roles | one per page |
//! | [`Group::member_role`] | cloud memberships, roles | two |
//! | [`Group::legacy_member_role`] | legacy user group roles | one |
//! | [`Group::set_member_role`] | cloud memberships | two |
//! | [`Group::remove_member`] | legacy groups | one |
//! | [`Group::join_requests`] | cloud join requests, users | one plus one per request |
//! | [`Group::icon`] | legacy thumbnails | one |
//!
//! # Example
//!
//! ```rust,no_run
//! use roblox_cloud::api::RobloxClient;
//!
//! # async fn example(client: RobloxClient) -> Result<(), roblox_cloud::api::ApiError> {
//! let group = client.group_by_name("Roblox Fans").await?;
//! let role = group.member_role("156").await?;
//! println!("builderman is {} (rank {})", role.name, role.rank);
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::join_requests::JoinRequest;
use super::memberships::{Membership, MembershipResource};
use super::roles::{Role, RoleResource};
use crate::api::client::RobloxClient;
use crate::api::common::{
    count, lenient_timestamp, require, string_or_number, user_reference, ApiError,
};
use crate::api::legacy::{GroupIcon, IconSize, LegacyRole};
use crate::api::resolver::{resolve_by_key, GroupByName};

/// The `groups/{id}` resource as sent by the cloud API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResource {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub description: String,

    /// `users/{id}`; absent for ownerless groups.
    #[serde(default, deserialize_with = "user_reference")]
    pub owner: Option<String>,

    #[serde(default, deserialize_with = "count")]
    pub member_count: u64,

    #[serde(default)]
    pub public_entry_allowed: bool,

    #[serde(default)]
    pub locked: bool,

    #[serde(default)]
    pub verified: bool,

    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub create_time: Option<DateTime<Utc>>,
}

/// A Roblox group.
///
/// # Fields
///
/// * `id` - Canonical group id
/// * `name` - Group name
/// * `owner_id` - Bare user id of the owner, `None` when ownerless
/// * `public_entry_allowed` - `true` when anyone may join, `false` when
///   joining requires an accepted join request
/// * `locked` - Whether the group is locked by moderation
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner_id: Option<String>,
    pub member_count: u64,
    pub public_entry_allowed: bool,
    pub locked: bool,
    pub verified: bool,
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip)]
    client: RobloxClient,
}

impl Group {
    pub(crate) fn from_resource(resource: GroupResource, client: RobloxClient) -> Self {
        Self {
            id: resource.id,
            name: resource.display_name,
            description: resource.description,
            owner_id: resource.owner,
            member_count: resource.member_count,
            public_entry_allowed: resource.public_entry_allowed,
            locked: resource.locked,
            verified: resource.verified,
            created_at: resource.create_time,
            client,
        }
    }

    /// User ids of every member, without any per-member lookups.
    ///
    /// Walks the whole membership collection at the configured pace; large
    /// groups take a long time.
    pub async fn member_ids(&self) -> Result<Vec<String>, ApiError> {
        self.client.membership_user_ids(&self.id, None).await
    }

    /// Every member resolved to their account and role.
    ///
    /// Two extra requests are made per member, one after another. A member
    /// whose account or role cannot be fetched is left out of the result
    /// without an error, so the list may be shorter than `member_count`.
    pub async fn members(&self) -> Result<Vec<Membership>, ApiError> {
        let url = self.client.memberships_url(&self.id);
        self.client
            .paginator(self.client.config().member_page_size)
            .collect(&self.client, &url, &[], move |m: MembershipResource| {
                self.resolve_membership(m)
            })
            .await
    }

    async fn resolve_membership(&self, resource: MembershipResource) -> Result<Membership, ApiError> {
        let account = self.client.user_by_id(resource.user_id()).await?;
        let role = self.role(resource.role_id()).await?;
        Ok(Membership::new(
            resource.path,
            &self.id,
            account,
            role,
            self.client.clone(),
        ))
    }

    /// Every role of the group, lowest rank first as returned by the API.
    pub async fn roles(&self) -> Result<Vec<Role>, ApiError> {
        let url = self
            .client
            .endpoints()
            .cloud_url(&format!("groups/{}/roles", self.id));
        self.client
            .paginator(self.client.config().role_page_size)
            .collect(&self.client, &url, &[], move |r: RoleResource| {
                std::future::ready(Ok(Role::from_resource(r, &self.id, self.client.clone())))
            })
            .await
    }

    /// Fetches one role by id.
    pub async fn role(&self, role_id: &str) -> Result<Role, ApiError> {
        let role_id = require(role_id, ApiError::NoRoleId)?;
        let url = self
            .client
            .endpoints()
            .cloud_url(&format!("groups/{}/roles/{}", self.id, role_id));
        let resource: RoleResource = self.client.get_json(&url, &[]).await?;
        Ok(Role::from_resource(resource, &self.id, self.client.clone()))
    }

    /// The role `user_id` holds in this group.
    ///
    /// # Errors
    ///
    /// [`ApiError::UserHasNoRole`] when the user is not a member.
    pub async fn member_role(&self, user_id: &str) -> Result<Role, ApiError> {
        let membership = self.client.find_membership(&self.id, user_id).await?;
        self.role(membership.role_id()).await
    }

    /// The role `user_id` holds in this group, read from the legacy API.
    ///
    /// One request regardless of how many groups the user is in, at the
    /// cost of the legacy role shape.
    pub async fn legacy_member_role(&self, user_id: &str) -> Result<LegacyRole, ApiError> {
        let user_id = require(user_id, ApiError::NoUserId)?;
        self.client
            .user_group_roles(user_id)
            .await?
            .into_iter()
            .find(|entry| entry.group.id == self.id)
            .map(|entry| entry.role)
            .ok_or(ApiError::UserHasNoRole)
    }

    /// Moves `user_id` to `role_id`.
    pub async fn set_member_role(
        &self,
        user_id: &str,
        role_id: &str,
    ) -> Result<MembershipResource, ApiError> {
        self.client.set_member_role(&self.id, user_id, role_id).await
    }

    /// Removes `user_id` from the group.
    pub async fn remove_member(&self, user_id: &str) -> Result<(), ApiError> {
        self.client.remove_group_member(&self.id, user_id).await
    }

    /// Pending join requests.
    pub async fn join_requests(&self) -> Result<Vec<JoinRequest>, ApiError> {
        self.client.join_requests(&self.id).await
    }

    pub async fn accept_join_request(&self, user_id: &str) -> Result<(), ApiError> {
        self.client.accept_join_request(&self.id, user_id).await
    }

    pub async fn decline_join_request(&self, user_id: &str) -> Result<(), ApiError> {
        self.client.decline_join_request(&self.id, user_id).await
    }

    /// The group icon as a PNG.
    pub async fn icon(&self, size: IconSize, circular: bool) -> Result<GroupIcon, ApiError> {
        self.client.group_icon(&self.id, size, circular).await
    }
}

impl RobloxClient {
    /// Fetches a group by id.
    ///
    /// # Errors
    ///
    /// [`ApiError::NoGroupId`] for an empty id, before any request.
    pub async fn group_by_id(&self, group_id: &str) -> Result<Group, ApiError> {
        let group_id = require(group_id, ApiError::NoGroupId)?;
        let url = self.endpoints().cloud_url(&format!("groups/{}", group_id));
        let resource: GroupResource = self.get_json(&url, &[]).await?;
        Ok(Group::from_resource(resource, self.clone()))
    }

    /// Fetches a group by exact, case-sensitive name.
    pub async fn group_by_name(&self, name: &str) -> Result<Group, ApiError> {
        resolve_by_key(self, &GroupByName, name).await
    }
}
