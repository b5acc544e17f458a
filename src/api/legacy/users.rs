//
//  roblox-cloud
//  api/legacy/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Legacy users API: username lookup.
//!
//! Open Cloud can only fetch a user by id. Resolving a username goes through
//! `POST users.roblox.com/v1/usernames/users`, which accepts a batch of names
//! and returns one entry per name it recognised.

use serde::{Deserialize, Serialize};

use super::LegacyData;
use crate::api::client::RobloxClient;
use crate::api::common::{string_or_number, ApiError};

/// Request body for the username lookup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsernameLookupRequest<'a> {
    pub usernames: &'a [&'a str],
    pub exclude_banned_users: bool,
}

/// A user returned by the username lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyUser {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Canonical username, with the casing Roblox stores.
    pub name: String,

    #[serde(default)]
    pub display_name: Option<String>,

    /// The name as it was sent in the request.
    #[serde(default)]
    pub requested_username: Option<String>,

    #[serde(default)]
    pub has_verified_badge: bool,
}

impl RobloxClient {
    /// Looks up users by username. Banned users are excluded.
    ///
    /// Unknown names are simply absent from the result, so the returned
    /// list may be shorter than `usernames`.
    pub async fn lookup_usernames(&self, usernames: &[&str]) -> Result<Vec<LegacyUser>, ApiError> {
        let url = self.endpoints().users_url("v1/usernames/users");
        let body = UsernameLookupRequest {
            usernames,
            exclude_banned_users: true,
        };
        let response: LegacyData<LegacyUser> = self.post_json(&url, &body).await?;
        Ok(response.data)
    }
}
