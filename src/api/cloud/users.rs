//
//  roblox-cloud
//  api/cloud/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Cloud user API types and accessors.
//!
//! # Overview
//!
//! A Roblox user is exposed as an [`Account`]. Accounts are fetched fresh on
//! every call and never cached.
//!
//! # Example
//!
//! ```rust,no_run
//! use roblox_cloud::api::RobloxClient;
//! use roblox_cloud::api::cloud::{ThumbnailShape, ThumbnailSize};
//!
//! # async fn example(client: RobloxClient) -> Result<(), roblox_cloud::api::ApiError> {
//! let account = client.user_by_username("builderman").await?;
//! let thumbnail = account.thumbnail(ThumbnailSize::Px420, ThumbnailShape::Round).await?;
//! println!("{} -> {:?}", account.name, thumbnail.image_uri);
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::client::RobloxClient;
use crate::api::common::{lenient_timestamp, require, string_or_number, ApiError};
use crate::api::legacy::UserGroupRole;
use crate::api::resolver::{resolve_by_key, AccountByName};

/// The `users/{id}` resource as sent by the cloud API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResource {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub about: Option<String>,

    #[serde(default)]
    pub premium: bool,

    #[serde(default)]
    pub locale: Option<String>,

    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub create_time: Option<DateTime<Utc>>,
}

/// A Roblox user.
///
/// # Fields
///
/// * `id` - Canonical user id
/// * `name` - Username
/// * `display_name` - Display name, `None` when unset
/// * `premium` - Whether the user has Roblox Premium
/// * `created_at` - Account creation time
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub display_name: Option<String>,
    pub about: Option<String>,
    pub premium: bool,
    pub locale: Option<String>,
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip)]
    client: RobloxClient,
}

impl Account {
    pub(crate) fn from_resource(resource: UserResource, client: RobloxClient) -> Self {
        Self {
            id: resource.id,
            name: resource.name,
            display_name: resource.display_name.filter(|n| !n.is_empty()),
            about: resource.about,
            premium: resource.premium,
            locale: resource.locale,
            created_at: resource.create_time,
            client,
        }
    }

    /// The display name, falling back to the username.
    pub fn preferred_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Generates an avatar headshot thumbnail.
    ///
    /// Roblox renders thumbnails asynchronously: when `done` is false the
    /// image is not ready yet and `image_uri` is `None`.
    pub async fn thumbnail(
        &self,
        size: ThumbnailSize,
        shape: ThumbnailShape,
    ) -> Result<Thumbnail, ApiError> {
        let url = self
            .client
            .endpoints()
            .cloud_url(&format!("users/{}:generateThumbnail", self.id));
        let size = size.pixels().to_string();
        let query = [
            ("size", size.as_str()),
            ("format", "PNG"),
            ("shape", shape.as_str()),
        ];
        let operation: ThumbnailOperation = self.client.get_json(&url, &query).await?;
        Ok(operation.into_thumbnail())
    }

    /// Lists the groups this user belongs to, with their legacy role.
    pub async fn groups(&self) -> Result<Vec<UserGroupRole>, ApiError> {
        self.client.user_group_roles(&self.id).await
    }
}

/// Square sizes accepted by `generateThumbnail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbnailSize {
    Px48,
    Px50,
    Px60,
    Px75,
    Px100,
    Px110,
    Px150,
    Px180,
    Px352,
    #[default]
    Px420,
    Px720,
}

impl ThumbnailSize {
    pub fn pixels(self) -> u32 {
        match self {
            Self::Px48 => 48,
            Self::Px50 => 50,
            Self::Px60 => 60,
            Self::Px75 => 75,
            Self::Px100 => 100,
            Self::Px110 => 110,
            Self::Px150 => 150,
            Self::Px180 => 180,
            Self::Px352 => 352,
            Self::Px420 => 420,
            Self::Px720 => 720,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbnailShape {
    #[default]
    Round,
    Square,
}

impl ThumbnailShape {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Round => "ROUND",
            Self::Square => "SQUARE",
        }
    }
}

/// Long-running operation returned by `generateThumbnail`.
#[derive(Debug, Deserialize)]
struct ThumbnailOperation {
    #[serde(default)]
    path: String,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    response: Option<ThumbnailResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThumbnailResponse {
    #[serde(default)]
    image_uri: Option<String>,
}

/// A generated avatar thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    /// Operation path, usable to poll a pending render.
    pub path: String,
    pub done: bool,
    pub image_uri: Option<String>,
}

impl ThumbnailOperation {
    fn into_thumbnail(self) -> Thumbnail {
        Thumbnail {
            path: self.path,
            done: self.done,
            image_uri: self.response.and_then(|r| r.image_uri),
        }
    }
}

impl RobloxClient {
    /// Fetches a user by id.
    ///
    /// # Errors
    ///
    /// [`ApiError::NoUserId`] for an empty id, before any request.
    pub async fn user_by_id(&self, user_id: &str) -> Result<Account, ApiError> {
        let user_id = require(user_id, ApiError::NoUserId)?;
        let url = self.endpoints().cloud_url(&format!("users/{}", user_id));
        let resource: UserResource = self.get_json(&url, &[]).await?;
        Ok(Account::from_resource(resource, self.clone()))
    }

    /// Fetches a user by exact, case-sensitive username.
    ///
    /// See [`resolver`](crate::api::resolver) for the matching rules.
    pub async fn user_by_username(&self, username: &str) -> Result<Account, ApiError> {
        resolve_by_key(self, &AccountByName, username).await
    }
}
