//
//  roblox-cloud
//  api/legacy/thumbnails.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Legacy thumbnails API: group icons.

use serde::Deserialize;

use super::LegacyData;
use crate::api::client::RobloxClient;
use crate::api::common::{require, string_or_number, ApiError};

/// Icon sizes offered for group icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconSize {
    #[default]
    Small,
    Large,
}

impl IconSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "150x150",
            Self::Large => "420x420",
        }
    }
}

/// One entry of the group icon response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupIcon {
    #[serde(deserialize_with = "string_or_number")]
    pub target_id: String,

    /// `Completed`, `Pending`, `Blocked` or `Error`.
    #[serde(default)]
    pub state: String,

    #[serde(default)]
    pub image_url: Option<String>,
}

impl RobloxClient {
    /// Fetches the PNG icon of `group_id`.
    ///
    /// # Errors
    ///
    /// [`ApiError::MissingData`] when the response carries no entry.
    pub async fn group_icon(
        &self,
        group_id: &str,
        size: IconSize,
        circular: bool,
    ) -> Result<GroupIcon, ApiError> {
        let group_id = require(group_id, ApiError::NoGroupId)?;
        let url = self.endpoints().thumbnails_url("v1/groups/icons");
        let circular = circular.to_string();
        let query = [
            ("groupIds", group_id),
            ("format", "Png"),
            ("size", size.as_str()),
            ("isCircular", circular.as_str()),
        ];

        let response: LegacyData<GroupIcon> = self.get_json(&url, &query).await?;
        response
            .data
            .into_iter()
            .next()
            .ok_or(ApiError::MissingData("group icons"))
    }
}
