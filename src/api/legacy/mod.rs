//
//  roblox-cloud
//  api/legacy/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Legacy Roblox web API bindings.
//!
//! The host-specific web APIs (`users.roblox.com`, `groups.roblox.com`,
//! `thumbnails.roblox.com`) predate Open Cloud. They are used only for what
//! the cloud API cannot do directly: resolving names to identifiers, listing
//! a user's groups with their legacy roles, removing members and fetching
//! group icons.
//!
//! # Module Organization
//!
//! - [`users`] - Username to user id lookup
//! - [`groups`] - Group name lookup, user group roles, member removal
//! - [`thumbnails`] - Group icon URLs
//!
//! # Notes
//!
//! - List responses wrap their items in a `data` array ([`LegacyData`])
//! - Identifiers are JSON numbers here, unlike the cloud API
//! - Any of these endpoints may be retired by Roblox without notice

pub mod groups;
pub mod thumbnails;
pub mod users;

pub use groups::*;
pub use thumbnails::*;
pub use users::*;

use serde::Deserialize;

/// The `{"data": [...]}` envelope used by every legacy list response.
///
/// # Example
///
/// ```rust
/// use roblox_cloud::api::legacy::LegacyData;
///
/// let json = r#"{"data": [{"id": 1}], "previousPageCursor": null}"#;
/// let wrapped: LegacyData<serde_json::Value> = serde_json::from_str(json).unwrap();
/// assert_eq!(wrapped.data.len(), 1);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyData<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}
