//
//  roblox-cloud
//  api/cloud/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Roblox Open Cloud v2 implementation.
//!
//! Each submodule holds the wire shape of one resource (`*Resource`, decoded
//! straight from JSON) and the domain entity built from it. Entities carry a
//! clone of the [`RobloxClient`](crate::api::RobloxClient) that fetched them,
//! so follow-up calls read naturally:
//!
//! ```rust,no_run
//! # async fn example(client: roblox_cloud::api::RobloxClient) -> Result<(), roblox_cloud::api::ApiError> {
//! let group = client.group_by_id("7").await?;
//! for role in group.roles().await? {
//!     println!("{:>3} {}", role.rank, role.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`users`] - Accounts and avatar thumbnails
//! - [`groups`] - Groups and every group-scoped operation
//! - [`roles`] - Group roles (cloud shape)
//! - [`memberships`] - Membership lookup and role updates
//! - [`join_requests`] - Pending join requests
//!
//! # Notes
//!
//! - Identifiers arrive as JSON strings here, but numbers are accepted too
//! - Relations are resource paths (`users/156`, `groups/7/roles/99`)
//! - Timestamps are RFC3339

pub mod groups;
pub mod join_requests;
pub mod memberships;
pub mod roles;
pub mod users;

pub use groups::*;
pub use join_requests::*;
pub use memberships::*;
pub use roles::*;
pub use users::*;
