//
//  roblox-cloud
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client and typed accessors for the Roblox APIs.
//!
//! ## Supported APIs
//!
//! - **Open Cloud v2**: users, groups, memberships, roles, join requests at `apis.roblox.com`
//! - **Legacy web APIs**: name lookups, legacy roles, member removal and icons at
//!   `users.roblox.com`, `groups.roblox.com` and `thumbnails.roblox.com`
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with authentication and request handling
//! - [`cloud`]: Open Cloud entities and accessors
//! - [`legacy`]: Legacy API wire shapes and accessors
//! - [`resolver`]: Name lookups spanning both generations
//! - [`common`]: Shared types (errors, pagination, decoding helpers)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use roblox_cloud::api::RobloxClient;
//!
//! # async fn example() -> Result<(), roblox_cloud::api::ApiError> {
//! let client = RobloxClient::new("your-api-key")?;
//! let account = client.user_by_id("156").await?;
//! for entry in account.groups().await? {
//!     println!("{}: {}", entry.group.name, entry.role.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every accessor returns [`ApiError`]. Non-200 responses map by status code:
//!
//! - `InvalidArgument`: 400
//! - `PermissionDenied`: 403 (the API key lacks a scope)
//! - `NotFound`: 404
//! - `RateLimited`: 429
//! - `Internal` / `Unavailable`: 500 / 503

/// Core HTTP client wrapper for the Roblox APIs.
///
/// Provides the [`RobloxClient`] struct which handles:
/// - API key header injection
/// - Query merging and JSON bodies
/// - Status code classification
pub mod client;

/// Open Cloud v2 resources.
pub mod cloud;

/// Legacy web API resources.
pub mod legacy;

/// Name to record resolution across the legacy and cloud APIs.
pub mod resolver;

/// Common types shared between the cloud and legacy APIs.
///
/// Includes:
/// - [`ApiError`]: Standardized error type
/// - [`CursorPage`](common::CursorPage) and [`Paginator`](common::Paginator)
/// - Decoding helpers for ids, relations and timestamps
pub mod common;

/// Re-export of the main Roblox API client.
pub use client::RobloxClient;

/// Re-export of the API error type.
pub use common::ApiError;
