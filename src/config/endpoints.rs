//
//  roblox-cloud
//  config/endpoints.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Endpoint Configuration Module
//!
//! Roblox serves its APIs from several hosts. The versioned Open Cloud API
//! lives under one base URL, while the legacy web APIs each have their own
//! host.
//!
//! | Family | Default | Used for |
//! |--------|---------|----------|
//! | Cloud | `https://apis.roblox.com/cloud/v2/` | users, groups, memberships, roles, join requests |
//! | Users | `https://users.roblox.com/` | username lookup |
//! | Groups | `https://groups.roblox.com/` | group name lookup, legacy roles, member removal |
//! | Thumbnails | `https://thumbnails.roblox.com/` | group icons |
//!
//! ## Usage
//!
//! ```rust
//! use roblox_cloud::config::Endpoints;
//!
//! let endpoints = Endpoints::default();
//! assert_eq!(endpoints.cloud_url("groups/7"), "https://apis.roblox.com/cloud/v2/groups/7");
//! assert_eq!(endpoints.groups_url("/v1/groups/7/users/1"), "https://groups.roblox.com/v1/groups/7/users/1");
//! ```

use serde::{Deserialize, Serialize};

/// Open Cloud API version targeted by this crate.
pub const CLOUD_API_VERSION: u32 = 2;

/// Root of the versioned Open Cloud API, without the version segment.
pub const ROBLOX_CLOUD: &str = "https://apis.roblox.com/cloud/v";

/// Legacy users API host.
pub const ROBLOX_USERS: &str = "https://users.roblox.com/";

/// Legacy groups API host.
pub const ROBLOX_GROUPS: &str = "https://groups.roblox.com/";

/// Legacy thumbnails API host.
pub const ROBLOX_THUMBNAILS: &str = "https://thumbnails.roblox.com/";

/// Base URLs for every endpoint family the client talks to.
///
/// Immutable once handed to a [`RobloxClient`](crate::api::RobloxClient).
/// All fields default to the public Roblox hosts, so a TOML file only needs
/// to name the ones it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Versioned Open Cloud base, including the `v<N>/` segment.
    #[serde(default = "default_cloud")]
    pub cloud: String,

    /// Legacy users API base.
    #[serde(default = "default_users")]
    pub users: String,

    /// Legacy groups API base.
    #[serde(default = "default_groups")]
    pub groups: String,

    /// Legacy thumbnails API base.
    #[serde(default = "default_thumbnails")]
    pub thumbnails: String,
}

fn default_cloud() -> String {
    format!("{}{}/", ROBLOX_CLOUD, CLOUD_API_VERSION)
}

fn default_users() -> String {
    ROBLOX_USERS.to_string()
}

fn default_groups() -> String {
    ROBLOX_GROUPS.to_string()
}

fn default_thumbnails() -> String {
    ROBLOX_THUMBNAILS.to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            cloud: default_cloud(),
            users: default_users(),
            groups: default_groups(),
            thumbnails: default_thumbnails(),
        }
    }
}

impl Endpoints {
    /// Serves every endpoint family from a single base URL.
    ///
    /// The cloud family is mounted at `<base>/cloud/v2/`; the legacy
    /// families share `<base>/` directly. Intended for mock servers.
    ///
    /// # Example
    ///
    /// ```rust
    /// use roblox_cloud::config::Endpoints;
    ///
    /// let endpoints = Endpoints::with_base("http://127.0.0.1:4000/");
    /// assert_eq!(endpoints.cloud, "http://127.0.0.1:4000/cloud/v2/");
    /// assert_eq!(endpoints.users, "http://127.0.0.1:4000/");
    /// ```
    pub fn with_base(base: &str) -> Self {
        let base = format!("{}/", base.trim_end_matches('/'));
        Self {
            cloud: format!("{}cloud/v{}/", base, CLOUD_API_VERSION),
            users: base.clone(),
            groups: base.clone(),
            thumbnails: base,
        }
    }

    /// Full URL of a cloud resource path such as `groups/7/roles`.
    pub fn cloud_url(&self, path: &str) -> String {
        join(&self.cloud, path)
    }

    pub fn users_url(&self, path: &str) -> String {
        join(&self.users, path)
    }

    pub fn groups_url(&self, path: &str) -> String {
        join(&self.groups, path)
    }

    pub fn thumbnails_url(&self, path: &str) -> String {
        join(&self.thumbnails, path)
    }
}

/// Joins a base and a path with exactly one `/` between them.
fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hosts() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.cloud, "https://apis.roblox.com/cloud/v2/");
        assert_eq!(endpoints.users_url("v1/usernames/users"), "https://users.roblox.com/v1/usernames/users");
        assert_eq!(
            endpoints.thumbnails_url("v1/groups/icons"),
            "https://thumbnails.roblox.com/v1/groups/icons"
        );
    }

    #[test]
    fn test_join_normalizes_slashes() {
        assert_eq!(join("https://a/", "/b"), "https://a/b");
        assert_eq!(join("https://a", "b"), "https://a/b");
    }

    #[test]
    fn test_with_base() {
        let endpoints = Endpoints::with_base("http://localhost:1234");
        assert_eq!(
            endpoints.cloud_url("users/1"),
            "http://localhost:1234/cloud/v2/users/1"
        );
        assert_eq!(
            endpoints.groups_url("v1/groups/search/lookup"),
            "http://localhost:1234/v1/groups/search/lookup"
        );
    }
}
