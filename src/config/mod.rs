//
//  roblox-cloud
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Client configuration: which hosts to talk to, how large each page of a
//! paginated collection is, and how long to wait between page requests.
//!
//! Library users normally build a [`ClientConfig`] in code (or take the
//! default). The `rbx` binary additionally reads it from a TOML file in the
//! platform-specific configuration directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/rbx/config.toml`
//! - **macOS**: `~/Library/Application Support/rbx/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\rbx\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! member_page_size = 100
//! role_page_size = 20
//! page_interval_ms = 200
//!
//! [endpoints]
//! cloud = "https://apis.roblox.com/cloud/v2/"
//! ```
//!
//! ## Submodules
//!
//! - [`endpoints`]: Default hosts and URL joining

mod endpoints;

pub use endpoints::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Page size for group membership listings (server maximum).
pub const DEFAULT_MEMBER_PAGE_SIZE: u32 = 100;

/// Page size for group role listings (server maximum).
pub const DEFAULT_ROLE_PAGE_SIZE: u32 = 20;

/// Delay before every page request.
///
/// Memberships are limited to 300 requests per minute; one request every
/// 200 ms stays exactly at that quota.
pub const DEFAULT_PAGE_INTERVAL_MS: u64 = 200;

/// Configuration injected into a [`RobloxClient`](crate::api::RobloxClient).
///
/// # Default Values
///
/// | Field | Default |
/// |-------|---------|
/// | `endpoints` | public Roblox hosts |
/// | `member_page_size` | `100` |
/// | `role_page_size` | `20` |
/// | `page_interval_ms` | `200` |
///
/// # Examples
///
/// ```rust
/// use roblox_cloud::config::ClientConfig;
///
/// let config = ClientConfig::from_toml_str("page_interval_ms = 10").unwrap();
/// assert_eq!(config.page_interval_ms, 10);
/// assert_eq!(config.member_page_size, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URLs for the cloud and legacy APIs.
    #[serde(default)]
    pub endpoints: Endpoints,

    /// `maxPageSize` sent when walking group memberships.
    #[serde(default = "default_member_page_size")]
    pub member_page_size: u32,

    /// `maxPageSize` sent when walking group roles.
    #[serde(default = "default_role_page_size")]
    pub role_page_size: u32,

    /// Milliseconds to wait before each page request.
    #[serde(default = "default_page_interval_ms")]
    pub page_interval_ms: u64,
}

fn default_member_page_size() -> u32 {
    DEFAULT_MEMBER_PAGE_SIZE
}

fn default_role_page_size() -> u32 {
    DEFAULT_ROLE_PAGE_SIZE
}

fn default_page_interval_ms() -> u64 {
    DEFAULT_PAGE_INTERVAL_MS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            member_page_size: default_member_page_size(),
            role_page_size: default_role_page_size(),
            page_interval_ms: default_page_interval_ms(),
        }
    }
}

impl ClientConfig {
    /// The pagination interval as a [`Duration`].
    pub fn page_interval(&self) -> Duration {
        Duration::from_millis(self.page_interval_ms)
    }

    /// Parses a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid client configuration")
    }

    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the configuration directory cannot be determined.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from an explicit path, defaulting when absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "rbx")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}
