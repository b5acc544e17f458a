//
//  roblox-cloud
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Roblox Cloud Library
//!
//! Typed bindings for the Roblox Open Cloud REST API and the legacy web APIs
//! it still depends on.
//!
//! ## Overview
//!
//! This library provides the client behind the `rbx` CLI tool, and can be
//! used on its own to look up users and groups, walk group memberships and
//! roles, manage join requests and fetch thumbnails.
//!
//! ## Features
//!
//! - **API Key Authentication**: a static `X-API-KEY` header on every request
//! - **Two API Generations**: cloud resources plus legacy name lookups, joined
//!   by a common resolver
//! - **Rate-Limited Pagination**: membership walks paced to the documented quota
//! - **Lenient Decoding**: identifiers accepted as JSON strings or numbers
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client, entities and accessors
//! - [`auth`]: API key credential
//! - [`config`]: Endpoints, page sizes and config file loading
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Output formatting (Table, JSON)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use roblox_cloud::RobloxClient;
//!
//! # async fn example() -> Result<(), roblox_cloud::ApiError> {
//! let client = RobloxClient::new("your-api-key")?;
//! let group = client.group_by_id("7").await?;
//! for role in group.roles().await? {
//!     println!("{:>3} {}", role.rank, role.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Every operation awaits its requests one after another; nothing is spawned
//! and nothing is cached. The client is never mutated after construction and
//! may be shared between tasks.

/// Command-line interface definitions.
///
/// Contains the `rbx` commands and arguments defined using the clap derive API.
pub mod cli;

/// API client implementations for the Roblox APIs.
pub mod api;

/// API key credential.
pub mod auth;

/// Client configuration.
///
/// Manages endpoints and pagination settings, optionally read from:
/// - Linux: `~/.config/rbx/config.toml`
/// - macOS: `~/Library/Application Support/rbx/config.toml`
/// - Windows: `%APPDATA%\rbx\config.toml`
pub mod config;

/// Output formatting for the `rbx` binary.
///
/// Provides formatters for:
/// - Table format: Human-readable tables for interactive use
/// - JSON format: Structured output for scripting and automation
pub mod output;

pub use api::{ApiError, RobloxClient};
pub use cli::Cli;
pub use config::ClientConfig;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "rbx";

/// Library version, from Cargo.toml.
///
/// # Example
///
/// ```rust
/// use roblox_cloud::VERSION;
///
/// println!("roblox-cloud {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client identifier sent as the `User-Agent` of every request.
pub const CLIENT_IDENTIFIER: &str = concat!("roblox-cloud/", env!("CARGO_PKG_VERSION"));

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    ///
    /// An unspecified error occurred during execution.
    /// Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Missing API key, or the key lacks a required scope.
    ///
    /// Pass `--api-key` or set `ROBLOX_API_KEY`.
    pub const AUTH_ERROR: i32 = 4;

    /// The requested user, group or role does not exist.
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded.
    ///
    /// Roblox rejected a request with 429. Wait before retrying.
    pub const RATE_LIMIT: i32 = 32;
}
