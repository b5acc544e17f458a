//
//  roblox-cloud
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod group;
mod icon;
mod join_requests;
mod members;
mod roles;
mod user;

pub use group::GroupCommand;
pub use icon::IconCommand;
pub use join_requests::JoinRequestsCommand;
pub use members::MembersCommand;
pub use roles::RolesCommand;
pub use user::UserCommand;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::api::cloud::Group;
use crate::api::{ApiError, RobloxClient};
use crate::config::ClientConfig;
use crate::output::{OutputFormat, OutputWriter};

/// rbx - Query Roblox users and groups from the command line
#[derive(Parser, Debug)]
#[command(
    name = "rbx",
    version,
    about = "Query Roblox users and groups from the command line",
    long_about = "rbx is a CLI for the Roblox Open Cloud API.\n\n\
                  It looks up users and groups, walks group members and roles, \
                  and reviews pending join requests.",
    propagate_version = true,
    after_help = "Use 'rbx <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Open Cloud API key
    #[arg(long, global = true, env = "ROBLOX_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "RBX_CONFIG")]
    pub config: Option<PathBuf>,
}

impl GlobalOptions {
    pub fn output(&self) -> OutputWriter {
        OutputWriter::new(OutputFormat::from_json_flag(self.json))
    }

    /// Builds a client from the API key and the loaded configuration.
    pub fn client(&self) -> Result<RobloxClient> {
        let config = match &self.config {
            Some(path) => ClientConfig::load_from(path)?,
            None => ClientConfig::load()?,
        };

        let api_key = self.api_key.clone().unwrap_or_default();
        RobloxClient::with_config(api_key, config)
            .context("Pass --api-key or set ROBLOX_API_KEY")
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a user
    #[command(visible_alias = "u")]
    User(UserCommand),

    /// Look up a group
    #[command(visible_alias = "g")]
    Group(GroupCommand),

    /// List group members with their roles
    Members(MembersCommand),

    /// List group roles
    Roles(RolesCommand),

    /// Review pending join requests
    #[command(name = "join-requests", visible_alias = "jr")]
    JoinRequests(JoinRequestsCommand),

    /// Fetch a group icon
    Icon(IconCommand),

    /// Print version information
    Version,
}

/// A group named by id, or by exact name with `--by-name`.
#[derive(Args, Debug, Clone)]
pub struct GroupTarget {
    /// Group id (or name with --by-name)
    pub group: String,

    /// Treat GROUP as an exact group name
    #[arg(long)]
    pub by_name: bool,
}

impl GroupTarget {
    pub async fn fetch(&self, client: &RobloxClient) -> Result<Group, ApiError> {
        if self.by_name {
            client.group_by_name(&self.group).await
        } else {
            client.group_by_id(&self.group).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_group_by_name() {
        let cli = Cli::parse_from(["rbx", "roles", "Builders Club", "--by-name", "--json"]);
        assert!(cli.global.json);
        match cli.command {
            Commands::Roles(cmd) => {
                assert_eq!(cmd.target.group, "Builders Club");
                assert!(cmd.target.by_name);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_missing_api_key() {
        let global = GlobalOptions {
            api_key: Some(String::new()),
            json: false,
            config: Some(PathBuf::from("/nonexistent/rbx/config.toml")),
        };

        let err = global.client().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ApiError>(),
            Some(ApiError::NoApiKey)
        ));
        assert!(format!("{err:#}").contains("ROBLOX_API_KEY"));
    }
}
