//
//  roblox-cloud
//  cli/roles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;

use crate::api::cloud::Role;
use crate::output::{format_optional, truncate, TableOutput};

use super::{GlobalOptions, GroupTarget};

/// List group roles
#[derive(Args, Debug)]
pub struct RolesCommand {
    #[command(flatten)]
    pub target: GroupTarget,

    /// Show a single role by id
    #[arg(long, value_name = "ROLE_ID")]
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
struct RoleListItem {
    id: String,
    name: String,
    rank: u32,
    member_count: Option<u64>,
    description: Option<String>,
}

impl From<Role> for RoleListItem {
    fn from(role: Role) -> Self {
        Self {
            id: role.id,
            name: role.name,
            rank: role.rank,
            member_count: role.member_count,
            description: role.description,
        }
    }
}

impl TableOutput for RoleListItem {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "RANK", "MEMBERS", "DESCRIPTION"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        let name = if color && self.rank == 255 {
            style(&self.name).cyan().bold().to_string()
        } else {
            self.name.clone()
        };
        vec![
            self.id.clone(),
            name,
            self.rank.to_string(),
            format_optional(self.member_count),
            truncate(self.description.as_deref().unwrap_or("-"), 40),
        ]
    }
}

impl RolesCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.output();

        let group = self.target.fetch(&client).await?;

        if let Some(role_id) = &self.id {
            let role = group.role(role_id).await?;
            return writer.write(&RoleListItem::from(role));
        }

        let mut items: Vec<RoleListItem> = group
            .roles()
            .await?
            .into_iter()
            .map(RoleListItem::from)
            .collect();
        items.sort_by_key(|r| r.rank);

        writer.write_list(&items)?;
        writer.write_info(&format!("Showing {} roles of {}", items.len(), group.name));
        Ok(())
    }
}
