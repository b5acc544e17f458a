//
//  roblox-cloud
//  cli/members.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Group member commands
//!
//! Walks the paginated membership listing of a group. Each page is paced by
//! the configured page interval, so large groups take a while; `--ids-only`
//! skips the per-member account and role lookups.
//!
//! With `--user`, the command works on one member instead: it shows their
//! role, `--set-role` moves them to another role and `--remove` exiles them.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::api::cloud::{Group, Membership};
use crate::api::RobloxClient;
use crate::output::{OutputWriter, TableOutput};

use super::{GlobalOptions, GroupTarget};

/// List group members with their roles
#[derive(Args, Debug)]
pub struct MembersCommand {
    #[command(flatten)]
    pub target: GroupTarget,

    /// Only print member user ids
    #[arg(long)]
    pub ids_only: bool,

    /// Only list members holding this role id
    #[arg(long, short = 'r', value_name = "ROLE_ID", conflicts_with = "user")]
    pub role: Option<String>,

    /// Member to change
    #[arg(long, short = 'u', value_name = "USER_ID")]
    pub user: Option<String>,

    /// Move the member to this role id
    #[arg(long, value_name = "ROLE_ID", requires = "user", conflicts_with = "remove")]
    pub set_role: Option<String>,

    /// Remove the member from the group
    #[arg(long, requires = "user")]
    pub remove: bool,
}

#[derive(Debug, Serialize)]
struct MemberListItem {
    user_id: String,
    username: String,
    display_name: String,
    role_id: String,
    role: String,
    rank: u32,
}

impl From<&Membership> for MemberListItem {
    fn from(membership: &Membership) -> Self {
        Self {
            user_id: membership.account.id.clone(),
            username: membership.account.name.clone(),
            display_name: membership.account.preferred_name().to_string(),
            role_id: membership.role.id.clone(),
            role: membership.role.name.clone(),
            rank: membership.role.rank,
        }
    }
}

impl TableOutput for MemberListItem {
    fn headers() -> &'static [&'static str] {
        &["USER ID", "USERNAME", "DISPLAY NAME", "ROLE", "RANK"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.user_id.clone(),
            self.username.clone(),
            self.display_name.clone(),
            self.role.clone(),
            self.rank.to_string(),
        ]
    }
}

#[derive(Debug, Serialize)]
struct MemberId {
    user_id: String,
}

impl TableOutput for MemberId {
    fn headers() -> &'static [&'static str] {
        &["USER ID"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![self.user_id.clone()]
    }
}

impl MembersCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.output();

        let group = self.target.fetch(&client).await?;

        if let Some(user_id) = &self.user {
            return self.update(&client, &group, user_id, &writer).await;
        }

        if self.ids_only || self.role.is_some() {
            let ids = match &self.role {
                Some(role_id) => group.role(role_id).await?.member_ids().await?,
                None => group.member_ids().await?,
            };
            let items: Vec<MemberId> = ids.into_iter().map(|user_id| MemberId { user_id }).collect();
            writer.write_list(&items)?;
            writer.write_info(&format!("Showing {} members of {}", items.len(), group.name));
            return Ok(());
        }

        let members = group.members().await?;
        let items: Vec<MemberListItem> = members.iter().map(MemberListItem::from).collect();

        if (items.len() as u64) < group.member_count {
            writer.write_warning(&format!(
                "{} of {} members could be resolved",
                items.len(),
                group.member_count
            ));
        }

        writer.write_list(&items)?;
        writer.write_info(&format!("Showing {} members of {}", items.len(), group.name));
        Ok(())
    }

    async fn update(
        &self,
        client: &RobloxClient,
        group: &Group,
        user_id: &str,
        writer: &OutputWriter,
    ) -> Result<()> {
        if self.remove {
            group.remove_member(user_id).await?;
            writer.write_success(&format!("Removed {} from {}", user_id, group.name));
        } else if let Some(role_id) = &self.set_role {
            let membership = group.set_member_role(user_id, role_id).await?;
            writer.write_success(&format!(
                "Moved {} to role {} in {}",
                user_id,
                membership.role_id(),
                group.name
            ));
        } else {
            let account = client.user_by_id(user_id).await?;
            let role = group.member_role(user_id).await?;
            writer.write(&MemberListItem {
                user_id: account.id.clone(),
                username: account.name.clone(),
                display_name: account.preferred_name().to_string(),
                role_id: role.id,
                role: role.name,
                rank: role.rank,
            })?;
        }
        Ok(())
    }
}
