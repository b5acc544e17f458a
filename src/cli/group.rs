//
//  roblox-cloud
//  cli/group.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Group lookup command

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;

use crate::api::cloud::Group;
use crate::output::{format_bool, format_optional, format_time, print_field, truncate, TableOutput};

use super::{GlobalOptions, GroupTarget};

/// Look up a group
#[derive(Args, Debug)]
pub struct GroupCommand {
    #[command(flatten)]
    pub target: GroupTarget,

    /// Also show the requesting member's role for this user id
    #[arg(long, value_name = "USER_ID")]
    pub member: Option<String>,
}

#[derive(Debug, Serialize)]
struct GroupDetail<'a> {
    #[serde(flatten)]
    group: &'a Group,
    #[serde(skip_serializing_if = "Option::is_none")]
    member_role: Option<MemberRole>,
}

#[derive(Debug, Serialize)]
struct MemberRole {
    user_id: String,
    role_id: String,
    role: String,
    rank: u32,
}

impl TableOutput for GroupDetail<'_> {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "OWNER", "MEMBERS", "VERIFIED"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.group.id.clone(),
            truncate(&self.group.name, 40),
            format_optional(self.group.owner_id.as_deref()),
            self.group.member_count.to_string(),
            format_bool(self.group.verified, color),
        ]
    }

    fn print_detail(&self, color: bool) {
        let group = self.group;
        let title = if color {
            style(&group.name).bold().to_string()
        } else {
            group.name.clone()
        };

        println!("{}", title);
        println!();
        print_field("  ID", &group.id, color);
        print_field("  Owner", &format_optional(group.owner_id.as_deref()), color);
        print_field("  Members", &group.member_count.to_string(), color);
        print_field("  Public entry", &format_bool(group.public_entry_allowed, color), color);
        print_field("  Locked", &format_bool(group.locked, color), color);
        print_field("  Verified", &format_bool(group.verified, color), color);
        print_field("  Created", &format_time(group.created_at.as_ref()), color);

        if !group.description.is_empty() {
            println!();
            println!("{}", group.description);
        }

        if let Some(member) = &self.member_role {
            println!();
            print_field(
                &format!("  Role of {}", member.user_id),
                &format!("{} (rank {})", member.role, member.rank),
                color,
            );
        }
    }
}

impl GroupCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.output();

        let group = self.target.fetch(&client).await?;

        let member_role = match &self.member {
            Some(user_id) => {
                let role = group.member_role(user_id).await?;
                Some(MemberRole {
                    user_id: user_id.clone(),
                    role_id: role.id,
                    role: role.name,
                    rank: role.rank,
                })
            }
            None => None,
        };

        writer.write(&GroupDetail {
            group: &group,
            member_role,
        })
    }
}
