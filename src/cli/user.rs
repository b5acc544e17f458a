//
//  roblox-cloud
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User commands
//!
//! Looks up a Roblox account by id or exact username, and optionally lists
//! the groups it belongs to or generates an avatar headshot.

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;

use crate::api::cloud::{Account, ThumbnailShape, ThumbnailSize};
use crate::api::legacy::UserGroupRole;
use crate::output::{format_bool, format_optional, format_time, print_field, print_header, OutputWriter, TableOutput};

use super::GlobalOptions;

/// Look up a user
#[derive(Args, Debug)]
pub struct UserCommand {
    /// User id (or username with --name)
    pub user: String,

    /// Treat USER as an exact username
    #[arg(long, short = 'n')]
    pub name: bool,

    /// List the groups the user belongs to
    #[arg(long)]
    pub groups: bool,

    /// Generate an avatar headshot and print its URL
    #[arg(long)]
    pub thumbnail: bool,

    /// Request a square headshot instead of a round one
    #[arg(long, requires = "thumbnail")]
    pub square: bool,
}

// Display Types

#[derive(Debug, Serialize)]
struct UserDetail<'a> {
    #[serde(flatten)]
    account: &'a Account,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail: Option<String>,
}

impl TableOutput for UserDetail<'_> {
    fn headers() -> &'static [&'static str] {
        &["ID", "USERNAME", "DISPLAY NAME", "PREMIUM", "CREATED"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        vec![
            self.account.id.clone(),
            self.account.name.clone(),
            self.account.preferred_name().to_string(),
            format_bool(self.account.premium, color),
            format_time(self.account.created_at.as_ref()),
        ]
    }

    fn print_detail(&self, color: bool) {
        let account = self.account;
        print_header(account.preferred_name(), color);
        print_field("  ID", &account.id, color);
        print_field("  Username", &account.name, color);
        print_field("  Premium", &format_bool(account.premium, color), color);
        print_field("  Locale", &format_optional(account.locale.as_deref()), color);
        print_field("  Created", &format_time(account.created_at.as_ref()), color);
        if let Some(about) = account.about.as_deref().filter(|a| !a.is_empty()) {
            println!();
            println!("{}", about);
        }
        if let Some(thumbnail) = &self.thumbnail {
            println!();
            print_field("  Thumbnail", thumbnail, color);
        }
    }
}

#[derive(Debug, Serialize)]
struct UserGroupItem {
    group_id: String,
    group_name: String,
    role: String,
    rank: u32,
}

impl From<&UserGroupRole> for UserGroupItem {
    fn from(entry: &UserGroupRole) -> Self {
        Self {
            group_id: entry.group.id.clone(),
            group_name: entry.group.name.clone(),
            role: entry.role.name.clone(),
            rank: entry.role.rank,
        }
    }
}

impl TableOutput for UserGroupItem {
    fn headers() -> &'static [&'static str] {
        &["GROUP ID", "GROUP", "ROLE", "RANK"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        let rank = if color && self.rank == 255 {
            style(self.rank).cyan().bold().to_string()
        } else {
            self.rank.to_string()
        };
        vec![
            self.group_id.clone(),
            self.group_name.clone(),
            self.role.clone(),
            rank,
        ]
    }
}

impl UserCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.output();

        let account = if self.name {
            client.user_by_username(&self.user).await?
        } else {
            client.user_by_id(&self.user).await?
        };

        if self.groups {
            return self.groups(&account, &writer).await;
        }

        let thumbnail = if self.thumbnail {
            let shape = if self.square {
                ThumbnailShape::Square
            } else {
                ThumbnailShape::Round
            };
            let thumbnail = account.thumbnail(ThumbnailSize::default(), shape).await?;
            if !thumbnail.done {
                writer.write_warning("Thumbnail is still rendering; try again shortly");
            }
            thumbnail.image_uri
        } else {
            None
        };

        writer.write(&UserDetail {
            account: &account,
            thumbnail,
        })
    }

    async fn groups(&self, account: &Account, writer: &OutputWriter) -> Result<()> {
        let items: Vec<UserGroupItem> = account
            .groups()
            .await?
            .iter()
            .map(UserGroupItem::from)
            .collect();

        writer.write_list(&items)?;
        if items.is_empty() {
            writer.write_info(&format!("{} is not in any groups", account.name));
        } else {
            writer.write_info(&format!("Showing {} groups", items.len()));
        }
        Ok(())
    }
}
