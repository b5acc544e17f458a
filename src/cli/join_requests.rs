//
//  roblox-cloud
//  cli/join_requests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Join request commands
//!
//! Lists the pending requests of a group, or accepts and declines them.
//! Requesters whose account can no longer be looked up are left out of the
//! listing.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::api::cloud::JoinRequest;
use crate::output::{format_time, TableOutput};

use super::{GlobalOptions, GroupTarget};

/// Review pending join requests
#[derive(Args, Debug)]
pub struct JoinRequestsCommand {
    #[command(flatten)]
    pub target: GroupTarget,

    /// Accept the request of this user id
    #[arg(long, value_name = "USER_ID", conflicts_with_all = ["decline", "accept_all"])]
    pub accept: Option<String>,

    /// Decline the request of this user id
    #[arg(long, value_name = "USER_ID", conflicts_with = "accept_all")]
    pub decline: Option<String>,

    /// Accept every pending request
    #[arg(long)]
    pub accept_all: bool,
}

#[derive(Debug, Serialize)]
struct JoinRequestItem {
    user_id: String,
    display_name: String,
    requested_at: String,
}

impl From<&JoinRequest> for JoinRequestItem {
    fn from(request: &JoinRequest) -> Self {
        Self {
            user_id: request.user_id.clone(),
            display_name: request.display_name.clone(),
            requested_at: format_time(request.requested_at.as_ref()),
        }
    }
}

impl TableOutput for JoinRequestItem {
    fn headers() -> &'static [&'static str] {
        &["USER ID", "DISPLAY NAME", "REQUESTED"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.user_id.clone(),
            self.display_name.clone(),
            self.requested_at.clone(),
        ]
    }
}

impl JoinRequestsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.output();

        let group = self.target.fetch(&client).await?;

        if let Some(user_id) = &self.accept {
            group.accept_join_request(user_id).await?;
            writer.write_success(&format!("Accepted {} into {}", user_id, group.name));
            return Ok(());
        }

        if let Some(user_id) = &self.decline {
            group.decline_join_request(user_id).await?;
            writer.write_success(&format!("Declined {} for {}", user_id, group.name));
            return Ok(());
        }

        let requests = group.join_requests().await?;

        if self.accept_all {
            for request in &requests {
                request.accept().await?;
            }
            writer.write_success(&format!(
                "Accepted {} join requests into {}",
                requests.len(),
                group.name
            ));
            return Ok(());
        }

        let items: Vec<JoinRequestItem> = requests.iter().map(JoinRequestItem::from).collect();
        writer.write_list(&items)?;
        if items.is_empty() {
            writer.write_info(&format!("No pending join requests for {}", group.name));
        } else {
            writer.write_info(&format!("Showing {} join requests", items.len()));
        }
        Ok(())
    }
}
