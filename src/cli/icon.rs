//
//  roblox-cloud
//  cli/icon.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::api::legacy::IconSize;
use crate::output::{format_optional, print_field, TableOutput};

use super::{GlobalOptions, GroupTarget};

/// Fetch a group icon
#[derive(Args, Debug)]
pub struct IconCommand {
    #[command(flatten)]
    pub target: GroupTarget,

    /// Request the 420x420 icon instead of 150x150
    #[arg(long)]
    pub large: bool,

    /// Request a circular crop
    #[arg(long)]
    pub circular: bool,
}

#[derive(Debug, Serialize)]
struct IconDetail {
    group_id: String,
    size: &'static str,
    state: String,
    image_url: Option<String>,
}

impl TableOutput for IconDetail {
    fn headers() -> &'static [&'static str] {
        &["GROUP ID", "SIZE", "STATE", "URL"]
    }

    fn row(&self, _color: bool) -> Vec<String> {
        vec![
            self.group_id.clone(),
            self.size.to_string(),
            self.state.clone(),
            format_optional(self.image_url.as_deref()),
        ]
    }

    fn print_detail(&self, color: bool) {
        print_field("Group", &self.group_id, color);
        print_field("State", &self.state, color);
        print_field("URL", &format_optional(self.image_url.as_deref()), color);
    }
}

impl IconCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let writer = global.output();

        let group = self.target.fetch(&client).await?;
        let size = if self.large {
            IconSize::Large
        } else {
            IconSize::Small
        };

        let icon = group.icon(size, self.circular).await?;
        if icon.image_url.is_none() {
            writer.write_warning(&format!("Icon state is {}; no image available", icon.state));
        }

        writer.write(&IconDetail {
            group_id: icon.target_id,
            size: size.as_str(),
            state: icon.state,
            image_url: icon.image_url,
        })
    }
}
