//
//  roblox-cloud
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use roblox_cloud::api::common::ResponseCode;
use roblox_cloud::cli::{Cli, Commands};
use roblox_cloud::output::OutputWriter;
use roblox_cloud::{exit_codes, ApiError};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            OutputWriter::table().write_error(&format!("{e:#}"));
            std::process::exit(exit_code_for(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("RBX_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::User(cmd) => cmd.run(&cli.global).await,
        Commands::Group(cmd) => cmd.run(&cli.global).await,
        Commands::Members(cmd) => cmd.run(&cli.global).await,
        Commands::Roles(cmd) => cmd.run(&cli.global).await,
        Commands::JoinRequests(cmd) => cmd.run(&cli.global).await,
        Commands::Icon(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("rbx version {}", roblox_cloud::VERSION);
            Ok(())
        }
    }
}

fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ApiError>() {
        Some(ApiError::NoApiKey) => exit_codes::AUTH_ERROR,
        Some(ApiError::Status { code, .. }) => match code {
            ResponseCode::PermissionDenied => exit_codes::AUTH_ERROR,
            ResponseCode::NotFound => exit_codes::NOT_FOUND,
            ResponseCode::RateLimited => exit_codes::RATE_LIMIT,
            _ => exit_codes::ERROR,
        },
        Some(ApiError::Http { status: 401, .. }) => exit_codes::AUTH_ERROR,
        Some(
            ApiError::InvalidUsername | ApiError::InvalidGroupname | ApiError::UserHasNoRole,
        ) => exit_codes::NOT_FOUND,
        Some(err) if err.is_validation() => exit_codes::USAGE,
        _ => exit_codes::ERROR,
    }
}
