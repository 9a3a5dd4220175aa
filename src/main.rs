// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! configwiz - Collector Configuration Wizard
//!
//! Interactively build telemetry collector pipelines and write them as YAML.

use clap::Parser;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use configwiz::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout belongs to the prompts
    let default_filter = if cli.verbose {
        "configwiz=debug"
    } else {
        "configwiz=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if !configwiz::utils::should_use_colors() {
        colored::control::set_override(false);
    }

    // Change to specified directory if provided
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir).map_err(|e| {
            miette::miette!("Failed to change to directory '{}': {}", dir.display(), e)
        })?;
    }

    // Dispatch to command handlers
    match cli.command {
        None => configwiz::cli::wizard::run(cli.catalog, None, false, cli.verbose).await,
        Some(Commands::Wizard {
            output,
            defaults_only,
        }) => configwiz::cli::wizard::run(cli.catalog, output, defaults_only, cli.verbose).await,
        Some(Commands::Components {
            group,
            pipeline,
            format,
        }) => configwiz::cli::components::run(cli.catalog, group, pipeline, format, cli.verbose).await,
        Some(Commands::Schema {
            group,
            type_name,
            format,
        }) => configwiz::cli::schema::run(cli.catalog, group, type_name, format, cli.verbose).await,
        Some(Commands::Validate { config }) => {
            configwiz::cli::validate::run(cli.catalog, config, cli.verbose).await
        }
    }
}
