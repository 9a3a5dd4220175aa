// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! Wizard command - build a configuration interactively

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use crate::settings::Settings;
use crate::utils::{print_section, print_success};
use crate::wizard::{self, StdIo, WizardOptions, SEPARATOR};

/// Run the wizard command
pub async fn run(
    catalog: Option<PathBuf>,
    output: Option<PathBuf>,
    defaults_only: bool,
    verbose: bool,
) -> Result<()> {
    let catalog = Settings::from_cli(catalog).load_catalog()?;
    let options = WizardOptions {
        output,
        defaults_only,
    };

    // stdin reads block, so keep them off the async workers
    let outcome = tokio::task::spawn_blocking(move || {
        let mut io = StdIo::terminal();
        wizard::run(&mut io, &catalog, &options)
    })
    .await
    .map_err(|e| miette::miette!("Wizard task failed: {}", e))??;

    let yaml = outcome.config.to_yaml()?;
    println!("{}", SEPARATOR);
    println!("{}", yaml);

    wizard::write_config(&outcome.path, &yaml).await?;
    print_success(&format!("Wrote {}", outcome.path.display()));

    if verbose {
        print_section("Summary");
        for (name, components) in &outcome.config.service.pipelines {
            println!(
                "  {} - {} receivers, {} processors, {} exporters, {} extensions",
                name.cyan(),
                components.receivers.len(),
                components.processors.len(),
                components.exporters.len(),
                components.extensions.len()
            );
        }
    }

    Ok(())
}
