// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! Validate command - check a generated configuration

use colored::Colorize;
use miette::Result;
use std::path::PathBuf;

use crate::settings::Settings;
use crate::utils::{print_error, print_section, print_success, print_warning};
use crate::wizard::{CollectorConfig, ConfigValidator};

/// Run the validate command
pub async fn run(catalog: Option<PathBuf>, config_path: PathBuf, verbose: bool) -> Result<()> {
    println!("{}", "Validating configuration...".bold());
    println!();

    let catalog = Settings::from_cli(catalog).load_catalog()?;

    let config = match CollectorConfig::from_file(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("  {} Failed to load {}", "✗".red(), config_path.display());
            eprintln!();
            return Err(e.into());
        }
    };

    print_success("Configuration file is valid YAML");

    let validation = ConfigValidator::validate(&config, &catalog);

    if !validation.errors.is_empty() {
        print_section("Errors");
        for error in &validation.errors {
            print_error(error);
        }
    }

    if validation.has_warnings() {
        print_section("Warnings");
        for warning in &validation.warnings {
            print_warning(warning);
        }
    }

    if verbose {
        print_section("Configuration summary");
        println!("  Pipelines: {}", config.service.pipelines.len());
        for (name, components) in &config.service.pipelines {
            println!(
                "    - {} {}",
                name,
                format!(
                    "[{} → {} → {}]",
                    components.receivers.join(", "),
                    components.processors.join(", "),
                    components.exporters.join(", ")
                )
                .dimmed()
            );
        }
    }

    println!();

    if !validation.is_valid() {
        return Err(miette::miette!(
            "Configuration validation failed with {} error(s)",
            validation.errors.len()
        ));
    }

    if validation.has_warnings() {
        println!("{}", "Configuration is valid but has warnings.".yellow().bold());
    } else {
        println!("{}", "Configuration is valid!".green().bold());
    }
    Ok(())
}
