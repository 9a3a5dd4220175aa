// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! Components command - list what the catalog offers

use colored::Colorize;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

use super::OutputFormat;
use crate::catalog::{ComponentGroup, ComponentSpec, DataType};
use crate::settings::Settings;
use crate::utils::print_section;

#[derive(Debug, Serialize)]
struct ComponentEntry<'a> {
    group: ComponentGroup,
    #[serde(rename = "type")]
    type_name: &'a str,
    data_types: &'a [DataType],
    description: &'a str,
}

/// Run the components command
pub async fn run(
    catalog: Option<PathBuf>,
    group: Option<ComponentGroup>,
    pipeline: Option<DataType>,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let catalog = Settings::from_cli(catalog).load_catalog()?;
    let components = catalog.list(group, pipeline);

    match format {
        OutputFormat::Json => {
            let entries: Vec<ComponentEntry> = components
                .iter()
                .map(|(group, spec)| ComponentEntry {
                    group: *group,
                    type_name: &spec.type_name,
                    data_types: &spec.data_types,
                    description: &spec.description,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries).into_diagnostic()?);
        }
        OutputFormat::Text => print_text(&components, verbose),
    }

    Ok(())
}

fn print_text(components: &[(ComponentGroup, &ComponentSpec)], verbose: bool) {
    if components.is_empty() {
        println!("{}", "No components match.".dimmed());
        return;
    }

    for group in ComponentGroup::ALL {
        let specs: Vec<&ComponentSpec> = components
            .iter()
            .filter(|(g, _)| *g == group)
            .map(|(_, s)| *s)
            .collect();
        if specs.is_empty() {
            continue;
        }

        print_section(group.section());
        for spec in specs {
            let data_types = if spec.data_types.is_empty() {
                String::new()
            } else {
                let names: Vec<&str> = spec.data_types.iter().map(DataType::as_str).collect();
                format!(" [{}]", names.join(", "))
            };
            println!("  • {}{}", spec.type_name.cyan(), data_types.dimmed());
            if verbose && !spec.description.is_empty() {
                println!("      {}", spec.description);
            }
        }
    }
    println!();
}
