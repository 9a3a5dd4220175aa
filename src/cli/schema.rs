// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! Schema command - show a component's configuration fields

use colored::Colorize;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use super::SchemaFormat;
use crate::catalog::{ComponentGroup, ComponentSpec, Field, FieldKind};
use crate::errors::WizardError;
use crate::settings::Settings;
use crate::utils::print_header;

/// Run the schema command
pub async fn run(
    catalog: Option<PathBuf>,
    group: ComponentGroup,
    type_name: String,
    format: SchemaFormat,
    _verbose: bool,
) -> Result<()> {
    let catalog = Settings::from_cli(catalog).load_catalog()?;
    let spec = catalog
        .get(group, &type_name)
        .ok_or_else(|| WizardError::UnknownComponent {
            group: group.to_string(),
            type_name: type_name.clone(),
        })?;

    match format {
        SchemaFormat::Text => print_text(group, spec),
        SchemaFormat::Yaml => print!("{}", serde_yaml::to_string(spec).into_diagnostic()?),
        SchemaFormat::Json => println!("{}", serde_json::to_string_pretty(spec).into_diagnostic()?),
    }

    Ok(())
}

fn print_text(group: ComponentGroup, spec: &ComponentSpec) {
    let title = format!("{} {}", group, spec.type_name);
    print_header(&title);

    if !spec.description.is_empty() {
        println!("{}", spec.description);
    }
    if !spec.data_types.is_empty() {
        let names: Vec<String> = spec.data_types.iter().map(|d| d.to_string()).collect();
        println!("{}: {}", "Pipelines".bold(), names.join(", "));
    }

    println!();
    if spec.fields.is_empty() {
        println!("{}", "  No configuration fields.".dimmed());
        return;
    }
    print_fields(&spec.fields, 1);
}

fn print_fields(fields: &[Field], depth: usize) {
    let indent = "  ".repeat(depth);
    for field in fields {
        if field.squash {
            print_fields(&field.fields, depth);
            continue;
        }

        let type_label = format!("({})", field.display_type());
        let mut line = format!("{}{} {}", indent, field.name.cyan(), type_label.dimmed());
        if field.kind == FieldKind::Ptr {
            line.push_str(&format!(" {}", "optional".yellow()));
        }
        if field.default.is_some() {
            line.push_str(&format!(" [default: {}]", field.default_display()));
        }
        println!("{}", line);

        if !field.doc.is_empty() {
            println!("{}  {}", indent, field.doc.dimmed());
        }
        if field.kind.is_composite() {
            print_fields(&field.fields, depth + 1);
        }
    }
}
