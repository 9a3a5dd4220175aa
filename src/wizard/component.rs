// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! Component configuration prompts
//!
//! Once the pipelines are known, every component they reference is
//! configured field by field from its catalog schema.

use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::io::WizardIo;
use super::pipelines::{Pipelines, INVALID_MSG};
use super::printer::IndentingPrinter;
use crate::catalog::{Catalog, ComponentGroup, Field, FieldKind};
use crate::errors::{WizardError, WizardResult};

/// Configured components of one group, keyed by identifier
pub type ComponentConfigs = BTreeMap<String, Value>;

/// Type part of an identifier: `otlp/backend` -> `otlp`
pub fn component_type(id: &str) -> &str {
    id.split('/').next().unwrap_or(id)
}

/// Identifiers used across all pipelines, per group.
///
/// Keeps first-seen order, drops repeats, and leaves out empty groups.
pub fn service_to_component_names(pipelines: &Pipelines) -> BTreeMap<ComponentGroup, Vec<String>> {
    let mut out: BTreeMap<ComponentGroup, Vec<String>> = BTreeMap::new();
    for components in pipelines.values() {
        for group in ComponentGroup::ALL {
            for id in components.get(group) {
                let names = out.entry(group).or_default();
                if !names.contains(id) {
                    names.push(id.clone());
                }
            }
        }
    }
    out
}

/// Prompt for the configuration of each identifier in `ids`
pub fn configure_components(
    io: &mut dyn WizardIo,
    catalog: &Catalog,
    group: ComponentGroup,
    ids: &[String],
) -> WizardResult<ComponentConfigs> {
    let pr = IndentingPrinter::new(0);
    let mut out = ComponentConfigs::new();

    for id in ids {
        let type_name = component_type(id);
        let spec = catalog
            .get(group, type_name)
            .ok_or_else(|| WizardError::UnknownComponent {
                group: group.to_string(),
                type_name: type_name.to_string(),
            })?;

        pr.println(io, &format!("Configure {} \"{}\"", group, id))?;
        let config = component_wizard(io, pr.indent(), &spec.fields)?;
        tracing::debug!(%group, component = %id, fields = config.len(), "Component configured");
        out.insert(id.clone(), Value::Mapping(config));
    }

    Ok(out)
}

/// Catalog defaults for each identifier in `ids`, without prompting
pub fn default_component_configs(
    catalog: &Catalog,
    group: ComponentGroup,
    ids: &[String],
) -> WizardResult<ComponentConfigs> {
    ids.iter()
        .map(|id| {
            let type_name = component_type(id);
            catalog
                .get(group, type_name)
                .map(|spec| (id.clone(), Value::Mapping(spec.default_config())))
                .ok_or_else(|| WizardError::UnknownComponent {
                    group: group.to_string(),
                    type_name: type_name.to_string(),
                })
        })
        .collect()
}

/// Walk `fields` and collect the answers into a mapping
pub fn component_wizard(
    io: &mut dyn WizardIo,
    pr: IndentingPrinter,
    fields: &[Field],
) -> WizardResult<Mapping> {
    let mut out = Mapping::new();

    for field in fields {
        if field.squash {
            out.extend(component_wizard(io, pr, &field.fields)?);
            continue;
        }

        let key = Value::String(field.name.clone());
        match field.kind {
            FieldKind::Struct => {
                pr.println(io, &field.name)?;
                let nested = component_wizard(io, pr.indent(), &field.fields)?;
                if !nested.is_empty() {
                    out.insert(key, Value::Mapping(nested));
                }
            }
            FieldKind::Ptr => {
                pr.print(io, &format!("{} (optional) skip (Y/n)> ", field.name))?;
                let answer = io.read_line("")?;
                if answer.eq_ignore_ascii_case("n") {
                    // an enabled section is kept even when empty
                    let nested = component_wizard(io, pr.indent(), &field.fields)?;
                    out.insert(key, Value::Mapping(nested));
                }
            }
            _ => {
                if let Some(value) = handle_field(io, pr, field)? {
                    out.insert(key, value);
                }
            }
        }
    }

    Ok(out)
}

/// Prompt for a single value, re-asking until it parses.
///
/// Returns the default on an empty answer, `None` if there is none.
pub fn handle_field(
    io: &mut dyn WizardIo,
    pr: IndentingPrinter,
    field: &Field,
) -> WizardResult<Option<Value>> {
    loop {
        if !field.name.is_empty() {
            pr.println(io, &format!("Field: {}", field.name))?;
        }
        let type_name = field.display_type();
        if !type_name.is_empty() {
            pr.println(io, &format!("Type: {}", type_name))?;
        }
        if !field.doc.is_empty() {
            pr.println(io, &format!("Docs: {}", field.doc))?;
        }
        pr.println(
            io,
            &format!("Default (enter to accept): {}", field.default_display()),
        )?;
        pr.print(io, "> ")?;

        let input = io.read_line("")?;
        if input.is_empty() {
            return Ok(field.default.clone());
        }

        match parse_value(field.kind, &input) {
            Ok(value) => return Ok(Some(value)),
            Err(reason) => {
                tracing::debug!(field = %field.name, %input, %reason, "Rejected field value");
                pr.println(io, INVALID_MSG)?;
            }
        }
    }
}

/// Convert user input into a value of `kind`
pub fn parse_value(kind: FieldKind, input: &str) -> Result<Value, String> {
    match kind {
        FieldKind::String => Ok(Value::String(input.to_string())),
        FieldKind::Int => input
            .parse::<i64>()
            .map(Value::from)
            .map_err(|e| format!("not an integer: {}", e)),
        FieldKind::Float => match input.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Value::from(f)),
            Ok(_) => Err("not a finite number".to_string()),
            Err(e) => Err(format!("not a number: {}", e)),
        },
        FieldKind::Bool => match input.to_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Ok(Value::Bool(true)),
            "false" | "no" | "n" | "0" => Ok(Value::Bool(false)),
            _ => Err("expected true or false".to_string()),
        },
        FieldKind::Duration => {
            if duration_pattern().is_match(input) {
                Ok(Value::String(input.to_string()))
            } else {
                Err("expected a duration such as 10s, 500ms or 1h30m".to_string())
            }
        }
        FieldKind::StringList => Ok(Value::Sequence(
            parse_csv(input).into_iter().map(Value::String).collect(),
        )),
        FieldKind::Struct | FieldKind::Ptr => Err(format!("{} fields hold no value", kind)),
    }
}

/// Split comma-separated input, trimming each item and dropping blanks
pub fn parse_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn duration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]+(\.[0-9]+)?(ns|us|µs|ms|s|m|h))+$").expect("valid duration pattern")
    })
}
