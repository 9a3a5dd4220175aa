// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! Interactive configuration wizard
//!
//! The wizard asks for an output file name, builds pipelines through nested
//! menus, configures each referenced component from the catalog, and returns
//! the finished [`CollectorConfig`].

mod component;
mod io;
mod output;
mod pipelines;
mod printer;
mod validation;

pub use component::{
    component_type, component_wizard, configure_components, default_component_configs,
    handle_field, parse_csv, parse_value, service_to_component_names, ComponentConfigs,
};
pub use io::{StdIo, WizardIo};
pub use output::{write_config, CollectorConfig, Service, SEPARATOR};
pub use pipelines::{
    component_list_wizard, component_name_wizard, pipeline_type_wizard, pipelines_wizard,
    rpe_wizard, single_pipeline_wizard, ComponentChoices, PipelineComponents, Pipelines,
    INVALID_MSG,
};
pub use printer::{IndentingPrinter, TAB_SIZE};
pub use validation::{ConfigValidator, ValidationResult};

use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::errors::WizardResult;

/// File written when the user does not name one
pub const DEFAULT_FILE_NAME: &str = "out.yaml";

/// How a wizard run behaves
#[derive(Debug, Clone, Default)]
pub struct WizardOptions {
    /// Output path; prompts for one when unset
    pub output: Option<PathBuf>,

    /// Fill components with catalog defaults instead of prompting per field
    pub defaults_only: bool,
}

/// What a finished wizard run produced
#[derive(Debug, Clone)]
pub struct WizardOutcome {
    pub path: PathBuf,
    pub config: CollectorConfig,
}

/// Run the whole wizard against `io`
pub fn run(
    io: &mut dyn WizardIo,
    catalog: &Catalog,
    options: &WizardOptions,
) -> WizardResult<WizardOutcome> {
    let path = match &options.output {
        Some(path) => path.clone(),
        None => PathBuf::from(file_name_wizard(io)?),
    };

    // overview: the user only creates the pipelines here
    let pipelines = pipelines_wizard(io, catalog)?;

    let mut config = CollectorConfig::default();
    for (group, ids) in service_to_component_names(&pipelines) {
        let configs = if options.defaults_only {
            default_component_configs(catalog, group, &ids)?
        } else {
            configure_components(io, catalog, group, &ids)?
        };
        *config.section_mut(group) = configs;
    }
    config.service.pipelines = pipelines;

    tracing::debug!(
        path = %path.display(),
        pipelines = config.service.pipelines.len(),
        "Wizard finished"
    );

    Ok(WizardOutcome { path, config })
}

/// Ask for the output file name, defaulting to `out.yaml`
pub fn file_name_wizard(io: &mut dyn WizardIo) -> WizardResult<String> {
    let pr = IndentingPrinter::new(0);
    pr.println(io, &format!("Name of file (default {}):", DEFAULT_FILE_NAME))?;
    pr.print(io, "> ")?;

    let mut file_name = io.read_line("")?;
    if file_name.is_empty() {
        file_name = DEFAULT_FILE_NAME.to_string();
    }
    if !file_name.ends_with(".yaml") {
        file_name.push_str(".yaml");
    }
    Ok(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;
    use std::io::Cursor;

    fn io_with(input: &str) -> StdIo<Cursor<Vec<u8>>, Vec<u8>> {
        StdIo::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_file_name_default() {
        let mut io = io_with("");
        assert_eq!(file_name_wizard(&mut io).unwrap(), "out.yaml");
        assert_eq!(io.writer().as_slice(), b"Name of file (default out.yaml):\n> ");
    }

    #[test]
    fn test_file_name_suffix() {
        let mut io = io_with("collector\n");
        assert_eq!(file_name_wizard(&mut io).unwrap(), "collector.yaml");

        let mut io = io_with("collector.yaml\n");
        assert_eq!(file_name_wizard(&mut io).unwrap(), "collector.yaml");
    }

    #[test]
    fn test_run_with_defaults_only() {
        let catalog = Catalog::builtin().unwrap();
        // traces: receiver 2 (otlp), processor 0 (batch), exporter 0 (debug)
        let input = "2\n\n2\n\n\n0\n\n\n0\n\n\n\n\n";
        let options = WizardOptions {
            output: Some(PathBuf::from("traces.yaml")),
            defaults_only: true,
        };
        let mut io = io_with(input);

        let outcome = run(&mut io, &catalog, &options).unwrap();
        assert_eq!(outcome.path, PathBuf::from("traces.yaml"));

        let config = outcome.config;
        let traces = &config.service.pipelines["traces"];
        assert_eq!(traces.receivers, ["otlp"]);
        assert_eq!(traces.processors, ["batch"]);
        assert_eq!(traces.exporters, ["debug"]);
        assert!(traces.extensions.is_empty());

        let batch = config.processors["batch"].as_mapping().unwrap();
        assert_eq!(batch.get("timeout"), Some(&Value::from("200ms")));
        assert!(config.extensions.is_empty());

        let text = String::from_utf8(io.into_writer()).unwrap();
        assert!(!text.contains("Name of file"));
        assert!(!text.contains("Field:"));
    }
}
