// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! CLI command definitions and handlers
//!
//! Defines the command-line interface for configwiz.

pub mod components;
pub mod schema;
pub mod validate;
pub mod wizard;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::{ComponentGroup, DataType};

/// Collector configuration wizard
///
/// Build telemetry collector pipelines interactively and write them out as YAML.
#[derive(Parser, Debug)]
#[clap(
    name = "configwiz",
    version,
    about = "Interactive wizard for telemetry collector pipeline configuration",
    long_about = None,
    after_help = "Examples:\n\
        configwiz                              Start the wizard\n\
        configwiz wizard -o collector.yaml     Start the wizard, writing to collector.yaml\n\
        configwiz components -p traces         List components usable in traces pipelines\n\
        configwiz schema exporter otlp         Show the fields of the otlp exporter\n\
        configwiz validate collector.yaml      Check a generated configuration\n\n\
        See 'configwiz <command> --help' for more information on a specific command."
)]
pub struct Cli {
    /// Command to run (defaults to the wizard)
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[clap(short, long, global = true)]
    pub verbose: bool,

    /// Change to directory before executing
    #[clap(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Extra component catalog layered over the built-in one
    #[clap(long, global = true, env = "CONFIGWIZ_CATALOG", value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a configuration interactively
    Wizard {
        /// Output file (prompted for when omitted)
        #[clap(short, long)]
        output: Option<PathBuf>,

        /// Use catalog defaults instead of asking for every field
        #[clap(long)]
        defaults_only: bool,
    },

    /// List available components
    Components {
        /// Only show one group (receiver, processor, exporter, extension)
        #[clap(short, long)]
        group: Option<ComponentGroup>,

        /// Only show components usable in this pipeline type (metrics, traces)
        #[clap(short, long)]
        pipeline: Option<DataType>,

        /// Output format (text, json)
        #[clap(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the configuration fields of a component
    Schema {
        /// Component group (receiver, processor, exporter, extension)
        group: ComponentGroup,

        /// Component type, e.g. otlp
        #[clap(value_name = "TYPE")]
        type_name: String,

        /// Output format (text, yaml, json)
        #[clap(short, long, default_value = "text")]
        format: SchemaFormat,
    },

    /// Check a configuration file against the catalog
    Validate {
        /// Configuration file to validate
        #[clap(default_value = "out.yaml")]
        config: PathBuf,
    },
}

/// Output format for the components command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Output format for the schema command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Text,
    Yaml,
    Json,
}

impl std::str::FromStr for SchemaFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown schema format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_means_wizard() {
        let cli = Cli::try_parse_from(["configwiz"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_components_filters() {
        let cli =
            Cli::try_parse_from(["configwiz", "components", "-g", "exporters", "-p", "traces", "-f", "json"])
                .unwrap();
        match cli.command {
            Some(Commands::Components { group, pipeline, format }) => {
                assert_eq!(group, Some(ComponentGroup::Exporter));
                assert_eq!(pipeline, Some(DataType::Traces));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("Expected components command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_schema() {
        let cli = Cli::try_parse_from(["configwiz", "schema", "receiver", "otlp"]).unwrap();
        match cli.command {
            Some(Commands::Schema { group, type_name, format }) => {
                assert_eq!(group, ComponentGroup::Receiver);
                assert_eq!(type_name, "otlp");
                assert_eq!(format, SchemaFormat::Text);
            }
            other => panic!("Expected schema command, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_group() {
        assert!(Cli::try_parse_from(["configwiz", "schema", "pipeline", "otlp"]).is_err());
    }
}
