// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! # configwiz - Collector Configuration Wizard
//!
//! `configwiz` walks a user through menus to assemble telemetry collector
//! pipelines and writes the result as a YAML configuration file.
//!
//! ## Features
//!
//! - **Pipeline menus** - Pick metrics or traces pipelines, then their receivers,
//!   processors, exporters and extensions
//! - **Field prompts** - Configure every chosen component from its schema
//! - **Component catalog** - Built-in list of common components, extensible
//!   with YAML, JSON or TOML catalog files
//! - **Validation** - Cross-check a configuration against the catalog
//!
//! ## Quick Start
//!
//! ```bash
//! # Build a configuration interactively
//! configwiz
//!
//! # See what can go into a traces pipeline
//! configwiz components --pipeline traces
//!
//! # Check the result
//! configwiz validate out.yaml
//! ```

pub mod catalog;
pub mod cli;
pub mod errors;
pub mod settings;
pub mod utils;
pub mod wizard;

// Re-export commonly used types
pub use catalog::{Catalog, ComponentGroup, ComponentSpec, DataType, Field, FieldKind};
pub use errors::{WizardError, WizardResult};
pub use wizard::{CollectorConfig, PipelineComponents, WizardIo};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
