// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! Configuration validation
//!
//! Cross-checks a collector configuration against itself and the catalog.

use std::collections::HashSet;

use super::component::component_type;
use super::output::CollectorConfig;
use crate::catalog::{Catalog, ComponentGroup, DataType};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate pipelines and component sections of `config`
    pub fn validate(config: &CollectorConfig, catalog: &Catalog) -> ValidationResult {
        let mut result = ValidationResult::new();
        let pipelines = &config.service.pipelines;

        if pipelines.is_empty() {
            result.add_warning("No pipelines defined under 'service.pipelines'");
        }

        let mut referenced: HashSet<(ComponentGroup, &str)> = HashSet::new();

        for (name, components) in pipelines {
            let data_type = DataType::of_pipeline(name);
            if data_type.is_none() {
                result.add_error(&format!(
                    "Pipeline '{}': unknown pipeline type (expected metrics or traces)",
                    name
                ));
            }

            for group in ComponentGroup::ALL {
                for id in components.get(group) {
                    referenced.insert((group, id.as_str()));

                    if !config.section(group).contains_key(id) {
                        result.add_error(&format!(
                            "Pipeline '{}': {} '{}' is not defined under '{}'",
                            name,
                            group,
                            id,
                            group.section()
                        ));
                    }

                    let type_name = component_type(id);
                    match catalog.get(group, type_name) {
                        None => result.add_error(&format!(
                            "Pipeline '{}': unknown {} type '{}'",
                            name, group, type_name
                        )),
                        Some(spec) => {
                            if let Some(dt) = data_type {
                                if group != ComponentGroup::Extension && !spec.supports(dt) {
                                    result.add_error(&format!(
                                        "Pipeline '{}': {} '{}' does not support {}",
                                        name, group, type_name, dt
                                    ));
                                }
                            }
                        }
                    }
                }
            }
        }

        for group in ComponentGroup::ALL {
            for id in config.section(group).keys() {
                if !referenced.contains(&(group, id.as_str())) {
                    result.add_warning(&format!(
                        "{} '{}' is defined but not used in any pipeline",
                        group, id
                    ));
                }
            }
        }

        result
    }
}

/// Result of configuration validation
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    pub fn add_warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
