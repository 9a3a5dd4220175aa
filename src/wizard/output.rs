// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! Collector configuration document
//!
//! The generated file has the top-level sections `receivers`, `processors`,
//! `exporters`, `extensions` and `service`, in that order.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::component::ComponentConfigs;
use super::pipelines::Pipelines;
use crate::catalog::ComponentGroup;
use crate::errors::{WizardError, WizardResult};

/// Printed between the prompts and the generated YAML
pub const SEPARATOR: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";

/// Complete collector configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectorConfig {
    #[serde(default)]
    pub receivers: ComponentConfigs,

    #[serde(default)]
    pub processors: ComponentConfigs,

    #[serde(default)]
    pub exporters: ComponentConfigs,

    #[serde(default)]
    pub extensions: ComponentConfigs,

    #[serde(default)]
    pub service: Service,
}

/// The `service` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub pipelines: Pipelines,
}

impl CollectorConfig {
    /// Load a configuration from a YAML file
    pub fn from_file(path: &Path) -> WizardResult<Self> {
        if !path.exists() {
            return Err(WizardError::config_not_found(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| WizardError::FileReadError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a configuration from YAML
    pub fn from_yaml(yaml: &str) -> WizardResult<Self> {
        serde_yaml::from_str(yaml).map_err(Into::into)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> WizardResult<String> {
        serde_yaml::to_string(self).map_err(Into::into)
    }

    /// Top-level section holding components of `group`
    pub fn section(&self, group: ComponentGroup) -> &ComponentConfigs {
        match group {
            ComponentGroup::Receiver => &self.receivers,
            ComponentGroup::Processor => &self.processors,
            ComponentGroup::Exporter => &self.exporters,
            ComponentGroup::Extension => &self.extensions,
        }
    }

    pub fn section_mut(&mut self, group: ComponentGroup) -> &mut ComponentConfigs {
        match group {
            ComponentGroup::Receiver => &mut self.receivers,
            ComponentGroup::Processor => &mut self.processors,
            ComponentGroup::Exporter => &mut self.exporters,
            ComponentGroup::Extension => &mut self.extensions,
        }
    }
}

/// Write the generated YAML to `path`, replacing any existing file
pub async fn write_config(path: &Path, yaml: &str) -> WizardResult<()> {
    tokio::fs::write(path, yaml)
        .await
        .map_err(|e| WizardError::FileWriteError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

    tracing::info!(path = %path.display(), bytes = yaml.len(), "Configuration written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::pipelines::PipelineComponents;
    use serde_yaml::{Mapping, Value};
    use tempfile::TempDir;

    fn sample() -> CollectorConfig {
        let mut config = CollectorConfig::default();
        config
            .receivers
            .insert("otlp".into(), Value::Mapping(Mapping::new()));
        config.service.pipelines.insert(
            "traces".into(),
            PipelineComponents {
                receivers: vec!["otlp".into()],
                ..Default::default()
            },
        );
        config
    }

    #[test]
    fn test_sections_in_order() {
        let yaml = sample().to_yaml().unwrap();
        let positions: Vec<usize> = ["receivers:", "processors:", "exporters:", "extensions:", "service:"]
            .iter()
            .map(|key| yaml.find(key).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_parse_generated_yaml() {
        let config = sample();
        let parsed = CollectorConfig::from_yaml(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.section(ComponentGroup::Receiver).len(), 1);
    }

    #[test]
    fn test_parse_hand_written_config() {
        let yaml = r#"
receivers:
  otlp:
exporters:
  debug:
    verbosity: detailed
service:
  pipelines:
    traces:
      receivers: [otlp]
      exporters: [debug]
"#;
        let config = CollectorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.receivers.get("otlp"), Some(&Value::Null));
        assert!(config.processors.is_empty());
        let traces = &config.service.pipelines["traces"];
        assert_eq!(traces.exporters, ["debug"]);
        assert!(traces.processors.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = CollectorConfig::from_file(Path::new("/nonexistent/out.yaml")).unwrap_err();
        assert!(matches!(err, WizardError::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_write_config_replaces_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.yaml");
        std::fs::write(&path, "old").unwrap();

        write_config(&path, "hello").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_write_config_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.yaml");
        let err = write_config(&path, "x").await.unwrap_err();
        assert!(matches!(err, WizardError::FileWriteError { .. }));
    }
}
