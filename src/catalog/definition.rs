// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! Catalog definition structures
//!
//! Describes the components a collector build ships with and the shape of
//! each component's configuration.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// The four kinds of collector components
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentGroup {
    Receiver,
    Processor,
    Exporter,
    Extension,
}

impl ComponentGroup {
    /// All groups in the order they are prompted for and written out
    pub const ALL: [ComponentGroup; 4] = [
        Self::Receiver,
        Self::Processor,
        Self::Exporter,
        Self::Extension,
    ];

    /// Singular name used in prompts ("receiver")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Receiver => "receiver",
            Self::Processor => "processor",
            Self::Exporter => "exporter",
            Self::Extension => "extension",
        }
    }

    /// Top-level configuration section ("receivers")
    pub fn section(&self) -> &'static str {
        match self {
            Self::Receiver => "receivers",
            Self::Processor => "processors",
            Self::Exporter => "exporters",
            Self::Extension => "extensions",
        }
    }
}

impl std::fmt::Display for ComponentGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ComponentGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "receiver" | "receivers" => Ok(Self::Receiver),
            "processor" | "processors" => Ok(Self::Processor),
            "exporter" | "exporters" => Ok(Self::Exporter),
            "extension" | "extensions" => Ok(Self::Extension),
            _ => Err(format!("Unknown component group: {}", s)),
        }
    }
}

/// Telemetry signal a pipeline carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Metrics,
    Traces,
}

impl DataType {
    /// Pipeline types in menu order
    pub const ALL: [DataType; 2] = [Self::Metrics, Self::Traces];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metrics => "metrics",
            Self::Traces => "traces",
        }
    }

    /// Capitalized name shown in menus ("Metrics")
    pub fn title(&self) -> &'static str {
        match self {
            Self::Metrics => "Metrics",
            Self::Traces => "Traces",
        }
    }

    /// Data type of a pipeline name such as `traces` or `traces/backend`
    pub fn of_pipeline(name: &str) -> Option<Self> {
        let base = name.split('/').next().unwrap_or(name);
        base.parse().ok()
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metrics" => Ok(Self::Metrics),
            "traces" => Ok(Self::Traces),
            _ => Err(format!("Unknown pipeline type: {}", s)),
        }
    }
}

/// A component type that can be placed in a pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Component type name (`otlp`, `batch`, ...)
    #[serde(rename = "type")]
    pub type_name: String,

    /// Pipeline types the component can take part in.
    /// Extensions live outside the data path and leave this empty.
    #[serde(default)]
    pub data_types: Vec<DataType>,

    #[serde(default)]
    pub description: String,

    /// Top-level configuration fields
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl ComponentSpec {
    /// Whether the component can be used in a pipeline of `data_type`
    pub fn supports(&self, data_type: DataType) -> bool {
        self.data_types.contains(&data_type)
    }

    /// Configuration built from catalog defaults alone
    pub fn default_config(&self) -> Mapping {
        defaults_of(&self.fields)
    }
}

fn defaults_of(fields: &[Field]) -> Mapping {
    let mut out = Mapping::new();
    for field in fields {
        if field.squash {
            out.extend(defaults_of(&field.fields));
            continue;
        }
        match field.kind {
            // optional sections stay off unless asked for
            FieldKind::Ptr => {}
            FieldKind::Struct => {
                let nested = defaults_of(&field.fields);
                if !nested.is_empty() {
                    out.insert(Value::String(field.name.clone()), Value::Mapping(nested));
                }
            }
            _ => {
                if let Some(default) = &field.default {
                    out.insert(Value::String(field.name.clone()), default.clone());
                }
            }
        }
    }
    out
}

/// How a field's value is entered and stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    String,
    Int,
    Float,
    Bool,
    /// Go-style duration string (`10s`, `1h30m`)
    Duration,
    /// Comma separated on input, a sequence in the output
    StringList,
    /// Nested section that is always present
    Struct,
    /// Nested section the user can skip
    Ptr,
}

impl FieldKind {
    /// Whether the field holds child fields rather than a value
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Struct | Self::Ptr)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Duration => "duration",
            Self::StringList => "string_list",
            Self::Struct => "struct",
            Self::Ptr => "ptr",
        };
        write!(f, "{}", s)
    }
}

/// One configuration field of a component
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Field {
    /// Key written to the output
    #[serde(default)]
    pub name: String,

    /// Type label shown to the user (`time.Duration`, `[]string`, ...)
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub type_name: String,

    #[serde(default)]
    pub kind: FieldKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub doc: String,

    /// Children of a struct, ptr or squashed field
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,

    /// Inline the children into the parent section
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub squash: bool,
}

impl Field {
    /// Type label to display, falling back to the kind
    pub fn display_type(&self) -> String {
        if self.type_name.is_empty() {
            self.kind.to_string()
        } else {
            self.type_name.clone()
        }
    }

    /// Default rendered the way the user would type it
    pub fn default_display(&self) -> String {
        match &self.default {
            None => String::new(),
            Some(value) => display_value(value),
        }
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, default: Option<Value>) -> Field {
        Field {
            name: name.into(),
            default,
            ..Default::default()
        }
    }

    #[test]
    fn test_group_parsing() {
        assert_eq!("receiver".parse::<ComponentGroup>(), Ok(ComponentGroup::Receiver));
        assert_eq!("Exporters".parse::<ComponentGroup>(), Ok(ComponentGroup::Exporter));
        assert!("pipeline".parse::<ComponentGroup>().is_err());
        assert_eq!(ComponentGroup::Extension.section(), "extensions");
    }

    #[test]
    fn test_data_type_of_pipeline() {
        assert_eq!(DataType::of_pipeline("traces"), Some(DataType::Traces));
        assert_eq!(DataType::of_pipeline("metrics/host"), Some(DataType::Metrics));
        assert_eq!(DataType::of_pipeline("logs"), None);
    }

    #[test]
    fn test_default_display() {
        let list = leaf(
            "detectors",
            Some(Value::Sequence(vec!["env".into(), "system".into()])),
        );
        assert_eq!(list.default_display(), "env, system");
        assert_eq!(leaf("size", Some(Value::from(8192))).default_display(), "8192");
        assert_eq!(leaf("endpoint", None).default_display(), "");
    }

    #[test]
    fn test_default_config_skips_ptr_and_inlines_squash() {
        let spec = ComponentSpec {
            type_name: "otlp".into(),
            data_types: vec![DataType::Traces],
            description: String::new(),
            fields: vec![
                leaf("endpoint", None),
                Field {
                    name: "TimeoutSettings".into(),
                    squash: true,
                    fields: vec![leaf("timeout", Some("5s".into()))],
                    ..Default::default()
                },
                Field {
                    name: "tls".into(),
                    kind: FieldKind::Ptr,
                    fields: vec![leaf("insecure", Some(Value::Bool(false)))],
                    ..Default::default()
                },
                Field {
                    name: "queue".into(),
                    kind: FieldKind::Struct,
                    fields: vec![leaf("size", Some(Value::from(10)))],
                    ..Default::default()
                },
            ],
        };

        let config = spec.default_config();
        assert_eq!(config.len(), 2);
        assert_eq!(config.get("timeout"), Some(&Value::from("5s")));
        assert!(config.get("tls").is_none());
        assert!(config.get("endpoint").is_none());
        let queue = config.get("queue").and_then(Value::as_mapping);
        assert_eq!(queue.and_then(|q| q.get("size")), Some(&Value::from(10)));
    }

    #[test]
    fn test_display_type_falls_back_to_kind() {
        let mut field = Field {
            name: "retries".into(),
            kind: FieldKind::Int,
            ..Default::default()
        };
        assert_eq!(field.display_type(), "int");

        field.type_name = "uint64".into();
        assert_eq!(field.display_type(), "uint64");
    }
}
