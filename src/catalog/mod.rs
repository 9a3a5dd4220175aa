// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! Component catalog
//!
//! The catalog tells the wizard which receivers, processors, exporters and
//! extensions exist, which pipeline types each one supports, and which
//! configuration fields it takes. A built-in catalog ships with the binary;
//! user catalogs in YAML, JSON or TOML are layered on top of it.

mod definition;

pub use definition::*;

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::errors::{WizardError, WizardResult};

const BUILTIN_CATALOG: &str = include_str!("builtin.yaml");

/// On-disk layout of a catalog file
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub receivers: Vec<ComponentSpec>,
    #[serde(default)]
    pub processors: Vec<ComponentSpec>,
    #[serde(default)]
    pub exporters: Vec<ComponentSpec>,
    #[serde(default)]
    pub extensions: Vec<ComponentSpec>,
}

/// Registry of known component types, keyed by group then type name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    components: BTreeMap<ComponentGroup, BTreeMap<String, ComponentSpec>>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of common collector components bundled with the binary
    pub fn builtin() -> WizardResult<Self> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Load a catalog file, choosing the parser from the extension
    pub fn from_file(path: &Path) -> WizardResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| WizardError::FileReadError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            Some("json") => Self::from_json(&content),
            Some("toml") => Self::from_toml(&content),
            _ => Err(WizardError::UnsupportedCatalogFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Parse a catalog from YAML
    pub fn from_yaml(yaml: &str) -> WizardResult<Self> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::from_catalog_file(file)
    }

    /// Parse a catalog from JSON
    pub fn from_json(json: &str) -> WizardResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_catalog_file(file)
    }

    /// Parse a catalog from TOML
    pub fn from_toml(text: &str) -> WizardResult<Self> {
        let file: CatalogFile = toml::from_str(text)?;
        Self::from_catalog_file(file)
    }

    fn from_catalog_file(file: CatalogFile) -> WizardResult<Self> {
        let mut catalog = Self::new();
        let groups = [
            (ComponentGroup::Receiver, file.receivers),
            (ComponentGroup::Processor, file.processors),
            (ComponentGroup::Exporter, file.exporters),
            (ComponentGroup::Extension, file.extensions),
        ];

        for (group, specs) in groups {
            for spec in specs {
                if catalog.get(group, &spec.type_name).is_some() {
                    return Err(WizardError::invalid_component(
                        group.as_str(),
                        &spec.type_name,
                        "declared more than once",
                    ));
                }
                catalog.insert(group, spec)?;
            }
        }

        Ok(catalog)
    }

    /// Add a component, replacing any existing one with the same type
    pub fn insert(&mut self, group: ComponentGroup, spec: ComponentSpec) -> WizardResult<()> {
        validate_spec(group, &spec)?;
        self.components
            .entry(group)
            .or_default()
            .insert(spec.type_name.clone(), spec);
        Ok(())
    }

    /// Layer `other` on top of this catalog
    pub fn merge(&mut self, other: Catalog) {
        for (group, specs) in other.components {
            let entries = self.components.entry(group).or_default();
            for (type_name, spec) in specs {
                if entries.insert(type_name.clone(), spec).is_some() {
                    tracing::debug!(%group, %type_name, "Catalog entry replaced");
                }
            }
        }
    }

    /// Look up a component by group and type name
    pub fn get(&self, group: ComponentGroup, type_name: &str) -> Option<&ComponentSpec> {
        self.components.get(&group)?.get(type_name)
    }

    /// Sorted type names usable in a pipeline of `data_type`.
    ///
    /// Extensions are not bound to a data type, so all of them are offered.
    pub fn names(&self, group: ComponentGroup, data_type: DataType) -> Vec<String> {
        self.components
            .get(&group)
            .map(|specs| {
                specs
                    .values()
                    .filter(|s| group == ComponentGroup::Extension || s.supports(data_type))
                    .map(|s| s.type_name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Components matching the optional filters, grouped then sorted by type
    pub fn list(
        &self,
        group: Option<ComponentGroup>,
        data_type: Option<DataType>,
    ) -> Vec<(ComponentGroup, &ComponentSpec)> {
        self.components
            .iter()
            .filter(|(g, _)| group.map_or(true, |wanted| wanted == **g))
            .flat_map(|(g, specs)| specs.values().map(move |s| (*g, s)))
            .filter(|(g, s)| match data_type {
                Some(dt) => *g == ComponentGroup::Extension || s.supports(dt),
                None => true,
            })
            .collect()
    }

    /// Total number of components
    pub fn len(&self) -> usize {
        self.components.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn type_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("valid type name pattern"))
}

fn validate_spec(group: ComponentGroup, spec: &ComponentSpec) -> WizardResult<()> {
    if !type_name_pattern().is_match(&spec.type_name) {
        return Err(WizardError::InvalidCatalog {
            reason: format!("{} type name '{}' is not valid", group, spec.type_name),
            help: Some(
                "Type names start with a lowercase letter and contain only \
                 lowercase letters, digits and underscores"
                    .into(),
            ),
        });
    }

    if group != ComponentGroup::Extension && spec.data_types.is_empty() {
        return Err(WizardError::invalid_component(
            group.as_str(),
            &spec.type_name,
            "no data_types declared (expected metrics and/or traces)",
        ));
    }

    validate_fields(group, spec, &spec.fields)
}

fn validate_fields(group: ComponentGroup, spec: &ComponentSpec, fields: &[Field]) -> WizardResult<()> {
    for field in fields {
        let composite = field.squash || field.kind.is_composite();

        if !field.squash && field.name.is_empty() {
            return Err(WizardError::invalid_component(
                group.as_str(),
                &spec.type_name,
                "field without a name (only squashed fields may omit it)",
            ));
        }

        if composite {
            if field.fields.is_empty() {
                return Err(WizardError::invalid_component(
                    group.as_str(),
                    &spec.type_name,
                    &format!("field '{}' has no child fields", field.name),
                ));
            }
            if field.default.is_some() {
                return Err(WizardError::invalid_component(
                    group.as_str(),
                    &spec.type_name,
                    &format!("section '{}' cannot have a default", field.name),
                ));
            }
            validate_fields(group, spec, &field.fields)?;
        } else if !field.fields.is_empty() {
            return Err(WizardError::invalid_component(
                group.as_str(),
                &spec.type_name,
                &format!("field '{}' of kind {} cannot have child fields", field.name, field.kind),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn temp_with_suffix(suffix: &str) -> NamedTempFile {
        Builder::new().suffix(suffix).tempfile().unwrap()
    }

    const SMALL_CATALOG: &str = r#"
receivers:
  - type: otlp
    data_types: [metrics, traces]
  - type: zipkin
    data_types: [traces]
exporters:
  - type: prometheus
    data_types: [metrics]
extensions:
  - type: zpages
"#;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get(ComponentGroup::Receiver, "otlp").is_some());
        assert!(catalog.get(ComponentGroup::Processor, "batch").is_some());
        assert!(catalog.get(ComponentGroup::Extension, "health_check").is_some());
    }

    #[test]
    fn test_names_filter_by_data_type() {
        let catalog = Catalog::from_yaml(SMALL_CATALOG).unwrap();
        assert_eq!(
            catalog.names(ComponentGroup::Receiver, DataType::Traces),
            vec!["otlp", "zipkin"]
        );
        assert_eq!(
            catalog.names(ComponentGroup::Receiver, DataType::Metrics),
            vec!["otlp"]
        );
        assert!(catalog
            .names(ComponentGroup::Exporter, DataType::Traces)
            .is_empty());
        assert!(catalog
            .names(ComponentGroup::Processor, DataType::Traces)
            .is_empty());
    }

    #[test]
    fn test_extensions_ignore_data_type() {
        let catalog = Catalog::from_yaml(SMALL_CATALOG).unwrap();
        assert_eq!(
            catalog.names(ComponentGroup::Extension, DataType::Metrics),
            vec!["zpages"]
        );
        assert_eq!(
            catalog.names(ComponentGroup::Extension, DataType::Traces),
            vec!["zpages"]
        );
    }

    #[test]
    fn test_list_with_filters() {
        let catalog = Catalog::from_yaml(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.list(None, None).len(), 4);

        let traces: Vec<_> = catalog
            .list(None, Some(DataType::Traces))
            .into_iter()
            .map(|(g, s)| format!("{}/{}", g, s.type_name))
            .collect();
        assert_eq!(traces, vec!["receiver/otlp", "receiver/zipkin", "extension/zpages"]);

        let receivers = catalog.list(Some(ComponentGroup::Receiver), None);
        assert_eq!(receivers.len(), 2);
    }

    #[test]
    fn test_merge_replaces_and_adds() {
        let mut catalog = Catalog::from_yaml(SMALL_CATALOG).unwrap();
        let overlay = Catalog::from_yaml(
            r#"
receivers:
  - type: zipkin
    data_types: [metrics, traces]
processors:
  - type: batch
    data_types: [traces]
"#,
        )
        .unwrap();

        catalog.merge(overlay);
        assert_eq!(catalog.len(), 5);
        assert_eq!(
            catalog.names(ComponentGroup::Receiver, DataType::Metrics),
            vec!["otlp", "zipkin"]
        );
    }

    #[test]
    fn test_rejects_invalid_type_name() {
        let err = Catalog::from_yaml("receivers:\n  - type: Bad-Name\n    data_types: [traces]\n")
            .unwrap_err();
        assert!(matches!(err, WizardError::InvalidCatalog { .. }));
    }

    #[test]
    fn test_rejects_missing_data_types() {
        let err = Catalog::from_yaml("exporters:\n  - type: debug\n").unwrap_err();
        assert!(err.to_string().contains("no data_types"));
    }

    #[test]
    fn test_rejects_duplicate_types() {
        let yaml = "receivers:\n  - type: otlp\n    data_types: [traces]\n  - type: otlp\n    data_types: [metrics]\n";
        let err = Catalog::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_rejects_empty_section() {
        let yaml = r#"
exporters:
  - type: otlp
    data_types: [traces]
    fields:
      - name: tls
        kind: ptr
"#;
        let err = Catalog::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("no child fields"));
    }

    #[test]
    fn test_from_json_and_toml_files() {
        let mut json = temp_with_suffix(".json");
        write!(
            json,
            r#"{{"receivers": [{{"type": "statsd", "data_types": ["metrics"]}}]}}"#
        )
        .unwrap();
        let catalog = Catalog::from_file(json.path()).unwrap();
        assert!(catalog.get(ComponentGroup::Receiver, "statsd").is_some());

        let mut toml_file = temp_with_suffix(".toml");
        write!(
            toml_file,
            "[[exporters]]\ntype = \"file\"\ndata_types = [\"traces\"]\n\n[[exporters.fields]]\nname = \"path\"\ndefault = \"out.json\"\n"
        )
        .unwrap();
        let catalog = Catalog::from_file(toml_file.path()).unwrap();
        let spec = catalog.get(ComponentGroup::Exporter, "file").unwrap();
        assert_eq!(spec.fields[0].default_display(), "out.json");
    }

    #[test]
    fn test_unsupported_extension() {
        let file = temp_with_suffix(".ini");
        let err = Catalog::from_file(file.path()).unwrap_err();
        assert!(matches!(err, WizardError::UnsupportedCatalogFormat { .. }));
    }
}
