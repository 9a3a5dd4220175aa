// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! Pipeline menus
//!
//! Walks the user from pipeline type to component group to component name,
//! collecting `type` or `type/name` identifiers along the way.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::io::WizardIo;
use super::printer::IndentingPrinter;
use crate::catalog::{Catalog, ComponentGroup, DataType};
use crate::errors::WizardResult;

/// Shown whenever an answer cannot be used
pub const INVALID_MSG: &str = "Invalid input. Try again.";

/// Pipelines keyed by name (`traces`, `metrics/host`, ...)
pub type Pipelines = BTreeMap<String, PipelineComponents>;

/// Component identifiers wired into one pipeline, in the order entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineComponents {
    #[serde(default)]
    pub receivers: Vec<String>,
    #[serde(default)]
    pub processors: Vec<String>,
    #[serde(default)]
    pub exporters: Vec<String>,
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl PipelineComponents {
    pub fn get(&self, group: ComponentGroup) -> &[String] {
        match group {
            ComponentGroup::Receiver => &self.receivers,
            ComponentGroup::Processor => &self.processors,
            ComponentGroup::Exporter => &self.exporters,
            ComponentGroup::Extension => &self.extensions,
        }
    }

    pub fn get_mut(&mut self, group: ComponentGroup) -> &mut Vec<String> {
        match group {
            ComponentGroup::Receiver => &mut self.receivers,
            ComponentGroup::Processor => &mut self.processors,
            ComponentGroup::Exporter => &mut self.exporters,
            ComponentGroup::Extension => &mut self.extensions,
        }
    }

    pub fn is_empty(&self) -> bool {
        ComponentGroup::ALL.iter().all(|g| self.get(*g).is_empty())
    }
}

/// Component type names offered in each group's menu
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentChoices {
    pub receivers: Vec<String>,
    pub processors: Vec<String>,
    pub exporters: Vec<String>,
    pub extensions: Vec<String>,
}

impl ComponentChoices {
    /// Everything in the catalog usable in a pipeline of `data_type`
    pub fn from_catalog(catalog: &Catalog, data_type: DataType) -> Self {
        Self {
            receivers: catalog.names(ComponentGroup::Receiver, data_type),
            processors: catalog.names(ComponentGroup::Processor, data_type),
            exporters: catalog.names(ComponentGroup::Exporter, data_type),
            extensions: catalog.names(ComponentGroup::Extension, data_type),
        }
    }

    pub fn get(&self, group: ComponentGroup) -> &[String] {
        match group {
            ComponentGroup::Receiver => &self.receivers,
            ComponentGroup::Processor => &self.processors,
            ComponentGroup::Exporter => &self.exporters,
            ComponentGroup::Extension => &self.extensions,
        }
    }
}

/// Top-level loop: add pipelines until the user skips
pub fn pipelines_wizard(io: &mut dyn WizardIo, catalog: &Catalog) -> WizardResult<Pipelines> {
    let mut out = Pipelines::new();
    let pr = IndentingPrinter::new(0);

    loop {
        let names: Vec<&str> = out.keys().map(String::as_str).collect();
        pr.print(io, &format!("Current pipelines: [{}]\n", names.join(", ")))?;

        let Some((name, components)) = single_pipeline_wizard(io, catalog)? else {
            break;
        };

        if out.insert(name.clone(), components).is_some() {
            tracing::warn!(pipeline = %name, "Pipeline replaced");
        } else {
            tracing::debug!(pipeline = %name, "Pipeline added");
        }
    }

    Ok(out)
}

/// Ask for one pipeline's type, then build it. `None` when skipped.
pub fn single_pipeline_wizard(
    io: &mut dyn WizardIo,
    catalog: &Catalog,
) -> WizardResult<Option<(String, PipelineComponents)>> {
    let pr = IndentingPrinter::new(0);

    loop {
        pr.print(io, "Add pipeline (enter to skip)\n")?;
        for (i, data_type) in DataType::ALL.iter().enumerate() {
            pr.print(io, &format!("{}: {}\n", i + 1, data_type.title()))?;
        }
        pr.print(io, "> ")?;

        let choice = io.read_line("")?;
        if choice.is_empty() {
            return Ok(None);
        }

        // only the exact menu numbers count; "01" or "+2" do not
        let picked = DataType::ALL
            .iter()
            .enumerate()
            .find(|(i, _)| choice == (i + 1).to_string())
            .map(|(_, data_type)| data_type);

        match picked {
            Some(data_type) => {
                let choices = ComponentChoices::from_catalog(catalog, *data_type);
                return pipeline_type_wizard(io, *data_type, &choices).map(Some);
            }
            None => pr.println(io, INVALID_MSG)?,
        }
    }
}

/// Name a pipeline of `data_type` and fill in its components
pub fn pipeline_type_wizard(
    io: &mut dyn WizardIo,
    data_type: DataType,
    choices: &ComponentChoices,
) -> WizardResult<(String, PipelineComponents)> {
    let pr = IndentingPrinter::new(0);
    pr.print(
        io,
        &format!("{} pipeline extended name (optional) > ", data_type.title()),
    )?;

    let mut name = data_type.as_str().to_string();
    let extended = io.read_line("")?;
    if !extended.is_empty() {
        name = format!("{}/{}", name, extended);
    }

    pr.print(io, &format!("Pipeline \"{}\"\n", name))?;
    let components = rpe_wizard(io, pr.indent(), choices)?;
    Ok((name, components))
}

/// Receivers, then processors, then exporters, then extensions
pub fn rpe_wizard(
    io: &mut dyn WizardIo,
    pr: IndentingPrinter,
    choices: &ComponentChoices,
) -> WizardResult<PipelineComponents> {
    let mut out = PipelineComponents::default();
    for group in ComponentGroup::ALL {
        *out.get_mut(group) = component_list_wizard(io, pr, group, choices.get(group))?;
    }
    Ok(out)
}

/// Keep adding components of one group until the user skips
pub fn component_list_wizard(
    io: &mut dyn WizardIo,
    pr: IndentingPrinter,
    group: ComponentGroup,
    names: &[String],
) -> WizardResult<Vec<String>> {
    let mut out = Vec::new();

    loop {
        pr.println(io, &format!("Current {}s: [{}]", group, out.join(", ")))?;

        let Some((key, extended)) = component_name_wizard(io, pr, group, names)? else {
            break;
        };

        if extended.is_empty() {
            out.push(key);
        } else {
            out.push(format!("{}/{}", key, extended));
        }
    }

    Ok(out)
}

/// Pick one component by index, then ask for its optional extended name.
///
/// Returns `None` when the user skips.
pub fn component_name_wizard(
    io: &mut dyn WizardIo,
    pr: IndentingPrinter,
    group: ComponentGroup,
    names: &[String],
) -> WizardResult<Option<(String, String)>> {
    loop {
        pr.println(io, &format!("Add {} (enter to skip)", group))?;
        for (i, name) in names.iter().enumerate() {
            pr.println(io, &format!("{}: {}", i, name))?;
        }
        pr.print(io, "> ")?;

        let choice = io.read_line("")?;
        if choice.is_empty() {
            return Ok(None);
        }

        match choice.parse::<usize>().ok().and_then(|i| names.get(i)) {
            Some(key) => {
                pr.print(io, &format!("{} {} extended name (optional) > ", key, group))?;
                let extended = io.read_line("")?;
                return Ok(Some((key.clone(), extended)));
            }
            None => pr.dedent().println(io, INVALID_MSG)?,
        }
    }
}
