// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! Runtime settings
//!
//! The catalog is assembled in layers: the built-in catalog, then the
//! user's catalog in the platform config directory, then an explicit
//! `--catalog` file. Later layers replace components of earlier ones.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::errors::{WizardError, WizardResult};

/// Environment variable naming an extra catalog file
pub const CATALOG_ENV: &str = "CONFIGWIZ_CATALOG";

/// File name of the per-user catalog
pub const USER_CATALOG_FILE: &str = "catalog.yaml";

/// Where catalogs are loaded from
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Catalog named on the command line or in the environment
    pub catalog: Option<PathBuf>,

    /// Per-user catalog, used only when the file exists
    pub user_catalog: Option<PathBuf>,
}

impl Settings {
    /// Settings for a CLI invocation
    pub fn from_cli(catalog: Option<PathBuf>) -> Self {
        Self {
            catalog,
            user_catalog: user_catalog_path(),
        }
    }

    /// Build the layered catalog
    pub fn load_catalog(&self) -> WizardResult<Catalog> {
        let mut catalog = Catalog::builtin()?;
        tracing::debug!(components = catalog.len(), "Built-in catalog loaded");

        if let Some(path) = self.user_catalog.as_deref().filter(|p| p.exists()) {
            merge_file(&mut catalog, path)?;
        }

        if let Some(path) = &self.catalog {
            if !path.exists() {
                return Err(WizardError::FileNotFound {
                    path: path.clone(),
                    help: Some(format!(
                        "Check the --catalog flag or the {} environment variable",
                        CATALOG_ENV
                    )),
                });
            }
            merge_file(&mut catalog, path)?;
        }

        Ok(catalog)
    }
}

fn merge_file(catalog: &mut Catalog, path: &Path) -> WizardResult<()> {
    let layer = Catalog::from_file(path)?;
    tracing::info!(path = %path.display(), components = layer.len(), "Catalog layer merged");
    catalog.merge(layer);
    Ok(())
}

/// `<config dir>/catalog.yaml` for this platform, if a home directory exists
pub fn user_catalog_path() -> Option<PathBuf> {
    ProjectDirs::from("io", "opentelemetry", "configwiz")
        .map(|dirs| dirs.config_dir().join(USER_CATALOG_FILE))
}
