// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! Error types
//!
//! Every failure carries a diagnostic code and, where one exists, a hint
//! about how to get past it.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for configwiz operations
pub type WizardResult<T> = Result<T, WizardError>;

/// Main error type for configwiz
#[derive(Error, Debug, Diagnostic)]
pub enum WizardError {
    // ─────────────────────────────────────────────────────────────────────────
    // Catalog Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Invalid component catalog: {reason}")]
    #[diagnostic(code(configwiz::invalid_catalog))]
    InvalidCatalog {
        reason: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown {group} '{type_name}'")]
    #[diagnostic(
        code(configwiz::unknown_component),
        help("Run 'configwiz components' to list the available components")
    )]
    UnknownComponent { group: String, type_name: String },

    #[error("Catalog format not supported: {path}")]
    #[diagnostic(
        code(configwiz::unsupported_catalog_format),
        help("Use a .yaml, .yml, .json or .toml catalog file")
    )]
    UnsupportedCatalogFormat { path: PathBuf },

    // ─────────────────────────────────────────────────────────────────────────
    // File Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("File not found: {path}")]
    #[diagnostic(code(configwiz::file_not_found))]
    FileNotFound {
        path: PathBuf,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to read file '{path}': {error}")]
    #[diagnostic(code(configwiz::file_read_error))]
    FileReadError { path: PathBuf, error: String },

    #[error("Failed to write file '{path}': {error}")]
    #[diagnostic(code(configwiz::file_write_error))]
    FileWriteError { path: PathBuf, error: String },

    // ─────────────────────────────────────────────────────────────────────────
    // IO/System Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("IO error: {message}")]
    #[diagnostic(code(configwiz::io_error))]
    Io { message: String },

    #[error("YAML error: {message}")]
    #[diagnostic(code(configwiz::yaml_error))]
    Yaml { message: String },

    #[error("JSON error: {message}")]
    #[diagnostic(code(configwiz::json_error))]
    Json { message: String },

    #[error("TOML parsing error: {message}")]
    #[diagnostic(code(configwiz::toml_error))]
    Toml { message: String },
}

impl From<std::io::Error> for WizardError {
    fn from(e: std::io::Error) -> Self {
        Self::Io { message: e.to_string() }
    }
}

impl From<serde_yaml::Error> for WizardError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml { message: e.to_string() }
    }
}

impl From<serde_json::Error> for WizardError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json { message: e.to_string() }
    }
}

impl From<toml::de::Error> for WizardError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml { message: e.to_string() }
    }
}

impl WizardError {
    /// Create a catalog error pointing at the offending component
    pub fn invalid_component(group: &str, type_name: &str, reason: &str) -> Self {
        Self::InvalidCatalog {
            reason: format!("{} '{}': {}", group, type_name, reason),
            help: Some(format!(
                "Fix the '{}' entry under '{}s' in your catalog file",
                type_name, group
            )),
        }
    }

    /// Create a file not found error for the configuration being validated
    pub fn config_not_found(path: PathBuf) -> Self {
        Self::FileNotFound {
            path,
            help: Some("Run 'configwiz wizard' to generate a configuration first".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed");
        let err: WizardError = io.into();
        assert!(matches!(err, WizardError::Io { .. }));
        assert!(err.to_string().contains("stream closed"));
    }

    #[test]
    fn test_invalid_component_message() {
        let err = WizardError::invalid_component("receiver", "otlp", "no data types");
        assert_eq!(
            err.to_string(),
            "Invalid component catalog: receiver 'otlp': no data types"
        );
    }
}
