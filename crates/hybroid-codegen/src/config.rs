//! Generator configuration types

use crate::error::{CodegenError, CodegenResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Generator configuration, loadable from JSON or TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Prefix of every stable alert identifier (`hyb001P`)
    #[serde(default = "default_alert_id_prefix")]
    pub alert_id_prefix: String,

    /// Modules a transform or field type may pull into an alert file
    ///
    /// The last path segment is the name searched for; the full path is imported.
    #[serde(default = "default_known_modules")]
    pub known_modules: Vec<String>,

    /// Libraries of the input document, matched by position
    #[serde(default = "default_libraries")]
    pub libraries: Vec<LibraryConfig>,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Naming and doc placement of one library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Display name, also the Go identifier prefix (`PewpewAPI`)
    pub name: String,

    /// Docs slug and file stem
    pub slug: String,

    /// Sidebar position in the docs site
    #[serde(default)]
    pub order: u32,
}

impl LibraryConfig {
    pub fn new(name: &str, slug: &str, order: u32) -> Self {
        Self {
            name: name.to_string(),
            slug: slug.to_string(),
            order,
        }
    }
}

fn default_alert_id_prefix() -> String {
    "hyb".to_string()
}

fn default_known_modules() -> Vec<String> {
    vec!["strings".to_string(), "hybroid/ast".to_string()]
}

fn default_libraries() -> Vec<LibraryConfig> {
    vec![
        LibraryConfig::new("Pewpew", "pewpew", 1),
        LibraryConfig::new("Fmath", "fmath", 2),
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            alert_id_prefix: default_alert_id_prefix(),
            known_modules: default_known_modules(),
            libraries: default_libraries(),
            log_level: default_log_level(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> CodegenResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> CodegenResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a `.toml` or `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> CodegenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CodegenError::InvalidConfig(format!("failed to read {}: {e}", path.display()))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(content.as_bytes()),
            _ => Self::from_toml_str(&content),
        }
    }

    /// Library settings for the document entry at `index`
    pub fn library(&self, index: usize) -> Option<&LibraryConfig> {
        self.libraries.get(index)
    }

    /// Validate the configuration
    pub fn validate(&self) -> CodegenResult<()> {
        if self.alert_id_prefix.is_empty() {
            return Err(CodegenError::InvalidConfig(
                "alert id prefix cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for library in &self.libraries {
            if library.name.is_empty() {
                return Err(CodegenError::InvalidConfig(
                    "library name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(library.name.as_str()) {
                return Err(CodegenError::InvalidConfig(format!(
                    "duplicate library name: {}",
                    library.name
                )));
            }
        }

        if self.known_modules.iter().any(|m| m.is_empty()) {
            return Err(CodegenError::InvalidConfig(
                "known module cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}


#[cfg(test)]
#[path = "config/config_parameterized_tests.rs"]
mod config_parameterized_tests;
