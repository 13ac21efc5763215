//! Generator configuration
//!
//! Configuration can be loaded from a YAML file (local mode) or built from a
//! `key=value,key=value` parameter string (plugin mode).

use crate::{GeneratorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings that shape the emitted adapter
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Crate path the adapter uses for its runtime support
    pub runtime_crate: String,

    /// Module path prefix for request/response types (e.g. "crate::pb").
    /// Types resolve through the including module when unset.
    pub types_path: Option<String>,

    /// Name of the generated file
    pub output_file: String,

    /// Emit a header comment listing the services in the document
    pub include_summary_header: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_crate: "rest_adapter_runtime".to_string(),
            types_path: None,
            output_file: "rest_adapter.rs".to_string(),
            include_summary_header: true,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GeneratorError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            GeneratorError::Config(format!("Failed to parse config YAML from {:?}: {}", path, e))
        })
    }

    /// Apply a plugin parameter string such as `types_path=crate::pb,output_file=api.rs`
    pub fn apply_parameter(&mut self, parameter: &str) -> Result<()> {
        for pair in parameter.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                GeneratorError::Config(format!("Expected key=value, got '{}'", pair))
            })?;
            let value = value.trim();

            match key.trim() {
                "runtime_crate" => self.runtime_crate = value.to_string(),
                "types_path" => {
                    self.types_path = (!value.is_empty()).then(|| value.to_string());
                }
                "output_file" => self.output_file = value.to_string(),
                "include_summary_header" => {
                    self.include_summary_header = value.parse().map_err(|_| {
                        GeneratorError::Config(format!(
                            "include_summary_header expects true or false, got '{}'",
                            value
                        ))
                    })?;
                }
                other => {
                    return Err(GeneratorError::Config(format!(
                        "Unknown parameter '{}'",
                        other
                    )))
                }
            }
        }

        Ok(())
    }
}
