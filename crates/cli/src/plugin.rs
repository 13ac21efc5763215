//! Plugin mode
//!
//! Reads a JSON [`PluginRequest`] from stdin and writes a JSON
//! [`PluginResponse`] to stdout. Stdout carries nothing else, so diagnostics
//! go to stderr. An empty model is a valid response with no files.

use crate::console::Console;
use anyhow::{Context, Result};
use rest_adapter_generator_common::{GeneratorConfig, Result as GenResult};
use rest_adapter_generator_generator::{AdapterGenerator, GeneratedAdapter};
use rest_adapter_generator_parser::parse_proto_files;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// A file passed in or out of the plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginFile {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PluginRequest {
    #[serde(default)]
    pub files: Vec<PluginFile>,

    /// `key=value,key=value` generator settings
    #[serde(default)]
    pub parameter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginResponse {
    pub files: Vec<PluginFile>,
    pub services: Vec<String>,
    pub method_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run one request/response exchange
pub fn run<R: Read, W: Write>(mut input: R, mut output: W, verbose: bool) -> Result<()> {
    let console = Console::stderr(verbose);
    let mut raw = String::new();
    input
        .read_to_string(&mut raw)
        .context("Failed to read plugin request")?;

    let response = match serde_json::from_str::<PluginRequest>(&raw) {
        Ok(request) => {
            if console.is_verbose() {
                console.step(format!("Plugin request with {} files", request.files.len()));
            }
            handle_request(&request)
        }
        Err(e) => PluginResponse {
            error: Some(format!("Invalid plugin request: {}", e)),
            ..Default::default()
        },
    };

    if let Some(error) = &response.error {
        console.failure(error);
    } else if console.is_verbose() {
        console.success(format!(
            "{} services, {} methods",
            response.services.len(),
            response.method_count
        ));
    }

    serde_json::to_writer(&mut output, &response).context("Failed to write plugin response")?;
    output.flush().context("Failed to flush plugin response")?;

    Ok(())
}

/// Parse the request's files and generate the adapter
pub fn handle_request(request: &PluginRequest) -> PluginResponse {
    match generate(request) {
        Ok(adapter) => {
            let files = if adapter.summary.is_empty() {
                Vec::new()
            } else {
                vec![PluginFile {
                    name: adapter.file_name,
                    content: adapter.content,
                }]
            };

            PluginResponse {
                files,
                services: adapter.summary.services,
                method_count: adapter.summary.method_count,
                error: None,
            }
        }
        Err(e) => PluginResponse {
            error: Some(e.to_string()),
            ..Default::default()
        },
    }
}

fn generate(request: &PluginRequest) -> GenResult<GeneratedAdapter> {
    let mut config = GeneratorConfig::default();
    if let Some(parameter) = &request.parameter {
        config.apply_parameter(parameter)?;
    }

    let texts: Vec<&str> = request.files.iter().map(|f| f.content.as_str()).collect();
    let services = parse_proto_files(&texts);

    AdapterGenerator::new(config)?.generate(&services)
}
