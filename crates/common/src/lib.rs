//! Common types and utilities for the REST adapter generator
//!
//! This crate contains the service model recovered from interface-definition
//! text, the shared error type, and generator configuration used across the
//! parser, generator, and CLI components.

mod config;
mod model;

pub use config::GeneratorConfig;
pub use model::{HttpBinding, HttpVerb, Method, ModelSummary, PayloadSource, Service};

use thiserror::Error;

/// Errors that can occur while parsing definitions or generating adapters
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No services with HTTP bindings were found")]
    NothingToGenerate,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
