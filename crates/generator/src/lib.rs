//! REST adapter generation
//!
//! This crate turns the service model recovered by the parser into a single
//! Rust source document. For every bound method the document contains:
//! - a route table entry (verb, path template, body selector)
//! - an async method on the service's RPC handle trait
//! - a dispatcher arm that matches the path, builds the input payload,
//!   calls the handle and translates the result into an HTTP response
//!
//! Output is deterministic: the same model always renders byte-identical text.

mod templates;
mod view;

pub use view::{rust_ident, rust_type};

use rest_adapter_generator_common::{
    GeneratorConfig, GeneratorError, ModelSummary, Result, Service,
};
use std::fs;
use std::path::{Path, PathBuf};
use tera::Tera;

/// A rendered adapter document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAdapter {
    /// File name the document should be written to
    pub file_name: String,

    /// Rust source text
    pub content: String,

    /// Services and method count covered by the document
    pub summary: ModelSummary,
}

/// Adapter generator
///
/// Transforms the service model into adapter source code using the
/// configured runtime crate and type path.
pub struct AdapterGenerator {
    config: GeneratorConfig,
    tera: Tera,
}

impl AdapterGenerator {
    /// Create a new adapter generator
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self { config, tera })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Render the adapter document for the given services.
    ///
    /// An empty model renders a document with no modules; use
    /// [`require_services`] first where that should be an error.
    pub fn generate(&self, services: &[Service]) -> Result<GeneratedAdapter> {
        let summary = ModelSummary::from_services(services);
        let views = view::build_views(services, &self.config)?;

        let mut context = tera::Context::new();
        context.insert("services", &views);
        context.insert("summary", &summary);
        context.insert("runtime_crate", &self.config.runtime_crate);
        context.insert(
            "include_summary_header",
            &self.config.include_summary_header,
        );

        let content = self
            .tera
            .render(templates::ADAPTER_TEMPLATE, &context)
            .map_err(|e| GeneratorError::Generation(format!("Template error: {:?}", e)))?;

        Ok(GeneratedAdapter {
            file_name: self.config.output_file.clone(),
            content,
            summary,
        })
    }

    /// Generate the adapter and write it into `output_dir`
    pub fn generate_to_directory(
        &self,
        services: &[Service],
        output_dir: &Path,
    ) -> Result<GeneratedAdapter> {
        let adapter = self.generate(services)?;

        fs::create_dir_all(output_dir).map_err(|e| {
            GeneratorError::Generation(format!("Failed to create output directory: {}", e))
        })?;

        let output_path = output_dir.join(&adapter.file_name);
        fs::write(&output_path, &adapter.content).map_err(|e| {
            GeneratorError::Generation(format!(
                "Failed to write {}: {}",
                output_path.display(),
                e
            ))
        })?;

        Ok(adapter)
    }

    /// Path the adapter is written to inside `output_dir`
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.config.output_file)
    }
}

/// Fail with [`GeneratorError::NothingToGenerate`] when the model is empty
pub fn require_services(services: &[Service]) -> Result<&[Service]> {
    if services.is_empty() {
        return Err(GeneratorError::NothingToGenerate);
    }
    Ok(services)
}

/// Generate an adapter with the default configuration (convenience function)
pub fn generate_adapter(services: &[Service], output_path: &str) -> Result<GeneratedAdapter> {
    let generator = AdapterGenerator::new(GeneratorConfig::default())?;
    generator.generate_to_directory(services, Path::new(output_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_creation() {
        let result = AdapterGenerator::new(GeneratorConfig::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_model() {
        assert!(matches!(
            require_services(&[]),
            Err(GeneratorError::NothingToGenerate)
        ));

        let generator = AdapterGenerator::new(GeneratorConfig::default()).unwrap();
        let adapter = generator.generate(&[]).unwrap();
        assert!(adapter.summary.is_empty());
        assert!(!adapter.content.contains("pub mod"));
        assert!(adapter.content.starts_with("// @generated"));
    }
}
