//! File-backed `.proto` parser

use rest_adapter_generator_common::{GeneratorError, Result, Service};
use std::fs;
use std::path::Path;

/// Parser over the text of one `.proto` file
///
/// Parsing itself never fails; only reading the file can.
pub struct ProtoParser {
    /// Raw interface-definition text
    source: String,

    /// Where the text came from, for diagnostics
    origin: String,
}

impl ProtoParser {
    /// Load `.proto` text from a file
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = ProtoParser::from_file("proto/users.proto")?;
    /// let services = parser.parse();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = fs::read_to_string(path.as_ref()).map_err(|e| {
            GeneratorError::Parse(format!(
                "Failed to read proto file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Ok(Self {
            source,
            origin: path.as_ref().display().to_string(),
        })
    }

    /// Wrap text that is already in memory
    pub fn from_source(source: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            origin: origin.into(),
        }
    }

    /// Extract the bound services from the text
    pub fn parse(&self) -> Vec<Service> {
        crate::parse_proto_file(&self.source)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}
