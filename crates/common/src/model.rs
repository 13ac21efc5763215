//! Service model recovered from annotated interface definitions
//!
//! The model is built in a single pass per input text and never mutated
//! afterwards. Methods without an HTTP binding and services without any bound
//! method never make it into the model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP verb of a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpVerb {
    /// Verbs in binding evaluation order. The first verb found in an
    /// annotation wins.
    pub const ALL: [HttpVerb; 5] = [
        HttpVerb::Get,
        HttpVerb::Post,
        HttpVerb::Put,
        HttpVerb::Patch,
        HttpVerb::Delete,
    ];

    /// Upper-case HTTP method name (e.g. "GET")
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Patch => "PATCH",
            HttpVerb::Delete => "DELETE",
        }
    }

    /// Annotation keyword for this verb (e.g. "get")
    pub fn keyword(&self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Post => "post",
            HttpVerb::Put => "put",
            HttpVerb::Patch => "patch",
            HttpVerb::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the RPC input payload comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSource<'a> {
    /// Query parameters merged with path captures
    Query,
    /// The whole request body
    WholeBody,
    /// The request body populates a single named field
    Field(&'a str),
}

/// HTTP mapping attached to an RPC method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpBinding {
    pub verb: HttpVerb,

    /// Path with zero or more `{name}` placeholders
    pub path_template: String,

    /// Absent, `*`, or a field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_selector: Option<String>,
}

impl HttpBinding {
    pub fn new(verb: HttpVerb, path_template: impl Into<String>) -> Self {
        Self {
            verb,
            path_template: path_template.into(),
            body_selector: None,
        }
    }

    pub fn with_body(mut self, selector: impl Into<String>) -> Self {
        self.body_selector = Some(selector.into());
        self
    }

    pub fn payload_source(&self) -> PayloadSource<'_> {
        match self.body_selector.as_deref() {
            None => PayloadSource::Query,
            Some("*") => PayloadSource::WholeBody,
            Some(field) => PayloadSource::Field(field),
        }
    }
}

/// An RPC method that carries an HTTP binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub input_type: String,
    pub output_type: String,
    pub binding: HttpBinding,
}

/// A service with at least one bound method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Package identifier, empty when the text declares none
    pub package_name: String,
    pub service_name: String,

    /// `<package>.<service>`, or the bare service name without a package
    pub full_name: String,

    /// Methods in declaration order
    pub methods: Vec<Method>,
}

impl Service {
    pub fn new(
        package_name: impl Into<String>,
        service_name: impl Into<String>,
        methods: Vec<Method>,
    ) -> Self {
        let package_name = package_name.into();
        let service_name = service_name.into();
        let full_name = if package_name.is_empty() {
            service_name.clone()
        } else {
            format!("{}.{}", package_name, service_name)
        };

        Self {
            package_name,
            service_name,
            full_name,
            methods,
        }
    }
}

/// Service names and method count of a model, reported after generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub services: Vec<String>,
    pub method_count: usize,
}

impl ModelSummary {
    pub fn from_services(services: &[Service]) -> Self {
        Self {
            services: services.iter().map(|s| s.full_name.clone()).collect(),
            method_count: services.iter().map(|s| s.methods.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
