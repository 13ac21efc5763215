//! Service and method extraction from raw `.proto` text
//!
//! Each extractor is a single regex plus, where a body follows, a balanced
//! brace scan. Anything that does not match is skipped rather than reported.

use super::binding::parse_http_binding;
use crate::scanner::balanced_region;
use regex::Regex;
use rest_adapter_generator_common::Method;
use std::sync::LazyLock;

static PACKAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*package\s+([A-Za-z_][\w.]*)\s*;").expect("package pattern is valid")
});

static SERVICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bservice\s+(\w+)\s*\{").expect("service pattern is valid"));

static RPC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\brpc\s+(\w+)\s*\(\s*(\w+)\s*\)\s*returns\s*\(\s*([\w.]+)\s*\)\s*\{")
        .expect("rpc pattern is valid")
});

/// A `service Name { ... }` declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceBlock<'a> {
    pub name: &'a str,

    /// Everything between the service's braces
    pub body: &'a str,
}

/// Package identifier of the first `package x.y;` line, or an empty string
pub fn extract_package_name(text: &str) -> String {
    PACKAGE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Every service declaration in the text, with its full body
pub fn extract_services(text: &str) -> Vec<ServiceBlock<'_>> {
    SERVICE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str();
            Some(ServiceBlock {
                name,
                body: balanced_region(text, whole.end()),
            })
        })
        .collect()
}

/// Methods of a service body that carry an HTTP binding, in declaration order
pub fn extract_methods(service_body: &str) -> Vec<Method> {
    RPC_PATTERN
        .captures_iter(service_body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let options = balanced_region(service_body, whole.end());
            let binding = parse_http_binding(options)?;

            Some(Method {
                name: caps.get(1)?.as_str().to_string(),
                input_type: caps.get(2)?.as_str().to_string(),
                output_type: caps.get(3)?.as_str().to_string(),
                binding,
            })
        })
        .collect()
}
