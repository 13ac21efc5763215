//! Annotation extraction for REST adapter generation
//!
//! This crate turns raw `.proto` text into the service model
//! (`Vec<Service>`) consumed by the generator.
//!
//! ## Parsing Strategy
//!
//! There is no grammar and no AST. Two tiers do the work:
//! - [`scanner`] balances braces from a known opening position
//! - [`proto`] matches `package`, `service`, `rpc` and the
//!   `google.api.http` option with single-purpose patterns
//!
//! Input that does not match is dropped, never reported:
//! - methods without a binding are omitted
//! - services left without methods are omitted
//! - unbalanced braces truncate a body at end of text

pub mod proto;
pub mod scanner;

pub use proto::{
    extract_methods, extract_package_name, extract_services, parse_http_binding, ProtoParser,
    ServiceBlock,
};
pub use scanner::{balanced_region, scan_balanced, scan_balanced_with, Delimiters};

use rest_adapter_generator_common::Service;

/// Parse one `.proto` text into its bound services, in declaration order
pub fn parse_proto_file(text: &str) -> Vec<Service> {
    let package_name = extract_package_name(text);

    extract_services(text)
        .into_iter()
        .filter_map(|block| {
            let methods = extract_methods(block.body);
            if methods.is_empty() {
                return None;
            }
            Some(Service::new(package_name.as_str(), block.name, methods))
        })
        .collect()
}

/// Parse several texts and concatenate their services in input order.
///
/// Services with the same fully-qualified name in different texts are kept
/// as separate entries.
pub fn parse_proto_files<S: AsRef<str>>(texts: &[S]) -> Vec<Service> {
    texts
        .iter()
        .flat_map(|text| parse_proto_file(text.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_proto_file("").is_empty());
        assert!(parse_proto_files::<&str>(&[]).is_empty());
    }
}
