//! Template-facing view of the service model
//!
//! Names, Rust paths and route table expressions are worked out here so the
//! template only lays them out.

use heck::ToSnakeCase;
use rest_adapter_generator_common::{
    GeneratorConfig, GeneratorError, Method, PayloadSource, Result, Service,
};
use rest_adapter_runtime::PathTemplate;
use serde::Serialize;
use std::collections::HashMap;

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true",
    "try", "type", "unsafe", "use", "where", "while", "yield",
];

#[derive(Debug, Serialize)]
pub struct ServiceView {
    pub full_name: String,
    pub service_name: String,
    pub module_name: String,
    pub routes: Vec<RouteView>,
    pub router_paths: Vec<RouterPathView>,
}

#[derive(Debug, Serialize)]
pub struct RouteView {
    pub method_name: String,
    pub fn_name: String,
    pub verb: &'static str,
    pub template: String,
    pub variables: Vec<String>,
    pub body_selector: String,
    pub input_type: String,
    pub output_type: String,
    pub router_path: String,
}

/// One axum route of a service: a path and every verb registered on it
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RouterPathView {
    pub path: String,
    pub verbs: Vec<&'static str>,
}

/// Build views for every service, in model order.
///
/// Services sharing a fully-qualified name get numbered module names so the
/// emitted document still compiles.
pub fn build_views(services: &[Service], config: &GeneratorConfig) -> Result<Vec<ServiceView>> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    services
        .iter()
        .map(|service| {
            let base = service.full_name.to_snake_case();
            let count = seen.entry(base.clone()).or_insert(0);
            *count += 1;
            let module_name = if *count == 1 {
                base
            } else {
                format!("{}_{}", base, count)
            };

            let routes = service
                .methods
                .iter()
                .map(|method| route_view(service, method, config))
                .collect::<Result<Vec<_>>>()?;

            Ok(ServiceView {
                full_name: service.full_name.clone(),
                service_name: service.service_name.clone(),
                module_name: rust_ident(&module_name),
                router_paths: router_paths(&routes),
                routes,
            })
        })
        .collect()
}

fn route_view(service: &Service, method: &Method, config: &GeneratorConfig) -> Result<RouteView> {
    let binding = &method.binding;
    let template = PathTemplate::parse(&binding.path_template).map_err(|e| {
        GeneratorError::Generation(format!(
            "Invalid path template for {}.{}: {}",
            service.full_name, method.name, e
        ))
    })?;

    let body_selector = match binding.payload_source() {
        PayloadSource::Query => "rt::BodySelector::None".to_string(),
        PayloadSource::WholeBody => "rt::BodySelector::All".to_string(),
        PayloadSource::Field(field) => format!("rt::BodySelector::Field({:?})", field),
    };

    Ok(RouteView {
        method_name: method.name.clone(),
        fn_name: rust_ident(&method.name.to_snake_case()),
        verb: binding.verb.as_str(),
        template: binding.path_template.clone(),
        variables: template.variables().iter().map(|v| v.to_string()).collect(),
        body_selector,
        input_type: rust_type(&method.input_type, config.types_path.as_deref()),
        output_type: rust_type(&method.output_type, config.types_path.as_deref()),
        router_path: template.router_path(),
    })
}

/// Group routes by axum path in first-seen order, each verb once per path.
/// Axum rejects a verb registered twice on one path.
fn router_paths(routes: &[RouteView]) -> Vec<RouterPathView> {
    let mut paths: Vec<RouterPathView> = Vec::new();

    for route in routes {
        match paths.iter_mut().find(|p| p.path == route.router_path) {
            Some(path) => {
                if !path.verbs.contains(&route.verb) {
                    path.verbs.push(route.verb);
                }
            }
            None => paths.push(RouterPathView {
                path: route.router_path.clone(),
                verbs: vec![route.verb],
            }),
        }
    }

    paths
}

/// Map a dotted message name to a Rust path, e.g. `google.protobuf.Empty`
/// becomes `google::protobuf::Empty`
pub fn rust_type(proto_type: &str, types_path: Option<&str>) -> String {
    let path = proto_type
        .trim_start_matches('.')
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(rust_ident)
        .collect::<Vec<_>>()
        .join("::");

    match types_path {
        Some(prefix) if !prefix.is_empty() => format!("{}::{}", prefix.trim_end_matches(':'), path),
        _ => path,
    }
}

/// Escape identifiers that collide with Rust keywords
pub fn rust_ident(name: &str) -> String {
    if RUST_KEYWORDS.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}
