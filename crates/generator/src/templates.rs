//! Template loading and management

use heck::ToUpperCamelCase;
use rest_adapter_generator_common::{GeneratorError, Result};
use std::collections::HashMap;
use tera::{Tera, Value};

pub const ADAPTER_TEMPLATE: &str = "adapter.rs";

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    tera.register_filter("pascal_case", pascal_case_filter);
    tera.register_filter("rust_string", rust_string_filter);

    tera.add_raw_template(
        ADAPTER_TEMPLATE,
        include_str!("../templates/adapter.rs.tera"),
    )
    .map_err(|e| {
        GeneratorError::Generation(format!("Failed to load adapter.rs template: {}", e))
    })?;

    Ok(tera)
}

/// Filter to convert a proto identifier to UpperCamelCase
fn pascal_case_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("pascal_case filter expects a string"))?;

    Ok(Value::String(s.to_upper_camel_case()))
}

/// Filter to render a string as a Rust string literal
fn rust_string_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("rust_string filter expects a string"))?;

    Ok(Value::String(format!("{:?}", s)))
}
