//! Route tables and request matching

use axum::body::Bytes;
use axum::extract::Query;
use axum::http::{Method, Uri};
use serde::de::DeserializeOwned;
use std::sync::OnceLock;

use crate::payload::{build_payload, BodySelector, PayloadError};
use crate::template::{PathTemplate, TemplateError};

/// Path captures in template order
pub type Captures = Vec<(String, String)>;

/// One REST binding of an RPC method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// RPC method name
    pub method: &'static str,

    /// Upper-case HTTP verb
    pub verb: &'static str,

    pub template: &'static str,

    pub body: BodySelector,
}

/// A service's routes with their templates parsed on first use
///
/// Declared as a `static` next to the route list it wraps.
#[derive(Debug)]
pub struct RouteTable {
    routes: &'static [Route],
    templates: OnceLock<Result<Vec<PathTemplate>, TemplateError>>,
}

impl RouteTable {
    pub const fn new(routes: &'static [Route]) -> Self {
        Self {
            routes,
            templates: OnceLock::new(),
        }
    }

    pub fn routes(&self) -> &'static [Route] {
        self.routes
    }

    /// Parse every template, once
    pub fn templates(&self) -> Result<&[PathTemplate], TemplateError> {
        self.templates
            .get_or_init(|| {
                self.routes
                    .iter()
                    .map(|route| PathTemplate::parse(route.template))
                    .collect()
            })
            .as_deref()
            .map_err(Clone::clone)
    }

    /// First route serving `verb` and `path`, in table order
    pub fn route(&self, verb: &str, path: &str) -> Result<Option<(usize, Captures)>, TemplateError> {
        let templates = self.templates()?;

        Ok(self
            .routes
            .iter()
            .zip(templates)
            .enumerate()
            .filter(|(_, (route, _))| route.verb.eq_ignore_ascii_case(verb))
            .find_map(|(index, (_, template))| {
                template.match_path(path).map(|captures| (index, captures))
            }))
    }
}

/// The parts of an HTTP request an adapter needs
#[derive(Debug, Clone)]
pub struct RestRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Bytes,
}

impl RestRequest {
    pub fn new(method: Method, uri: &Uri, body: Bytes) -> Result<Self, PayloadError> {
        let query = match uri.query() {
            Some(_) => {
                let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(uri)
                    .map_err(|e| PayloadError::InvalidQuery(e.body_text()))?;
                pairs
            }
            None => Vec::new(),
        };

        Ok(Self {
            method,
            path: uri.path().to_string(),
            query,
            body,
        })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Find the route serving this request. HEAD is served by GET routes.
    pub fn route(&self, table: &RouteTable) -> Result<Option<(usize, Captures)>, TemplateError> {
        let verb = if self.method == Method::HEAD {
            Method::GET.as_str()
        } else {
            self.method.as_str()
        };
        table.route(verb, &self.path)
    }

    /// Build the payload for `route` and deserialize it into the input type
    pub fn decode<T: DeserializeOwned>(
        &self,
        route: &Route,
        captures: Captures,
    ) -> Result<T, PayloadError> {
        let payload = build_payload(route.body, captures, &self.query, &self.body)?;
        serde_json::from_value(payload).map_err(PayloadError::Decode)
    }
}
