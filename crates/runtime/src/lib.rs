//! Runtime support for generated REST adapters
//!
//! Generated adapter modules contain only the parts that depend on a
//! service: the route table, the RPC handle trait, and the dispatcher. The
//! service-independent work lives here:
//!
//! - [`PathTemplate`] matches request paths against `{name}` templates
//! - [`RouteTable`] picks the binding that serves a request
//! - [`build_payload`] merges path captures, query and body into the input
//! - [`respond`] turns an RPC result into an HTTP response
//!
//! ## Example
//! ```rust,ignore
//! // With `users_v1_user_service` and `orders_v1_order_service` generated
//! // from users.proto and orders.proto
//! let app = axum::Router::new()
//!     .merge(users_v1_user_service::router(MyUserClient::connect().await?))
//!     .merge(orders_v1_order_service::router(MyOrderClient::connect().await?));
//! ```

mod payload;
mod response;
mod route;
mod template;

pub use payload::{build_payload, BodySelector, PayloadError};
pub use response::{not_found, respond, ErrorBody, ErrorDetails, RpcCode, RpcStatus};
pub use route::{Captures, RestRequest, Route, RouteTable};
pub use template::{Part, PathTemplate, Segment, TemplateError};

// Generated code reaches these through the runtime crate so that it needs
// no direct dependency on either.
pub use axum;
pub use serde_json;
