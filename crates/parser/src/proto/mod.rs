//! `.proto` text extraction
//!
//! Recovers packages, services, RPC methods and their `google.api.http`
//! bindings from raw interface-definition text using targeted patterns and
//! the brace scanner instead of a full grammar.
//!
//! ## Example
//! ```rust
//! use rest_adapter_generator_parser::parse_proto_file;
//!
//! let services = parse_proto_file(r#"
//! package users.v1;
//!
//! service UserService {
//!   rpc GetUser(GetUserRequest) returns (User) {
//!     option (google.api.http) = { get: "/v1/users/{user_id}" };
//!   }
//! }
//! "#);
//!
//! assert_eq!(services[0].full_name, "users.v1.UserService");
//! ```

mod binding;
mod extractor;
mod parser;

pub use binding::{parse_http_binding, HTTP_OPTION_MARKER};
pub use extractor::{extract_methods, extract_package_name, extract_services, ServiceBlock};
pub use parser::ProtoParser;
