//! Client for a container/object storage API.
//!
//! Objects are addressed as `container/object` and described entirely by
//! HTTP headers: core attributes use fixed header names, user metadata rides
//! in `X-Object-Meta-{key}` headers. [`ObjectClient`] creates, reads and
//! deletes objects on top of any [`Transport`]; [`HttpTransport`] is the
//! reqwest-backed one.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod transport;

pub use config::ClientConfig;
pub use errors::{ObjectError, ObjectResult};
pub use models::{
    object::ObjectDescriptor,
    requests::{CreateObjectInput, DeleteObjectInput, GetObjectInput},
};
pub use services::object_service::ObjectClient;
pub use transport::{HttpTransport, Transport, TransportError, TransportResult};
