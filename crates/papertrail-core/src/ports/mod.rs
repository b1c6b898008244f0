//! Port definitions (hexagonal architecture interfaces)
//!
//! Ports are the interfaces the SDK depends on but whose implementations
//! live in adapter code.
//!
//! ## Ports Overview
//!
//! - [`IHttpTransport`] - Sends one HTTP request and returns the raw status and body

pub mod http_transport;

pub use http_transport::{HeaderSet, HttpMethod, HttpRequest, HttpResponse, IHttpTransport};
