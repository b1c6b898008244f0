//! PaperTrail Core - Domain types shared by the PaperTrail SDK
//!
//! This crate contains the transport-agnostic half of the SDK:
//! - **Domain entities** - `AuditLogRegistration`, `MessageLogRegistration`,
//!   `MessageLogContent` and the service's `ErrorEntity`
//! - **Port definitions** - [`ports::IHttpTransport`], the single seam through
//!   which requests leave the process
//! - **Configuration** - YAML-backed [`config::Config`]
//!
//! # Architecture
//!
//! The domain module holds plain immutable transfer objects with no I/O.
//! The HTTP engine and the resource clients that use these types live in
//! `papertrail-client`, which also provides the reqwest adapter for the port.

pub mod config;
pub mod domain;
pub mod ports;
