//! Domain entities
//!
//! Transfer objects exchanged with the PaperTrail service. Each entity is
//! immutable once constructed and serializes to the exact camelCase field
//! names the service expects on the wire.

pub mod error_entity;
pub mod errors;
pub mod message_content;
pub mod newtypes;
pub mod registration;

pub use error_entity::ErrorEntity;
pub use errors::DomainError;
pub use message_content::MessageLogContent;
pub use newtypes::SnowflakeId;
pub use registration::{AuditLogRegistration, MessageLogRegistration};
