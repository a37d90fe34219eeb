//! # tfgcp-id
//!
//! Parsing and formatting of logging sink identifiers.
//!
//! ## ID Format
//!
//! The canonical form of a sink identifier is
//! `{resource_type}/{resource_id}/sinks/{name}`, where the resource type is one
//! of `billingAccount`, `folders`, `organizations` or `projects`.
//!
//! Examples:
//! - `projects/my-project/sinks/my-sink`
//! - `folders/1234567/sinks/audit`
//! - `billingAccount/0A1B2C-3D4E5F-6A7B8C/sinks/billing-export`
//!
//! Shorthand forms (`[NAME]`, `sinks/[NAME]`, `[RESOURCE_ID]/sinks/[NAME]`)
//! are accepted by [`LoggingSinkId::parse`], which fills the missing parts from
//! caller-supplied defaults. The canonical form is what gets persisted.

mod error;
mod resource;
mod sink;

pub use error::IdError;
pub use resource::ResourceType;
pub use sink::{LoggingSinkId, SINKS_SEGMENT};
