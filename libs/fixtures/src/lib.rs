//! # tfgcp-fixtures
//!
//! Helpers for writing provider acceptance fixtures:
//!
//! - [`ConfigBuilder`] renders resource definitions as config text
//! - [`labels`] extracts and checks resource labels
//! - [`node_pool`] builds container cluster/node pool fixtures and checks
//!   node pool payloads returned by the container API

mod config_builder;
mod error;
pub mod labels;
pub mod node_pool;

pub use config_builder::{ConfigBuilder, ConfigValue};
pub use error::CheckError;
pub use labels::{check_has_label, resource_labels, HasLabels};
