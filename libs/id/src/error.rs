//! Error types for sink identifier parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating logging sink identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The identifier is empty, has the wrong number of segments, or lacks
    /// the `sinks` literal where it is required.
    #[error("invalid logging sink id: '{id}'")]
    InvalidIdentifier { id: String },

    /// The resolved resource type is not one of the allowed parent types.
    #[error("logging resource type '{resource_type}' is not valid, valid resource types: {allowed:?}")]
    InvalidResourceType {
        resource_type: String,
        allowed: &'static [&'static str],
    },
}

impl IdError {
    pub(crate) fn invalid_identifier(id: &str) -> Self {
        IdError::InvalidIdentifier { id: id.to_string() }
    }

    /// Returns true if the identifier itself was malformed.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, IdError::InvalidIdentifier { .. })
    }

    /// Returns true if the resource type was rejected.
    pub fn is_invalid_resource_type(&self) -> bool {
        matches!(self, IdError::InvalidResourceType { .. })
    }
}
