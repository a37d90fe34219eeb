//! Logging sink identifiers.

use crate::{IdError, ResourceType};

/// Literal segment that precedes the sink name.
pub const SINKS_SEGMENT: &str = "sinks";

/// Identifies a logging sink by its parent resource and name.
///
/// The canonical form is `{resource_type}/{resource_id}/sinks/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoggingSinkId {
    resource_type: ResourceType,
    resource_id: String,
    name: String,
}

impl LoggingSinkId {
    /// Creates an ID from its parts.
    ///
    /// Neither part may contain `/`, so the canonical form always parses back
    /// to the same value.
    pub fn new(
        resource_type: ResourceType,
        resource_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, IdError> {
        let id = Self {
            resource_type,
            resource_id: resource_id.into(),
            name: name.into(),
        };

        if id.resource_id.contains('/') || id.name.contains('/') {
            return Err(IdError::invalid_identifier(&id.to_string()));
        }

        Ok(id)
    }

    /// Parses an ID in one of four forms:
    ///
    /// - `[NAME]`
    /// - `sinks/[NAME]`
    /// - `[RESOURCE_ID]/sinks/[NAME]`
    /// - `[RESOURCE_TYPE]/[RESOURCE_ID]/sinks/[NAME]`
    ///
    /// Parts missing from `id` are taken from `default_resource_id` and
    /// `default_resource_type`. The resource type is validated whichever
    /// source it came from.
    pub fn parse(
        id: &str,
        default_resource_id: &str,
        default_resource_type: &str,
    ) -> Result<Self, IdError> {
        if id.is_empty() {
            return Err(IdError::invalid_identifier(id));
        }

        let parts: Vec<&str> = id.split('/').collect();
        let n = parts.len();

        let name = parts[n - 1];
        if n >= 2 && parts[n - 2] != SINKS_SEGMENT {
            return Err(IdError::invalid_identifier(id));
        }
        if n > 4 {
            return Err(IdError::invalid_identifier(id));
        }

        let resource_id = if n >= 3 { parts[n - 3] } else { default_resource_id };
        let resource_type = if n == 4 { parts[0] } else { default_resource_type };
        let resource_type = resource_type.parse::<ResourceType>()?;

        Self::new(resource_type, resource_id, name)
    }

    /// Returns the parent resource type.
    #[must_use]
    pub const fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// Returns the parent resource ID.
    #[must_use]
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// Returns the sink name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Formats the ID as `{resource_type}/{resource_id}/sinks/{name}`.
    #[must_use]
    pub fn canonical_id(&self) -> String {
        self.to_string()
    }

    /// Formats the owning resource, e.g. `folders/foo` for `folders/foo/sinks/bar`.
    #[must_use]
    pub fn parent(&self) -> String {
        format!("{}/{}", self.resource_type, self.resource_id)
    }
}

impl std::fmt::Display for LoggingSinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.resource_type, self.resource_id, SINKS_SEGMENT, self.name
        )
    }
}

/// Parses the fully qualified form only; shorthand forms need defaults and
/// must go through [`LoggingSinkId::parse`].
impl std::str::FromStr for LoggingSinkId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.split('/').count() != 4 {
            return Err(IdError::invalid_identifier(s));
        }
        Self::parse(s, "", "")
    }
}

impl serde::Serialize for LoggingSinkId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.canonical_id())
    }
}

impl<'de> serde::Deserialize<'de> for LoggingSinkId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
