//! Parent resource types a logging sink can live under.

use serde::{Deserialize, Serialize};

use crate::IdError;

/// The kind of resource that owns a logging sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceType {
    BillingAccount,
    Folders,
    Organizations,
    Projects,
}

impl ResourceType {
    /// Every allowed resource type.
    pub const ALL: [ResourceType; 4] = [
        ResourceType::BillingAccount,
        ResourceType::Folders,
        ResourceType::Organizations,
        ResourceType::Projects,
    ];

    /// String forms of [`ResourceType::ALL`], in the same order.
    pub const NAMES: &'static [&'static str] =
        &["billingAccount", "folders", "organizations", "projects"];

    /// Returns the path segment used for this resource type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ResourceType::BillingAccount => "billingAccount",
            ResourceType::Folders => "folders",
            ResourceType::Organizations => "organizations",
            ResourceType::Projects => "projects",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResourceType {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "billingAccount" => Ok(ResourceType::BillingAccount),
            "folders" => Ok(ResourceType::Folders),
            "organizations" => Ok(ResourceType::Organizations),
            "projects" => Ok(ResourceType::Projects),
            other => Err(IdError::InvalidResourceType {
                resource_type: other.to_string(),
                allowed: Self::NAMES,
            }),
        }
    }
}

impl AsRef<str> for ResourceType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_variants() {
        let names: Vec<_> = ResourceType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, ResourceType::NAMES);
    }

    #[test]
    fn test_from_str_roundtrip() {
        for ty in ResourceType::ALL {
            let parsed: ResourceType = ty.to_string().parse().unwrap();
            assert_eq!(ty, parsed);
        }
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        let err = "Projects".parse::<ResourceType>().unwrap_err();
        assert!(err.is_invalid_resource_type());

        let err = "billingaccount".parse::<ResourceType>().unwrap_err();
        assert!(err.is_invalid_resource_type());
    }

    #[test]
    fn test_invalid_resource_type_reports_allowed_set() {
        let err = "kitchens".parse::<ResourceType>().unwrap_err();
        assert_eq!(
            err,
            IdError::InvalidResourceType {
                resource_type: "kitchens".to_string(),
                allowed: ResourceType::NAMES,
            }
        );
        let message = err.to_string();
        assert!(message.contains("kitchens"));
        assert!(message.contains("billingAccount"));
    }

    #[test]
    fn test_json_uses_path_segment() {
        let json = serde_json::to_string(&ResourceType::BillingAccount).unwrap();
        assert_eq!(json, "\"billingAccount\"");

        let parsed: ResourceType = serde_json::from_str("\"organizations\"").unwrap();
        assert_eq!(parsed, ResourceType::Organizations);
    }
}
