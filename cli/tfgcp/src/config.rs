//! Configuration from the environment.
//!
//! Handles:
//! - Default parent resource for shorthand sink ids
//! - Log level

use tfgcp_id::ResourceType;

/// Project used when a sink id omits its parent.
pub const PROJECT_ENV: &str = "GOOGLE_PROJECT";

/// Parent resource type used when a sink id omits it.
pub const RESOURCE_TYPE_ENV: &str = "TFGCP_RESOURCE_TYPE";

pub const LOG_LEVEL_ENV: &str = "TFGCP_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct Config {
    pub default_resource_id: Option<String>,
    pub default_resource_type: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_resource_id = lookup(PROJECT_ENV).filter(|v| !v.is_empty());

        let default_resource_type = lookup(RESOURCE_TYPE_ENV)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| ResourceType::Projects.as_str().to_string());

        let log_level = lookup(LOG_LEVEL_ENV).unwrap_or_else(|| "warn".to_string());

        Self {
            default_resource_id,
            default_resource_type,
            log_level,
        }
    }
}
