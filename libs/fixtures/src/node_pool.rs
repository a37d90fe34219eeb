//! Container cluster and node pool fixtures.
//!
//! The config generators produce resources with random names so repeated runs
//! do not collide. The checks run against a node pool as returned by the
//! container API.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::labels::{check_has_label, HasLabels};
use crate::{CheckError, ConfigBuilder};

pub const CLUSTER_RESOURCE_TYPE: &str = "google_container_cluster";
pub const NODE_POOL_RESOURCE_TYPE: &str = "google_container_node_pool";

/// Zone used by the generated fixtures.
pub const DEFAULT_ZONE: &str = "us-central1-a";

/// Length of random name suffixes.
pub const SUFFIX_LEN: usize = 10;

const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Returns a random lowercase alphanumeric string of `len` characters.
pub fn random_suffix(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| SUFFIX_CHARSET[rng.random_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}

/// A three-node cluster with basic auth.
pub fn some_container_cluster() -> ConfigBuilder {
    ConfigBuilder::resource(
        CLUSTER_RESOURCE_TYPE,
        format!("cluster-{}", random_suffix(SUFFIX_LEN)),
    )
    .with_name(format!("tf-cluster-nodepool-test-{}", random_suffix(SUFFIX_LEN)))
    .with_zone(DEFAULT_ZONE)
    .with_attribute("initial_node_count", 3)
    .with_attribute(
        "master_auth",
        ConfigBuilder::nested()
            .with_attribute("username", "mr.yoda")
            .with_attribute("password", "adoy.rm"),
    )
}

/// A two-node pool attached to `cluster`.
pub fn some_container_node_pool(cluster: &ConfigBuilder) -> ConfigBuilder {
    let cluster_ref = format!(
        "${{{}.{}.name}}",
        CLUSTER_RESOURCE_TYPE,
        cluster.resource_name().unwrap_or_default()
    );

    ConfigBuilder::resource(
        NODE_POOL_RESOURCE_TYPE,
        format!("nodepool-{}", random_suffix(SUFFIX_LEN)),
    )
    .with_name(format!("tf-nodepool-test-{}", random_suffix(SUFFIX_LEN)))
    .with_zone(DEFAULT_ZONE)
    .with_attribute("cluster", cluster_ref)
    .with_attribute("initial_node_count", 2)
}

/// Node pool as returned by the container API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePool {
    pub name: String,
    #[serde(default)]
    pub initial_node_count: i64,
    #[serde(default)]
    pub config: NodeConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeConfig {
    #[serde(default)]
    pub machine_type: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl HasLabels for NodePool {
    fn label(&self, key: &str) -> Option<&str> {
        self.config.labels.label(key)
    }

    fn label_pairs(&self) -> Vec<(String, String)> {
        self.config.labels.label_pairs()
    }
}

pub fn has_initial_node_count(pool: &NodePool, count: i64) -> Result<(), CheckError> {
    if pool.initial_node_count != count {
        return Err(CheckError::NodeCount {
            expected: count,
            actual: pool.initial_node_count,
        });
    }
    Ok(())
}

pub fn has_label(pool: &NodePool, key: &str, value: &str) -> Result<(), CheckError> {
    check_has_label(pool, key, value)
}

pub fn has_machine_type(pool: &NodePool, machine_type: &str) -> Result<(), CheckError> {
    if pool.config.machine_type != machine_type {
        return Err(CheckError::MachineType {
            expected: machine_type.to_string(),
            actual: pool.config.machine_type.clone(),
        });
    }
    Ok(())
}

/// Checks that every tag in `tags` is present; extra tags are fine.
pub fn has_tags(pool: &NodePool, tags: &[&str]) -> Result<(), CheckError> {
    let mut missing: BTreeSet<&str> = tags.iter().copied().collect();
    for tag in &pool.config.tags {
        missing.remove(tag.as_str());
    }

    if !missing.is_empty() {
        return Err(CheckError::TagsMissing {
            missing: missing.into_iter().map(str::to_string).collect(),
        });
    }
    Ok(())
}
