//! Node pool fixture flow: build the config for a cluster plus a labelled,
//! tagged node pool, then run the checks against an API payload describing the
//! created pool.

use tfgcp_fixtures::node_pool::{
    has_initial_node_count, has_label, has_machine_type, has_tags, some_container_cluster,
    some_container_node_pool, random_suffix, NodePool, DEFAULT_ZONE, SUFFIX_LEN,
};
use tfgcp_fixtures::{CheckError, ConfigBuilder};

fn node_pool_config(name: &str) -> (ConfigBuilder, ConfigBuilder) {
    let cluster = some_container_cluster();
    let node_pool = some_container_node_pool(&cluster)
        .with_attribute("name", name)
        .with_attribute("zone", DEFAULT_ZONE)
        .with_attribute("initial_node_count", 2)
        .with_attribute(
            "node_config",
            ConfigBuilder::nested()
                .with_attribute("machine_type", "n1-highmem-4")
                .with_attribute(
                    "labels",
                    ConfigBuilder::nested()
                        .with_attribute("my_label", "my_label_value")
                        .with_attribute("my_other_label", "my_other_label_value"),
                )
                .with_list("tags", ["my_tag", "my_other_tag"]),
        );
    (cluster, node_pool)
}

#[test]
fn test_node_pool_config_renders() {
    let name = format!("tf-nodepool-test-{}", random_suffix(SUFFIX_LEN));
    let (cluster, node_pool) = node_pool_config(&name);
    let config = format!("{cluster}{node_pool}");

    assert!(config.contains("resource \"google_container_cluster\""));
    assert!(config.contains("resource \"google_container_node_pool\""));
    assert!(config.contains(&format!("    name = \"{name}\"\n")));
    assert!(config.contains("    node_config {\n"));
    assert!(config.contains("        labels {\n"));
    assert!(config.contains("            my_label = \"my_label_value\"\n"));
    assert!(config.contains("        tags = [\"my_tag\", \"my_other_tag\"]\n"));
    assert!(config.contains(&format!(
        "    cluster = \"${{google_container_cluster.{}.name}}\"\n",
        cluster.resource_name().unwrap()
    )));
}

#[test]
fn test_node_pool_checks_against_api_payload() {
    let payload = r#"{
        "name": "tf-nodepool-test-abc",
        "initialNodeCount": 2,
        "status": "RUNNING",
        "config": {
            "machineType": "n1-highmem-4",
            "diskSizeGb": 100,
            "labels": {
                "my_label": "my_label_value",
                "my_other_label": "my_other_label_value"
            },
            "tags": ["my_tag", "my_other_tag"]
        }
    }"#;
    let pool: NodePool = serde_json::from_str(payload).unwrap();

    has_initial_node_count(&pool, 2).unwrap();
    has_label(&pool, "my_label", "my_label_value").unwrap();
    has_label(&pool, "my_other_label", "my_other_label_value").unwrap();
    has_tags(&pool, &["my_tag", "my_other_tag"]).unwrap();
    has_machine_type(&pool, "n1-highmem-4").unwrap();
}

#[test]
fn test_node_pool_checks_report_drift() {
    let payload = r#"{
        "name": "tf-nodepool-test-abc",
        "initialNodeCount": 1,
        "config": { "machineType": "n1-standard-1" }
    }"#;
    let pool: NodePool = serde_json::from_str(payload).unwrap();

    assert!(matches!(
        has_initial_node_count(&pool, 2),
        Err(CheckError::NodeCount { expected: 2, actual: 1 })
    ));
    assert!(matches!(
        has_label(&pool, "my_label", "my_label_value"),
        Err(CheckError::LabelMissing { .. })
    ));
    let err = has_tags(&pool, &["my_tag"]).unwrap_err();
    assert_eq!(err.to_string(), "tags not found: [\"my_tag\"]");
}
