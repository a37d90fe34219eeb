//! Fixture commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use tfgcp_fixtures::node_pool::{some_container_cluster, some_container_node_pool, DEFAULT_ZONE};
use tfgcp_fixtures::ConfigBuilder;
use tracing::debug;

use crate::error::CliError;
use crate::output::OutputFormat;

use super::CommandContext;

/// Render acceptance test fixtures.
#[derive(Debug, Args)]
pub struct FixtureCommand {
    #[command(subcommand)]
    command: FixtureSubcommand,
}

#[derive(Debug, Subcommand)]
enum FixtureSubcommand {
    /// Render a container cluster and a node pool attached to it.
    NodePool(NodePoolArgs),
}

#[derive(Debug, Args)]
struct NodePoolArgs {
    /// Node pool name (random when omitted).
    #[arg(long)]
    name: Option<String>,

    #[arg(long, default_value = DEFAULT_ZONE)]
    zone: String,

    #[arg(long, default_value_t = 2)]
    initial_node_count: u32,

    #[arg(long)]
    machine_type: Option<String>,

    /// Node label as KEY=VALUE (repeatable).
    #[arg(long = "label", value_parser = parse_label)]
    labels: Vec<(String, String)>,

    /// Network tag (repeatable).
    #[arg(long = "tag")]
    tags: Vec<String>,
}

fn parse_label(s: &str) -> Result<(String, String), CliError> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(CliError::InvalidLabel(s.to_string())),
    }
}

impl FixtureCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            FixtureSubcommand::NodePool(args) => node_pool(ctx, args),
        }
    }
}

fn node_pool_config(cluster: &ConfigBuilder, args: NodePoolArgs) -> ConfigBuilder {
    let mut pool = some_container_node_pool(cluster)
        .with_zone(args.zone)
        .with_attribute("initial_node_count", args.initial_node_count);
    if let Some(name) = args.name {
        pool = pool.with_name(name);
    }

    let mut node_config = ConfigBuilder::nested();
    if let Some(machine_type) = args.machine_type {
        node_config = node_config.with_attribute("machine_type", machine_type);
    }
    if !args.labels.is_empty() {
        let labels = args
            .labels
            .into_iter()
            .fold(ConfigBuilder::nested(), |labels, (k, v)| labels.with_attribute(k, v));
        node_config = node_config.with_attribute("labels", labels);
    }
    if !args.tags.is_empty() {
        node_config = node_config.with_list("tags", args.tags);
    }

    if node_config != ConfigBuilder::nested() {
        pool = pool.with_attribute("node_config", node_config);
    }
    pool
}

fn node_pool(ctx: CommandContext, args: NodePoolArgs) -> Result<()> {
    let cluster = some_container_cluster().with_zone(args.zone.clone());
    let pool = node_pool_config(&cluster, args);

    debug!(
        cluster = cluster.resource_name().unwrap_or_default(),
        node_pool = pool.resource_name().unwrap_or_default(),
        "rendering node pool fixture"
    );

    let config = format!("{cluster}{pool}");
    match ctx.format {
        OutputFormat::Json => {
            let view = serde_json::json!({
                "cluster": cluster.resource_name(),
                "node_pool": pool.resource_name(),
                "config": config,
            });
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Table => print!("{config}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label() {
        assert_eq!(
            parse_label("env=test").unwrap(),
            ("env".to_string(), "test".to_string())
        );
        assert_eq!(
            parse_label("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );
        assert!(parse_label("novalue").is_err());
        assert!(parse_label("=x").is_err());
    }

    #[test]
    fn test_node_pool_without_node_config() {
        let cluster = some_container_cluster();
        let args = NodePoolArgs {
            name: Some("pool".to_string()),
            zone: "europe-west1-b".to_string(),
            initial_node_count: 1,
            machine_type: None,
            labels: Vec::new(),
            tags: Vec::new(),
        };
        let pool = node_pool_config(&cluster, args);
        assert_eq!(pool.name(), Some("pool"));
        assert_eq!(pool.zone(), Some("europe-west1-b"));
        assert!(pool.attribute("node_config").is_none());
    }

    #[test]
    fn test_node_pool_with_node_config() {
        let cluster = some_container_cluster();
        let args = NodePoolArgs {
            name: None,
            zone: DEFAULT_ZONE.to_string(),
            initial_node_count: 2,
            machine_type: Some("n1-highmem-4".to_string()),
            labels: vec![("my_label".to_string(), "v".to_string())],
            tags: vec!["my_tag".to_string()],
        };
        let rendered = node_pool_config(&cluster, args).to_string();
        assert!(rendered.contains("        machine_type = \"n1-highmem-4\"\n"));
        assert!(rendered.contains("            my_label = \"v\"\n"));
        assert!(rendered.contains("        tags = [\"my_tag\"]\n"));
    }
}
