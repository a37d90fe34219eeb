//! Sink commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use tfgcp_id::LoggingSinkId;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Parse and format logging sink ids.
#[derive(Debug, Args)]
pub struct SinkCommand {
    #[command(subcommand)]
    command: SinkSubcommand,
}

#[derive(Debug, Subcommand)]
enum SinkSubcommand {
    /// Resolve a sink id to its parts and canonical form.
    Parse(SinkIdArgs),

    /// Print the parent resource of a sink id.
    Parent(SinkIdArgs),
}

#[derive(Debug, Args)]
struct SinkIdArgs {
    /// Sink id: NAME, sinks/NAME, RESOURCE_ID/sinks/NAME or
    /// RESOURCE_TYPE/RESOURCE_ID/sinks/NAME.
    id: String,

    /// Parent resource id used when the id omits it (defaults to $GOOGLE_PROJECT).
    #[arg(long)]
    resource_id: Option<String>,

    /// Parent resource type used when the id omits it.
    #[arg(long)]
    resource_type: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct SinkView {
    resource_type: String,
    resource_id: String,
    name: String,
    canonical_id: String,
    parent: String,
}

impl From<&LoggingSinkId> for SinkView {
    fn from(id: &LoggingSinkId) -> Self {
        Self {
            resource_type: id.resource_type().to_string(),
            resource_id: id.resource_id().to_string(),
            name: id.name().to_string(),
            canonical_id: id.canonical_id(),
            parent: id.parent(),
        }
    }
}

impl SinkCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            SinkSubcommand::Parse(args) => parse(ctx, args),
            SinkSubcommand::Parent(args) => parent(ctx, args),
        }
    }
}

fn resolve(ctx: &CommandContext, args: &SinkIdArgs) -> Result<LoggingSinkId> {
    let resource_id = args
        .resource_id
        .clone()
        .or_else(|| ctx.config.default_resource_id.clone());
    let resource_type = args
        .resource_type
        .as_deref()
        .unwrap_or(&ctx.config.default_resource_type);

    // Short forms take the parent id from the defaults, but a malformed id
    // is reported as such before asking for one.
    let resource_id = match resource_id {
        Some(id) => id,
        None => {
            LoggingSinkId::parse(&args.id, "", resource_type)
                .with_context(|| format!("failed to parse sink id '{}'", args.id))?;
            if args.id.split('/').count() < 3 {
                return Err(CliError::MissingResourceId(args.id.clone()).into());
            }
            String::new()
        }
    };

    debug!(
        id = %args.id,
        default_resource_id = %resource_id,
        default_resource_type = %resource_type,
        "parsing sink id"
    );

    let id = LoggingSinkId::parse(&args.id, &resource_id, resource_type)
        .with_context(|| format!("failed to parse sink id '{}'", args.id))?;

    debug!(canonical_id = %id, "parsed sink id");
    Ok(id)
}

fn parse(ctx: CommandContext, args: SinkIdArgs) -> Result<()> {
    let id = resolve(&ctx, &args)?;
    print_single(&SinkView::from(&id), ctx.format);
    Ok(())
}

fn parent(ctx: CommandContext, args: SinkIdArgs) -> Result<()> {
    let id = resolve(&ctx, &args)?;

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "parent": id.parent() }));
        }
        OutputFormat::Table => println!("{}", id.parent()),
    }

    Ok(())
}
