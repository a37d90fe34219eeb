//! CLI commands.

mod fixture;
mod sink;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// tfgcp - Inspect logging sink ids and render provider fixtures.
#[derive(Debug, Parser)]
#[command(name = "tfgcp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse and format logging sink ids.
    Sink(sink::SinkCommand),

    /// Render acceptance test fixtures.
    Fixture(fixture::FixtureCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            config,
            format: self.format,
        };

        match self.command {
            Commands::Sink(cmd) => cmd.run(ctx),
            Commands::Fixture(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("tfgcp {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}
