//! Meili CLI - Command line interface for a Meili search server

use std::time::Duration;

use clap::{Parser, Subcommand};
use meili_client::{Client, ClientConfig, PollOptions};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, document, index, server, task};
use config::Config;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "meili")]
#[command(author, version, about = "Command line client for Meili search servers")]
pub struct Cli {
    /// Server address (overrides the config file)
    #[arg(long, env = "MEILI_HOST", global = true)]
    pub host: Option<String>,

    /// API key sent as a bearer token
    #[arg(long, env = "MEILI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Output format: table, json
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from(self.format.as_str())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read and write documents
    Document(document::DocumentArgs),
    /// Manage indexes
    Index(index::IndexArgs),
    /// Inspect and wait for tasks
    Task(task::TaskArgs),
    /// Check server health
    Health,
    /// Show server version
    Version,
    /// Manage CLI configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with a connected client
pub struct AppContext {
    pub client: Client,
    pub poll: PollOptions,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let config = Config::try_load()?;

        let host = cli.host.clone().unwrap_or(config.host);
        let mut client_config = ClientConfig::new(host);
        if let Some(key) = cli.api_key.clone().or(config.api_key) {
            client_config = client_config.with_api_key(key);
        }
        tracing::debug!("Using server at: {}", client_config.host);

        let client = Client::new(client_config)?;
        let poll = PollOptions::new(
            Duration::from_millis(config.poll_interval_ms),
            Duration::from_millis(config.timeout_ms),
        );

        Ok(Self { client, poll })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting meili CLI");

    // These never talk to the server
    match &cli.command {
        Commands::Config(args) => return commands::config::run(args).await,
        Commands::Completions(args) => return completions::run(args),
        _ => {}
    }

    let ctx = AppContext::new(&cli)?;

    match &cli.command {
        Commands::Document(args) => document::run(args, &cli, &ctx).await?,
        Commands::Index(args) => index::run(args, &cli, &ctx).await?,
        Commands::Task(args) => task::run(args, &cli, &ctx).await?,
        Commands::Health => server::health(&cli, &ctx).await?,
        Commands::Version => server::version(&cli, &ctx).await?,
        Commands::Config(_) | Commands::Completions(_) => {}
    }

    Ok(())
}
