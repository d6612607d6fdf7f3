//! Server status commands

use crate::output::{print_output, OutputFormat};
use crate::{AppContext, Cli};

pub async fn health(cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let health = ctx.client.health().await?;
    match cli.output_format() {
        OutputFormat::Json => print_output(&health, OutputFormat::Json),
        OutputFormat::Table => println!("Server is {}", health.status),
    }
    anyhow::ensure!(health.is_available(), "server reported status {}", health.status);
    Ok(())
}

pub async fn version(cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let version = ctx.client.version().await?;
    match cli.output_format() {
        OutputFormat::Json => print_output(&version, OutputFormat::Json),
        OutputFormat::Table => println!(
            "{} (commit {}, {})",
            version.pkg_version, version.commit_sha, version.commit_date
        ),
    }
    Ok(())
}
