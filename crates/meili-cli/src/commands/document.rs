//! Document commands

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Subcommand};
use meili_client::{DocumentsQuery, Page};
use serde_json::Value;

use super::finish_write;
use crate::output::{print_output, OutputFormat};
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct DocumentArgs {
    #[command(subcommand)]
    pub command: DocumentCommands,
}

#[derive(Subcommand)]
pub enum DocumentCommands {
    /// Fetch one document by id
    Get {
        /// Index uid
        index: String,
        /// Document id
        id: String,
        /// Only return these fields
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,
    },
    /// List documents of an index
    List {
        /// Index uid
        index: String,
        /// Only return these fields
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,
        /// Maximum number of documents
        #[arg(short, long)]
        limit: Option<usize>,
        /// Number of documents to skip
        #[arg(long)]
        offset: Option<usize>,
    },
    /// Add or replace documents from a JSON array file
    Add {
        /// Index uid
        index: String,
        /// Path to a JSON file holding an array of documents
        file: PathBuf,
        /// Primary key to set on a fresh index
        #[arg(long)]
        primary_key: Option<String>,
        /// Wait for the task to finish
        #[arg(short, long)]
        wait: bool,
    },
    /// Add or partially update documents from a JSON array file
    Update {
        /// Index uid
        index: String,
        /// Path to a JSON file holding an array of documents
        file: PathBuf,
        /// Primary key to set on a fresh index
        #[arg(long)]
        primary_key: Option<String>,
        /// Wait for the task to finish
        #[arg(short, long)]
        wait: bool,
    },
    /// Delete one document
    Delete {
        /// Index uid
        index: String,
        /// Document id
        id: String,
        /// Wait for the task to finish
        #[arg(short, long)]
        wait: bool,
    },
    /// Delete every document of an index
    DeleteAll {
        /// Index uid
        index: String,
        /// Wait for the task to finish
        #[arg(short, long)]
        wait: bool,
    },
    /// Delete several documents by id
    DeleteBatch {
        /// Index uid
        index: String,
        /// Document ids
        #[arg(required = true)]
        ids: Vec<String>,
        /// Wait for the task to finish
        #[arg(short, long)]
        wait: bool,
    },
}

/// Read a payload file and make sure it holds a JSON array
fn read_documents(path: &Path) -> anyhow::Result<Vec<u8>> {
    let payload =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let parsed: Value = serde_json::from_slice(&payload)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    anyhow::ensure!(
        parsed.is_array(),
        "{} must contain a JSON array of documents",
        path.display()
    );
    Ok(payload)
}

pub async fn run(args: &DocumentArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let format = cli.output_format();

    match &args.command {
        DocumentCommands::Get { index, id, fields } => {
            let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
            let fields = (!fields.is_empty()).then_some(fields.as_slice());
            let document: Value = ctx.client.documents(index).get_one(id, fields).await?;
            print_output(&document, format);
        }
        DocumentCommands::List {
            index,
            fields,
            limit,
            offset,
        } => {
            let mut query = DocumentsQuery::new();
            if let Some(limit) = limit {
                query = query.with_limit(*limit);
            }
            if let Some(offset) = offset {
                query = query.with_offset(*offset);
            }
            if !fields.is_empty() {
                query = query.with_fields(fields.iter());
            }

            let page: Page<Value> = ctx.client.documents(index).get_all(Some(&query)).await?;
            tracing::info!("Fetched {} of {} documents", page.results.len(), page.total);

            match format {
                OutputFormat::Json => print_output(&page, format),
                OutputFormat::Table => {
                    print_output(&page.results, format);
                    println!(
                        "-- {} to {} of {}",
                        page.offset,
                        page.offset + page.results.len(),
                        page.total
                    );
                }
            }
        }
        DocumentCommands::Add {
            index,
            file,
            primary_key,
            wait,
        } => {
            let payload = read_documents(file)?;
            let info = ctx
                .client
                .documents(index)
                .add_raw(payload, primary_key.as_deref())
                .await?;
            finish_write(info, *wait, ctx, format).await?;
        }
        DocumentCommands::Update {
            index,
            file,
            primary_key,
            wait,
        } => {
            let payload = read_documents(file)?;
            let info = ctx
                .client
                .documents(index)
                .update_raw(payload, primary_key.as_deref())
                .await?;
            finish_write(info, *wait, ctx, format).await?;
        }
        DocumentCommands::Delete { index, id, wait } => {
            let info = ctx.client.documents(index).delete(id).await?;
            finish_write(info, *wait, ctx, format).await?;
        }
        DocumentCommands::DeleteAll { index, wait } => {
            let info = ctx.client.documents(index).delete_all().await?;
            finish_write(info, *wait, ctx, format).await?;
        }
        DocumentCommands::DeleteBatch { index, ids, wait } => {
            let info = ctx.client.documents(index).delete_batch(ids).await?;
            finish_write(info, *wait, ctx, format).await?;
        }
    }

    Ok(())
}
