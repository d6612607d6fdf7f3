//! Index commands

use clap::{Args, Subcommand};
use meili_client::IndexesQuery;

use super::finish_write;
use crate::output::{new_table, print_output, OutputFormat};
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct IndexArgs {
    #[command(subcommand)]
    pub command: IndexCommands,
}

#[derive(Subcommand)]
pub enum IndexCommands {
    /// List indexes
    List {
        /// Maximum number of indexes
        #[arg(short, long)]
        limit: Option<usize>,
        /// Number of indexes to skip
        #[arg(long)]
        offset: Option<usize>,
    },
    /// Show one index
    Get {
        /// Index uid
        uid: String,
    },
    /// Create an index
    Create {
        /// Index uid
        uid: String,
        /// Primary key attribute
        #[arg(long)]
        primary_key: Option<String>,
        /// Wait for the task to finish
        #[arg(short, long)]
        wait: bool,
    },
    /// Change the primary key of an empty index
    Update {
        /// Index uid
        uid: String,
        /// Primary key attribute
        #[arg(long)]
        primary_key: String,
        /// Wait for the task to finish
        #[arg(short, long)]
        wait: bool,
    },
    /// Delete an index and its documents
    Delete {
        /// Index uid
        uid: String,
        /// Wait for the task to finish
        #[arg(short, long)]
        wait: bool,
    },
}

pub async fn run(args: &IndexArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let format = cli.output_format();
    let indexes = ctx.client.indexes();

    match &args.command {
        IndexCommands::List { limit, offset } => {
            let mut query = IndexesQuery::new();
            if let Some(limit) = limit {
                query = query.with_limit(*limit);
            }
            if let Some(offset) = offset {
                query = query.with_offset(*offset);
            }

            let page = indexes.list(Some(&query)).await?;
            match format {
                OutputFormat::Json => print_output(&page, format),
                OutputFormat::Table if page.results.is_empty() => println!("No indexes found"),
                OutputFormat::Table => {
                    let mut table = new_table(&["Uid", "Primary key", "Created", "Updated"]);
                    for index in &page.results {
                        table.add_row(vec![
                            index.uid.clone(),
                            index.primary_key.clone().unwrap_or_default(),
                            index.created_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
                            index.updated_at.map(|t| t.to_rfc3339()).unwrap_or_default(),
                        ]);
                    }
                    println!("{}", table);
                    println!("{} of {} indexes", page.results.len(), page.total);
                }
            }
        }
        IndexCommands::Get { uid } => {
            let index = indexes.get(uid).await?;
            print_output(&index, format);
        }
        IndexCommands::Create {
            uid,
            primary_key,
            wait,
        } => {
            let info = indexes.create(uid, primary_key.as_deref()).await?;
            finish_write(info, *wait, ctx, format).await?;
        }
        IndexCommands::Update {
            uid,
            primary_key,
            wait,
        } => {
            let info = indexes.update(uid, Some(primary_key)).await?;
            finish_write(info, *wait, ctx, format).await?;
        }
        IndexCommands::Delete { uid, wait } => {
            let info = indexes.delete(uid).await?;
            finish_write(info, *wait, ctx, format).await?;
        }
    }

    Ok(())
}
