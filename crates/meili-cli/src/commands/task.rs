//! Task commands

use std::time::Duration;

use clap::{Args, Subcommand};
use meili_client::{TaskId, TaskStatus, TaskType, TasksQuery};

use crate::output::{new_table, print_output, OutputFormat};
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommands,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Show one task
    Get {
        /// Task uid
        id: u64,
    },
    /// List tasks, newest first
    List {
        /// Only tasks of these indexes
        #[arg(long = "index", value_delimiter = ',')]
        indexes: Vec<String>,
        /// Only tasks with these statuses
        #[arg(long = "status", value_delimiter = ',')]
        statuses: Vec<TaskStatus>,
        /// Only tasks of these types
        #[arg(long = "type", value_delimiter = ',')]
        types: Vec<TaskType>,
        /// Maximum number of tasks
        #[arg(short, long)]
        limit: Option<usize>,
        /// Start listing from this task uid
        #[arg(long)]
        from: Option<u64>,
    },
    /// Wait until a task is finished
    Wait {
        /// Task uid
        id: u64,
        /// Pause between two checks, in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,
        /// Give up after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
}

pub async fn run(args: &TaskArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let format = cli.output_format();

    match &args.command {
        TaskCommands::Get { id } => {
            let task = ctx.client.tasks().get(TaskId(*id)).await?;
            print_output(&task, format);
        }
        TaskCommands::List {
            indexes,
            statuses,
            types,
            limit,
            from,
        } => {
            let mut query = TasksQuery::new();
            for uid in indexes {
                query = query.with_index_uid(uid.as_str());
            }
            for status in statuses {
                query = query.with_status(*status);
            }
            for task_type in types {
                query = query.with_type(*task_type);
            }
            if let Some(limit) = limit {
                query = query.with_limit(*limit);
            }
            if let Some(from) = from {
                query = query.with_from(*from);
            }

            let page = ctx.client.tasks().list(Some(&query)).await?;
            match format {
                OutputFormat::Json => print_output(&page, format),
                OutputFormat::Table if page.results.is_empty() => println!("No tasks found"),
                OutputFormat::Table => {
                    let mut table = new_table(&["Uid", "Status", "Type", "Index", "Enqueued"]);
                    for task in &page.results {
                        table.add_row(vec![
                            task.uid.to_string(),
                            task.status.to_string(),
                            task.task_type.to_string(),
                            task.index_uid.clone().unwrap_or_default(),
                            task.enqueued_at.to_rfc3339(),
                        ]);
                    }
                    println!("{}", table);
                    if let Some(next) = page.next {
                        println!("More tasks with --from {}", next);
                    }
                }
            }
        }
        TaskCommands::Wait {
            id,
            interval_ms,
            timeout_ms,
        } => {
            let mut options = ctx.poll;
            if let Some(ms) = interval_ms {
                options = options.with_interval(Duration::from_millis(*ms));
            }
            if let Some(ms) = timeout_ms {
                options = options.with_timeout(Duration::from_millis(*ms));
            }

            let task = ctx.client.wait_for_task(TaskId(*id), options).await?;
            print_output(&task, format);
            if task.is_failed() {
                anyhow::bail!("Task {} failed", task.uid);
            }
        }
    }

    Ok(())
}
