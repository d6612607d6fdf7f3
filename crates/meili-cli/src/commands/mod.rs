//! CLI command implementations

pub mod completions;
pub mod config;
pub mod document;
pub mod index;
pub mod server;
pub mod task;

use meili_client::TaskInfo;

use crate::output::{print_output, OutputFormat};
use crate::AppContext;

/// Report a write: print the enqueued task, or wait for it when asked
pub async fn finish_write(
    info: TaskInfo,
    wait: bool,
    ctx: &AppContext,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if !wait {
        match format {
            OutputFormat::Json => print_output(&info, format),
            OutputFormat::Table => println!(
                "Enqueued task {} ({}) on {}",
                info.task_uid,
                info.task_type,
                info.index_uid.as_deref().unwrap_or("-")
            ),
        }
        return Ok(());
    }

    let task = ctx.client.wait_for_task(&info, ctx.poll).await?;
    tracing::info!("Task {} finished as {}", task.uid, task.status);

    match format {
        OutputFormat::Json => print_output(&task, format),
        OutputFormat::Table => println!("Task {} {}", task.uid, task.status),
    }

    if task.is_failed() {
        let reason = task
            .error
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no error reported".to_string());
        anyhow::bail!("Task {} failed: {}", task.uid, reason);
    }
    Ok(())
}
