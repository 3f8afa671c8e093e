//! Task command handlers

use log::debug;

use crate::cli::{
    Cli, ResourceAction, ResourceTaskAction, TaskAction, TaskListArgs, TaskShowArgs, TaskWaitArgs,
};
use crate::ecloud::helpers::{collect_item_results, fetch_each, CommandOutcome};
use crate::ecloud::resources::ResourceKind;
use crate::ecloud::EcloudClient;
use crate::error::{EcloudError, Result};
use crate::output::output_tasks;
use crate::settings::Settings;
use crate::ui::{clear_spinner, create_spinner, finish_spinner};
use crate::wait::wait_for_tasks;

use super::checks::{resource_task_status_check, task_status_check};
use super::models::TaskStatus;

/// Run a top-level `task` command
pub async fn run_task_command(
    client: &EcloudClient,
    cli: &Cli,
    settings: &Settings,
    action: &TaskAction,
) -> Result<CommandOutcome> {
    match action {
        TaskAction::List(args) => run_task_list(client, cli, args).await,
        TaskAction::Show(args) => run_task_show(client, cli, args).await,
        TaskAction::Wait(args) => run_task_wait(client, cli, settings, args).await,
    }
}

/// Run a nested `<resource> task ...` command
pub async fn run_resource_task_command(
    client: &EcloudClient,
    cli: &Cli,
    settings: &Settings,
    kind: ResourceKind,
    action: &ResourceAction,
) -> Result<CommandOutcome> {
    let ResourceAction::Task {
        action: ResourceTaskAction::Wait(args),
    } = action;

    // Validate before any request is made
    let expected: TaskStatus = args.status.parse()?;
    let subject = format!("{} task", kind.label());

    debug!(
        "Waiting for {} task(s) of {} [{}]",
        args.task_ids.len(),
        kind.label(),
        args.resource_id
    );

    let summary = wait_for_tasks(
        &args.task_ids,
        &subject,
        &settings.wait,
        expected,
        cli.batch,
        |task_id| resource_task_status_check(client, kind, &args.resource_id, task_id),
    )
    .await;

    Ok(summary.into())
}

async fn run_task_list(
    client: &EcloudClient,
    cli: &Cli,
    args: &TaskListArgs,
) -> Result<CommandOutcome> {
    let status = args
        .status
        .as_deref()
        .map(str::parse::<TaskStatus>)
        .transpose()?;

    let spinner = create_spinner("Fetching tasks...", cli.batch);
    let tasks = match client.get_tasks(status).await {
        Ok(tasks) => tasks,
        Err(e) => {
            clear_spinner(spinner);
            return Err(e);
        }
    };
    finish_spinner(spinner, &format!("Fetched {} task(s)", tasks.len()));

    output_tasks(&tasks, args.output, args.no_header);
    Ok(CommandOutcome::success())
}

async fn run_task_show(
    client: &EcloudClient,
    cli: &Cli,
    args: &TaskShowArgs,
) -> Result<CommandOutcome> {
    let spinner = create_spinner(
        &format!("Fetching {} task(s)...", args.task_ids.len()),
        cli.batch,
    );

    let results = fetch_each(&args.task_ids, |task_id| async move {
        match client.get_task(&task_id).await {
            Ok(Some(task)) => Ok(task),
            Ok(None) => {
                let e = EcloudError::NotFound(format!("Task [{}] not found", task_id));
                Err((task_id, e))
            }
            Err(e) => Err((task_id, e)),
        }
    })
    .await;

    clear_spinner(spinner);

    let (tasks, failures) = collect_item_results(results, "task");
    if !tasks.is_empty() {
        output_tasks(&tasks, args.output, args.no_header);
    }

    Ok(CommandOutcome { failures })
}

async fn run_task_wait(
    client: &EcloudClient,
    cli: &Cli,
    settings: &Settings,
    args: &TaskWaitArgs,
) -> Result<CommandOutcome> {
    // Validate before any request is made
    let expected: TaskStatus = args.status.parse()?;

    let summary = wait_for_tasks(
        &args.task_ids,
        "task",
        &settings.wait,
        expected,
        cli.batch,
        |task_id| task_status_check(client, task_id),
    )
    .await;

    Ok(summary.into())
}
