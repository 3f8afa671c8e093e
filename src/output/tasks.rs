//! Task output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{escape_csv, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::ecloud::{Task, TaskStatus};

/// Serializable task for structured output (JSON/YAML)
#[derive(Serialize)]
struct SerializableTask {
    id: String,
    resource_id: String,
    name: String,
    status: TaskStatus,
    created_at: String,
    updated_at: String,
}

impl From<&Task> for SerializableTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            resource_id: task.resource_id().to_string(),
            name: task.name().to_string(),
            status: task.status,
            created_at: task.created_at().to_string(),
            updated_at: task.updated_at().to_string(),
        }
    }
}

/// Output tasks in the specified format
pub fn output_tasks(tasks: &[Task], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => output_table(tasks, no_header),
        OutputFormat::Csv => output_csv(tasks, no_header),
        OutputFormat::Json => print_json(&serializable(tasks)),
        OutputFormat::Yaml => print_yaml(&serializable(tasks)),
    }
}

fn serializable(tasks: &[Task]) -> Vec<SerializableTask> {
    tasks.iter().map(SerializableTask::from).collect()
}

fn build_table(tasks: &[Task], no_header: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["ID", "RESOURCE ID", "NAME", "STATUS", "CREATED AT"]);
    }

    for task in tasks {
        table.add_row(vec![
            task.id.as_str(),
            task.resource_id(),
            task.name(),
            task.status.as_str(),
            task.created_at(),
        ]);
    }

    table
}

fn output_table(tasks: &[Task], no_header: bool) {
    println!("{}", build_table(tasks, no_header));
}

fn output_csv(tasks: &[Task], no_header: bool) {
    if !no_header {
        println!("ID,RESOURCE_ID,NAME,STATUS,CREATED_AT");
    }
    for task in tasks {
        println!(
            "{},{},{},{},{}",
            escape_csv(&task.id),
            escape_csv(task.resource_id()),
            escape_csv(task.name()),
            task.status,
            escape_csv(task.created_at())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_task(id: &str, name: &str, status: &str) -> Task {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "resource_id": "i-abcdef12",
            "name": name,
            "status": status,
            "created_at": "2024-01-01T00:00:00+00:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_serializable_task() {
        let task = create_test_task("task-abc", "instance_deploy", "in-progress");
        let serializable = SerializableTask::from(&task);

        assert_eq!(serializable.id, "task-abc");
        assert_eq!(serializable.name, "instance_deploy");
        assert_eq!(serializable.status, TaskStatus::InProgress);
        assert_eq!(serializable.updated_at, "");
    }

    #[test]
    fn test_json_uses_api_status_strings() {
        let tasks = [create_test_task("task-1", "vpc_create", "in-progress")];
        let json = serde_json::to_string_pretty(&serializable(&tasks)).unwrap();

        assert!(json.contains("\"id\": \"task-1\""));
        assert!(json.contains("\"status\": \"in-progress\""));
    }

    #[test]
    fn test_yaml_format() {
        let tasks = [create_test_task("task-1", "vpc_create", "complete")];
        let yaml = serde_yml::to_string(&serializable(&tasks)).unwrap();

        assert!(yaml.contains("id: task-1"));
        assert!(yaml.contains("status: complete"));
    }

    #[test]
    fn test_table_header_toggle() {
        let tasks = [create_test_task("task-1", "vpc_create", "complete")];

        let with_header = build_table(&tasks, false).to_string();
        assert!(with_header.contains("STATUS"));
        assert!(with_header.contains("task-1"));

        let without_header = build_table(&tasks, true).to_string();
        assert!(!without_header.contains("STATUS"));
    }

    #[test]
    fn test_output_tasks_all_formats_do_not_panic() {
        let tasks = [create_test_task("task-1", "a,b", "failed")];
        for format in [
            OutputFormat::Table,
            OutputFormat::Csv,
            OutputFormat::Json,
            OutputFormat::Yaml,
        ] {
            output_tasks(&tasks, format, false);
        }
        output_tasks(&[], OutputFormat::Table, true);
    }
}
