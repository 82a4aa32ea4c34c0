pub mod calendar;
pub mod dashboard;
pub mod goals;
pub mod settings;
pub mod tasks;

use axer::core::task::TaskItem;
use uuid::Uuid;

/// 1-based row of a task in the full task list, as accepted by `toggle`.
pub fn row_of(tasks: &[TaskItem], id: Uuid) -> usize {
    tasks.iter().position(|t| t.id() == id).map_or(0, |i| i + 1)
}

pub fn header(title: &str) -> String {
    format!("== {} ==\n", title)
}
