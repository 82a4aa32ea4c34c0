use std::fmt::Write;

use axer::core::goal::GoalManager;
use axer::core::task_manager::TaskManager;
use chrono::NaiveDate;

use crate::components::goal_widget::goal_widget;
use crate::components::task_row::task_row;

use super::row_of;

/// Date, goal overview and today's open tasks.
pub fn dashboard_view(tasks: &TaskManager, goals: &GoalManager, today: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", today.format("%A, %B %-d, %Y"));

    out.push_str("Goals\n");
    if goals.goals().is_empty() {
        out.push_str("  No goals yet\n");
    }
    for (i, goal) in goals.goals().iter().take(2).enumerate() {
        let _ = writeln!(out, "{}", goal_widget(i + 1, goal, today));
    }

    out.push_str("\nToday's Tasks\n");
    let open = tasks.incomplete_tasks();
    if open.is_empty() {
        out.push_str("  Nothing left to do\n");
    }
    for task in open {
        let _ = writeln!(out, "{}", task_row(row_of(tasks.tasks(), task.id()), task));
    }
    out
}
