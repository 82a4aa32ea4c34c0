use std::fmt::Write;

use axer::core::task_manager::TaskManager;

use crate::components::task_row::task_row;

/// Every task in display order, completed ones included.
pub fn tasks_view(tasks: &TaskManager) -> String {
    if tasks.tasks().is_empty() {
        return "No tasks yet: add <title> [at <time>]\n".to_string();
    }
    let done = tasks.tasks().iter().filter(|t| t.is_completed()).count();
    let mut out = String::new();
    for (i, task) in tasks.tasks().iter().enumerate() {
        let _ = writeln!(out, "{}", task_row(i + 1, task));
    }
    let _ = writeln!(out, "\n{} of {} done", done, tasks.tasks().len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use axer::core::task::TaskItem;

    #[test]
    fn empty_list_hints_at_add() {
        assert!(tasks_view(&TaskManager::new()).starts_with("No tasks yet"));
    }

    #[test]
    fn completed_tasks_follow_open_ones() {
        let mut tasks = TaskManager::new();
        tasks.add_task(TaskItem::untimed("Email"));
        tasks.add_task(TaskItem::untimed("Call mom"));
        let email = tasks.tasks()[0].id();
        tasks.toggle_completion(email);

        let view = tasks_view(&tasks);
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines[0], "  1. [ ] Call mom");
        assert!(lines[1].starts_with("  2. [x] E"));
        assert!(view.ends_with("1 of 2 done\n"));
    }
}
