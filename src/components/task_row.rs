use axer::core::task::TaskItem;

/// One checklist line: row number, checkbox, title and the time label.
pub fn task_row(row: usize, task: &TaskItem) -> String {
    let check = if task.is_completed() { "[x]" } else { "[ ]" };
    let title = if task.is_completed() {
        strikethrough(task.title())
    } else {
        task.title().to_string()
    };
    if task.is_timed() {
        format!("{:>3}. {} {:<32} {}", row, check, title, task.time())
    } else {
        format!("{:>3}. {} {}", row, check, title)
    }
}

fn strikethrough(s: &str) -> String {
    s.chars().flat_map(|c| [c, '\u{0336}']).collect()
}
