use std::cmp::Ordering;

use uuid::Uuid;

use super::habit::HabitItem;
use super::task::TaskItem;

/// Order two tasks for display.
///
/// Incomplete tasks come first. Within each group timed tasks precede
/// untimed ones, timed tasks compare by their label text and untimed ones by
/// the position they held when first completed (unset counts as 0).
///
/// Labels compare as strings, so "10:00 AM" sorts before "9:00 AM".
pub fn display_order(a: &TaskItem, b: &TaskItem) -> Ordering {
    if a.is_completed() != b.is_completed() {
        return a.is_completed().cmp(&b.is_completed());
    }
    match (a.is_timed(), b.is_timed()) {
        (false, false) => a
            .original_position()
            .unwrap_or(0)
            .cmp(&b.original_position().unwrap_or(0)),
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (true, true) => a.time().cmp(b.time()),
    }
}

/// Today's tasks and the habit templates they were derived from.
///
/// `version` increases on every mutation that changed the list, so callers
/// can tell when a rendered snapshot is stale.
#[derive(Debug, Clone, Default)]
pub struct TaskManager {
    tasks: Vec<TaskItem>,
    habits: Vec<HabitItem>,
    version: u64,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[TaskItem] {
        &self.tasks
    }

    pub fn habits(&self) -> &[HabitItem] {
        &self.habits
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn get(&self, id: Uuid) -> Option<&TaskItem> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Append a task. The list is not re-sorted.
    pub fn add_task(&mut self, task: TaskItem) {
        log::debug!("Adding task {:?} ({})", task.title(), task.id());
        self.tasks.push(task);
        self.version += 1;
    }

    /// Register a habit and add today's instance of it.
    pub fn add_habit(&mut self, habit: HabitItem) {
        let task = habit.materialize();
        log::debug!("Adding habit {:?} ({})", habit.title, habit.id);
        self.habits.push(habit);
        self.add_task(task);
    }

    /// Flip a task's completion and re-sort the list. Unknown ids are ignored.
    pub fn toggle_completion(&mut self, id: Uuid) {
        let Some(index) = self.tasks.iter().position(|t| t.id() == id) else {
            log::debug!("Ignoring toggle for unknown task {}", id);
            return;
        };

        self.tasks[index].toggle(index);
        log::debug!(
            "Task {:?} is now {}",
            self.tasks[index].title(),
            if self.tasks[index].is_completed() { "completed" } else { "open" }
        );

        self.tasks.sort_by(display_order);
        self.version += 1;
    }

    /// Open tasks in list order. Recomputed on every call.
    pub fn incomplete_tasks(&self) -> Vec<&TaskItem> {
        self.tasks.iter().filter(|t| !t.is_completed()).collect()
    }
}
