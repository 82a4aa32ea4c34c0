use chrono::NaiveTime;
use uuid::Uuid;

/// Short time-of-day label, as shown next to a task ("9:00 AM").
pub fn time_label(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// A single-occurrence to-do item on the dashboard.
///
/// Only the completion flag and the first-completion position ever change
/// after creation, and only through `TaskManager::toggle_completion`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    id: Uuid,
    title: String,
    time: String,
    is_completed: bool,
    original_position: Option<usize>,
}

impl TaskItem {
    /// An empty `time` means the task is untimed.
    pub fn new(title: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            time: time.into(),
            is_completed: false,
            original_position: None,
        }
    }

    pub fn untimed(title: impl Into<String>) -> Self {
        Self::new(title, String::new())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn is_timed(&self) -> bool {
        !self.time.is_empty()
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Index the task held when it was first completed.
    pub fn original_position(&self) -> Option<usize> {
        self.original_position
    }

    /// Flip completion. The first transition to completed pins `position`.
    pub(crate) fn toggle(&mut self, position: usize) {
        self.is_completed = !self.is_completed;
        if self.is_completed && self.original_position.is_none() {
            self.original_position = Some(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_incomplete_without_position() {
        let task = TaskItem::new("Walk dog", "8:00 AM");
        assert!(!task.is_completed());
        assert!(task.is_timed());
        assert_eq!(task.original_position(), None);
        assert!(!TaskItem::untimed("Email").is_timed());
    }

    #[test]
    fn toggle_pins_position_once() {
        let mut task = TaskItem::untimed("Email");
        task.toggle(3);
        assert_eq!(task.original_position(), Some(3));
        task.toggle(0);
        assert!(!task.is_completed());
        task.toggle(5);
        assert!(task.is_completed());
        assert_eq!(task.original_position(), Some(3));
    }

    #[test]
    fn time_label_uses_short_clock() {
        let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let afternoon = NaiveTime::from_hms_opt(14, 5, 0).unwrap();
        assert_eq!(time_label(nine), "9:00 AM");
        assert_eq!(time_label(afternoon), "2:05 PM");
    }
}
