use chrono::Weekday;
use uuid::Uuid;

use super::task::TaskItem;

const ALL_DAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// A recurring template from which same-day tasks are derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitItem {
    pub id: Uuid,
    pub title: String,
    pub time: String,
    pub days: Vec<Weekday>,
}

impl HabitItem {
    /// An empty day selection repeats on every day of the week.
    pub fn new(title: impl Into<String>, time: impl Into<String>, days: Vec<Weekday>) -> Self {
        let days = if days.is_empty() { ALL_DAYS.to_vec() } else { days };
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            time: time.into(),
            days,
        }
    }

    pub fn repeats_on(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Today's instance of the habit.
    pub fn materialize(&self) -> TaskItem {
        TaskItem::new(self.title.clone(), self.time.clone())
    }
}
