use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalColor {
    #[default]
    Blue,
    Green,
    Orange,
    Purple,
    Red,
}

impl GoalColor {
    pub const ALL: [GoalColor; 5] = [Self::Blue, Self::Green, Self::Orange, Self::Purple, Self::Red];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Red => "red",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name().eq_ignore_ascii_case(s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub current_value: f64,
    pub target_value: f64,
    pub unit: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub color: GoalColor,
    /// Daily reminder time; `None` when reminders are off.
    pub reminder: Option<NaiveTime>,
}

impl Goal {
    /// A goal running for 30 days from `start_date`.
    pub fn new(title: impl Into<String>, target_value: f64, start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            current_value: 0.0,
            target_value,
            unit: String::new(),
            start_date,
            end_date: start_date + Duration::days(30),
            color: GoalColor::default(),
            reminder: None,
        }
    }

    /// Fraction reached, between 0 and 1.
    pub fn progress(&self) -> f64 {
        if self.target_value <= 0.0 {
            return 0.0;
        }
        (self.current_value / self.target_value).clamp(0.0, 1.0)
    }

    /// Share of the target still to go, in percent. Negative once exceeded.
    pub fn remaining_percent(&self) -> f64 {
        if self.target_value <= 0.0 {
            return 0.0;
        }
        (self.target_value - self.current_value) / self.target_value * 100.0
    }

    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.end_date - today).num_days()
    }

    pub fn is_reached(&self) -> bool {
        self.target_value > 0.0 && self.current_value >= self.target_value
    }
}

#[derive(Debug, Clone, Default)]
pub struct GoalManager {
    goals: Vec<Goal>,
}

impl GoalManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn add_goal(&mut self, goal: Goal) {
        log::debug!("Adding goal {:?} ({})", goal.title, goal.id);
        self.goals.push(goal);
    }

    /// Replace the stored goal carrying the same id. Returns false if absent.
    pub fn update_goal(&mut self, goal: Goal) -> bool {
        match self.goals.iter_mut().find(|g| g.id == goal.id) {
            Some(slot) => {
                *slot = goal;
                true
            }
            None => {
                log::debug!("Ignoring update for unknown goal {}", goal.id);
                false
            }
        }
    }

    pub fn delete_goal(&mut self, id: Uuid) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        self.goals.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, 18).unwrap()
    }

    #[test]
    fn new_goal_spans_thirty_days() {
        let goal = Goal::new("Books read", 20.0, start());
        assert_eq!(goal.end_date, NaiveDate::from_ymd_opt(2026, 5, 18).unwrap());
        assert_eq!(goal.days_remaining(start()), 30);
        assert_eq!(goal.color, GoalColor::Blue);
    }

    #[test]
    fn progress_is_clamped() {
        let mut goal = Goal::new("Saved", 10_000.0, start());
        goal.current_value = 6_700.0;
        assert!((goal.progress() - 0.67).abs() < 1e-9);
        assert!((goal.remaining_percent() - 33.0).abs() < 1e-9);
        assert!(!goal.is_reached());

        goal.current_value = 12_000.0;
        assert_eq!(goal.progress(), 1.0);
        assert!(goal.is_reached());
    }

    #[test]
    fn zero_target_has_no_progress() {
        let mut goal = Goal::new("Nothing", 0.0, start());
        goal.current_value = 5.0;
        assert_eq!(goal.progress(), 0.0);
        assert!(!goal.is_reached());
    }

    #[test]
    fn update_and_delete_by_id() {
        let mut manager = GoalManager::new();
        let goal = Goal::new("Books read", 20.0, start());
        let id = goal.id;
        manager.add_goal(goal.clone());

        let mut changed = goal;
        changed.current_value = 8.0;
        assert!(manager.update_goal(changed));
        assert_eq!(manager.goals()[0].current_value, 8.0);

        assert!(!manager.update_goal(Goal::new("Stranger", 1.0, start())));
        assert_eq!(manager.goals().len(), 1);

        assert!(manager.delete_goal(id));
        assert!(!manager.delete_goal(id));
        assert!(manager.goals().is_empty());
    }

    #[test]
    fn color_names() {
        assert_eq!(GoalColor::from_name("Purple"), Some(GoalColor::Purple));
        assert_eq!(GoalColor::from_name("teal"), None);
    }
}
