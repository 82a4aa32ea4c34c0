use std::fmt::Write;

use axer::core::goal::GoalManager;
use chrono::NaiveDate;

use crate::components::goal_widget::goal_widget;

pub fn goals_view(goals: &GoalManager, today: NaiveDate) -> String {
    if goals.goals().is_empty() {
        return "No Goals Yet\nAdd your first goal to get started: goal <title> target <value> [unit]\n"
            .to_string();
    }
    let mut out = String::new();
    for (i, goal) in goals.goals().iter().enumerate() {
        let _ = writeln!(out, "{}", goal_widget(i + 1, goal, today));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use axer::core::goal::Goal;

    #[test]
    fn empty_and_listed() {
        let today = NaiveDate::from_ymd_opt(2026, 4, 18).unwrap();
        let mut goals = GoalManager::new();
        assert!(goals_view(&goals, today).starts_with("No Goals Yet"));

        goals.add_goal(Goal::new("Books read", 20.0, today));
        goals.add_goal(Goal::new("Saved", 10_000.0, today));
        let view = goals_view(&goals, today);
        assert!(view.contains("  1. Books read"));
        assert!(view.contains("  2. Saved"));
    }
}
