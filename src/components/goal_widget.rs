use axer::core::goal::Goal;
use axer::core::task::time_label;
use chrono::NaiveDate;

const BAR_WIDTH: usize = 20;

fn progress_bar(progress: f64) -> String {
    let filled = (progress * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH.saturating_sub(filled))
    )
}

/// Progress bar, percentage, values and time left for one goal.
pub fn goal_widget(row: usize, goal: &Goal, today: NaiveDate) -> String {
    let percent = (goal.progress() * 100.0).round() as u32;
    let mut out = format!(
        "{:>3}. {} {} {:>3}%  ({})\n",
        row,
        goal.title,
        progress_bar(goal.progress()),
        percent,
        goal.color.name(),
    );
    if !goal.description.is_empty() {
        out.push_str(&format!("     {}\n", goal.description));
    }
    out.push_str(&format!(
        "     {} {} of {} {}",
        goal.current_value,
        goal.unit,
        goal.target_value,
        goal.unit,
    ));
    if goal.progress() > 0.0 {
        out.push_str(&format!(", {:.0}% remaining", goal.remaining_percent().max(0.0)));
    }
    let days = goal.days_remaining(today);
    if goal.is_reached() {
        out.push_str(", reached");
    } else if days >= 0 {
        out.push_str(&format!(", {} days left", days));
    } else {
        out.push_str(", ended");
    }
    if let Some(reminder) = goal.reminder {
        out.push_str(&format!(", reminder {}", time_label(reminder)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0), format!("[{}]", "-".repeat(20)));
        assert_eq!(progress_bar(0.5), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(progress_bar(1.0), format!("[{}]", "#".repeat(20)));
    }

    #[test]
    fn widget_shows_remaining() {
        let today = NaiveDate::from_ymd_opt(2026, 4, 18).unwrap();
        let mut goal = Goal::new("Books read", 20.0, today);
        goal.current_value = 8.0;
        goal.unit = "books".into();

        let text = goal_widget(1, &goal, today);
        assert!(text.contains(" 40%"));
        assert!(text.contains("8 books of 20 books"));
        assert!(text.contains("60% remaining"));
        assert!(text.contains("30 days left"));
        assert!(!text.contains("reminder"));
    }

    #[test]
    fn widget_shows_description_and_reminder() {
        let today = NaiveDate::from_ymd_opt(2026, 4, 18).unwrap();
        let mut goal = Goal::new("Run", 100.0, today);
        goal.description = "One lap a day".into();
        goal.reminder = chrono::NaiveTime::from_hms_opt(19, 15, 0);

        let text = goal_widget(2, &goal, today);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "     One lap a day");
        assert!(lines[2].ends_with(", 30 days left, reminder 7:15 PM"));
    }
}
