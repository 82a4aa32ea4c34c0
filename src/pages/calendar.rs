use std::fmt::Write;

use axer::calendar::CalendarManager;
use axer::core::event::CalendarEvent;
use axer::core::task::time_label;
use axer::core::task_manager::TaskManager;
use chrono::NaiveDate;

use crate::components::task_row::task_row;

fn event_span(event: &CalendarEvent) -> String {
    if event.all_day {
        "All Day".to_string()
    } else {
        format!("{} - {}", time_label(event.start.time()), time_label(event.end.time()))
    }
}

/// Today's calendar events followed by every task, completed ones included.
pub fn calendar_view(calendar: &CalendarManager, tasks: &TaskManager, today: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", today.format("%B %Y"));

    let events = calendar.events_on(today);
    if !events.is_empty() {
        out.push_str("Calendar Events\n");
        for event in events {
            let _ = writeln!(out, "  o {}  {} ({})", event.title, event_span(event), event.calendar);
            if !event.notes.is_empty() {
                let _ = writeln!(out, "      {}", event.notes);
            }
        }
        out.push('\n');
    }

    if !tasks.tasks().is_empty() {
        out.push_str("Today's Tasks\n");
        for (i, task) in tasks.tasks().iter().enumerate() {
            let _ = writeln!(out, "{}", task_row(i + 1, task));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use axer::core::event::NewEvent;

    #[test]
    fn spans() {
        let date = NaiveDate::from_ymd_opt(2026, 4, 18).unwrap();
        let timed = NewEvent::new("Standup", date.and_hms_opt(9, 0, 0).unwrap()).into_event("Work");
        let all_day = NewEvent::all_day("Holiday", date).into_event("Home");
        assert_eq!(event_span(&timed), "9:00 AM - 10:00 AM");
        assert_eq!(event_span(&all_day), "All Day");
    }

    #[test]
    fn lists_events_of_the_day() {
        let date = NaiveDate::from_ymd_opt(2026, 4, 18).unwrap();
        let mut calendar = CalendarManager::default();
        calendar.apply(vec![
            NewEvent::new("Standup", date.and_hms_opt(9, 0, 0).unwrap()).into_event("Work"),
            NewEvent::all_day("Tomorrow", date.succ_opt().unwrap()).into_event("Home"),
        ]);

        let view = calendar_view(&calendar, &TaskManager::new(), date);
        assert!(view.contains("Standup"));
        assert!(!view.contains("Tomorrow"));
        assert!(!view.contains("Today's Tasks"));
    }

    #[test]
    fn notes_follow_their_event() {
        let date = NaiveDate::from_ymd_opt(2026, 4, 18).unwrap();
        let mut event = NewEvent::new("Dentist", date.and_hms_opt(15, 0, 0).unwrap());
        event.notes = "bring x-rays".into();
        let mut calendar = CalendarManager::default();
        calendar.apply(vec![event.into_event("Home")]);

        let view = calendar_view(&calendar, &TaskManager::new(), date);
        assert!(view.contains("Dentist  3:00 PM - 4:00 PM (Home)\n      bring x-rays\n"));
    }
}
