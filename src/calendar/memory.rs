use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::{CalendarError, CalendarStore};
use crate::core::event::CalendarEvent;

pub const DEFAULT_CALENDAR: &str = "Personal";

/// A calendar store kept entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryCalendarStore {
    events: Vec<CalendarEvent>,
    calendars: Vec<String>,
    access_granted: bool,
    writable: bool,
}

impl Default for MemoryCalendarStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCalendarStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            calendars: vec![DEFAULT_CALENDAR.to_string()],
            access_granted: true,
            writable: true,
        }
    }

    /// A store seeded with events. Their calendars become known to the store.
    pub fn with_events(events: Vec<CalendarEvent>) -> Self {
        let mut store = Self::new();
        for event in &events {
            if !store.calendars.contains(&event.calendar) {
                store.calendars.push(event.calendar.clone());
            }
        }
        store.events = events;
        store
    }

    pub fn denied() -> Self {
        Self {
            access_granted: false,
            ..Self::new()
        }
    }

    pub fn read_only() -> Self {
        Self {
            writable: false,
            ..Self::new()
        }
    }
}

#[async_trait]
impl CalendarStore for MemoryCalendarStore {
    async fn request_access(&self) -> Result<bool, CalendarError> {
        Ok(self.access_granted)
    }

    fn calendars(&self) -> Vec<String> {
        self.calendars.clone()
    }

    fn default_calendar(&self) -> Option<String> {
        self.calendars.first().cloned()
    }

    async fn events_matching(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        calendars: &[String],
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        if !self.access_granted {
            return Err(CalendarError::AccessDenied);
        }
        let mut events: Vec<CalendarEvent> = self
            .events
            .iter()
            .filter(|e| calendars.contains(&e.calendar) && e.overlaps(start, end))
            .cloned()
            .collect();
        events.sort_by_key(|e| e.start);
        Ok(events)
    }

    async fn save(&mut self, event: CalendarEvent) -> Result<(), CalendarError> {
        if !self.access_granted {
            return Err(CalendarError::AccessDenied);
        }
        if !self.writable {
            return Err(CalendarError::ReadOnly);
        }
        if !self.calendars.contains(&event.calendar) {
            return Err(CalendarError::Store(format!(
                "Unknown calendar: {}",
                event.calendar
            )));
        }
        self.events.push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::NewEvent;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 4, 18)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn query_respects_calendar_selection() {
        let store = MemoryCalendarStore::with_events(vec![
            NewEvent::new("Standup", noon()).into_event("Work"),
            NewEvent::new("Lunch", noon()).into_event("Home"),
        ]);
        let only_work = vec!["Work".to_string()];
        let events = store
            .events_matching(noon(), noon(), &only_work)
            .await
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Standup");
    }

    #[tokio::test]
    async fn save_into_unknown_calendar_fails() {
        let mut store = MemoryCalendarStore::new();
        let event = NewEvent::new("Lunch", noon()).into_event("Elsewhere");
        assert!(matches!(
            store.save(event).await,
            Err(CalendarError::Store(_))
        ));
    }
}
