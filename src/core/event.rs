use chrono::{Duration, NaiveDate, NaiveDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub identifier: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    pub notes: String,
    /// Name of the calendar holding the event.
    pub calendar: String,
}

impl CalendarEvent {
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.start.date() == date
    }

    /// Whether any part of the event falls inside `[start, end]`.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start <= end && self.end >= start
    }
}

/// An event the user is about to create. The end is derived from the start.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub all_day: bool,
    pub notes: String,
}

impl NewEvent {
    pub fn new(title: impl Into<String>, start: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            start,
            all_day: false,
            notes: String::new(),
        }
    }

    pub fn all_day(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            start: date.and_time(chrono::NaiveTime::MIN),
            all_day: true,
            notes: String::new(),
        }
    }

    /// All-day events last one day, timed events one hour.
    pub fn end(&self) -> NaiveDateTime {
        if self.all_day {
            self.start + Duration::days(1)
        } else {
            self.start + Duration::hours(1)
        }
    }

    pub fn into_event(self, calendar: impl Into<String>) -> CalendarEvent {
        let end = self.end();
        CalendarEvent {
            identifier: Uuid::new_v4().to_string(),
            title: self.title,
            start: self.start,
            end,
            all_day: self.all_day,
            notes: self.notes,
            calendar: calendar.into(),
        }
    }
}
