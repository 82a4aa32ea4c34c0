//! Access to the device calendar.
//!
//! Stores are queried through explicit async calls; the caller awaits the
//! result and applies it to its `CalendarManager` synchronously.

pub mod memory;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::core::event::{CalendarEvent, NewEvent};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Calendar access was denied")]
    AccessDenied,
    #[error("Calendar store is read-only")]
    ReadOnly,
    #[error("No default calendar for new events")]
    NoDefaultCalendar,
    #[error("Calendar store error: {0}")]
    Store(String),
}

#[async_trait]
pub trait CalendarStore: Send + Sync {
    /// Ask for permission to read and write events. Returns whether it was granted.
    async fn request_access(&self) -> Result<bool, CalendarError>;

    /// Names of the calendars holding events.
    fn calendars(&self) -> Vec<String>;

    fn default_calendar(&self) -> Option<String>;

    /// Events from `calendars` overlapping `[start, end]`, ordered by start.
    async fn events_matching(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        calendars: &[String],
    ) -> Result<Vec<CalendarEvent>, CalendarError>;

    async fn save(&mut self, event: CalendarEvent) -> Result<(), CalendarError>;
}

/// Events within `window_days` of `now`, from every calendar of the store.
pub async fn fetch_window<S>(
    store: &S,
    now: NaiveDateTime,
    window_days: i64,
) -> Result<Vec<CalendarEvent>, CalendarError>
where
    S: CalendarStore + ?Sized,
{
    let span = Duration::try_days(window_days)
        .filter(|span| *span >= Duration::zero())
        .ok_or_else(|| CalendarError::Store(format!("Invalid calendar window: {} days", window_days)))?;
    let (Some(start), Some(end)) = (now.checked_sub_signed(span), now.checked_add_signed(span)) else {
        return Err(CalendarError::Store(format!(
            "Calendar window of {} days is out of range",
            window_days
        )));
    };
    let calendars = store.calendars();
    store.events_matching(start, end, &calendars).await
}

/// Cached view of the events around today.
#[derive(Debug, Clone)]
pub struct CalendarManager {
    events: Vec<CalendarEvent>,
    window_days: i64,
}

impl Default for CalendarManager {
    fn default() -> Self {
        Self::new(30)
    }
}

impl CalendarManager {
    pub fn new(window_days: i64) -> Self {
        Self {
            events: Vec::new(),
            window_days,
        }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn apply(&mut self, events: Vec<CalendarEvent>) {
        log::info!("Loaded {} calendar events", events.len());
        self.events = events;
    }

    pub async fn load<S>(&mut self, store: &S, now: NaiveDateTime) -> Result<(), CalendarError>
    where
        S: CalendarStore + ?Sized,
    {
        let events = fetch_window(store, now, self.window_days).await?;
        self.apply(events);
        Ok(())
    }

    pub async fn request_access_and_load<S>(
        &mut self,
        store: &S,
        now: NaiveDateTime,
    ) -> Result<(), CalendarError>
    where
        S: CalendarStore + ?Sized,
    {
        if !store.request_access().await? {
            log::warn!("Calendar access denied, events not loaded");
            return Err(CalendarError::AccessDenied);
        }
        self.load(store, now).await
    }

    /// Save a new event to the store's default calendar, then reload.
    pub async fn add_event<S>(
        &mut self,
        store: &mut S,
        new_event: NewEvent,
        now: NaiveDateTime,
    ) -> Result<(), CalendarError>
    where
        S: CalendarStore + ?Sized,
    {
        let calendar = store
            .default_calendar()
            .ok_or(CalendarError::NoDefaultCalendar)?;
        let event = new_event.into_event(calendar);
        log::debug!("Saving event {:?} ({})", event.title, event.identifier);

        if let Err(e) = store.save(event).await {
            log::error!("Failed to save event: {}", e);
            return Err(e);
        }
        self.load(&*store, now).await
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        self.events.iter().filter(|e| e.is_on(date)).collect()
    }
}
