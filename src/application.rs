use chrono::NaiveDateTime;

use axer::calendar::{CalendarManager, CalendarStore};
use axer::config::AxerConfig;
use axer::core::goal::GoalManager;
use axer::core::habit::HabitItem;
use axer::core::task::{TaskItem, time_label};
use axer::core::task_manager::TaskManager;

use crate::message::{Message, Page};
use crate::pages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    Normal,
    Today,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

const HELP: &str = "\
Commands:
  dashboard | list | calendar | goals | settings
  add <title> [at <time>]             add a task for today
  habit <title> at <time> [on <days>] add a habit and today's task for it
  toggle <row>                        complete or reopen a task
  event <title> on <YYYY-MM-DD> [at <time>] [notes <text>]
  reload                              reload calendar events
  goal <title> target <value> [unit] [color <color>] [until <YYYY-MM-DD>]
       [remind at <time>] [notes <text>]
  progress <goal> <value>             set a goal's current value
  delete-goal <goal>
  themes                              list the available themes
  theme <name>                        switch theme
  debug                               toggle debug logging
  quit
";

/// Application state shared by every page.
pub struct Axer<S: CalendarStore> {
    pub config: AxerConfig,
    pub tasks: TaskManager,
    pub goals: GoalManager,
    pub calendar: CalendarManager,
    store: S,
    page: Page,
    notice: Option<String>,
}

impl<S: CalendarStore> Axer<S> {
    pub fn new(config: AxerConfig, store: S) -> Self {
        let calendar = CalendarManager::new(config.calendar_window_days);
        Self {
            config,
            tasks: TaskManager::new(),
            goals: GoalManager::new(),
            calendar,
            store,
            page: Page::Dashboard,
            notice: None,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Load calendar events, reporting failures as a notice.
    pub async fn init(&mut self, now: NaiveDateTime) {
        if let Err(e) = self.calendar.request_access_and_load(&self.store, now).await {
            log::warn!("Calendar unavailable: {}", e);
            self.notice = Some(format!("Calendar unavailable: {}", e));
        }
    }

    pub async fn update(&mut self, message: Message, now: NaiveDateTime) -> Flow {
        match message {
            Message::Show(page) => {
                self.page = page;
            }

            Message::Help => {
                self.notice = Some(HELP.to_string());
            }

            Message::Quit => return Flow::Exit,

            Message::ListThemes => {
                self.notice = Some(pages::settings::theme_list(self.config.theme));
            }

            Message::AddTask(title, time) => {
                let label = time.map(time_label).unwrap_or_default();
                self.tasks.add_task(TaskItem::new(title, label));
            }

            Message::AddHabit(title, time, days) => {
                self.tasks
                    .add_habit(HabitItem::new(title, time_label(time), days));
            }

            Message::ToggleTask(row) => match row.checked_sub(1).and_then(|i| self.tasks.tasks().get(i)) {
                Some(task) => {
                    let id = task.id();
                    self.tasks.toggle_completion(id);
                }
                None => {
                    self.notice = Some(format!("No task in row {}", row));
                }
            },

            Message::AddEvent(new_event) => {
                let title = new_event.title.clone();
                if let Err(e) = self
                    .calendar
                    .add_event(&mut self.store, new_event, now)
                    .await
                {
                    self.notice = Some(format!("Could not save {:?}: {}", title, e));
                }
                self.page = Page::Calendar;
            }

            Message::ReloadCalendar => {
                if let Err(e) = self.calendar.load(&self.store, now).await {
                    log::error!("Failed to reload calendar: {}", e);
                    self.notice = Some(format!("Failed to reload calendar: {}", e));
                }
            }

            Message::AddGoal(form) => match form.into_goal(now.date()) {
                Ok(goal) => {
                    self.goals.add_goal(goal);
                    self.page = Page::Goals;
                }
                Err(e) => {
                    self.notice = Some(e);
                }
            },

            Message::SetGoalProgress(row, value) => match row.checked_sub(1).and_then(|i| self.goals.goals().get(i)) {
                Some(goal) => {
                    let mut goal = goal.clone();
                    goal.current_value = value;
                    self.goals.update_goal(goal);
                }
                None => {
                    self.notice = Some(format!("No goal in row {}", row));
                }
            },

            Message::DeleteGoal(row) => match row.checked_sub(1).and_then(|i| self.goals.goals().get(i)) {
                Some(goal) => {
                    let id = goal.id;
                    self.goals.delete_goal(id);
                }
                None => {
                    self.notice = Some(format!("No goal in row {}", row));
                }
            },

            Message::SetTheme(theme) => {
                log::info!("Theme set to {}", theme);
                self.config.theme = theme;
            }

            Message::ToggleDebugLogging => {
                self.config.debug_logging = !self.config.debug_logging;
                axer::set_debug_logging(self.config.debug_logging);
            }

            Message::Invalid(reason) => {
                self.notice = Some(reason);
            }
        }
        Flow::Continue
    }

    /// Render the current page, preceded by any pending notice.
    pub fn view(&mut self, now: NaiveDateTime) -> String {
        let today = now.date();
        let mut out = self
            .notice
            .take()
            .map(|n| format!("{}\n\n", n.trim_end()))
            .unwrap_or_default();
        out.push_str(&pages::header(self.page.title()));
        out.push_str(&match self.page {
            Page::Dashboard => pages::dashboard::dashboard_view(&self.tasks, &self.goals, today),
            Page::Tasks => pages::tasks::tasks_view(&self.tasks),
            Page::Calendar => pages::calendar::calendar_view(&self.calendar, &self.tasks, today),
            Page::Goals => pages::goals::goals_view(&self.goals, today),
            Page::Settings => pages::settings::settings_view(&self.config),
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axer::calendar::memory::MemoryCalendarStore;
    use axer::core::goal::GoalColor;
    use axer::theme::AppTheme;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 4, 18)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn app() -> Axer<MemoryCalendarStore> {
        Axer::new(AxerConfig::default(), MemoryCalendarStore::new())
    }

    async fn send(app: &mut Axer<MemoryCalendarStore>, line: &str) -> Flow {
        let message = Message::parse(line).unwrap();
        app.update(message, now()).await
    }

    #[tokio::test]
    async fn toggle_by_row_reorders_tasks() {
        let mut app = app();
        send(&mut app, "add Email").await;
        send(&mut app, "add Walk dog at 8:00 AM").await;
        send(&mut app, "toggle 1").await;

        let titles: Vec<&str> = app.tasks.tasks().iter().map(|t| t.title()).collect();
        assert_eq!(titles, ["Walk dog", "Email"]);
        assert!(app.tasks.tasks()[1].is_completed());
        assert_eq!(app.tasks.tasks()[1].original_position(), Some(0));
    }

    #[tokio::test]
    async fn habit_adds_task_with_label() {
        let mut app = app();
        send(&mut app, "habit Meditate at 7:00").await;
        assert_eq!(app.tasks.habits().len(), 1);
        assert_eq!(app.tasks.tasks()[0].time(), "7:00 AM");
    }

    #[tokio::test]
    async fn bad_row_shows_notice_once() {
        let mut app = app();
        send(&mut app, "toggle 3").await;
        assert!(app.view(now()).starts_with("No task in row 3"));
        assert!(!app.view(now()).contains("No task in row 3"));
    }

    #[tokio::test]
    async fn event_is_saved_and_listed() {
        let mut app = app();
        app.init(now()).await;
        send(&mut app, "event Dentist on 2026-04-18 at 15:00").await;

        assert_eq!(app.page(), Page::Calendar);
        let view = app.view(now());
        assert!(view.contains("Dentist  3:00 PM - 4:00 PM"));
    }

    #[tokio::test]
    async fn event_save_failure_is_reported() {
        let mut app = Axer::new(AxerConfig::default(), MemoryCalendarStore::read_only());
        send(&mut app, "event Dentist on 2026-04-18").await;
        assert!(app.view(now()).starts_with("Could not save \"Dentist\""));
        assert!(app.calendar.events().is_empty());
    }

    #[tokio::test]
    async fn denied_calendar_access_is_a_notice() {
        let mut app = Axer::new(AxerConfig::default(), MemoryCalendarStore::denied());
        app.init(now()).await;
        assert!(app.view(now()).starts_with("Calendar unavailable"));
    }

    #[tokio::test]
    async fn goals_progress_and_delete() {
        let mut app = app();
        send(&mut app, "goal Saved target 10000 $").await;
        send(&mut app, "progress 1 6700").await;
        assert!((app.goals.goals()[0].progress() - 0.67).abs() < 1e-9);

        send(&mut app, "delete-goal 1").await;
        assert!(app.goals.goals().is_empty());
    }

    #[tokio::test]
    async fn list_shows_completed_tasks() {
        let mut app = app();
        send(&mut app, "add Email").await;
        send(&mut app, "add Walk dog at 8:00 AM").await;
        send(&mut app, "toggle 1").await;
        send(&mut app, "list").await;

        assert_eq!(app.page(), Page::Tasks);
        let view = app.view(now());
        assert!(view.contains("1. [ ] Walk dog"));
        assert!(view.contains("2. [x]"));
        assert!(view.contains("1 of 2 done"));
    }

    #[tokio::test]
    async fn themes_lists_catalogue() {
        let mut app = app();
        send(&mut app, "theme blue dark").await;
        send(&mut app, "themes").await;

        let view = app.view(now());
        assert!(view.contains("* Blue Dark"));
        assert!(view.contains("  Green Dark"));
        assert_eq!(app.page(), Page::Dashboard);
    }

    #[tokio::test]
    async fn goal_options_reach_the_goal() {
        let mut app = app();
        send(
            &mut app,
            "goal Run target 100 km color orange until 2026-05-01 remind at 7:00 notes before work",
        )
        .await;

        let goal = &app.goals.goals()[0];
        assert_eq!(goal.color, GoalColor::Orange);
        assert_eq!(goal.days_remaining(now().date()), 13);
        assert_eq!(goal.description, "before work");
        assert!(goal.reminder.is_some());

        let view = app.view(now());
        assert!(view.contains("before work"));
        assert!(view.contains("reminder 7:00 AM"));
    }

    #[tokio::test]
    async fn goal_ending_in_the_past_is_refused() {
        let mut app = app();
        send(&mut app, "goal Run target 100 until 2026-01-01").await;
        assert!(app.goals.goals().is_empty());
        assert!(app.view(now()).starts_with("Goal cannot end before 2026-04-18"));
    }

    #[tokio::test]
    async fn event_notes_are_saved() {
        let mut app = app();
        send(&mut app, "event Dentist on 2026-04-18 at 15:00 notes bring x-rays").await;
        assert_eq!(app.calendar.events()[0].notes, "bring x-rays");
        assert!(app.view(now()).contains("bring x-rays"));
    }

    #[tokio::test]
    async fn settings_and_quit() {
        let mut app = app();
        send(&mut app, "theme green").await;
        assert_eq!(app.config.theme, AppTheme::Green);
        assert_eq!(send(&mut app, "quit").await, Flow::Exit);
    }
}
