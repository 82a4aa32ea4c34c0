use chrono::{NaiveDate, NaiveTime, Weekday};
use regex::Regex;
use std::sync::LazyLock;

use axer::core::event::NewEvent;
use axer::core::goal::{Goal, GoalColor};
use axer::theme::AppTheme;

const GOAL_USAGE: &str = "Usage: goal <title> target <value> [unit] [color <color>] [until <YYYY-MM-DD>] [remind at <time>] [notes <text>]";

const TIME: &str = r"\d{1,2}:\d{2}(?:\s*[AaPp][Mm])?";

static TIMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?P<title>.+?)\s+at\s+(?P<time>{TIME})$")).unwrap()
});

static HABIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?P<title>.+?)\s+at\s+(?P<time>{TIME})(?:\s+on\s+(?P<days>[A-Za-z,\s]+))?$"
    ))
    .unwrap()
});

static EVENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?P<title>.+?)\s+on\s+(?P<date>\d{{4}}-\d{{2}}-\d{{2}})(?:\s+at\s+(?P<time>{TIME}))?(?:\s+notes\s+(?P<notes>.+))?$"
    ))
    .unwrap()
});

static GOAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<title>.+?)\s+target\s+(?P<options>.+?)(?:\s+notes\s+(?P<notes>.+))?$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Tasks,
    Calendar,
    Goals,
    Settings,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Tasks => "Tasks",
            Self::Calendar => "Calendar",
            Self::Goals => "Goals",
            Self::Settings => "Settings",
        }
    }
}

/// Fields of the `goal` command, before the goal gets its id and start date.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalForm {
    pub title: String,
    pub target: f64,
    pub unit: String,
    pub color: GoalColor,
    pub end_date: Option<NaiveDate>,
    pub reminder: Option<NaiveTime>,
    pub description: String,
}

impl GoalForm {
    pub fn new(title: impl Into<String>, target: f64) -> Self {
        Self {
            title: title.into(),
            target,
            unit: String::new(),
            color: GoalColor::default(),
            end_date: None,
            reminder: None,
            description: String::new(),
        }
    }

    /// Build a goal starting on `start`. Fails when the end date comes first.
    pub fn into_goal(self, start: NaiveDate) -> Result<Goal, String> {
        let mut goal = Goal::new(self.title, self.target, start);
        if let Some(end) = self.end_date {
            if end < start {
                return Err(format!("Goal cannot end before {}", start));
            }
            goal.end_date = end;
        }
        goal.unit = self.unit;
        goal.color = self.color;
        goal.reminder = self.reminder;
        goal.description = self.description;
        Ok(goal)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Show(Page),
    Help,
    Quit,
    ListThemes,

    // Tasks and habits
    AddTask(String, Option<NaiveTime>),
    AddHabit(String, NaiveTime, Vec<Weekday>),
    /// 1-based row of the full task list.
    ToggleTask(usize),

    // Calendar
    AddEvent(NewEvent),
    ReloadCalendar,

    // Goals
    AddGoal(GoalForm),
    SetGoalProgress(usize, f64),
    DeleteGoal(usize),

    // Settings
    SetTheme(AppTheme),
    ToggleDebugLogging,

    Invalid(String),
}

/// Accepts "14:30", "2:30 PM" and "2:30pm".
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim().to_uppercase();
    ["%H:%M", "%I:%M %p", "%I:%M%p"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&s, fmt).ok())
}

fn parse_days(s: &str) -> Result<Vec<Weekday>, String> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|d| !d.is_empty())
        .map(|d| d.parse::<Weekday>().map_err(|_| format!("Unknown day: {}", d)))
        .collect()
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_row(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("Expected a row number, got {:?}", s.trim())),
    }
}

impl Message {
    /// Parse one line of user input. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let message = match command.to_lowercase().as_str() {
            "dashboard" | "d" => Self::Show(Page::Dashboard),
            "list" | "l" => Self::Show(Page::Tasks),
            "calendar" | "c" => Self::Show(Page::Calendar),
            "goals" | "g" => Self::Show(Page::Goals),
            "settings" | "s" => Self::Show(Page::Settings),
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            "add" => parse_add(rest),
            "habit" => parse_habit(rest),
            "toggle" | "t" => parse_row(rest).map_or_else(Self::Invalid, Self::ToggleTask),
            "event" => parse_event(rest),
            "reload" => Self::ReloadCalendar,
            "goal" => parse_goal(rest),
            "progress" => parse_progress(rest),
            "delete-goal" => parse_row(rest).map_or_else(Self::Invalid, Self::DeleteGoal),
            "themes" => Self::ListThemes,
            "theme" => rest.parse::<AppTheme>().map_or_else(Self::Invalid, Self::SetTheme),
            "debug" => Self::ToggleDebugLogging,
            other => Self::Invalid(format!("Unknown command: {}", other)),
        };
        Some(message)
    }
}

fn parse_add(rest: &str) -> Message {
    if rest.is_empty() {
        return Message::Invalid("Usage: add <title> [at <time>]".into());
    }
    match TIMED.captures(rest) {
        Some(caps) => match parse_time(&caps["time"]) {
            Some(time) => Message::AddTask(caps["title"].to_string(), Some(time)),
            None => Message::Invalid(format!("Invalid time: {}", &caps["time"])),
        },
        None => Message::AddTask(rest.to_string(), None),
    }
}

fn parse_habit(rest: &str) -> Message {
    let Some(caps) = HABIT.captures(rest) else {
        return Message::Invalid("Usage: habit <title> at <time> [on <days>]".into());
    };
    let Some(time) = parse_time(&caps["time"]) else {
        return Message::Invalid(format!("Invalid time: {}", &caps["time"]));
    };
    let days = match caps.name("days") {
        Some(days) => match parse_days(days.as_str()) {
            Ok(days) => days,
            Err(e) => return Message::Invalid(e),
        },
        None => Vec::new(),
    };
    Message::AddHabit(caps["title"].to_string(), time, days)
}

fn parse_event(rest: &str) -> Message {
    let Some(caps) = EVENT.captures(rest) else {
        return Message::Invalid(
            "Usage: event <title> on <YYYY-MM-DD> [at <time>] [notes <text>]".into(),
        );
    };
    let Ok(date) = NaiveDate::parse_from_str(&caps["date"], "%Y-%m-%d") else {
        return Message::Invalid(format!("Invalid date: {}", &caps["date"]));
    };
    let title = caps["title"].to_string();
    let mut event = match caps.name("time") {
        Some(time) => match parse_time(time.as_str()) {
            Some(time) => NewEvent::new(title, date.and_time(time)),
            None => return Message::Invalid(format!("Invalid time: {}", time.as_str())),
        },
        None => NewEvent::all_day(title, date),
    };
    if let Some(notes) = caps.name("notes") {
        event.notes = notes.as_str().to_string();
    }
    Message::AddEvent(event)
}

fn parse_goal(rest: &str) -> Message {
    let Some(caps) = GOAL.captures(rest) else {
        return Message::Invalid(GOAL_USAGE.into());
    };
    match goal_form(&caps["title"], &caps["options"]) {
        Ok(mut form) => {
            if let Some(notes) = caps.name("notes") {
                form.description = notes.as_str().to_string();
            }
            Message::AddGoal(form)
        }
        Err(e) => Message::Invalid(e),
    }
}

/// Reads "<target> [unit] [color <c>] [until <date>] [remind at <time>]".
fn goal_form(title: &str, options: &str) -> Result<GoalForm, String> {
    let mut tokens = options.split_whitespace().peekable();
    let target = tokens.next().unwrap_or_default();
    let target = parse_finite(target).ok_or_else(|| format!("Invalid target: {}", target))?;
    let mut form = GoalForm::new(title, target);

    let mut first = true;
    while let Some(token) = tokens.next() {
        match token.to_lowercase().as_str() {
            "color" => {
                let name = tokens.next().unwrap_or_default();
                form.color = GoalColor::from_name(name).ok_or_else(|| format!("Unknown color: {}", name))?;
            }
            "until" => {
                let date = tokens.next().unwrap_or_default();
                let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .map_err(|_| format!("Invalid date: {}", date))?;
                form.end_date = Some(date);
            }
            "remind" => {
                if tokens.next_if(|t| t.eq_ignore_ascii_case("at")).is_none() {
                    return Err(GOAL_USAGE.into());
                }
                let mut time = tokens.next().unwrap_or_default().to_string();
                if let Some(suffix) = tokens.next_if(|t| t.eq_ignore_ascii_case("am") || t.eq_ignore_ascii_case("pm")) {
                    time = format!("{} {}", time, suffix);
                }
                form.reminder = Some(parse_time(&time).ok_or_else(|| format!("Invalid time: {}", time))?);
            }
            _ if first => form.unit = token.to_string(),
            _ => return Err(format!("Unexpected {:?} in goal", token)),
        }
        first = false;
    }
    Ok(form)
}

fn parse_progress(rest: &str) -> Message {
    let Some((row, value)) = rest.split_once(char::is_whitespace) else {
        return Message::Invalid("Usage: progress <goal> <value>".into());
    };
    let row = match parse_row(row) {
        Ok(row) => row,
        Err(e) => return Message::Invalid(e),
    };
    match parse_finite(value) {
        Some(value) => Message::SetGoalProgress(row, value),
        None => Message::Invalid(format!("Invalid value: {}", value.trim())),
    }
}
