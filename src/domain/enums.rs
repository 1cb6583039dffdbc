use serde::{Deserialize, Serialize};

/// Task category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Work,
    Personal,
    Study,
    Health,
    Other,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Work,
            Category::Personal,
            Category::Study,
            Category::Health,
            Category::Other,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Study => "study",
            Category::Health => "health",
            Category::Other => "other",
        }
    }
}

/// Task priority tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn all() -> &'static [Priority] {
        &[Priority::Low, Priority::Medium, Priority::High]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Timer mode of the Pomodoro engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PomodoroMode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl PomodoroMode {
    /// Fixed navigation order used by next/previous mode
    pub const SEQUENCE: [PomodoroMode; 3] = [
        PomodoroMode::Focus,
        PomodoroMode::ShortBreak,
        PomodoroMode::LongBreak,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PomodoroMode::Focus => "Focus Time",
            PomodoroMode::ShortBreak => "Short Break",
            PomodoroMode::LongBreak => "Long Break",
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, PomodoroMode::Focus)
    }

    fn position(&self) -> usize {
        match self {
            PomodoroMode::Focus => 0,
            PomodoroMode::ShortBreak => 1,
            PomodoroMode::LongBreak => 2,
        }
    }

    /// Next mode in the cycle, wrapping after long break
    pub fn next(&self) -> Self {
        Self::SEQUENCE[(self.position() + 1) % Self::SEQUENCE.len()]
    }

    /// Previous mode in the cycle, wrapping before focus
    pub fn previous(&self) -> Self {
        let len = Self::SEQUENCE.len();
        Self::SEQUENCE[(self.position() + len - 1) % len]
    }
}

/// Filter applied to the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn name(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }

    pub fn cycle(&self) -> Self {
        match self {
            TaskFilter::All => TaskFilter::Active,
            TaskFilter::Active => TaskFilter::Completed,
            TaskFilter::Completed => TaskFilter::All,
        }
    }
}

/// Date range selected on the analytics view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyticsRange {
    #[default]
    Week,
    Month,
    Year,
}

impl AnalyticsRange {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsRange::Week => "Week",
            AnalyticsRange::Month => "Month",
            AnalyticsRange::Year => "Year",
        }
    }
}

/// Notification sound choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundType {
    #[default]
    Bell,
    Chime,
    Digital,
}

impl SoundType {
    pub fn all() -> &'static [SoundType] {
        &[SoundType::Bell, SoundType::Chime, SoundType::Digital]
    }

    pub fn name(&self) -> &'static str {
        match self {
            SoundType::Bell => "bell",
            SoundType::Chime => "chime",
            SoundType::Digital => "digital",
        }
    }

    /// Number of terminal bells rung for this sound
    pub fn rings(&self) -> usize {
        match self {
            SoundType::Bell => 1,
            SoundType::Chime => 2,
            SoundType::Digital => 3,
        }
    }
}

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Auto,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark, Theme::Auto]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Auto => "auto",
        }
    }
}

/// Top-level view (tab) of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Tasks,
    Pomodoro,
    Analytics,
    Settings,
}

impl View {
    pub fn all() -> &'static [View] {
        &[View::Tasks, View::Pomodoro, View::Analytics, View::Settings]
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Tasks => "Tasks",
            View::Pomodoro => "Pomodoro",
            View::Analytics => "Analytics",
            View::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            View::Tasks => 0,
            View::Pomodoro => 1,
            View::Analytics => 2,
            View::Settings => 3,
        }
    }

    pub fn cycle(&self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    TaskForm,
    Confirm,
    ImportPrompt,
}

/// Cycle through a fixed list of values (wrapping both directions)
pub fn cycle_value<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    if forward {
        all[(idx + 1) % len]
    } else {
        all[(idx + len - 1) % len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_next_wraps() {
        assert_eq!(PomodoroMode::Focus.next(), PomodoroMode::ShortBreak);
        assert_eq!(PomodoroMode::ShortBreak.next(), PomodoroMode::LongBreak);
        assert_eq!(PomodoroMode::LongBreak.next(), PomodoroMode::Focus);
    }

    #[test]
    fn test_mode_previous_wraps() {
        assert_eq!(PomodoroMode::Focus.previous(), PomodoroMode::LongBreak);
        assert_eq!(PomodoroMode::LongBreak.previous(), PomodoroMode::ShortBreak);
        assert_eq!(PomodoroMode::ShortBreak.previous(), PomodoroMode::Focus);
    }

    #[test]
    fn test_mode_serde_names() {
        let json = serde_json::to_string(&PomodoroMode::ShortBreak).unwrap();
        assert_eq!(json, "\"shortBreak\"");
        let cat: Category = serde_json::from_str("\"study\"").unwrap();
        assert_eq!(cat, Category::Study);
    }

    #[test]
    fn test_task_filter_cycle() {
        assert_eq!(TaskFilter::All.cycle(), TaskFilter::Active);
        assert_eq!(TaskFilter::Active.cycle(), TaskFilter::Completed);
        assert_eq!(TaskFilter::Completed.cycle(), TaskFilter::All);
    }

    #[test]
    fn test_cycle_value() {
        assert_eq!(cycle_value(Priority::all(), Priority::High, true), Priority::Low);
        assert_eq!(cycle_value(Priority::all(), Priority::Low, false), Priority::High);
        assert_eq!(cycle_value(Theme::all(), Theme::Light, true), Theme::Dark);
    }
}
