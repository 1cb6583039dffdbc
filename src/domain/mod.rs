pub mod enums;
pub mod settings;
pub mod task;
pub mod views;

pub use enums::{
    cycle_value, AnalyticsRange, Category, PomodoroMode, Priority, SoundType, TaskFilter, Theme,
    UiMode, View,
};
pub use settings::{DisplaySettings, PomodoroSettings, Settings, ACCENT_COLORS};
pub use task::{Task, TaskDraft, TaskId};
pub use views::{completion_badge, format_clock, format_time, progress_bar};
