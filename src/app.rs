use crate::domain::{
    cycle_value, AnalyticsRange, Category, Priority, Settings, SoundType, Task, TaskDraft,
    TaskFilter, TaskId, Theme, UiMode, View, ACCENT_COLORS,
};
use crate::error::ValidationError;
use crate::notifications::Severity;
use crate::persistence::{export_filename, write_export};
use crate::report;
use crate::tracker::Tracker;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Field focused in the task form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Category,
    Priority,
    Estimate,
    Deadline,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::Description,
            FormField::Category,
            FormField::Priority,
            FormField::Estimate,
            FormField::Deadline,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Description => "Description",
            FormField::Category => "Category",
            FormField::Priority => "Priority",
            FormField::Estimate => "Estimated pomodoros",
            FormField::Deadline => "Deadline (YYYY-MM-DD)",
        }
    }

    /// Choice fields cycle with ←/→ instead of taking text
    pub fn is_choice(&self) -> bool {
        matches!(self, FormField::Category | FormField::Priority)
    }
}

/// Input form state for adding or editing a task
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFormState {
    /// None when adding a new task
    pub editing: Option<TaskId>,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub estimate: String,
    pub deadline: String,
    pub field: FormField,
}

impl TaskFormState {
    pub fn blank() -> Self {
        Self {
            editing: None,
            name: String::new(),
            description: String::new(),
            category: Category::default(),
            priority: Priority::default(),
            estimate: "1".to_string(),
            deadline: String::new(),
            field: FormField::Name,
        }
    }

    pub fn for_task(task: &Task) -> Self {
        Self {
            editing: Some(task.id.clone()),
            name: task.name.clone(),
            description: task.description.clone(),
            category: task.category,
            priority: task.priority,
            estimate: task.estimated_pomodoros.to_string(),
            deadline: task
                .deadline
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            field: FormField::Name,
        }
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::Estimate => Some(&mut self.estimate),
            FormField::Deadline => Some(&mut self.deadline),
            FormField::Category | FormField::Priority => None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.field;
        if let Some(text) = self.text_mut() {
            if field != FormField::Estimate || c.is_ascii_digit() {
                text.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.text_mut() {
            text.pop();
        }
    }

    pub fn next_field(&mut self) {
        self.field = cycle_value(FormField::all(), self.field, true);
    }

    pub fn previous_field(&mut self) {
        self.field = cycle_value(FormField::all(), self.field, false);
    }

    pub fn cycle_choice(&mut self, forward: bool) {
        match self.field {
            FormField::Category => {
                self.category = cycle_value(Category::all(), self.category, forward)
            }
            FormField::Priority => {
                self.priority = cycle_value(Priority::all(), self.priority, forward)
            }
            _ => {}
        }
    }

    /// Convert to a draft; a non-numeric estimate falls back to the default
    pub fn to_draft(&self) -> Result<TaskDraft, ValidationError> {
        let deadline = match self.deadline.trim() {
            "" => None,
            value => Some(
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .map_err(|_| ValidationError::Deadline(value.to_string()))?,
            ),
        };

        Ok(TaskDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category,
            priority: self.priority,
            estimated_pomodoros: self.estimate.trim().parse().ok(),
            deadline,
        })
    }
}

/// Destructive action awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTask(TaskId),
    ResetSettings,
    ClearAllData,
}

impl ConfirmAction {
    pub fn title(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteTask(_) => "Delete Task",
            ConfirmAction::ResetSettings => "Reset Settings",
            ConfirmAction::ClearAllData => "Clear All Data",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ConfirmAction::DeleteTask(_) => "Are you sure you want to delete this task?",
            ConfirmAction::ResetSettings => {
                "Are you sure you want to reset all settings to default?"
            }
            ConfirmAction::ClearAllData => {
                "This will permanently delete all your tasks and reset settings. This action cannot be undone."
            }
        }
    }
}

/// Row focused on the settings view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    FocusDuration,
    ShortBreakDuration,
    LongBreakDuration,
    SessionsBeforeLongBreak,
    Sound,
    Desktop,
    SoundType,
    Theme,
    AccentColor,
}

impl SettingsField {
    pub fn all() -> &'static [SettingsField] {
        &[
            SettingsField::FocusDuration,
            SettingsField::ShortBreakDuration,
            SettingsField::LongBreakDuration,
            SettingsField::SessionsBeforeLongBreak,
            SettingsField::Sound,
            SettingsField::Desktop,
            SettingsField::SoundType,
            SettingsField::Theme,
            SettingsField::AccentColor,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::FocusDuration => "Focus duration (min)",
            SettingsField::ShortBreakDuration => "Short break (min)",
            SettingsField::LongBreakDuration => "Long break (min)",
            SettingsField::SessionsBeforeLongBreak => "Sessions before long break",
            SettingsField::Sound => "Sound notifications",
            SettingsField::Desktop => "Desktop notifications",
            SettingsField::SoundType => "Notification sound",
            SettingsField::Theme => "Theme",
            SettingsField::AccentColor => "Accent color",
        }
    }

    /// Current value of this field in `settings`, as displayed
    pub fn value(&self, settings: &Settings) -> String {
        let on_off = |b: bool| (if b { "on" } else { "off" }).to_string();
        match self {
            SettingsField::FocusDuration => settings.pomodoro.focus_duration.to_string(),
            SettingsField::ShortBreakDuration => settings.pomodoro.short_break_duration.to_string(),
            SettingsField::LongBreakDuration => settings.pomodoro.long_break_duration.to_string(),
            SettingsField::SessionsBeforeLongBreak => {
                settings.pomodoro.sessions_before_long_break.to_string()
            }
            SettingsField::Sound => on_off(settings.notifications.sound),
            SettingsField::Desktop => on_off(settings.notifications.desktop),
            SettingsField::SoundType => settings.notifications.sound_type.name().to_string(),
            SettingsField::Theme => settings.display.theme.name().to_string(),
            SettingsField::AccentColor => settings.display.accent_color.clone(),
        }
    }

    /// Step the field's value in `settings`
    pub fn adjust(&self, settings: &mut Settings, forward: bool) {
        let step = |value: &mut u32| {
            *value = if forward {
                value.saturating_add(1)
            } else {
                value.saturating_sub(1)
            }
        };
        match self {
            SettingsField::FocusDuration => step(&mut settings.pomodoro.focus_duration),
            SettingsField::ShortBreakDuration => step(&mut settings.pomodoro.short_break_duration),
            SettingsField::LongBreakDuration => step(&mut settings.pomodoro.long_break_duration),
            SettingsField::SessionsBeforeLongBreak => {
                step(&mut settings.pomodoro.sessions_before_long_break)
            }
            SettingsField::Sound => settings.notifications.sound = !settings.notifications.sound,
            SettingsField::Desktop => {
                settings.notifications.desktop = !settings.notifications.desktop
            }
            SettingsField::SoundType => {
                settings.notifications.sound_type =
                    cycle_value(SoundType::all(), settings.notifications.sound_type, forward)
            }
            SettingsField::Theme => {
                settings.display.theme = cycle_value(Theme::all(), settings.display.theme, forward)
            }
            SettingsField::AccentColor => {
                let current = ACCENT_COLORS
                    .iter()
                    .copied()
                    .find(|c| c.eq_ignore_ascii_case(&settings.display.accent_color))
                    .unwrap_or(ACCENT_COLORS[0]);
                settings.display.accent_color =
                    cycle_value(ACCENT_COLORS, current, forward).to_string();
            }
        }
    }
}

/// Main application state
pub struct AppState {
    pub tracker: Tracker,
    pub data_dir: PathBuf,
    pub view: View,
    pub ui_mode: UiMode,
    pub task_filter: TaskFilter,
    pub selected_index: usize,
    pub task_form: Option<TaskFormState>,
    pub confirm: Option<ConfirmAction>,
    pub import_path: String,
    /// Unsaved edits on the settings view
    pub settings_draft: Settings,
    pub settings_field: SettingsField,
}

impl AppState {
    pub fn new(tracker: Tracker, data_dir: PathBuf) -> Self {
        let settings_draft = tracker.settings().clone();
        Self {
            tracker,
            data_dir,
            view: View::default(),
            ui_mode: UiMode::Normal,
            task_filter: TaskFilter::default(),
            selected_index: 0,
            task_form: None,
            confirm: None,
            import_path: String::new(),
            settings_draft,
            settings_field: SettingsField::FocusDuration,
        }
    }

    /// Advance timers and expire toasts
    pub fn tick(&mut self, now: Instant) {
        self.tracker.advance(now);
    }

    // Views & selection

    pub fn set_view(&mut self, view: View) {
        if view == View::Settings {
            self.settings_draft = self.tracker.settings().clone();
        }
        self.view = view;
    }

    pub fn next_view(&mut self) {
        self.set_view(self.view.cycle());
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tracker.tasks(self.task_filter).collect()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tracker.tasks(self.task_filter).nth(self.selected_index)
    }

    fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id.clone())
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let count = self.tracker.tasks(self.task_filter).count();
        if self.selected_index + 1 < count {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.tracker.tasks(self.task_filter).count();
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
    }

    pub fn cycle_filter(&mut self) {
        self.task_filter = self.task_filter.cycle();
        self.selected_index = 0;
    }

    // Task form

    pub fn start_add_task(&mut self) {
        self.task_form = Some(TaskFormState::blank());
        self.ui_mode = UiMode::TaskForm;
    }

    pub fn start_edit_task(&mut self) {
        if let Some(task) = self.selected_task() {
            self.task_form = Some(TaskFormState::for_task(task));
            self.ui_mode = UiMode::TaskForm;
        }
    }

    /// Save the form; it stays open when the input is rejected
    pub fn submit_task_form(&mut self) {
        let Some(form) = self.task_form.as_ref() else {
            return;
        };

        let result = match form.to_draft() {
            Ok(draft) => match form.editing.clone() {
                Some(id) => self.tracker.update_task(&id, draft).map(|_| ()),
                None => self.tracker.create_task(draft).map(|_| ()),
            },
            Err(err) => {
                self.tracker
                    .toasts_mut()
                    .push("Error", &err.to_string(), Severity::Error);
                Err(err)
            }
        };

        if result.is_ok() {
            self.task_form = None;
            self.ui_mode = UiMode::Normal;
            self.clamp_selection();
        }
    }

    pub fn cancel_task_form(&mut self) {
        self.task_form = None;
        self.ui_mode = UiMode::Normal;
    }

    // Task actions

    pub fn toggle_selected_completion(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.tracker.toggle_task_completion(&id);
            self.clamp_selection();
        }
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.request_confirm(ConfirmAction::DeleteTask(id));
        }
    }

    /// Bind the selected task to the timer and switch to it
    pub fn focus_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.tracker.bind_task(Some(id));
            self.set_view(View::Pomodoro);
        }
    }

    /// Step the bound task through active tasks, then none
    pub fn cycle_bound_task(&mut self) {
        let active: Vec<TaskId> = self
            .tracker
            .tasks(TaskFilter::Active)
            .map(|t| t.id.clone())
            .collect();
        let next = match self.tracker.engine().current_task_id() {
            None => active.first().cloned(),
            Some(current) => match active.iter().position(|id| id == current) {
                Some(pos) => active.get(pos + 1).cloned(),
                None => active.first().cloned(),
            },
        };
        self.tracker.bind_task(next);
    }

    // Confirmation

    pub fn request_confirm(&mut self, action: ConfirmAction) {
        self.confirm = Some(action);
        self.ui_mode = UiMode::Confirm;
    }

    pub fn confirm(&mut self) {
        let Some(action) = self.confirm.take() else {
            return;
        };
        match action {
            ConfirmAction::DeleteTask(id) => {
                self.tracker.delete_task(&id);
            }
            ConfirmAction::ResetSettings => {
                self.tracker.reset_settings();
                self.settings_draft = self.tracker.settings().clone();
            }
            ConfirmAction::ClearAllData => {
                self.tracker.clear_all_data();
                self.settings_draft = self.tracker.settings().clone();
            }
        }
        self.ui_mode = UiMode::Normal;
        self.clamp_selection();
    }

    pub fn cancel_confirm(&mut self) {
        self.confirm = None;
        self.ui_mode = UiMode::Normal;
    }

    // Settings

    pub fn settings_field_up(&mut self) {
        self.settings_field = cycle_value(SettingsField::all(), self.settings_field, false);
    }

    pub fn settings_field_down(&mut self) {
        self.settings_field = cycle_value(SettingsField::all(), self.settings_field, true);
    }

    pub fn adjust_setting(&mut self, forward: bool) {
        self.settings_field.adjust(&mut self.settings_draft, forward);
    }

    pub fn save_settings(&mut self) {
        if self.tracker.save_settings(self.settings_draft.clone()).is_err() {
            tracing::debug!("settings draft rejected");
        }
    }

    // Data transfer

    /// Export a backup into the data directory
    pub fn export_data(&mut self, today: NaiveDate) -> Option<PathBuf> {
        let path = self.data_dir.join(export_filename(today));
        match write_export(&path, &self.tracker.export_document()) {
            Ok(()) => {
                self.tracker.record_export();
                Some(path)
            }
            Err(err) => {
                tracing::error!("Export failed: {:#}", err);
                self.tracker
                    .toasts_mut()
                    .push("Error", "Failed to export data.", Severity::Error);
                None
            }
        }
    }

    pub fn start_import(&mut self) {
        self.import_path.clear();
        self.ui_mode = UiMode::ImportPrompt;
    }

    pub fn cancel_import(&mut self) {
        self.import_path.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Import the file named in the prompt
    pub fn submit_import(&mut self) {
        let path = PathBuf::from(self.import_path.trim());
        self.import_file(&path);
        self.import_path.clear();
        self.ui_mode = UiMode::Normal;
    }

    fn import_file(&mut self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                if self.tracker.import_document(&content).is_ok() {
                    self.settings_draft = self.tracker.settings().clone();
                    self.selected_index = 0;
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "Failed to read import file: {}", err);
                self.tracker.toasts_mut().push(
                    "Error",
                    "Failed to import data. Invalid file format.",
                    Severity::Error,
                );
            }
        }
    }

    // Analytics

    pub fn set_analytics_range(&mut self, range: AnalyticsRange) {
        self.tracker.set_analytics_range(range);
    }

    /// Write the markdown report into the data directory
    pub fn write_report(&mut self, today: NaiveDate) {
        let result = report::generate_report(
            &self.data_dir,
            self.tracker.task_store().tasks(),
            self.tracker.analytics_range(),
            today,
            None,
        );
        match result {
            Ok(path) => {
                let message = format!("Report written to {}", path.display());
                self.tracker
                    .toasts_mut()
                    .push("Success", &message, Severity::Success);
            }
            Err(err) => {
                tracing::error!("Report failed: {:#}", err);
                self.tracker
                    .toasts_mut()
                    .push("Error", "Failed to write report.", Severity::Error);
            }
        }
    }
}
