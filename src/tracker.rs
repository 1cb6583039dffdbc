//! Application context.
//!
//! The tracker owns every piece of core state and the outbound ports. Each
//! command validates, mutates, persists, then notifies. A failed save leaves
//! the in-memory state authoritative and raises a warning toast.

use crate::domain::{AnalyticsRange, PomodoroMode, Settings, Task, TaskDraft, TaskFilter, TaskId};
use crate::error::{ImportError, ValidationError};
use crate::notifications::{Notifier, Severity, ToastQueue};
use crate::persistence::{parse_import, ExportDocument, Snapshot, SnapshotRef, SnapshotStore};
use crate::pomodoro::{PomodoroEngine, SessionOutcome};
use crate::report::{per_task_breakdown, summary, Summary, TaskBreakdown};
use crate::store::TaskStore;
use chrono::Utc;
use std::time::Instant;

pub struct Tracker {
    tasks: TaskStore,
    settings: Settings,
    engine: PomodoroEngine,
    analytics_range: AnalyticsRange,
    store: Box<dyn SnapshotStore>,
    notifier: Box<dyn Notifier>,
    toasts: ToastQueue,
}

impl Tracker {
    /// Build the context from whatever the store holds
    ///
    /// A missing snapshot starts from defaults. An unreadable one also starts
    /// from defaults, with an error toast.
    pub fn load(store: Box<dyn SnapshotStore>, notifier: Box<dyn Notifier>) -> Self {
        let mut toasts = ToastQueue::default();
        let snapshot = match store.load() {
            Ok(snapshot) => snapshot.unwrap_or_default(),
            Err(err) => {
                tracing::error!("Failed to load snapshot: {:#}", err);
                toasts.push(
                    "Error",
                    "Failed to load your data. Some data may be lost.",
                    Severity::Error,
                );
                Default::default()
            }
        };
        Self::from_snapshot(snapshot, store, notifier, toasts)
    }

    /// Like [`Tracker::load`], but an unreadable snapshot is an error
    ///
    /// For one-shot commands that must not act on defaults in place of the
    /// user's data.
    pub fn try_load(
        store: Box<dyn SnapshotStore>,
        notifier: Box<dyn Notifier>,
    ) -> anyhow::Result<Self> {
        let snapshot = store.load()?.unwrap_or_default();
        Ok(Self::from_snapshot(
            snapshot,
            store,
            notifier,
            ToastQueue::default(),
        ))
    }

    fn from_snapshot(
        snapshot: Snapshot,
        store: Box<dyn SnapshotStore>,
        notifier: Box<dyn Notifier>,
        toasts: ToastQueue,
    ) -> Self {
        tracing::info!(tasks = snapshot.tasks.len(), "tracker loaded");
        Self {
            tasks: TaskStore::new(snapshot.tasks),
            engine: PomodoroEngine::new(&snapshot.settings.pomodoro),
            settings: snapshot.settings,
            analytics_range: AnalyticsRange::default(),
            store,
            notifier,
            toasts,
        }
    }

    // State access

    pub fn task_store(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn tasks(&self, filter: TaskFilter) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.query(filter)
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.find_by_id(id)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn engine(&self) -> &PomodoroEngine {
        &self.engine
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastQueue {
        &mut self.toasts
    }

    /// Task currently bound to the timer, if it still exists
    pub fn bound_task(&self) -> Option<&Task> {
        self.engine
            .current_task_id()
            .and_then(|id| self.find_task(id))
    }

    // Tasks

    pub fn create_task(&mut self, draft: TaskDraft) -> Result<TaskId, ValidationError> {
        let draft = self.reject_invalid(draft.validated())?;
        let id = self.tasks.create(draft).id.clone();
        tracing::info!(%id, "task created");
        self.persist();
        self.toasts
            .push("Success", "Task created successfully!", Severity::Success);
        Ok(id)
    }

    /// Edit a task; Ok(false) when the id is unknown
    pub fn update_task(&mut self, id: &TaskId, draft: TaskDraft) -> Result<bool, ValidationError> {
        let draft = self.reject_invalid(draft.validated())?;
        if !self.tasks.update(id, draft) {
            return Ok(false);
        }
        tracing::info!(%id, "task updated");
        self.persist();
        self.toasts
            .push("Success", "Task updated successfully!", Severity::Success);
        Ok(true)
    }

    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        if !self.tasks.delete(id) {
            return false;
        }
        tracing::info!(%id, "task deleted");
        self.persist();
        self.toasts
            .push("Success", "Task deleted successfully!", Severity::Success);
        true
    }

    pub fn toggle_task_completion(&mut self, id: &TaskId) -> Option<bool> {
        let completed = self.tasks.toggle_completion(id)?;
        tracing::info!(%id, completed, "task completion toggled");
        self.persist();
        let message = if completed {
            "Task completed!"
        } else {
            "Task marked as incomplete"
        };
        self.toasts.push("Success", message, Severity::Success);
        Some(completed)
    }

    // Timer

    pub fn start_timer(&mut self) -> bool {
        self.engine.start()
    }

    pub fn pause_timer(&mut self) -> bool {
        self.engine.pause()
    }

    pub fn toggle_timer(&mut self) {
        self.engine.toggle();
    }

    pub fn set_mode(&mut self, mode: PomodoroMode) {
        self.engine.set_mode(mode, &self.settings.pomodoro);
    }

    pub fn next_mode(&mut self) {
        self.engine.next_mode(&self.settings.pomodoro);
    }

    pub fn previous_mode(&mut self) {
        self.engine.previous_mode(&self.settings.pomodoro);
    }

    pub fn bind_task(&mut self, id: Option<TaskId>) {
        self.engine.bind_task(id);
    }

    /// Run every whole second due by `now` and expire old toasts
    pub fn advance(&mut self, now: Instant) {
        let due = self.engine.due_ticks(now);
        for _ in 0..due {
            if !self.engine.is_running() {
                break;
            }
            self.tick();
        }
        self.toasts.expire(now);
    }

    /// Advance exactly one second, bypassing the wall clock
    pub fn tick(&mut self) {
        if let Some(outcome) = self.engine.tick(&mut self.tasks, &self.settings.pomodoro) {
            self.on_session_complete(outcome);
        }
    }

    fn on_session_complete(&mut self, outcome: SessionOutcome) {
        if let SessionOutcome::FocusComplete {
            credited: Some(_), ..
        } = &outcome
        {
            self.persist();
        }

        let (title, message) = (outcome.title(), outcome.message());
        let notifications = self.settings.notifications;
        if notifications.desktop {
            self.notifier.desktop(title, message);
        }
        if notifications.sound {
            self.notifier.ring(notifications.sound_type);
        }
        self.toasts.push(title, message, Severity::Info);
    }

    // Settings & data

    /// Validate and store new settings
    ///
    /// An idle focus timer picks up the new focus duration immediately; any
    /// other state keeps its countdown until the next mode change.
    pub fn save_settings(&mut self, settings: Settings) -> Result<(), ValidationError> {
        self.reject_invalid(settings.validate())?;
        self.settings = settings;
        if self.engine.mode() == PomodoroMode::Focus && !self.engine.is_running() {
            self.engine
                .set_mode(PomodoroMode::Focus, &self.settings.pomodoro);
        }
        tracing::info!("settings saved");
        self.persist();
        self.toasts
            .push("Success", "Settings saved successfully!", Severity::Success);
        Ok(())
    }

    pub fn reset_settings(&mut self) {
        self.settings = Settings::default();
        tracing::info!("settings reset");
        self.persist();
        self.toasts
            .push("Success", "Settings reset to default!", Severity::Success);
    }

    /// Drop every task and restore default settings
    pub fn clear_all_data(&mut self) {
        self.tasks.clear();
        self.settings = Settings::default();
        tracing::info!("all data cleared");
        self.persist();
        self.toasts
            .push("Success", "All data cleared successfully!", Severity::Success);
    }

    pub fn export_document(&self) -> ExportDocument<'_> {
        ExportDocument {
            tasks: self.tasks.tasks(),
            settings: &self.settings,
            export_date: Utc::now(),
        }
    }

    /// Note a finished export for the user
    pub fn record_export(&mut self) {
        self.toasts
            .push("Success", "Data exported successfully!", Severity::Success);
    }

    /// Replace tasks and settings with a backup document, all or nothing
    pub fn import_document(&mut self, content: &str) -> Result<(), ImportError> {
        let snapshot = match parse_import(content) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!("Rejected import: {}", err);
                self.toasts.push("Error", &err.to_string(), Severity::Error);
                return Err(err);
            }
        };

        tracing::info!(tasks = snapshot.tasks.len(), "data imported");
        self.tasks.replace_all(snapshot.tasks);
        self.settings = snapshot.settings;
        self.persist();
        self.toasts
            .push("Success", "Data imported successfully!", Severity::Success);
        Ok(())
    }

    // Analytics

    pub fn summary(&self) -> Summary {
        summary(self.tasks.tasks())
    }

    pub fn breakdown(&self) -> impl Iterator<Item = TaskBreakdown<'_>> + '_ {
        per_task_breakdown(self.tasks.tasks())
    }

    pub fn analytics_range(&self) -> AnalyticsRange {
        self.analytics_range
    }

    /// Recorded for display only; aggregation always covers every task
    pub fn set_analytics_range(&mut self, range: AnalyticsRange) {
        self.analytics_range = range;
    }

    /// Accrued focus seconds plus the running focus session, if any
    pub fn total_focus_time(&self) -> u64 {
        self.summary().total_time_spent + self.engine.live_focus_seconds()
    }

    // Internals

    fn reject_invalid<T>(&mut self, result: Result<T, ValidationError>) -> Result<T, ValidationError> {
        if let Err(err) = &result {
            self.toasts.push("Error", &err.to_string(), Severity::Error);
        }
        result
    }

    fn persist(&mut self) {
        let snapshot = SnapshotRef {
            tasks: self.tasks.tasks(),
            settings: &self.settings,
        };
        if let Err(err) = self.store.save(snapshot) {
            tracing::error!("Failed to save snapshot: {:#}", err);
            self.toasts.push(
                "Warning",
                "Failed to save your data. Changes are kept until you quit.",
                Severity::Warning,
            );
        }
    }
}
