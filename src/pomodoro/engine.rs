//! Pomodoro timer state machine.
//!
//! Modes cycle `focus -> shortBreak | longBreak -> focus`. The engine owns a
//! one-second [`Ticker`]; the caller polls [`PomodoroEngine::due_ticks`] and
//! feeds each due second to [`PomodoroEngine::tick`].
//!
//! Completing a focus session credits the bound task with the configured
//! focus duration, never with wall-clock elapsed time.

use crate::domain::{PomodoroMode, PomodoroSettings, TaskId};
use crate::store::TaskStore;
use crate::ticker::Ticker;
use std::time::Instant;

/// Observable timer state (memory only, never persisted)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomodoroState {
    pub is_running: bool,
    pub current_mode: PomodoroMode,
    /// Seconds left in the current mode, never above `total_time`
    pub time_remaining: u32,
    pub total_time: u32,
    /// Focus sessions since the last long break
    pub sessions_completed: u32,
    /// Weak reference, resolved by id at completion time
    pub current_task_id: Option<TaskId>,
}

/// What happened when a session ran out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    FocusComplete {
        /// Task that received the pomodoro, if the bound id still resolved
        credited: Option<TaskId>,
        next_mode: PomodoroMode,
    },
    BreakComplete,
}

impl SessionOutcome {
    pub fn title(&self) -> &'static str {
        match self {
            SessionOutcome::FocusComplete { .. } => "Focus Session Complete!",
            SessionOutcome::BreakComplete => "Break Complete!",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SessionOutcome::FocusComplete { .. } => "Time for a break!",
            SessionOutcome::BreakComplete => "Ready for another focus session?",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PomodoroEngine {
    state: PomodoroState,
    ticker: Ticker,
}

impl PomodoroEngine {
    /// Idle engine in focus mode
    pub fn new(settings: &PomodoroSettings) -> Self {
        let total = settings.duration_secs(PomodoroMode::Focus);
        Self {
            state: PomodoroState {
                is_running: false,
                current_mode: PomodoroMode::Focus,
                time_remaining: total,
                total_time: total,
                sessions_completed: 0,
                current_task_id: None,
            },
            ticker: Ticker::every_second(),
        }
    }

    // Queries

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn mode(&self) -> PomodoroMode {
        self.state.current_mode
    }

    pub fn time_remaining(&self) -> u32 {
        self.state.time_remaining
    }

    pub fn total_time(&self) -> u32 {
        self.state.total_time
    }

    pub fn sessions_completed(&self) -> u32 {
        self.state.sessions_completed
    }

    pub fn current_task_id(&self) -> Option<&TaskId> {
        self.state.current_task_id.as_ref()
    }

    /// 0.0 .. 1.0 progress through the current mode
    pub fn progress(&self) -> f64 {
        if self.state.total_time == 0 {
            return 0.0;
        }
        let done = self.state.total_time - self.state.time_remaining;
        f64::from(done) / f64::from(self.state.total_time)
    }

    /// Seconds already spent in a running focus session
    pub fn live_focus_seconds(&self) -> u64 {
        if self.state.is_running && self.state.current_mode == PomodoroMode::Focus {
            u64::from(self.state.total_time - self.state.time_remaining)
        } else {
            0
        }
    }

    // Commands

    /// Start the countdown; false if it was already running
    pub fn start(&mut self) -> bool {
        self.start_at(Instant::now())
    }

    pub fn start_at(&mut self, now: Instant) -> bool {
        if self.state.is_running {
            return false;
        }
        self.state.is_running = true;
        self.ticker.start(now);
        tracing::debug!(mode = ?self.state.current_mode, remaining = self.state.time_remaining, "timer started");
        true
    }

    /// Stop the countdown, keeping the remaining time; false if already paused
    pub fn pause(&mut self) -> bool {
        if !self.state.is_running {
            return false;
        }
        self.state.is_running = false;
        self.ticker.cancel();
        tracing::debug!(remaining = self.state.time_remaining, "timer paused");
        true
    }

    pub fn toggle(&mut self) {
        if self.state.is_running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Whole seconds due since the last poll (0 while paused)
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        self.ticker.due(now)
    }

    /// Advance one second; completes the session when time runs out
    pub fn tick(
        &mut self,
        tasks: &mut TaskStore,
        settings: &PomodoroSettings,
    ) -> Option<SessionOutcome> {
        if !self.state.is_running {
            return None;
        }
        debug_assert!(self.ticker.is_scheduled());
        self.state.time_remaining = self.state.time_remaining.saturating_sub(1);
        if self.state.time_remaining == 0 {
            return Some(self.complete_session(tasks, settings));
        }
        None
    }

    /// Finish the current mode and move to the next one
    pub fn complete_session(
        &mut self,
        tasks: &mut TaskStore,
        settings: &PomodoroSettings,
    ) -> SessionOutcome {
        self.pause();

        if self.state.current_mode.is_break() {
            self.set_mode(PomodoroMode::Focus, settings);
            tracing::debug!("break complete");
            return SessionOutcome::BreakComplete;
        }

        self.state.sessions_completed += 1;

        let focus_secs = u64::from(settings.duration_secs(PomodoroMode::Focus));
        let credited = match self.state.current_task_id.clone() {
            Some(id) if tasks.credit_focus_session(&id, focus_secs) => Some(id),
            _ => None,
        };

        let next_mode = if self.state.sessions_completed >= settings.sessions_before_long_break {
            self.set_mode(PomodoroMode::LongBreak, settings);
            self.state.sessions_completed = 0;
            PomodoroMode::LongBreak
        } else {
            self.set_mode(PomodoroMode::ShortBreak, settings);
            PomodoroMode::ShortBreak
        };

        tracing::debug!(?credited, ?next_mode, "focus session complete");
        SessionOutcome::FocusComplete {
            credited,
            next_mode,
        }
    }

    /// Pause and enter `mode` with a full countdown
    pub fn set_mode(&mut self, mode: PomodoroMode, settings: &PomodoroSettings) {
        self.pause();
        let total = settings.duration_secs(mode);
        self.state.current_mode = mode;
        self.state.total_time = total;
        self.state.time_remaining = total;
    }

    pub fn next_mode(&mut self, settings: &PomodoroSettings) {
        let mode = self.state.current_mode.next();
        self.set_mode(mode, settings);
    }

    pub fn previous_mode(&mut self, settings: &PomodoroSettings) {
        let mode = self.state.current_mode.previous();
        self.set_mode(mode, settings);
    }

    pub fn bind_task(&mut self, task_id: Option<TaskId>) {
        self.state.current_task_id = task_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskDraft;
    use std::time::Duration;

    fn setup() -> (PomodoroEngine, TaskStore, PomodoroSettings, TaskId) {
        let settings = PomodoroSettings::default();
        let mut store = TaskStore::default();
        let id = store.create(TaskDraft::named("Deep work")).id.clone();
        (PomodoroEngine::new(&settings), store, settings, id)
    }

    fn assert_bounds(engine: &PomodoroEngine) {
        assert!(engine.time_remaining() <= engine.total_time());
    }

    #[test]
    fn test_new_engine_is_idle_focus() {
        let (engine, _, _, _) = setup();
        assert!(!engine.is_running());
        assert_eq!(engine.mode(), PomodoroMode::Focus);
        assert_eq!(engine.time_remaining(), 1500);
        assert_eq!(engine.total_time(), 1500);
        assert_eq!(engine.sessions_completed(), 0);
        assert!(engine.current_task_id().is_none());
    }

    #[test]
    fn test_start_and_pause_are_idempotent() {
        let (mut engine, mut store, settings, _) = setup();
        assert!(engine.start());
        assert!(!engine.start());

        for _ in 0..10 {
            engine.tick(&mut store, &settings);
        }
        assert!(engine.pause());
        let remaining = engine.time_remaining();
        assert!(!engine.pause());
        assert_eq!(engine.time_remaining(), remaining);
        assert_eq!(remaining, 1490);
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let (mut engine, mut store, settings, _) = setup();
        assert!(engine.tick(&mut store, &settings).is_none());
        assert_eq!(engine.time_remaining(), 1500);
    }

    #[test]
    fn test_toggle() {
        let (mut engine, _, _, _) = setup();
        engine.toggle();
        assert!(engine.is_running());
        engine.toggle();
        assert!(!engine.is_running());
    }

    #[test]
    fn test_full_focus_session_credits_bound_task() {
        let (mut engine, mut store, settings, id) = setup();
        engine.bind_task(Some(id.clone()));
        engine.start();

        let mut outcome = None;
        for _ in 0..1500 {
            assert_bounds(&engine);
            if let Some(o) = engine.tick(&mut store, &settings) {
                outcome = Some(o);
            }
        }

        assert_eq!(
            outcome,
            Some(SessionOutcome::FocusComplete {
                credited: Some(id.clone()),
                next_mode: PomodoroMode::ShortBreak,
            })
        );
        assert!(!engine.is_running());
        assert_eq!(engine.mode(), PomodoroMode::ShortBreak);
        assert_eq!(engine.sessions_completed(), 1);
        assert_eq!(engine.time_remaining(), 300);
        let task = store.find_by_id(&id).unwrap();
        assert_eq!(task.time_spent, 1500);
        assert_eq!(task.completed_pomodoros, 1);
    }

    #[test]
    fn test_credit_uses_configured_duration() {
        let (mut engine, mut store, mut settings, id) = setup();
        engine.bind_task(Some(id.clone()));
        settings.focus_duration = 50;
        // The running countdown still holds the old 25 minutes
        engine.start();
        engine.complete_session(&mut store, &settings);
        assert_eq!(store.find_by_id(&id).unwrap().time_spent, 3000);
    }

    #[test]
    fn test_fourth_session_goes_to_long_break() {
        let (mut engine, mut store, settings, _) = setup();
        for round in 1..=4 {
            engine.start();
            for _ in 0..1500 {
                engine.tick(&mut store, &settings);
            }
            if round < 4 {
                assert_eq!(engine.mode(), PomodoroMode::ShortBreak);
                assert_eq!(engine.sessions_completed(), round);
                // Skip the break manually
                engine.previous_mode(&settings);
                assert_eq!(engine.mode(), PomodoroMode::Focus);
            }
        }
        assert_eq!(engine.mode(), PomodoroMode::LongBreak);
        assert_eq!(engine.sessions_completed(), 0);
        assert_eq!(engine.total_time(), 900);
    }

    #[test]
    fn test_breaks_skipped_forward_still_reach_long_break() {
        let (mut engine, mut store, settings, _) = setup();
        for round in 1..=4 {
            engine.start();
            for _ in 0..1500 {
                engine.tick(&mut store, &settings);
                assert_bounds(&engine);
            }
            if round < 4 {
                assert_eq!(engine.mode(), PomodoroMode::ShortBreak);
                // shortBreak -> longBreak -> focus
                engine.next_mode(&settings);
                engine.next_mode(&settings);
                assert_eq!(engine.mode(), PomodoroMode::Focus);
                assert_eq!(engine.sessions_completed(), round);
            }
        }
        assert_eq!(engine.mode(), PomodoroMode::LongBreak);
        assert_eq!(engine.sessions_completed(), 0);
    }

    #[test]
    fn test_bounds_hold_across_mixed_operations() {
        let (mut engine, mut store, settings, id) = setup();
        let short = PomodoroSettings {
            focus_duration: 1,
            short_break_duration: 1,
            ..settings
        };
        engine.bind_task(Some(id));

        engine.start();
        assert_bounds(&engine);
        for _ in 0..30 {
            engine.tick(&mut store, &settings);
            assert_bounds(&engine);
        }
        engine.pause();
        assert_bounds(&engine);
        engine.set_mode(PomodoroMode::Focus, &short);
        assert_bounds(&engine);
        engine.start();
        for _ in 0..120 {
            engine.tick(&mut store, &short);
            assert_bounds(&engine);
        }
        engine.previous_mode(&settings);
        assert_bounds(&engine);
        engine.toggle();
        engine.complete_session(&mut store, &settings);
        assert_bounds(&engine);
        engine.next_mode(&short);
        assert_bounds(&engine);
        engine.complete_session(&mut store, &short);
        assert_bounds(&engine);
    }

    #[test]
    fn test_break_completion_returns_to_focus() {
        let (mut engine, mut store, settings, id) = setup();
        engine.bind_task(Some(id.clone()));
        engine.set_mode(PomodoroMode::ShortBreak, &settings);
        engine.start();
        let mut outcome = None;
        for _ in 0..300 {
            outcome = engine.tick(&mut store, &settings).or(outcome);
        }
        assert_eq!(outcome, Some(SessionOutcome::BreakComplete));
        assert_eq!(engine.mode(), PomodoroMode::Focus);
        assert_eq!(engine.sessions_completed(), 0);
        assert_eq!(store.find_by_id(&id).unwrap().completed_pomodoros, 0);
    }

    #[test]
    fn test_deleted_task_is_skipped() {
        let (mut engine, mut store, settings, id) = setup();
        engine.bind_task(Some(id.clone()));
        store.delete(&id);

        engine.start();
        let outcome = engine.complete_session(&mut store, &settings);
        assert_eq!(
            outcome,
            SessionOutcome::FocusComplete {
                credited: None,
                next_mode: PomodoroMode::ShortBreak,
            }
        );
        assert_eq!(engine.sessions_completed(), 1);
    }

    #[test]
    fn test_previous_mode_wraps() {
        let (mut engine, _, settings, _) = setup();
        engine.previous_mode(&settings);
        assert_eq!(engine.mode(), PomodoroMode::LongBreak);
        engine.previous_mode(&settings);
        assert_eq!(engine.mode(), PomodoroMode::ShortBreak);
    }

    #[test]
    fn test_manual_navigation_keeps_sessions() {
        let (mut engine, mut store, settings, _) = setup();
        engine.start();
        engine.complete_session(&mut store, &settings);
        assert_eq!(engine.sessions_completed(), 1);

        engine.start();
        engine.next_mode(&settings);
        engine.next_mode(&settings);
        assert!(!engine.is_running());
        assert_eq!(engine.mode(), PomodoroMode::Focus);
        assert_eq!(engine.sessions_completed(), 1);
    }

    #[test]
    fn test_set_mode_pauses_and_resets() {
        let (mut engine, mut store, settings, _) = setup();
        engine.start();
        engine.tick(&mut store, &settings);
        engine.set_mode(PomodoroMode::LongBreak, &settings);
        assert!(!engine.is_running());
        assert_eq!(engine.time_remaining(), 900);
        assert_eq!(engine.total_time(), 900);
    }

    #[test]
    fn test_bind_task_does_not_touch_timer() {
        let (mut engine, _, _, id) = setup();
        engine.start();
        engine.bind_task(Some(id.clone()));
        assert!(engine.is_running());
        assert_eq!(engine.current_task_id(), Some(&id));
        engine.bind_task(None);
        assert!(engine.current_task_id().is_none());
    }

    #[test]
    fn test_due_ticks_follow_ticker() {
        let (mut engine, _, _, _) = setup();
        let now = Instant::now();
        assert_eq!(engine.due_ticks(now + Duration::from_secs(5)), 0);

        engine.start_at(now);
        assert_eq!(engine.due_ticks(now + Duration::from_secs(3)), 3);

        engine.pause();
        assert_eq!(engine.due_ticks(now + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_progress_and_live_focus() {
        let (mut engine, mut store, settings, _) = setup();
        assert_eq!(engine.progress(), 0.0);
        engine.start();
        for _ in 0..750 {
            engine.tick(&mut store, &settings);
        }
        assert!((engine.progress() - 0.5).abs() < f64::EPSILON);
        assert_eq!(engine.live_focus_seconds(), 750);
        engine.pause();
        assert_eq!(engine.live_focus_seconds(), 0);
    }
}
