use crate::app::{AppState, ConfirmAction};
use crate::domain::{AnalyticsRange, PomodoroMode, UiMode, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events; Ok(true) means quit
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::TaskForm => handle_task_form_mode(app, key),
        UiMode::Confirm => handle_confirm_mode(app, key),
        UiMode::ImportPrompt => handle_import_prompt_mode(app, key),
    }
}

/// Handle keys in normal mode: global keys first, then the active view
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Tab => {
            app.next_view();
            return Ok(false);
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.set_view(View::all()[index]);
            return Ok(false);
        }
        _ => {}
    }

    match app.view {
        View::Tasks => handle_tasks_view(app, key),
        View::Pomodoro => handle_pomodoro_view(app, key),
        View::Analytics => handle_analytics_view(app, key),
        View::Settings => handle_settings_view(app, key),
    }
    Ok(false)
}

fn handle_tasks_view(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        // Add / edit
        KeyCode::Char('a') => app.start_add_task(),
        KeyCode::Char('e') => app.start_edit_task(),

        // Complete / delete
        KeyCode::Char(' ') | KeyCode::Char('d') => app.toggle_selected_completion(),
        KeyCode::Char('x') | KeyCode::Delete => app.request_delete_selected(),

        KeyCode::Char('f') => app.cycle_filter(),

        // Bind to timer
        KeyCode::Enter => app.focus_selected(),

        _ => {}
    }
}

fn handle_pomodoro_view(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => app.tracker.toggle_timer(),
        KeyCode::Char('s') => {
            app.tracker.start_timer();
        }
        KeyCode::Char('p') => {
            app.tracker.pause_timer();
        }
        // Jump straight to a mode
        KeyCode::Char('f') => app.tracker.set_mode(PomodoroMode::Focus),
        KeyCode::Char('b') => app.tracker.set_mode(PomodoroMode::ShortBreak),
        KeyCode::Char('l') => app.tracker.set_mode(PomodoroMode::LongBreak),
        KeyCode::Left => app.tracker.previous_mode(),
        KeyCode::Right => app.tracker.next_mode(),
        KeyCode::Char('t') => app.cycle_bound_task(),
        _ => {}
    }
}

fn handle_analytics_view(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('w') => app.set_analytics_range(AnalyticsRange::Week),
        KeyCode::Char('m') => app.set_analytics_range(AnalyticsRange::Month),
        KeyCode::Char('y') => app.set_analytics_range(AnalyticsRange::Year),
        KeyCode::Char('r') => app.write_report(chrono::Local::now().date_naive()),
        _ => {}
    }
}

fn handle_settings_view(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.settings_field_up(),
        KeyCode::Down | KeyCode::Char('j') => app.settings_field_down(),
        KeyCode::Left | KeyCode::Char('-') => app.adjust_setting(false),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char(' ') => app.adjust_setting(true),

        KeyCode::Enter | KeyCode::Char('s') => app.save_settings(),
        KeyCode::Char('R') => app.request_confirm(ConfirmAction::ResetSettings),

        // Data management
        KeyCode::Char('x') => {
            app.export_data(chrono::Local::now().date_naive());
        }
        KeyCode::Char('i') => app.start_import(),
        KeyCode::Char('C') => app.request_confirm(ConfirmAction::ClearAllData),

        _ => {}
    }
}

/// Handle keys in the add/edit task form
fn handle_task_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_task_form(),
        KeyCode::Esc => app.cancel_task_form(),
        _ => {
            let Some(form) = app.task_form.as_mut() else {
                return Ok(false);
            };
            match key.code {
                KeyCode::Tab | KeyCode::Down => form.next_field(),
                KeyCode::BackTab | KeyCode::Up => form.previous_field(),
                KeyCode::Left if form.field.is_choice() => form.cycle_choice(false),
                KeyCode::Right if form.field.is_choice() => form.cycle_choice(true),
                KeyCode::Backspace => form.backspace(),
                KeyCode::Char(c) => form.push_char(c),
                _ => {}
            }
        }
    }
    Ok(false)
}

/// Handle keys in the confirmation modal
fn handle_confirm_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_confirm(),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the import path prompt
fn handle_import_prompt_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_import(),
        KeyCode::Esc => app.cancel_import(),
        KeyCode::Backspace => {
            app.import_path.pop();
        }
        KeyCode::Char(c) => app.import_path.push(c),
        _ => {}
    }
    Ok(false)
}
