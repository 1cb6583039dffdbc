pub mod analytics_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod settings_pane;
pub mod styles;
pub mod tasks_pane;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::{UiMode, View};
use analytics_pane::render_analytics_view;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::{render_confirm_modal, render_import_prompt, render_toasts};
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};
use settings_pane::render_settings_view;
use styles::{border_style, Palette};
use tasks_pane::render_tasks_view;
use timer_pane::render_timer_view;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);
    let palette = Palette::from_settings(&app.tracker.settings().display);

    f.render_widget(Block::default().style(palette.base()), size);

    // View tabs
    let titles: Vec<Line> = View::all()
        .iter()
        .enumerate()
        .map(|(i, v)| Line::raw(format!("{} {}", i + 1, v.title())))
        .collect();
    let today = chrono::Local::now().format("%A, %B %-d, %Y").to_string();
    let tabs = Tabs::new(titles)
        .select(app.view.index())
        .highlight_style(palette.selected())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(format!(" Tempo · {} ", today), palette.title())),
        );
    f.render_widget(tabs, layout.tabs_area);

    match app.view {
        View::Tasks => render_tasks_view(f, app, &palette, layout.content_area),
        View::Pomodoro => render_timer_view(f, app, &palette, layout.content_area),
        View::Analytics => render_analytics_view(f, app, &palette, layout.content_area),
        View::Settings => render_settings_view(f, app, &palette, layout.content_area),
    }

    render_keybindings(f, app.view, layout.keybindings_area);

    // Overlays
    match app.ui_mode {
        UiMode::TaskForm => {
            if let Some(form) = &app.task_form {
                render_input_form(f, form, size);
            }
        }
        UiMode::Confirm => {
            if let Some(action) = &app.confirm {
                render_confirm_modal(f, action, size);
            }
        }
        UiMode::ImportPrompt => render_import_prompt(f, &app.import_path, size),
        UiMode::Normal => {}
    }

    if !app.tracker.toasts().is_empty() {
        render_toasts(f, app.tracker.toasts().active(), layout.content_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::app_in;
    use crate::domain::TaskDraft;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_render_every_view() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.tracker.create_task(TaskDraft::named("Render me")).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        for &view in View::all() {
            app.set_view(view);
            terminal.draw(|f| render(f, &app)).unwrap();
        }

        app.start_add_task();
        terminal.draw(|f| render(f, &app)).unwrap();
    }

    #[test]
    fn test_render_tiny_terminal() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(dir.path());
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
    }
}
