use crate::app::AppState;
use crate::domain::{format_clock, format_time, PomodoroMode};
use crate::ui::layout::split_horizontal;
use crate::ui::styles::{border_style, paused_style, running_style, Palette};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs},
    Frame,
};

/// Render the Pomodoro timer view
pub fn render_timer_view(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let (timer_area, side_area) = split_horizontal(area, 60);
    let engine = app.tracker.engine();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Pomodoro ", palette.title()));
    let inner = block.inner(timer_area);
    f.render_widget(block.style(palette.base()), timer_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Mode tabs
            Constraint::Length(1),
            Constraint::Length(3), // Clock
            Constraint::Length(1), // Gauge
            Constraint::Length(1),
            Constraint::Min(0), // Status
        ])
        .split(inner);

    let modes: Vec<Line> = PomodoroMode::SEQUENCE
        .iter()
        .map(|m| Line::raw(m.label()))
        .collect();
    let index = PomodoroMode::SEQUENCE
        .iter()
        .position(|m| *m == engine.mode())
        .unwrap_or(0);
    let tabs = Tabs::new(modes)
        .select(index)
        .highlight_style(palette.selected());
    f.render_widget(tabs, rows[0]);

    let clock_style = if engine.is_running() {
        running_style()
    } else {
        paused_style()
    };
    let clock = Paragraph::new(vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled(format_clock(engine.time_remaining()), clock_style),
            Span::raw(format!(" / {}", format_clock(engine.total_time()))),
        ]),
    ])
    .alignment(Alignment::Center);
    f.render_widget(clock, rows[2]);

    let gauge = Gauge::default()
        .gauge_style(palette.gauge())
        .ratio(engine.progress().clamp(0.0, 1.0));
    f.render_widget(gauge, rows[3]);

    let status = if engine.is_running() { "Running" } else { "Paused" };
    let bound = app
        .tracker
        .bound_task()
        .map(|t| t.name.as_str())
        .unwrap_or("no task selected");
    let lines = vec![
        Line::from(vec![Span::styled("Status:   ", palette.title()), Span::raw(status)]),
        Line::from(vec![
            Span::styled("Task:     ", palette.title()),
            Span::raw(bound),
        ]),
        Line::from(vec![
            Span::styled("Sessions: ", palette.title()),
            Span::raw(format!(
                "{}/{} until long break",
                engine.sessions_completed(),
                app.tracker.settings().pomodoro.sessions_before_long_break
            )),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), rows[5]);

    render_today(f, app, palette, side_area);
}

fn render_today(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let summary = app.tracker.summary();
    let lines = vec![
        Line::from(vec![
            Span::styled("Total focus time:  ", palette.title()),
            Span::raw(format_time(app.tracker.total_focus_time())),
        ]),
        Line::from(vec![
            Span::styled("Pomodoros:         ", palette.title()),
            Span::raw(summary.pomodoros_completed.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Tasks completed:   ", palette.title()),
            Span::raw(format!(
                "{}/{}",
                summary.tasks_completed,
                app.tracker.task_store().len()
            )),
        ]),
    ];

    let paragraph = Paragraph::new(lines).style(palette.base()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Progress ", palette.title())),
    );
    f.render_widget(paragraph, area);
}
