use crate::app::AppState;
use crate::domain::{format_time, AnalyticsRange};
use crate::ui::styles::{border_style, hint_style, Palette};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Tabs},
    Frame,
};

const RANGES: [AnalyticsRange; 3] = [
    AnalyticsRange::Week,
    AnalyticsRange::Month,
    AnalyticsRange::Year,
];

/// Render the analytics view: summary cards, chart placeholder, per-task table
pub fn render_analytics_view(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Range selector
            Constraint::Length(4), // Summary cards
            Constraint::Length(5), // Chart stub
            Constraint::Min(0),    // Breakdown table
        ])
        .split(area);

    let titles: Vec<Line> = RANGES.iter().map(|r| Line::raw(r.name())).collect();
    let selected = RANGES
        .iter()
        .position(|r| *r == app.tracker.analytics_range())
        .unwrap_or(0);
    f.render_widget(
        Tabs::new(titles)
            .select(selected)
            .highlight_style(palette.selected()),
        rows[0],
    );

    render_summary_cards(f, app, palette, rows[1]);

    let chart = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled("Productivity chart coming soon", hint_style())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Productivity ", palette.title())),
    );
    f.render_widget(chart, rows[2]);

    render_breakdown(f, app, palette, rows[3]);
}

fn render_summary_cards(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let summary = app.tracker.summary();
    let cards = [
        ("Total Time", format_time(summary.total_time_spent)),
        ("Tasks Completed", summary.tasks_completed.to_string()),
        ("Pomodoros", summary.pomodoros_completed.to_string()),
        ("Productivity", format!("{}%", summary.productivity_score)),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, value), column) in cards.into_iter().zip(columns.iter()) {
        let card = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .style(palette.base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(format!(" {} ", label), palette.title())),
        );
        f.render_widget(card, *column);
    }
}

fn render_breakdown(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let rows: Vec<Row> = app
        .tracker
        .breakdown()
        .map(|row| {
            Row::new(vec![
                row.name.to_string(),
                row.category.name().to_string(),
                format_time(row.time_spent),
                row.completed_pomodoros.to_string(),
                format!("{}%", row.percent_complete),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(15),
        Constraint::Percentage(15),
        Constraint::Percentage(15),
        Constraint::Percentage(15),
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Task", "Category", "Time Spent", "Pomodoros", "Progress"])
                .style(palette.title()),
        )
        .style(palette.base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Tasks Breakdown ", palette.title())),
        );
    f.render_widget(table, area);
}
