use crate::app::{AppState, SettingsField};
use crate::ui::styles::{border_style, hint_style, Palette};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the settings editor
pub fn render_settings_view(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let draft = &app.settings_draft;
    let items: Vec<ListItem> = SettingsField::all()
        .iter()
        .map(|field| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<28}", field.label())),
                Span::raw(format!("‹ {} ›", field.value(draft))),
            ]))
        })
        .collect();

    let selected = SettingsField::all()
        .iter()
        .position(|f| *f == app.settings_field);
    let unsaved = if draft != app.tracker.settings() {
        " Settings (unsaved) "
    } else {
        " Settings "
    };
    let list = List::new(items)
        .style(palette.base())
        .highlight_style(palette.selected())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(unsaved, palette.title())),
        );
    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, rows[0], &mut state);

    let data_dir = Paragraph::new(Line::from(Span::styled(
        format!("Data directory: {}", app.data_dir.display()),
        hint_style(),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Data ", palette.title())),
    );
    f.render_widget(data_dir, rows[1]);
}
