use crate::app::{FormField, TaskFormState};
use crate::ui::{
    layout::create_modal_area,
    styles::{hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn field_value(form: &TaskFormState, field: FormField) -> String {
    match field {
        FormField::Name => form.name.clone(),
        FormField::Description => form.description.clone(),
        FormField::Category => format!("‹ {} ›", form.category.name()),
        FormField::Priority => format!("‹ {} ›", form.priority.name()),
        FormField::Estimate => form.estimate.clone(),
        FormField::Deadline => form.deadline.clone(),
    }
}

/// Render the add/edit task form
pub fn render_input_form(f: &mut Frame, form: &TaskFormState, area: Rect) {
    let modal_area = create_modal_area(area, 22);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let mut lines = vec![Line::raw("")];
    for &field in FormField::all() {
        let active = field == form.field;
        let label = if active {
            format!("{}: (editing)", field.label())
        } else {
            format!("{}:", field.label())
        };
        lines.push(Line::raw(label));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(field_value(form, field), modal_title_style()),
            if active && !field.is_choice() {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Tab/↑↓ switch fields  ·  ←/→ change choice  ·  Enter save  ·  Esc cancel",
        hint_style(),
    )));

    let title = if form.editing.is_some() {
        " Edit Task "
    } else {
        " Add Task "
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
