use crate::app::ConfirmAction;
use crate::notifications::Toast;
use crate::ui::{
    layout::{create_modal_area, toast_areas},
    styles::{modal_bg_style, modal_title_style, severity_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the confirmation modal for a destructive action
pub fn render_confirm_modal(f: &mut Frame, action: &ConfirmAction, area: Rect) {
    let modal_area = create_modal_area(area, 9);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  {}", action.message())),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [y]", modal_title_style()),
            Span::raw(" Confirm  "),
            Span::styled("[n]", modal_title_style()),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    format!(" {} ", action.title()),
                    modal_title_style(),
                ))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the import file prompt
pub fn render_import_prompt(f: &mut Frame, path: &str, area: Rect) {
    let modal_area = create_modal_area(area, 8);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw("Path to a tempo backup (.json):"),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(path, modal_title_style()),
            Span::styled("█", modal_title_style()), // Cursor
        ]),
        Line::raw(""),
        Line::raw("Enter to import  ·  Esc to cancel"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Import Data ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render active toasts in the top-right corner
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], area: Rect) {
    // Newest first
    let rects = toast_areas(area, toasts.len());
    for (toast, rect) in toasts.iter().rev().zip(rects) {
        f.render_widget(Clear, rect);
        let paragraph = Paragraph::new(Line::raw(toast.message.as_str()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(severity_style(toast.severity))
                    .title(Span::styled(
                        format!(" {} ", toast.title),
                        severity_style(toast.severity),
                    ))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, rect);
    }
}
