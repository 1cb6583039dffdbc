use crate::app::AppState;
use crate::domain::{completion_badge, format_time, progress_bar, Task};
use crate::ui::layout::split_horizontal;
use crate::ui::styles::{
    border_style, done_style, error_style, priority_style, tag_style, Palette,
};
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

fn task_line(task: &Task, today: NaiveDate) -> Line<'_> {
    let name_style = if task.is_completed {
        done_style()
    } else {
        Default::default()
    };

    let mut spans = vec![
        Span::raw(format!("{} ", completion_badge(task.is_completed))),
        Span::styled(task.name.as_str(), name_style),
        Span::raw("  "),
        Span::styled(format!("#{}", task.category.name()), tag_style()),
        Span::raw(" "),
        Span::styled(task.priority.name(), priority_style(task.priority)),
        Span::raw(format!(
            "  {}/{} pomodoros",
            task.completed_pomodoros, task.estimated_pomodoros
        )),
    ];

    if let Some(deadline) = task.deadline {
        let style = if task.is_overdue(today) {
            error_style()
        } else {
            Default::default()
        };
        spans.push(Span::styled(format!("  due {}", deadline), style));
    }

    Line::from(spans)
}

/// Render the task list and the selected task's details
pub fn render_tasks_view(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let (list_area, details_area) = split_horizontal(area, 65);
    let today = chrono::Local::now().date_naive();

    let tasks = app.visible_tasks();
    let title = format!(" Tasks ({}) · {} ", tasks.len(), app.task_filter.name());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, palette.title()));

    if tasks.is_empty() {
        let message = if app.tracker.task_store().is_empty() {
            "No tasks yet. Press 'a' to add one."
        } else {
            "No tasks match this filter. Press 'f' to change it."
        };
        let empty = Paragraph::new(message)
            .style(palette.base())
            .block(block);
        f.render_widget(empty, list_area);
    } else {
        let items: Vec<ListItem> = tasks
            .iter()
            .map(|task| ListItem::new(task_line(task, today)))
            .collect();
        let list = List::new(items)
            .style(palette.base())
            .block(block)
            .highlight_style(palette.selected());
        let mut state = ListState::default().with_selected(Some(app.selected_index));
        f.render_stateful_widget(list, list_area, &mut state);
    }

    render_details(f, app.selected_task(), palette, details_area);
}

fn render_details(f: &mut Frame, task: Option<&Task>, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Details ", palette.title()));

    let Some(task) = task else {
        let empty = Paragraph::new("No task selected")
            .style(palette.base())
            .block(block);
        f.render_widget(empty, area);
        return;
    };

    let field = |label: &'static str, value: String| {
        Line::from(vec![Span::styled(label, palette.title()), Span::raw(value)])
    };

    let percent = task.pomodoro_percent();
    let mut lines = vec![
        field("Name:      ", task.name.clone()),
        Line::raw(""),
        field("Category:  ", task.category.name().to_string()),
        field("Priority:  ", task.priority.name().to_string()),
        field(
            "Deadline:  ",
            task.deadline
                .map(|d| d.to_string())
                .unwrap_or_else(|| "none".to_string()),
        ),
        field("Time:      ", format_time(task.time_spent)),
        field(
            "Pomodoros: ",
            format!("{}/{}", task.completed_pomodoros, task.estimated_pomodoros),
        ),
        field("Progress:  ", format!("{} {}%", progress_bar(percent, 10), percent)),
        field(
            "Created:   ",
            task.created_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
        ),
        Line::raw(""),
    ];

    if task.description.trim().is_empty() {
        lines.push(Line::raw("Description: (empty)"));
    } else {
        lines.push(Line::from(Span::styled("Description:", palette.title())));
        for text in task.description.lines() {
            lines.push(Line::raw(format!("  {}", text)));
        }
    }

    let paragraph = Paragraph::new(lines)
        .style(palette.base())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
