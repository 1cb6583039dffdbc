use crate::domain::View;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hint text for the active view
fn hints(view: View) -> &'static str {
    match view {
        View::Tasks => {
            " ↑/↓ select   a add   e edit   space done   x delete   f filter   Enter focus   Tab view   q quit"
        }
        View::Pomodoro => " space start/pause   s start   p pause   ←/→ mode   f/b/l focus/break/long   t task   Tab view   q quit",
        View::Analytics => " w week   m month   y year   r report   Tab view   q quit",
        View::Settings => {
            " ↑/↓ field   ←/→ change   s save   R reset   x export   i import   C clear all   Tab view   q quit"
        }
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, view: View, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hints(view))).style(hint_style());
    f.render_widget(paragraph, area);
}
