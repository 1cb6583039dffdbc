use crate::domain::{DisplaySettings, Priority, Theme};
use crate::notifications::Severity;
use ratatui::style::{Color, Modifier, Style};

/// Colours derived from the display settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub fg: Color,
    pub bg: Color,
}

impl Palette {
    pub fn from_settings(display: &DisplaySettings) -> Self {
        let accent = display
            .accent_rgb()
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::Cyan);
        // Auto follows the terminal's own colours
        let (fg, bg) = match display.theme {
            Theme::Light => (Color::Black, Color::White),
            Theme::Dark => (Color::White, Color::Black),
            Theme::Auto => (Color::Reset, Color::Reset),
        };
        Self { accent, fg, bg }
    }

    /// Default text style
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Title style for panes
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row highlight style
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.bg_or(Color::Black))
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Gauge style
    pub fn gauge(&self) -> Style {
        Style::default().fg(self.accent).bg(Color::DarkGray)
    }

    fn bg_or(&self, fallback: Color) -> Color {
        match self.bg {
            Color::Reset => fallback,
            bg => bg,
        }
    }
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Running timer style
pub fn running_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Paused timer style
pub fn paused_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Error message / overdue style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Done/completed task style
pub fn done_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Category tag style
pub fn tag_style() -> Style {
    Style::default().fg(Color::Blue)
}

pub fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::High => Style::default().fg(Color::Red),
        Priority::Medium => Style::default().fg(Color::Yellow),
        Priority::Low => Style::default().fg(Color::Gray),
    }
}

pub fn severity_style(severity: Severity) -> Style {
    let color = match severity {
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Cyan,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_from_settings() {
        let mut display = DisplaySettings::default();
        let palette = Palette::from_settings(&display);
        assert_eq!(palette.accent, Color::Rgb(0x6A, 0x7E, 0xFC));
        assert_eq!(palette.bg, Color::White);

        display.theme = Theme::Auto;
        display.accent_color = "not a colour".to_string();
        let palette = Palette::from_settings(&display);
        assert_eq!(palette.accent, Color::Cyan);
        assert_eq!(palette.bg, Color::Reset);
        assert_eq!(palette.selected().fg, Some(Color::Black));
    }
}
