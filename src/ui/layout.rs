use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub tabs_area: Rect,
    pub content_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Top: view tabs (3 rows)
/// - Middle: active view
/// - Bottom bar: keybindings (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    MainLayout {
        tabs_area: chunks[0],
        content_area: chunks[1],
        keybindings_area: chunks[2],
    }
}

/// Split a view into a main pane (left) and a side pane (right)
pub fn split_horizontal(area: Rect, left_percent: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Create centered modal area
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

/// Stack of toast boxes anchored to the top-right corner
pub fn toast_areas(area: Rect, count: usize) -> Vec<Rect> {
    const TOAST_HEIGHT: u16 = 4;
    let width = area.width.min(44);
    let x = area.x + area.width - width;

    (0..count)
        .map(|i| Rect::new(x, area.y + i as u16 * TOAST_HEIGHT, width, TOAST_HEIGHT))
        .take_while(|rect| rect.y + rect.height <= area.y + area.height)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area);

        assert_eq!(layout.tabs_area.height, 3);
        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.content_area.height, 46);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area, 16);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 16);
    }

    #[test]
    fn test_toast_areas_fit_screen() {
        let area = Rect::new(0, 0, 80, 10);
        let rects = toast_areas(area, 5);
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].x + rects[0].width, 80);
        assert_eq!(rects[1].y, 4);
    }
}
