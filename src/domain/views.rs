/// Format seconds as "Xh Ym" or "Ym"
pub fn format_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Format seconds as a "MM:SS" clock
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Progress bar glyphs for a percentage (capped at full)
pub fn progress_bar(percent: u32, width: usize) -> String {
    let filled = ((percent.min(100) as usize) * width + 50) / 100;
    let mut bar = String::with_capacity(width * 3);
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

/// Badge for a completed / open task
pub fn completion_badge(is_completed: bool) -> &'static str {
    if is_completed {
        "[x]"
    } else {
        "[ ]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0m");
        assert_eq!(format_time(59), "0m");
        assert_eq!(format_time(1500), "25m");
        assert_eq!(format_time(3600), "1h 0m");
        assert_eq!(format_time(5400), "1h 30m");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 4), "░░░░");
        assert_eq!(progress_bar(50, 4), "██░░");
        assert_eq!(progress_bar(250, 4), "████");
    }

    #[test]
    fn test_completion_badge() {
        assert_eq!(completion_badge(true), "[x]");
        assert_eq!(completion_badge(false), "[ ]");
    }
}
