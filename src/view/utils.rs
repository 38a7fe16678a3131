//! Utility functions for rendering UI components

use ratatui::layout::Rect;

/// Truncate to `max_width` characters with a trailing "...", padded to the width.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_width)
    } else {
        format!("{:<width$}", s, width = max_width)
    }
}

/// A popup rectangle centered in `area`, clamped to leave a small margin.
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// "1-4 of 10" style range label for a carousel window
pub fn window_label(first: usize, shown: usize, total: usize) -> String {
    if shown == 0 {
        format!("0 of {}", total)
    } else {
        format!("{}-{} of {}", first + 1, first + shown, total)
    }
}
