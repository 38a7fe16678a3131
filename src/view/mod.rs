//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared helpers (truncation, popup geometry)
//! - `layout`: Main layout structure (top bar, section stack, status line)
//! - `section`: Section header, grid, carousel and cards
//! - `overlays`: Notice and help popup

mod utils;
mod layout;
mod section;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{SectionView, UiState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, views: &[SectionView], ui_state: &UiState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title + focused section
                Constraint::Min(0),    // Sections
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], views, ui_state);
        layout::render_sections(frame, chunks[1], views, ui_state);
        layout::render_status_line(frame, chunks[2]);

        if ui_state.notice.is_some() {
            overlays::render_notice(frame, ui_state);
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
