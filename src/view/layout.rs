//! Layout rendering (top bar, section stack, status line)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{SectionBody, SectionView, UiState};
use super::section::{self, STRIP_HEIGHT};

pub fn render_top_bar(frame: &mut Frame, area: Rect, views: &[SectionView], ui_state: &UiState) {
    let focused = views
        .get(ui_state.focused)
        .map(|view| view.title.as_str())
        .unwrap_or("-");

    let line = Line::from(vec![
        Span::styled("Focused: ", Style::default().fg(Color::DarkGray)),
        Span::styled(focused, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("   ({} of {})", ui_state.focused + 1, views.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Qtify ")
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(bar, area);
}

/// Stack every section vertically. Grids share the leftover space.
pub fn render_sections(frame: &mut Frame, area: Rect, views: &[SectionView], ui_state: &UiState) {
    if views.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = views.iter().map(section_constraint).collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (index, (view, chunk)) in views.iter().zip(chunks.iter()).enumerate() {
        section::render_section(frame, *chunk, view, index == ui_state.focused);
    }
}

fn section_constraint(view: &SectionView) -> Constraint {
    match view.body {
        SectionBody::Grid { ref cards, .. } if !cards.is_empty() => Constraint::Min(STRIP_HEIGHT),
        SectionBody::Failed { .. } => Constraint::Length(6),
        _ => Constraint::Length(STRIP_HEIGHT),
    }
}

pub fn render_status_line(frame: &mut Frame, area: Rect) {
    let hints = [
        ("Tab", "focus"),
        ("←/→", "scroll"),
        ("Space", "show all / collapse"),
        ("[ ]", "genre"),
        ("r", "reload"),
        ("h", "help"),
        ("q", "quit"),
    ];

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!("{}  ", action), Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
