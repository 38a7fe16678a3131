//! Section rendering (header, grid, carousel, cards)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{CardView, SectionBody, SectionHeader, SectionView, TabView};
use super::utils::{truncate_string, window_label};

pub const CARD_WIDTH: u16 = 24;
pub const CARD_HEIGHT: u16 = 5;

/// Rows a section needs for a single strip of cards: borders, header and one card row
pub const STRIP_HEIGHT: u16 = CARD_HEIGHT + 3;

pub fn render_section(frame: &mut Frame, area: Rect, view: &SectionView, is_focused: bool) {
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let title_style = if is_focused {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {} ", view.title), title_style))
        .padding(Padding::horizontal(1))
        .border_style(border_style);
    if let SectionBody::Carousel { total, first_visible, cards, .. } = &view.body {
        block = block.title_bottom(
            Line::from(format!(" {} ", window_label(*first_visible, cards.len(), *total)))
                .right_aligned(),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Toggle button or genre tabs
            Constraint::Min(0),    // Body
        ])
        .split(inner);

    render_header(frame, chunks[0], &view.header);
    render_body(frame, chunks[1], &view.body);
}

fn render_header(frame: &mut Frame, area: Rect, header: &SectionHeader) {
    match header {
        SectionHeader::Toggle { label, .. } => {
            let button = Paragraph::new(Line::from(Span::styled(
                format!("[ {} ]", label),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Right);
            frame.render_widget(button, area);
        }
        SectionHeader::Tabs { tabs, .. } => {
            frame.render_widget(Paragraph::new(tab_line(tabs)), area);
        }
    }
}

fn tab_line(tabs: &[TabView]) -> Line<'_> {
    let mut spans = Vec::with_capacity(tabs.len() * 2);
    for (i, tab) in tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        let style = if tab.selected {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(tab.label.as_str(), style));
    }
    Line::from(spans)
}

fn render_body(frame: &mut Frame, area: Rect, body: &SectionBody) {
    match body {
        SectionBody::Idle => {
            let idle = Paragraph::new("Nothing to show.").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(idle, area);
        }
        SectionBody::Loading { .. } => {
            let loading = Paragraph::new("Loading...").style(Style::default().fg(Color::Yellow));
            frame.render_widget(loading, area);
        }
        SectionBody::Failed { reason, .. } => {
            let lines = vec![
                Line::from(Span::styled(
                    "Failed to load data.",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(reason.as_str(), Style::default().fg(Color::Red))),
                Line::from(Span::styled("Press r to retry", Style::default().fg(Color::DarkGray))),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
        }
        SectionBody::Grid { cards, .. } => render_grid(frame, area, cards),
        SectionBody::Carousel {
            cards,
            per_view,
            can_step_back,
            can_step_forward,
            ..
        } => render_carousel(frame, area, cards, *per_view, *can_step_back, *can_step_forward),
    }
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let empty = Paragraph::new("No items.").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(empty, area);
}

fn render_grid(frame: &mut Frame, area: Rect, cards: &[CardView]) {
    if cards.is_empty() {
        render_empty(frame, area);
        return;
    }

    let per_row = usize::from((area.width / CARD_WIDTH).max(1));
    let rows_fit = usize::from(area.height / CARD_HEIGHT);
    let rows_needed = cards.len().div_ceil(per_row);

    // Keep a line free for the overflow note when not everything fits
    let (rows, overflow) = if rows_needed <= rows_fit {
        (rows_needed, 0)
    } else {
        let rows = usize::from(area.height.saturating_sub(1) / CARD_HEIGHT);
        (rows, cards.len().saturating_sub(rows * per_row))
    };

    let mut constraints = vec![Constraint::Length(CARD_HEIGHT); rows];
    constraints.push(Constraint::Min(0));
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, chunk) in cards.chunks(per_row).take(rows).enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(CARD_WIDTH); per_row])
            .split(row_areas[row]);
        for (card, column) in chunk.iter().zip(columns.iter()) {
            render_card(frame, *column, card);
        }
    }

    if overflow > 0 {
        let note = Paragraph::new(format!("… {} more", overflow))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(note, row_areas[rows]);
    }
}

fn render_carousel(
    frame: &mut Frame,
    area: Rect,
    cards: &[CardView],
    per_view: usize,
    can_step_back: bool,
    can_step_forward: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2), // Previous control
            Constraint::Min(0),    // Visible cards
            Constraint::Length(2), // Next control
        ])
        .split(area);

    let arrow_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let arrow_row = Rect {
        height: 1,
        y: chunks[0].y + CARD_HEIGHT.min(chunks[0].height) / 2,
        ..chunks[0]
    };
    if can_step_back {
        frame.render_widget(Paragraph::new(Span::styled("‹", arrow_style)), arrow_row);
    }
    if can_step_forward {
        let next_row = Rect { x: chunks[2].x, width: chunks[2].width, ..arrow_row };
        frame.render_widget(
            Paragraph::new(Span::styled("›", arrow_style)).alignment(Alignment::Right),
            next_row,
        );
    }

    if cards.is_empty() {
        render_empty(frame, chunks[1]);
        return;
    }

    let slots = per_view.max(1) as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, slots); per_view.max(1)])
        .split(Rect {
            height: CARD_HEIGHT.min(chunks[1].height),
            ..chunks[1]
        });
    for (card, column) in cards.iter().zip(columns.iter()) {
        render_card(frame, *column, card);
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &CardView) {
    let inner_width = usize::from(area.width.saturating_sub(2));
    let (image_marker, border_color) = if card.has_image {
        (format!("▣ {}", image_name(&card.image_url)), Color::Cyan)
    } else {
        ("□ no image".to_string(), Color::DarkGray)
    };

    let lines = vec![
        Line::from(Span::styled(
            truncate_string(&card.title, inner_width),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_string(&card.chip_label, inner_width),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(Span::styled(
            truncate_string(&image_marker, inner_width),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(widget, area);
}

/// Last path segment of an image reference, e.g. "abbey.jpg"
fn image_name(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::model::{SectionMode, ViewportPosition};

    fn card(title: &str, has_image: bool) -> CardView {
        CardView {
            key: title.to_lowercase(),
            kind: "album",
            title: title.to_string(),
            image_url: if has_image {
                format!("https://cdn.example/covers/{}.jpg?w=300", title.to_lowercase())
            } else {
                "/assets/album-placeholder.png".to_string()
            },
            has_image,
            chip_label: "100 follows".to_string(),
        }
    }

    fn view(header: SectionHeader, body: SectionBody) -> SectionView {
        SectionView {
            id: "top-albums".to_string(),
            region_id: "top-albums-section".to_string(),
            title: "Top Albums".to_string(),
            title_region_id: "top-albums-title".to_string(),
            mode: SectionMode::Albums,
            header,
            body,
        }
    }

    fn draw(width: u16, height: u16, view: &SectionView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_section(frame, frame.area(), view, true))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(usize::from(width))
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn toggle(label: &'static str) -> SectionHeader {
        SectionHeader::Toggle { label, region_id: "top-albums-toggle-button".to_string() }
    }

    #[test]
    fn failure_shows_the_generic_message() {
        let screen = draw(
            60,
            8,
            &view(
                toggle("Collapse"),
                SectionBody::Failed { region_id: "e".into(), reason: "HTTP 500".into() },
            ),
        );
        assert!(screen.contains("Top Albums"));
        assert!(screen.contains("Failed to load data."));
        assert!(screen.contains("[ Collapse ]"));
    }

    #[test]
    fn carousel_hides_unavailable_controls() {
        let body = SectionBody::Carousel {
            region_id: "c".into(),
            cards: vec![card("One", true), card("Two", false)],
            total: 5,
            first_visible: 0,
            per_view: 2,
            can_step_back: false,
            can_step_forward: true,
            position: ViewportPosition::AtStart,
        };
        let screen = draw(70, STRIP_HEIGHT, &view(toggle("Show All"), body));
        assert!(!screen.contains('‹'));
        assert!(screen.contains('›'));
        assert!(screen.contains("1-2 of 5"));
        assert!(screen.contains("no image"));
        assert!(screen.contains("one.jpg"));
    }

    #[test]
    fn image_name_keeps_the_file_segment() {
        assert_eq!(image_name("https://cdn.example/covers/abbey.jpg?w=300"), "abbey.jpg");
        assert_eq!(image_name("https://cdn.example/covers/"), "covers");
        assert_eq!(image_name("cover.png"), "cover.png");
    }

    #[test]
    fn grid_reports_cards_that_do_not_fit() {
        let cards: Vec<CardView> = (0..10).map(|i| card(&format!("Album {i}"), true)).collect();
        let screen = draw(
            52,
            STRIP_HEIGHT + 1,
            &view(toggle("Collapse"), SectionBody::Grid { region_id: "g".into(), cards }),
        );
        assert!(screen.contains("Album 0"));
        assert!(screen.contains("… 8 more"));
    }

    #[test]
    fn selected_tab_is_listed_with_the_rest() {
        let tabs = vec![
            TabView { key: "all".into(), label: "All".into(), region_id: "t-all".into(), selected: true },
            TabView { key: "rock".into(), label: "Rock".into(), region_id: "t-rock".into(), selected: false },
        ];
        let line = tab_line(&tabs);
        assert_eq!(line.spans.len(), 3);
        assert!(line.spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
        assert_eq!(line.spans[2].content, "Rock");
    }
}
