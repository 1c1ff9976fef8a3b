//! Phase card rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
};

use super::helpers::{clamp_percent, truncate};
use crate::app::PhaseCard;
use crate::theme::{
    phase_color, phase_glyph, BG_PRIMARY, BG_SECONDARY, BG_TERTIARY, BLUE_PRIMARY, BORDER_SUBTLE, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Height of the phase card row: border + 5 content lines + border
pub const PHASE_CARD_HEIGHT: u16 = 7;

/// Render the phase selection row, one card per phase
pub fn render_phase_cards(area: Rect, cards: &[PhaseCard<'_>], frame: &mut Frame) {
    if cards.is_empty() {
        return;
    }
    let count = cards.len() as u32;
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(cards.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (card, card_area) in cards.iter().zip(card_layout.iter()) {
        render_phase_card(*card_area, card, frame);
    }
}

/// Render a single phase card.
/// The selected card gets a thick blue ring; the others a subtle rounded border.
pub fn render_phase_card(area: Rect, card: &PhaseCard<'_>, frame: &mut Frame) {
    let phase = card.phase;
    let accent = phase_color(phase.color);

    let (border_type, border_color, bg_color) = if card.selected {
        (BorderType::Thick, BLUE_PRIMARY, BG_TERTIARY)
    } else {
        (BorderType::Rounded, BORDER_SUBTLE, BG_SECONDARY)
    };

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg_color));

    let inner_area = card_block.inner(area);
    frame.render_widget(card_block, area);

    let inner_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Icon + "Phase N"
            Constraint::Length(1), // Title
            Constraint::Length(1), // Duration
            Constraint::Length(1), // Focus
            Constraint::Length(1), // Progress bar
        ])
        .split(inner_area);

    let width = inner_area.width as usize;

    let heading = Line::from(vec![
        Span::styled(
            format!("{} ", phase_glyph(phase.icon)),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("Phase {}", phase.id),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(heading), inner_layout[0]);

    let details = [
        (phase.title.as_str(), TEXT_SECONDARY, 1),
        (phase.duration.as_str(), TEXT_MUTED, 2),
        (phase.focus.as_str(), TEXT_MUTED, 3),
    ];
    for (text, color, row) in details {
        let line = Line::from(Span::styled(truncate(text, width), Style::default().fg(color)));
        frame.render_widget(Paragraph::new(line), inner_layout[row]);
    }

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(accent).bg(BG_PRIMARY))
        .percent(clamp_percent(card.progress))
        .label(format!("{}%", card.progress));
    frame.render_widget(gauge, inner_layout[4]);
}
