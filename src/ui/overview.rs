//! Progress view: summary cards plus a per-month table

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};

use super::helpers::{card_block, progress_bar};
use crate::app::App;
use crate::theme::{
    BG_SECONDARY, BLUE_PRIMARY, BORDER_SUBTLE, GREEN_SUCCESS, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY,
};

/// Width of the text bar in the table's progress column
const BAR_WIDTH: usize = 20;

pub fn render_progress_overview(area: Rect, app: &App, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    let total = app.roadmap.item_count();
    render_progress_cards(
        layout[0],
        app.completed_count(),
        total,
        app.overall_progress(),
        frame,
    );

    let header = Row::new(vec!["Phase", "Months", "Title", "Items", "Progress"])
        .style(Style::default().fg(TEXT_MUTED).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .roadmap
        .phases
        .iter()
        .flat_map(|phase| {
            phase.months.iter().map(move |(range, month)| {
                let percent = app.progress_for(phase.id, range);
                let selected = phase.id == app.selected_phase && *range == app.active_month;
                let style = if selected {
                    Style::default().fg(BLUE_PRIMARY).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(TEXT_SECONDARY)
                };
                Row::new(vec![
                    format!("{}", phase.id),
                    range.clone(),
                    month.title.clone(),
                    format!("{}", month.item_count()),
                    format!("{} {:>3}%", progress_bar(percent, BAR_WIDTH), percent),
                ])
                .style(style)
            })
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Min(20),
            Constraint::Length(6),
            Constraint::Length(BAR_WIDTH as u16 + 6),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(card_block(Some(Line::from(Span::styled(
        " Months ",
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )))));

    frame.render_widget(table, layout[1]);
}

/// Render progress stat cards (items left + overall completion %) in a given area
pub fn render_progress_cards(
    area: Rect,
    completed: usize,
    total: usize,
    overall: u16,
    frame: &mut Frame,
) {
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left card: Items Left
    let items_left = total.saturating_sub(completed);
    let left_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let left_content = vec![
        Line::from(Span::styled(
            format!("{}/{}", items_left, total),
            Style::default()
                .fg(BLUE_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("ITEMS LEFT", Style::default().fg(TEXT_MUTED))),
    ];

    let left_paragraph = Paragraph::new(left_content)
        .block(left_block)
        .alignment(Alignment::Center);

    frame.render_widget(left_paragraph, card_layout[0]);

    // Right card: mean of all month percentages
    let right_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let progress_color = if overall >= 100 {
        GREEN_SUCCESS
    } else {
        BLUE_PRIMARY
    };

    let right_content = vec![
        Line::from(Span::styled(
            format!("{}%", overall),
            Style::default()
                .fg(progress_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("OVERALL PROGRESS", Style::default().fg(TEXT_MUTED))),
    ];

    let right_paragraph = Paragraph::new(right_content)
        .block(right_block)
        .alignment(Alignment::Center);

    frame.render_widget(right_paragraph, card_layout[1]);
}
