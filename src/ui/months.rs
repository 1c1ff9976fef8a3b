//! Month selection and month detail rendering

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
};

use super::helpers::{card_block, clamp_percent, wrap_text};
use crate::app::{App, MonthButton};
use crate::models::MonthData;
use crate::theme::{
    complexity_color, resource_glyph, BG_PRIMARY, BG_SECONDARY, BG_TERTIARY, BLUE_PRIMARY,
    BORDER_SUBTLE, GREEN_SUCCESS, PURPLE_ACCENT, RED_VIDEO, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY,
};

/// Height of the month button row
pub const MONTH_BUTTON_HEIGHT: u16 = 3;

/// Render one button per month range of the selected phase
pub fn render_month_buttons(area: Rect, buttons: &[MonthButton<'_>], frame: &mut Frame) {
    if buttons.is_empty() {
        return;
    }
    let count = buttons.len() as u32;
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(buttons.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (button, button_area) in buttons.iter().zip(layout.iter()) {
        let (border_color, style) = if button.active {
            (
                BLUE_PRIMARY,
                Style::default()
                    .bg(BLUE_PRIMARY)
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                BORDER_SUBTLE,
                Style::default().bg(BG_SECONDARY).fg(TEXT_SECONDARY),
            )
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(style);
        let label = Paragraph::new(format!("▦ Months {}", button.range))
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(label, *button_area);
    }
}

/// Render the active month: heading with progress, skills and projects
/// checklists, and the learning resources card.
/// Renders nothing when the selected phase or month does not exist.
pub fn render_month_detail(area: Rect, app: &App, frame: &mut Frame) {
    let Some(month) = app.active_month_data() else {
        return;
    };

    let show_material = app.show_resources && month.has_learning_material();
    let material_rows = if show_material {
        learning_material_lines(month).len() as u16 + 2
    } else {
        0
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Heading + progress
            Constraint::Length(1),             // Spacer
            Constraint::Min(4),                // Skills / projects
            Constraint::Length(material_rows), // Learning resources
        ])
        .split(area);

    render_heading(layout[0], app, month, frame);

    let cursor = app.cursor_index();
    let skill_count = month.skills.len();
    if month.projects.is_empty() {
        render_skills(layout[2], app, month, cursor, frame);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(layout[2]);
        render_skills(columns[0], app, month, cursor, frame);
        let project_cursor = cursor.and_then(|c| c.checked_sub(skill_count));
        render_projects(columns[1], app, month, project_cursor, frame);
    }

    if show_material {
        let block = card_block(Some(section_title("▤", BLUE_PRIMARY, "Learning Resources")));
        let paragraph = Paragraph::new(learning_material_lines(month)).block(block);
        frame.render_widget(paragraph, layout[3]);
    }
}

fn section_title(glyph: &str, color: Color, title: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {} ", glyph), Style::default().fg(color)),
        Span::styled(
            format!("{} ", title),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn render_heading(area: Rect, app: &App, month: &MonthData, frame: &mut Frame) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(32)])
        .split(area);

    let heading = Line::from(vec![
        Span::styled("▦ ", Style::default().fg(BLUE_PRIMARY)),
        Span::styled(
            format!("Months {}: {}", app.active_month, month.title),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(heading), columns[0]);

    let progress = app.current_progress();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(BLUE_PRIMARY).bg(BG_PRIMARY))
        .percent(clamp_percent(progress))
        .label(format!("{}%", progress));
    frame.render_widget(gauge, columns[1]);
}

/// Checkbox glyph and the row style for the cursor
fn checkbox(checked: bool, color: Color) -> Span<'static> {
    if checked {
        Span::styled("[x] ", Style::default().fg(color).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("[ ] ", Style::default().fg(TEXT_MUTED))
    }
}

fn cursor_marker(selected: bool) -> Span<'static> {
    if selected {
        Span::styled("› ", Style::default().fg(BLUE_PRIMARY))
    } else {
        Span::raw("  ")
    }
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().bg(BG_TERTIARY)
    } else {
        Style::default()
    }
}

fn render_skills(
    area: Rect,
    app: &App,
    month: &MonthData,
    cursor: Option<usize>,
    frame: &mut Frame,
) {
    let mut lines = Vec::new();
    for (idx, skill) in month.skills.iter().enumerate() {
        let selected = cursor == Some(idx);
        lines.push(
            Line::from(vec![
                cursor_marker(selected),
                checkbox(app.is_completed(&skill.id), GREEN_SUCCESS),
                Span::styled(
                    skill.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
            .style(row_style(selected)),
        );

        // Topic badges
        let mut badges = vec![Span::raw("      ")];
        for topic in &skill.topics {
            badges.push(Span::styled(
                format!("[{}]", topic),
                Style::default().fg(TEXT_SECONDARY),
            ));
            badges.push(Span::raw(" "));
        }
        lines.push(Line::from(badges));
    }

    let block = card_block(Some(section_title("◎", GREEN_SUCCESS, "Core Skills")));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_projects(
    area: Rect,
    app: &App,
    month: &MonthData,
    cursor: Option<usize>,
    frame: &mut Frame,
) {
    // Borders, markers and indentation
    let details_width = area.width.saturating_sub(10) as usize;

    let mut lines = Vec::new();
    for (idx, project) in month.projects.iter().enumerate() {
        let selected = cursor == Some(idx);
        let badge_color = complexity_color(project.complexity);
        lines.push(
            Line::from(vec![
                cursor_marker(selected),
                checkbox(app.is_completed(&project.id), PURPLE_ACCENT),
                Span::styled(
                    project.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!(" {} ", project.complexity.label()),
                    Style::default().fg(BG_PRIMARY).bg(badge_color),
                ),
            ])
            .style(row_style(selected)),
        );
        for detail in wrap_text(&project.details, details_width) {
            lines.push(Line::from(vec![
                Span::raw("      "),
                Span::styled(detail, Style::default().fg(TEXT_MUTED)),
            ]));
        }
    }

    let block = card_block(Some(section_title("▲", PURPLE_ACCENT, "Projects")));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Two lines per resource or video: name, then author/category/duration
fn learning_material_lines(month: &MonthData) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for resource in month.resources.iter().flatten() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", resource_glyph(resource.kind)),
                Style::default().fg(GREEN_SUCCESS),
            ),
            Span::styled(
                resource.name.clone(),
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", resource.subtitle()),
            Style::default().fg(TEXT_MUTED),
        )));
    }
    for video in month.videos.iter().flatten() {
        lines.push(Line::from(vec![
            Span::styled(" ▶ ", Style::default().fg(RED_VIDEO)),
            Span::styled(
                video.title.clone(),
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", video.subtitle()),
            Style::default().fg(TEXT_MUTED),
        )));
    }
    lines
}
