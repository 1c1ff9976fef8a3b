//! Top-level screen layout

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::months::{render_month_buttons, render_month_detail, MONTH_BUTTON_HEIGHT};
use super::overview::render_progress_overview;
use super::phases::{render_phase_cards, PHASE_CARD_HEIGHT};
use crate::app::App;
use crate::cli::VERSION;
use crate::models::ViewMode;
use crate::theme::{
    BG_PRIMARY, BG_SECONDARY, BLUE_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

const HEADER_HEIGHT: u16 = 3;

/// Draw the whole screen for the current state
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Title + view buttons
            Constraint::Min(3),                // View content
            Constraint::Length(1),             // Bottom bar (single line)
        ])
        .split(area);

    render_header(main_layout[0], app, frame);
    match app.view_mode {
        ViewMode::Dashboard => render_dashboard(main_layout[1], app, frame),
        ViewMode::Progress => render_progress_overview(main_layout[1], app, frame),
    }
    render_key_bar(main_layout[2], frame);
}

fn render_header(area: Rect, app: &App, frame: &mut Frame) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(30)])
        .split(area);

    let title = vec![
        Line::from(Span::styled(
            app.roadmap.title.clone(),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.roadmap.subtitle.clone(),
            Style::default().fg(TEXT_SECONDARY),
        )),
        Line::from(Span::styled(
            format!("roadmap: {}", app.source),
            Style::default().fg(TEXT_MUTED),
        )),
    ];
    frame.render_widget(Paragraph::new(title), columns[0]);

    let mut buttons = Vec::new();
    for mode in [ViewMode::Dashboard, ViewMode::Progress] {
        let style = if mode == app.view_mode {
            Style::default()
                .fg(TEXT_PRIMARY)
                .bg(BLUE_PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_SECONDARY).bg(BG_SECONDARY)
        };
        buttons.push(Span::styled(format!(" {} ", mode.label()), style));
        buttons.push(Span::raw(" "));
    }
    let button_row = Paragraph::new(vec![Line::default(), Line::from(buttons)])
        .alignment(Alignment::Right);
    frame.render_widget(button_row, columns[1]);
}

fn render_dashboard(area: Rect, app: &App, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PHASE_CARD_HEIGHT),
            Constraint::Length(MONTH_BUTTON_HEIGHT),
            Constraint::Length(1), // Spacer
            Constraint::Min(3),
        ])
        .split(area);

    render_phase_cards(layout[0], &app.phase_cards(), frame);
    render_month_buttons(layout[1], &app.month_buttons(), frame);
    render_month_detail(layout[3], app, frame);
}

fn render_key_bar(area: Rect, frame: &mut Frame) {
    let hints = format!(
        " ←/→: Phase | Tab: Month | ↑/↓: Move | Space: Toggle | r: Resources | p: Progress | q: Quit    v{} ",
        VERSION
    );
    let keybindings =
        Paragraph::new(hints).style(Style::default().fg(BG_PRIMARY).bg(BLUE_PRIMARY));
    frame.render_widget(keybindings, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliConfig;
    use crate::models::Roadmap;
    use crate::source::RoadmapSource;
    use crate::theme::BORDER_SUBTLE;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    const WIDTH: u16 = 120;
    const HEIGHT: u16 = 40;

    fn app() -> App {
        App::new(
            Roadmap::embedded().unwrap(),
            RoadmapSource::Embedded,
            &CliConfig::default(),
        )
    }

    fn draw(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    /// Top-left corner of the phase card at `index` (cards split the full width)
    fn card_corner(index: u16, count: u16) -> (u16, u16) {
        (index * WIDTH / count, HEADER_HEIGHT)
    }

    #[test]
    fn test_default_screen() {
        let app = app();
        let screen = text(&draw(&app));
        assert!(screen.contains("ML Engineering Roadmap"));
        assert!(screen.contains("Phase 1"));
        assert!(screen.contains("Phase 2"));
        assert!(screen.contains("Months 1-2: Programming & Data Engineering"));
        assert!(screen.contains("Python Mastery"));
        assert!(screen.contains("Task Management System"));
        assert!(screen.contains("Python for Data Analysis"));
        assert!(screen.contains("0%"));
        assert_eq!(app.current_progress(), 0);
    }

    #[test]
    fn test_toggle_shows_twenty_percent() {
        let mut app = app();
        // Phase 2's focus line already mentions "20%"
        let before = text(&draw(&app)).matches("20%").count();
        assert!(before >= 1);

        app.toggle_completion("p1-1-2-skill-python", true);
        let screen = text(&draw(&app));
        assert_eq!(screen.matches("20%").count(), before + 1);
        assert!(screen.contains("[x] Python Mastery"));
    }

    #[test]
    fn test_selection_ring_moves_with_phase() {
        let mut app = app();
        let buffer = draw(&app);
        assert_eq!(buffer[card_corner(0, 2)].fg, BLUE_PRIMARY);
        assert_eq!(buffer[card_corner(1, 2)].fg, BORDER_SUBTLE);

        app.select_phase(2);
        let buffer = draw(&app);
        assert_eq!(buffer[card_corner(0, 2)].fg, BORDER_SUBTLE);
        assert_eq!(buffer[card_corner(1, 2)].fg, BLUE_PRIMARY);
    }

    #[test]
    fn test_missing_phase_renders_no_detail() {
        let mut app = app();
        app.select_phase(9);
        let screen = text(&draw(&app));
        assert!(screen.contains("Phase 1"));
        assert!(!screen.contains("Months 1-2"));
        assert!(!screen.contains("Core Skills"));
    }

    #[test]
    fn test_missing_month_renders_no_content() {
        let mut app = app();
        app.select_phase(2);
        let screen = text(&draw(&app));
        // Button for the phase's own month is shown, but "1-2" has no content there
        assert!(screen.contains("Months 7-8"));
        assert!(!screen.contains("Core Skills"));
    }

    #[test]
    fn test_resources_card_can_be_hidden() {
        let mut app = app();
        app.show_resources = false;
        let screen = text(&draw(&app));
        assert!(!screen.contains("Learning Resources"));
        assert!(screen.contains("Core Skills"));
    }

    #[test]
    fn test_progress_view() {
        let mut app = app();
        app.toggle_completion("p1-1-2-skill-python", true);
        app.view_mode = ViewMode::Progress;
        let screen = text(&draw(&app));
        assert!(screen.contains("ITEMS LEFT"));
        assert!(screen.contains("OVERALL PROGRESS"));
        assert!(screen.contains("Deep Learning Foundations"));
        assert!(screen.contains(" 20%"));
    }

    #[test]
    fn test_oversized_global_progress_does_not_panic() {
        let mut app = app();
        app.select_month("5-6");
        for id in [
            "p1-1-2-skill-python",
            "p1-1-2-skill-sql",
            "p1-1-2-skill-git",
            "p1-5-6-skill-algorithms",
        ] {
            app.toggle_completion(id, true);
        }
        assert_eq!(app.current_progress(), 133);
        let screen = text(&draw(&app));
        assert!(screen.contains("133%"));
    }
}
