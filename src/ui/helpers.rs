//! UI helper functions

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders},
};

use crate::theme::{BG_SECONDARY, BORDER_SUBTLE, TEXT_PRIMARY};

/// Simple text wrapping helper
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.chars().count() + 1 + word.chars().count() <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Truncate to `max_chars` characters, ending with "..." when cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let take_chars = max_chars.saturating_sub(3);
    let truncated: String = text.chars().take(take_chars).collect();
    format!("{}...", truncated)
}

/// Gauge widgets only accept 0..=100
pub fn clamp_percent(percent: u16) -> u16 {
    percent.min(100)
}

/// Text bar such as "████░░░░░░" for table cells
pub fn progress_bar(percent: u16, width: usize) -> String {
    let filled = (usize::from(clamp_percent(percent)) * width + 50) / 100;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Rounded card with an optional title
pub fn card_block(title: Option<Line<'static>>) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY).fg(TEXT_PRIMARY));
    match title {
        Some(title) => block.title(title),
        None => block,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        let result = wrap_text("", 10);
        assert_eq!(result, vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        let result = wrap_text("hello world", 0);
        assert_eq!(result, vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        let result = wrap_text("hello world foo bar", 10);
        assert_eq!(result, vec!["hello", "world foo", "bar"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Deep Learning & Research", 10), "Deep Le...");
        assert_eq!(truncate("Größenwahn", 5), "Gr...");
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(40), 40);
        assert_eq!(clamp_percent(150), 100);
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 4), "░░░░");
        assert_eq!(progress_bar(50, 4), "██░░");
        assert_eq!(progress_bar(100, 4), "████");
        assert_eq!(progress_bar(250, 4), "████");
    }
}
