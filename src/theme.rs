//! Theme module for roadmap-tui
//!
//! This module provides a centralized color palette, the phase accent colors
//! and the glyphs standing in for icons.

use ratatui::style::Color;

use crate::models::{Complexity, PhaseColor, PhaseIcon, ResourceKind};

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Secondary background color, used for cards (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Tertiary background color, for the row under the cursor (#1a1f26)
pub const BG_TERTIARY: Color = Color::Rgb(26, 31, 38);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Accent Colors
// ============================================================================

/// Selection ring and active buttons (#3b82f6)
pub const BLUE_PRIMARY: Color = Color::Rgb(59, 130, 246);

/// Green for checked skills (#22c55e)
pub const GREEN_SUCCESS: Color = Color::Rgb(34, 197, 94);

/// Purple for checked projects (#a855f7)
pub const PURPLE_ACCENT: Color = Color::Rgb(168, 85, 247);

/// Orange for advanced badges (#f97316)
pub const ORANGE_BADGE: Color = Color::Rgb(249, 115, 22);

/// Red for video entries (#ef4444)
pub const RED_VIDEO: Color = Color::Rgb(239, 68, 68);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Muted text color - for labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Accent color of a phase card
pub fn phase_color(color: PhaseColor) -> Color {
    match color {
        PhaseColor::Blue => Color::Rgb(59, 130, 246),
        PhaseColor::Purple => Color::Rgb(168, 85, 247),
        PhaseColor::Green => Color::Rgb(34, 197, 94),
        PhaseColor::Orange => Color::Rgb(249, 115, 22),
        PhaseColor::Red => Color::Rgb(239, 68, 68),
        PhaseColor::Cyan => Color::Rgb(6, 182, 212),
    }
}

pub fn phase_glyph(icon: PhaseIcon) -> &'static str {
    match icon {
        PhaseIcon::Code => "</>",
        PhaseIcon::Brain => "◉",
        PhaseIcon::Rocket => "▲",
        PhaseIcon::Book => "▤",
        PhaseIcon::Chart => "▥",
        PhaseIcon::Database => "◫",
    }
}

pub fn resource_glyph(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Book => "▤",
        ResourceKind::Platform => "◈",
        ResourceKind::Course => "◆",
    }
}

/// Advanced projects get the orange badge, everything else blue
pub fn complexity_color(complexity: Complexity) -> Color {
    match complexity {
        Complexity::Advanced => ORANGE_BADGE,
        Complexity::Beginner | Complexity::Intermediate => BLUE_PRIMARY,
    }
}
