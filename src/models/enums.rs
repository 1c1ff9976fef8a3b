//! Enums used throughout the roadmap TUI
//!
//! This module contains the various enum types used for state management
//! and UI rendering.

use clap::ValueEnum;

/// Which screen the dashboard shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Dashboard, // Phase cards, month buttons and the active month's detail
    Progress,  // Table of every phase/month with its stored percentage
}

impl ViewMode {
    pub fn toggle(&self) -> Self {
        match self {
            ViewMode::Dashboard => ViewMode::Progress,
            ViewMode::Progress => ViewMode::Dashboard,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Dashboard => "Dashboard",
            ViewMode::Progress => "Progress",
        }
    }
}

/// Which completions count toward a month's percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ProgressScope {
    /// Every checked item in the whole roadmap counts
    #[default]
    Global,
    /// Only the month's own skills and projects count
    Month,
}
