//! UI module for roadmap-tui
//!
//! This module contains the rendering functions for the dashboard:
//! phase cards, month buttons, the month detail checklists and the
//! progress overview.

mod helpers;
mod months;
mod overview;
mod phases;
mod render;

pub use render::render;
