//! Data models for the roadmap TUI
//!
//! This module contains the core data structures:
//! - Roadmap table types (phases, months, skills, projects, resources, videos)
//! - Enums for view state

pub mod enums;
pub mod roadmap;

// Re-exports for convenient access
pub use enums::{ProgressScope, ViewMode};
pub use roadmap::{Complexity, MonthData, Phase, PhaseColor, PhaseIcon, ResourceKind, Roadmap};
