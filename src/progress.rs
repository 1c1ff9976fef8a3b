//! Progress calculation.
//!
//! Derives completion percentages from the completion mapping. Month values
//! are computed when a checkbox changes and kept in a store keyed by
//! `"{phaseId}-{monthRange}"`; phase and overall figures are averaged from
//! that store.

use std::collections::HashMap;

use crate::models::{MonthData, Phase, ProgressScope, Roadmap};

/// Item identifier -> checked
pub type CompletionMap = HashMap<String, bool>;

/// `"{phaseId}-{monthRange}"` -> last computed percentage
pub type ProgressStore = HashMap<String, u16>;

/// Key under which a month's percentage is stored.
pub fn progress_key(phase_id: u32, month_range: &str) -> String {
    format!("{}-{}", phase_id, month_range)
}

/// Percentage for a month, counting every checked item in the mapping.
///
/// The completed count is not restricted to the month's own items, so
/// checks made in other months inflate the figure and it can exceed 100.
pub fn compute_progress(month: &MonthData, completion: &CompletionMap) -> u16 {
    let completed = completion.values().filter(|done| **done).count();
    percent(completed, month.item_count())
}

/// Percentage for a month, counting only its own skills and projects.
pub fn compute_scoped_progress(month: &MonthData, completion: &CompletionMap) -> u16 {
    let completed = month
        .item_ids()
        .filter(|id| completion.get(*id).copied().unwrap_or(false))
        .count();
    percent(completed, month.item_count())
}

/// Dispatch on the configured scope.
pub fn month_progress(month: &MonthData, completion: &CompletionMap, scope: ProgressScope) -> u16 {
    match scope {
        ProgressScope::Global => compute_progress(month, completion),
        ProgressScope::Month => compute_scoped_progress(month, completion),
    }
}

/// Mean of the stored month values of a phase (unvisited months count as 0).
pub fn phase_progress(phase: &Phase, store: &ProgressStore) -> u16 {
    let values: Vec<u16> = phase
        .month_ranges()
        .map(|range| stored(store, phase.id, range))
        .collect();
    mean(&values)
}

/// Mean of the stored values of every month in the roadmap.
pub fn overall_progress(roadmap: &Roadmap, store: &ProgressStore) -> u16 {
    let values: Vec<u16> = roadmap
        .phases
        .iter()
        .flat_map(|phase| phase.month_ranges().map(|range| stored(store, phase.id, range)))
        .collect();
    mean(&values)
}

fn stored(store: &ProgressStore, phase_id: u32, month_range: &str) -> u16 {
    store
        .get(&progress_key(phase_id, month_range))
        .copied()
        .unwrap_or(0)
}

fn percent(completed: usize, total: usize) -> u16 {
    if total == 0 {
        return 0;
    }
    (completed as f64 * 100.0 / total as f64).round() as u16
}

fn mean(values: &[u16]) -> u16 {
    if values.is_empty() {
        return 0;
    }
    let sum: u32 = values.iter().map(|v| u32::from(*v)).sum();
    (sum as f64 / values.len() as f64).round() as u16
}
