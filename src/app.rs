//! Application state and core logic for the roadmap TUI.
//!
//! This module contains the `App` struct which owns the roadmap table and
//! the only mutable state of the dashboard: the selected phase, the active
//! month, the completion mapping and the per-month progress store.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::cli::CliConfig;
use crate::models::{MonthData, Phase, ProgressScope, Roadmap, ViewMode};
use crate::progress::{
    month_progress, overall_progress, phase_progress, progress_key, CompletionMap, ProgressStore,
};
use crate::source::RoadmapSource;

/// Phase card as shown in the selection row
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseCard<'a> {
    pub phase: &'a Phase,
    pub selected: bool,
    pub progress: u16,
}

/// Month range button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthButton<'a> {
    pub range: &'a str,
    pub active: bool,
}

/// Checkable row of the active month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem<'a> {
    pub id: &'a str,
    pub checked: bool,
}

/// Application state
pub struct App {
    pub roadmap: Roadmap,
    pub source: RoadmapSource,
    pub progress_scope: ProgressScope,
    pub selected_phase: u32,
    pub active_month: String,
    pub completion: CompletionMap,
    pub progress: ProgressStore,
    pub view_mode: ViewMode,
    // Whether the Learning Resources card is visible
    pub show_resources: bool,
    // Index into the active month's checklist (skills then projects)
    pub cursor: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(roadmap: Roadmap, source: RoadmapSource, config: &CliConfig) -> Self {
        let (default_phase, default_month) = roadmap.default_selection();
        let selected_phase = config.phase.unwrap_or(default_phase);
        let active_month = match &config.month {
            Some(month) => month.clone(),
            None if config.phase.is_some() => roadmap
                .phase(selected_phase)
                .and_then(Phase::first_month)
                .map(str::to_string)
                .unwrap_or(default_month),
            None => default_month,
        };

        tracing::info!(
            source = %source,
            phases = roadmap.phases.len(),
            items = roadmap.item_count(),
            phase = selected_phase,
            month = %active_month,
            "roadmap loaded"
        );

        Self {
            roadmap,
            source,
            progress_scope: config.progress_scope,
            selected_phase,
            active_month,
            completion: CompletionMap::new(),
            progress: ProgressStore::new(),
            view_mode: ViewMode::default(),
            show_resources: true,
            cursor: 0,
            should_quit: false,
        }
    }

    /// Selected phase, if the id exists in the roadmap
    pub fn active_phase(&self) -> Option<&Phase> {
        self.roadmap.phase(self.selected_phase)
    }

    /// Content of the active month in the selected phase, if both exist
    pub fn active_month_data(&self) -> Option<&MonthData> {
        self.active_phase()?.month(&self.active_month)
    }

    /// Select a phase. The active month is kept even if the phase lacks it.
    pub fn select_phase(&mut self, id: u32) {
        tracing::debug!(phase = id, "select phase");
        self.selected_phase = id;
        self.cursor = 0;
    }

    pub fn select_month(&mut self, range: &str) {
        tracing::debug!(month = range, "select month");
        self.active_month = range.to_string();
        self.cursor = 0;
    }

    /// Record a checkbox value and recompute the active month's progress
    pub fn toggle_completion(&mut self, id: &str, value: bool) {
        self.completion.insert(id.to_string(), value);

        let scope = self.progress_scope;
        let computed = self
            .active_month_data()
            .map(|month| month_progress(month, &self.completion, scope));
        if let Some(percent) = computed {
            let key = progress_key(self.selected_phase, &self.active_month);
            tracing::debug!(item = id, value, key = %key, percent, "progress updated");
            self.progress.insert(key, percent);
        } else {
            tracing::debug!(item = id, value, "completion recorded without active month");
        }
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completion.get(id).copied().unwrap_or(false)
    }

    /// Stored percentage for a phase/month pair (0 until first computed)
    pub fn progress_for(&self, phase_id: u32, month_range: &str) -> u16 {
        self.progress
            .get(&progress_key(phase_id, month_range))
            .copied()
            .unwrap_or(0)
    }

    pub fn current_progress(&self) -> u16 {
        self.progress_for(self.selected_phase, &self.active_month)
    }

    pub fn overall_progress(&self) -> u16 {
        overall_progress(&self.roadmap, &self.progress)
    }

    pub fn completed_count(&self) -> usize {
        self.completion.values().filter(|done| **done).count()
    }

    pub fn phase_cards(&self) -> Vec<PhaseCard<'_>> {
        self.roadmap
            .phases
            .iter()
            .map(|phase| PhaseCard {
                phase,
                selected: phase.id == self.selected_phase,
                progress: phase_progress(phase, &self.progress),
            })
            .collect()
    }

    /// Month buttons of the selected phase (empty if the phase is missing)
    pub fn month_buttons(&self) -> Vec<MonthButton<'_>> {
        self.active_phase()
            .map(|phase| {
                phase
                    .month_ranges()
                    .map(|range| MonthButton {
                        range,
                        active: range == self.active_month,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn checklist(&self) -> Vec<ChecklistItem<'_>> {
        let Some(month) = self.active_month_data() else {
            return Vec::new();
        };
        month
            .item_ids()
            .map(|id| ChecklistItem {
                id,
                checked: self.is_completed(id),
            })
            .collect()
    }

    /// Cursor position clamped to the current checklist
    pub fn cursor_index(&self) -> Option<usize> {
        let len = self.active_month_data()?.item_count();
        if len == 0 {
            None
        } else {
            Some(self.cursor.min(len - 1))
        }
    }

    fn step_phase(&mut self, forward: bool) {
        let count = self.roadmap.phases.len();
        if count == 0 {
            return;
        }
        let next = match self.roadmap.phase_index(self.selected_phase) {
            Some(i) if forward => (i + 1) % count,
            Some(i) => (i + count - 1) % count,
            None => 0,
        };
        let id = self.roadmap.phases[next].id;
        self.select_phase(id);
    }

    fn step_month(&mut self, forward: bool) {
        let Some(phase) = self.active_phase() else {
            return;
        };
        let ranges: Vec<&str> = phase.month_ranges().collect();
        if ranges.is_empty() {
            return;
        }
        let next = match ranges.iter().position(|r| *r == self.active_month) {
            Some(i) if forward => (i + 1) % ranges.len(),
            Some(i) => (i + ranges.len() - 1) % ranges.len(),
            None => 0,
        };
        let range = ranges[next].to_string();
        self.select_month(&range);
    }

    fn move_cursor(&mut self, down: bool) {
        let Some(current) = self.cursor_index() else {
            return;
        };
        let len = self.checklist().len();
        self.cursor = if down {
            (current + 1).min(len - 1)
        } else {
            current.saturating_sub(1)
        };
    }

    fn toggle_at_cursor(&mut self) {
        let Some(index) = self.cursor_index() else {
            return;
        };
        let target = self
            .checklist()
            .get(index)
            .map(|item| (item.id.to_string(), !item.checked));
        if let Some((id, value)) = target {
            self.toggle_completion(&id, value);
        }
    }

    /// Apply a key press to the dashboard state
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('p') => self.view_mode = self.view_mode.toggle(),
            KeyCode::Char('r') => self.show_resources = !self.show_resources,
            KeyCode::Right | KeyCode::Char('l') => self.step_phase(true),
            KeyCode::Left | KeyCode::Char('h') => self.step_phase(false),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(id) = c.to_digit(10) {
                    self.select_phase(id);
                }
            }
            KeyCode::Tab | KeyCode::Char(']') => self.step_month(true),
            KeyCode::BackTab | KeyCode::Char('[') => self.step_month(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(true),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(false),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_at_cursor(),
            _ => {}
        }
    }
}
