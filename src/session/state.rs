//! Per-session view and selection state
//!
//! A pure state machine driven by named events: submit-filter replaces
//! the filtered view, select-rows records the user's table selection.
//! Before any submit the view holds a fixed-size random sample of the
//! catalogue drawn with a fixed seed, so first-paint content is
//! reproducible across runs.
//!
//! An empty user selection means "all rows currently in view". That
//! default-to-all policy is deliberate: downstream consumers cannot
//! distinguish "no selection" from "select all".

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalogue::{ClassificationTable, SourceRecord};

/// Rows shown before the first filter submission
pub const INITIAL_SAMPLE_SIZE: usize = 100;

/// Seed for the first-paint sample
pub const INITIAL_SAMPLE_SEED: u64 = 42;

/// Derived, session-local state: the filtered view and the selection
#[derive(Debug, Clone)]
pub struct SessionState {
    view: Vec<SourceRecord>,
    selected: Vec<String>,
}

impl SessionState {
    /// Initial state: a seeded uniform random sample of the catalogue.
    pub fn initial(table: &ClassificationTable) -> Self {
        let mut rng = StdRng::seed_from_u64(INITIAL_SAMPLE_SEED);
        let count = INITIAL_SAMPLE_SIZE.min(table.len());
        let picked = rand::seq::index::sample(&mut rng, table.len(), count);
        let view = picked.iter().map(|i| table.rows()[i].clone()).collect();
        Self {
            view,
            selected: Vec::new(),
        }
    }

    /// Submit event: replaces the view with the filter engine's output
    /// and clears the user selection.
    pub fn submit_filter(&mut self, view: Vec<SourceRecord>) {
        self.view = view;
        self.selected.clear();
    }

    /// Select event: records the user's row selection.
    ///
    /// Identifiers not present in the current view are dropped; the
    /// retained selection follows view order.
    pub fn select_rows(&mut self, ids: &[String]) {
        let requested: HashSet<&str> = ids.iter().map(String::as_str).collect();
        self.selected = self
            .view
            .iter()
            .filter(|record| requested.contains(record.name.as_str()))
            .map(|record| record.name.clone())
            .collect();
    }

    /// The current filtered view
    pub fn view(&self) -> &[SourceRecord] {
        &self.view
    }

    /// The raw user selection (may be empty)
    pub fn selected_ids(&self) -> &[String] {
        &self.selected
    }

    /// The effective selection: the user's rows, or every row in view
    /// when the user selection is empty.
    pub fn effective_selection(&self) -> Vec<SourceRecord> {
        if self.selected.is_empty() {
            return self.view.clone();
        }
        let selected: HashSet<&str> = self.selected.iter().map(String::as_str).collect();
        self.view
            .iter()
            .filter(|record| selected.contains(record.name.as_str()))
            .cloned()
            .collect()
    }
}
