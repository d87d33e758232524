//! Undo/redo engine backed by full-history mementos.

use std::collections::VecDeque;
use std::mem;

use crate::calc::Calculation;

use super::memento::CalculatorMemento;

/// Owner of the live history and the undo/redo snapshot stacks.
///
/// Undo and redo are strict LIFO: each undo is reversible by exactly one
/// redo until the next [`perform`](Self::perform), which discards every
/// redoable state. Branching history is deliberately unsupported.
#[derive(Debug, Default)]
pub struct HistoryManager {
    history: Vec<Calculation>,
    undo: VecDeque<CalculatorMemento>,
    redo: VecDeque<CalculatorMemento>,
    max_undo_depth: usize,
    max_history: usize,
}

impl HistoryManager {
    /// Creates a manager with unbounded history and stacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager with capacity bounds; `0` disables either bound.
    ///
    /// At capacity the oldest undo snapshot is dropped, so undo reaches at
    /// most `max_undo_depth` steps back. `max_history` trims the oldest
    /// live entries after each perform.
    pub fn with_limits(max_undo_depth: usize, max_history: usize) -> Self {
        Self {
            max_undo_depth,
            max_history,
            ..Self::default()
        }
    }

    /// Records a performed calculation.
    ///
    /// Snapshots the current history onto the undo stack, appends the
    /// calculation, and clears the redo stack.
    pub fn perform(&mut self, calculation: Calculation) {
        let snapshot = CalculatorMemento::new(self.history.clone());
        Self::push_bounded(&mut self.undo, self.max_undo_depth, snapshot);
        self.history.push(calculation);
        self.trim_history();
        self.redo.clear();
    }

    /// Restores the state preceding the last mutation.
    ///
    /// Returns `false`, changing nothing, when no snapshot is available.
    pub fn undo(&mut self) -> bool {
        let Some(memento) = self.undo.pop_back() else {
            return false;
        };
        let current = mem::replace(&mut self.history, memento.into_history());
        Self::push_bounded(
            &mut self.redo,
            self.max_undo_depth,
            CalculatorMemento::new(current),
        );
        true
    }

    /// Re-applies the most recently undone state.
    ///
    /// Returns `false`, changing nothing, when no snapshot is available.
    pub fn redo(&mut self) -> bool {
        let Some(memento) = self.redo.pop_back() else {
            return false;
        };
        let current = mem::replace(&mut self.history, memento.into_history());
        Self::push_bounded(
            &mut self.undo,
            self.max_undo_depth,
            CalculatorMemento::new(current),
        );
        true
    }

    /// Empties the history and both stacks.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.undo.clear();
        self.redo.clear();
    }

    /// Read-only ordered view of the live history.
    pub fn history(&self) -> &[Calculation] {
        &self.history
    }

    /// Installs a loaded history as the new baseline.
    ///
    /// Both stacks are cleared; a load is not undoable. Input beyond the
    /// history cap is trimmed to the newest entries.
    pub fn replace_history(&mut self, history: Vec<Calculation>) {
        self.history = history;
        self.undo.clear();
        self.redo.clear();
        self.trim_history();
    }

    /// Number of states currently reachable by undo.
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of states currently reachable by redo.
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    fn trim_history(&mut self) {
        if self.max_history == 0 {
            return;
        }
        let excess = self.history.len().saturating_sub(self.max_history);
        if excess > 0 {
            log::debug!("history over capacity, dropping {excess} oldest entries");
            self.history.drain(..excess);
        }
    }

    fn push_bounded(
        stack: &mut VecDeque<CalculatorMemento>,
        bound: usize,
        memento: CalculatorMemento,
    ) {
        if bound > 0 && stack.len() == bound {
            stack.pop_front();
        }
        stack.push_back(memento);
    }
}
