//! Session facade tying the history engine to storage and observers.

use rust_decimal::Decimal;

use crate::calc::Calculation;
use crate::config::CalcConfig;
use crate::events::{CalcEvent, HistoryObserver};
use crate::history::manager::HistoryManager;
use crate::ops::{ArithmeticOp, OperationError};
use crate::persist::{HistoryStore, PersistResult};

/// One calculator session: live history, undo/redo, storage, observers.
///
/// Constructed and owned by the caller; there is no process-wide instance.
pub struct Calculator {
    manager: HistoryManager,
    store: Box<dyn HistoryStore>,
    config: CalcConfig,
    observers: Vec<Box<dyn HistoryObserver>>,
}

impl Calculator {
    /// Creates a session with the given settings and storage backend.
    pub fn new(config: CalcConfig, store: Box<dyn HistoryStore>) -> Self {
        let manager = HistoryManager::with_limits(config.max_undo_depth, config.max_history);
        Self {
            manager,
            store,
            config,
            observers: Vec::new(),
        }
    }

    /// Registers an observer notified after every state change.
    pub fn add_observer(&mut self, observer: Box<dyn HistoryObserver>) {
        self.observers.push(observer);
    }

    /// Session settings.
    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Performs one calculation and records it in the history.
    ///
    /// With auto-save enabled the history is written out afterwards; an
    /// auto-save failure is logged and the calculation stays recorded.
    pub fn perform_operation(
        &mut self,
        operation: ArithmeticOp,
        operand1: Decimal,
        operand2: Decimal,
    ) -> Result<Calculation, OperationError> {
        let calculation = Calculation::new(operation, operand1, operand2)?;
        self.manager.perform(calculation.clone());
        self.notify(&CalcEvent::Performed {
            calculation: calculation.clone(),
        });
        if self.config.auto_save {
            if let Err(err) = self.store.save(self.manager.history()) {
                log::warn!("auto-save failed: {err}");
            }
        }
        Ok(calculation)
    }

    /// Undoes the most recent mutation; `false` when nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.manager.undo() {
            self.notify(&CalcEvent::UndoApplied);
            true
        } else {
            false
        }
    }

    /// Redoes the most recently undone mutation; `false` when nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        if self.manager.redo() {
            self.notify(&CalcEvent::RedoApplied);
            true
        } else {
            false
        }
    }

    /// Empties the history and both undo/redo stacks.
    pub fn clear_history(&mut self) {
        self.manager.clear_history();
        self.notify(&CalcEvent::HistoryCleared);
    }

    /// Ordered view of the live history.
    pub fn history(&self) -> &[Calculation] {
        self.manager.history()
    }

    /// Writes the live history to storage.
    pub fn save_history(&mut self) -> PersistResult<()> {
        self.store.save(self.manager.history())?;
        self.notify(&CalcEvent::HistorySaved {
            entries: self.manager.history().len(),
        });
        Ok(())
    }

    /// Replaces the live history with the stored one.
    ///
    /// Clears both stacks; returns the number of entries installed, after
    /// any history-cap trim.
    pub fn load_history(&mut self) -> PersistResult<usize> {
        let history = self.store.load()?;
        self.manager.replace_history(history);
        let entries = self.manager.history().len();
        self.notify(&CalcEvent::HistoryLoaded { entries });
        Ok(entries)
    }

    fn notify(&mut self, event: &CalcEvent) {
        let history = self.manager.history();
        for observer in &mut self.observers {
            observer.notify(event, history);
        }
    }
}
