//! Synchronous notifications for history mutations.

use crate::calc::Calculation;

/// Event emitted by a [`Calculator`](crate::calculator::Calculator) right
/// after each state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcEvent {
    /// A calculation was performed and recorded.
    Performed {
        /// The recorded calculation.
        calculation: Calculation,
    },
    /// One undo step was applied.
    UndoApplied,
    /// One redo step was applied.
    RedoApplied,
    /// The history and both stacks were emptied.
    HistoryCleared,
    /// A stored history replaced the live one.
    HistoryLoaded {
        /// Entries now live.
        entries: usize,
    },
    /// The live history was written to storage.
    HistorySaved {
        /// Entries written.
        entries: usize,
    },
}

/// Receiver notified synchronously after every history mutation.
pub trait HistoryObserver {
    /// Called with the event and the post-event history view.
    fn notify(&mut self, event: &CalcEvent, history: &[Calculation]);
}

/// Observer that writes one log line per event.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl HistoryObserver for LoggingObserver {
    fn notify(&mut self, event: &CalcEvent, history: &[Calculation]) {
        match event {
            CalcEvent::Performed { calculation } => log::info!("performed {calculation}"),
            CalcEvent::UndoApplied => {
                log::info!("undo applied, {} entries live", history.len());
            }
            CalcEvent::RedoApplied => {
                log::info!("redo applied, {} entries live", history.len());
            }
            CalcEvent::HistoryCleared => log::info!("history cleared"),
            CalcEvent::HistoryLoaded { entries } => log::info!("history loaded ({entries} entries)"),
            CalcEvent::HistorySaved { entries } => log::info!("history saved ({entries} entries)"),
        }
    }
}
