//! Undoable, persistable calculation history with an interactive shell.
//!
//! # Examples
//!
//! Driving the undo/redo engine directly:
//! ```
//! use calclog::{
//!     calc::Calculation,
//!     history::manager::HistoryManager,
//!     ops::ArithmeticOp,
//! };
//! use rust_decimal::Decimal;
//!
//! let mut manager = HistoryManager::new();
//! let calculation = Calculation::new(ArithmeticOp::Addition, Decimal::from(2), Decimal::from(3))
//!     .expect("add");
//! manager.perform(calculation);
//! assert_eq!(manager.history()[0].result(), Decimal::from(5));
//!
//! assert!(manager.undo());
//! assert!(manager.history().is_empty());
//! assert!(manager.redo());
//! assert_eq!(manager.history().len(), 1);
//! ```
//!
//! Sessions with a JSON history file:
//! ```no_run
//! use calclog::{
//!     calculator::Calculator,
//!     config::CalcConfig,
//!     ops::ArithmeticOp,
//!     persist::json_file::JsonFileStore,
//! };
//! use rust_decimal::Decimal;
//!
//! let config = CalcConfig::default();
//! let store = JsonFileStore::new(config.history_file.clone());
//! let mut calculator = Calculator::new(config, Box::new(store));
//! calculator
//!     .perform_operation(ArithmeticOp::Multiplication, Decimal::from(4), Decimal::from(5))
//!     .expect("multiply");
//! calculator.save_history().expect("save");
//! ```
#![deny(missing_docs)]

/// Calculation records and the flat mapping codec.
pub mod calc;
/// Session facade over the history engine, storage, and observers.
pub mod calculator;
/// Environment-driven configuration.
pub mod config;
/// Event and observer seam for history mutations.
pub mod events;
/// History snapshots and the undo/redo engine.
pub mod history;
/// Arithmetic operation set and failure modes.
pub mod ops;
/// Persistence seam and the JSON-envelope file store.
pub mod persist;
/// Interactive command loop.
pub mod repl;
/// Operand validation at the prompt boundary.
pub mod validate;
