//! History state: snapshots and the undo/redo engine built on them.

/// Undo/redo engine over the live calculation history.
pub mod manager;
/// Immutable full-history snapshots and their envelope codec.
pub mod memento;
