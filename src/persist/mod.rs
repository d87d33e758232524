//! Persistence seam for calculation histories.

/// JSON-envelope file implementation of [`HistoryStore`].
pub mod json_file;

use thiserror::Error;

use crate::calc::{Calculation, MappingError};

/// Failure modes of a [`HistoryStore`].
#[derive(Debug, Error)]
pub enum PersistError {
    /// Underlying storage could not be read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Stored bytes are not syntactically valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The envelope or one of its payload elements failed to decode.
    #[error(transparent)]
    Decode(#[from] MappingError),
    /// Shape problems outside the envelope contract.
    #[error("{0}")]
    Message(String),
}

/// Result alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Durable storage for an ordered calculation history.
///
/// Object safe; sessions hold their backend as `Box<dyn HistoryStore>` so
/// tests can substitute in-memory doubles.
pub trait HistoryStore {
    /// Writes the full history, replacing any previous contents.
    fn save(&mut self, history: &[Calculation]) -> PersistResult<()>;

    /// Reads the stored history back in insertion order.
    fn load(&self) -> PersistResult<Vec<Calculation>>;
}
