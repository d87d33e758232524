//! Immutable snapshots of the full calculation history.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::calc::{self, Calculation, MappingError};
use crate::ops::OperationError;

/// Immutable capture of the whole history plus its creation time.
///
/// A memento is taken before every mutation and stored on the undo and
/// redo stacks; the same shape, keyed as `{history, timestamp}`, is the
/// on-disk envelope written by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorMemento {
    history: Vec<Calculation>,
    timestamp: DateTime<Utc>,
}

impl CalculatorMemento {
    /// Snapshots `history` at the current time.
    pub fn new(history: Vec<Calculation>) -> Self {
        Self {
            history,
            timestamp: Utc::now(),
        }
    }

    /// Snapshots `history` with an explicit creation time.
    pub fn with_timestamp(history: Vec<Calculation>, timestamp: DateTime<Utc>) -> Self {
        Self { history, timestamp }
    }

    /// Ordered view of the captured history.
    pub fn history(&self) -> &[Calculation] {
        &self.history
    }

    /// Consumes the memento, yielding the captured history.
    pub fn into_history(self) -> Vec<Calculation> {
        self.history
    }

    /// Creation time of the snapshot.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Serializes to the `{history, timestamp}` envelope mapping.
    ///
    /// Total for every memento, the empty history included.
    pub fn to_mapping(&self) -> Map<String, Value> {
        let entries = self
            .history
            .iter()
            .map(|calculation| Value::Object(calculation.to_mapping()))
            .collect();
        let mut mapping = Map::new();
        mapping.insert("history".to_string(), Value::Array(entries));
        mapping.insert(
            "timestamp".to_string(),
            Value::String(self.timestamp.to_rfc3339()),
        );
        mapping
    }

    /// Reconstructs a memento from an envelope mapping.
    ///
    /// The `timestamp` key is checked before `history` is touched, so an
    /// absent timestamp reports [`MappingError::MissingKey`] even when the
    /// history payload is itself malformed. The first element that fails
    /// the calculation contract aborts the whole reconstruction.
    pub fn from_mapping(mapping: &Map<String, Value>) -> Result<Self, MappingError> {
        let timestamp = calc::parse_timestamp(mapping, "timestamp")?;
        let entries = calc::require(mapping, "history")?.as_array().ok_or_else(|| {
            MappingError::Operation(OperationError::InvalidField {
                key: "history",
                detail: "not an array".to_string(),
            })
        })?;
        let mut history = Vec::with_capacity(entries.len());
        for entry in entries {
            let entry = entry.as_object().ok_or_else(|| {
                MappingError::Operation(OperationError::InvalidField {
                    key: "history",
                    detail: "element is not an object".to_string(),
                })
            })?;
            history.push(Calculation::from_mapping(entry)?);
        }
        Ok(Self { history, timestamp })
    }
}
