//! JSON-envelope history file with atomic replace semantics.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;

use crate::calc::Calculation;
use crate::history::memento::CalculatorMemento;

use super::{HistoryStore, PersistError, PersistResult};

/// [`HistoryStore`] keeping the `{history, timestamp}` envelope in one file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by `path`. The file appears on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    /// Snapshots the history into a fresh memento and writes its envelope.
    ///
    /// The envelope goes to a sibling temp file first and is renamed over
    /// the target, so a crash mid-save leaves the previous file intact.
    fn save(&mut self, history: &[Calculation]) -> PersistResult<()> {
        let memento = CalculatorMemento::new(history.to_vec());
        let text = serde_json::to_string_pretty(&Value::Object(memento.to_mapping()))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                parent
            }
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(text.as_bytes())?;
        staged.write_all(b"\n")?;
        staged.persist(&self.path).map_err(|err| err.error)?;
        log::debug!(
            "saved {} history entries to {}",
            history.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> PersistResult<Vec<Calculation>> {
        let text = fs::read_to_string(&self.path)?;
        let envelope: Value = serde_json::from_str(&text)?;
        let mapping = envelope.as_object().ok_or_else(|| {
            PersistError::Message(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))
        })?;
        let memento = CalculatorMemento::from_mapping(mapping)?;
        log::debug!(
            "loaded {} history entries from {}",
            memento.history().len(),
            self.path.display()
        );
        Ok(memento.into_history())
    }
}
