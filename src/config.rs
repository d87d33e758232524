//! Environment-driven settings for a calculator session.

use std::env;
use std::path::PathBuf;

use rust_decimal::Decimal;

/// Variable naming the history file.
pub const ENV_HISTORY_FILE: &str = "CALCLOG_HISTORY_FILE";
/// Variable toggling auto-save after each calculation.
pub const ENV_AUTO_SAVE: &str = "CALCLOG_AUTO_SAVE";
/// Variable bounding the undo stack depth.
pub const ENV_MAX_UNDO: &str = "CALCLOG_MAX_UNDO";
/// Variable bounding the live history length.
pub const ENV_MAX_HISTORY: &str = "CALCLOG_MAX_HISTORY";
/// Variable capping the magnitude of entered operands.
pub const ENV_MAX_INPUT: &str = "CALCLOG_MAX_INPUT";

/// Session settings, overridable through the `CALCLOG_*` variables.
#[derive(Debug, Clone)]
pub struct CalcConfig {
    /// History file written and read by the persistence adapter.
    pub history_file: PathBuf,
    /// Save after every successful calculation.
    pub auto_save: bool,
    /// Undo snapshots kept; `0` means unbounded.
    pub max_undo_depth: usize,
    /// Live history entries kept; `0` means unbounded.
    pub max_history: usize,
    /// Largest operand magnitude accepted at the prompt; `None` disables.
    pub max_input_magnitude: Option<Decimal>,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            history_file: PathBuf::from("calclog_history.json"),
            auto_save: true,
            max_undo_depth: 100,
            max_history: 1000,
            max_input_magnitude: None,
        }
    }
}

impl CalcConfig {
    /// Builds a config from the `CALCLOG_*` variables.
    ///
    /// A malformed value keeps the default for that field and logs a
    /// warning rather than failing startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key-to-value lookup.
    ///
    /// [`from_env`](Self::from_env) routes the process environment through
    /// here; a test can pass a plain map without mutating global state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(ENV_HISTORY_FILE) {
            if !path.trim().is_empty() {
                config.history_file = PathBuf::from(path);
            }
        }
        if let Some(raw) = lookup(ENV_AUTO_SAVE) {
            match parse_bool(&raw) {
                Some(flag) => config.auto_save = flag,
                None => log::warn!("ignoring {ENV_AUTO_SAVE}={raw:?}: expected a boolean"),
            }
        }
        config.max_undo_depth =
            parse_or_default(ENV_MAX_UNDO, lookup(ENV_MAX_UNDO), config.max_undo_depth);
        config.max_history =
            parse_or_default(ENV_MAX_HISTORY, lookup(ENV_MAX_HISTORY), config.max_history);
        if let Some(raw) = lookup(ENV_MAX_INPUT) {
            match raw.trim().parse::<Decimal>() {
                Ok(cap) => config.max_input_magnitude = Some(cap.abs()),
                Err(err) => log::warn!("ignoring {ENV_MAX_INPUT}={raw:?}: {err}"),
            }
        }
        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or_default(var: &str, raw: Option<String>, default: usize) -> usize {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(err) => {
            log::warn!("ignoring {var}={raw:?}: {err}");
            default
        }
    }
}
