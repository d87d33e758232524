use anyhow::Context as _;

use calclog::calculator::Calculator;
use calclog::config::CalcConfig;
use calclog::events::LoggingObserver;
use calclog::persist::PersistError;
use calclog::persist::json_file::JsonFileStore;
use calclog::repl::{EditorReader, Repl};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = CalcConfig::from_env();
    let store = JsonFileStore::new(config.history_file.clone());
    log::debug!("history file: {}", store.path().display());
    let mut calculator = Calculator::new(config, Box::new(store));
    calculator.add_observer(Box::new(LoggingObserver));

    match calculator.load_history() {
        Ok(entries) => log::info!("restored {entries} history entries"),
        Err(PersistError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no history file yet, starting fresh");
        }
        Err(err) => log::warn!("could not restore history: {err}"),
    }

    let reader = EditorReader::new().context("failed to initialize line editor")?;
    let mut repl = Repl::new(reader, std::io::stdout(), calculator);
    repl.run().context("terminal i/o failed")?;
    Ok(())
}
