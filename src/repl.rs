//! Interactive command loop over a calculator session.

use std::io::{self, Write};

use rust_decimal::Decimal;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{CompletionType, Config, Context, Editor, Helper};

use crate::calculator::Calculator;
use crate::ops::ArithmeticOp;
use crate::validate;

const PROMPT: &str = ">> ";
const FIRST_OPERAND_PROMPT: &str = "Enter first number (or 'cancel'): ";
const SECOND_OPERAND_PROMPT: &str = "Enter second number (or 'cancel'): ";

/// Non-operation commands, in help and completion order.
const COMMANDS: [&str; 8] = [
    "history", "clear", "undo", "redo", "save", "load", "help", "exit",
];

/// One read from the interactive device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEvent {
    /// A full line of input.
    Line(String),
    /// Ctrl-C.
    Interrupted,
    /// Ctrl-D, or the end of scripted input.
    Eof,
    /// The device failed irrecoverably.
    Failed(String),
}

/// Source of interactive input lines.
///
/// The production implementation wraps a line editor; tests feed a
/// scripted event sequence through the same seam.
pub trait LineReader {
    /// Reads one line after displaying `prompt`.
    fn read_line(&mut self, prompt: &str) -> ReadEvent;
}

/// Loop control after dispatching one command.
enum Flow {
    Continue,
    Quit,
}

/// Result of prompting for one operand.
enum Prompted {
    /// A validated operand.
    Value(Decimal),
    /// Cancelled or rejected; the loop returns to the command prompt.
    Aborted,
    /// Input ended; the loop terminates.
    Quit,
}

/// Command loop reading from `R` and writing every message to `W`.
pub struct Repl<R, W> {
    reader: R,
    out: W,
    calculator: Calculator,
}

impl<R: LineReader, W: Write> Repl<R, W> {
    /// Creates a session over the given reader, writer, and calculator.
    pub fn new(reader: R, out: W, calculator: Calculator) -> Self {
        Self {
            reader,
            out,
            calculator,
        }
    }

    /// Consumes the session, yielding the writer and the calculator.
    pub fn into_parts(self) -> (W, Calculator) {
        (self.out, self.calculator)
    }

    /// Runs until `exit`, end of input, or a reader failure.
    ///
    /// The returned error covers the output device only; command failures
    /// are reported to the user and keep the loop alive.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "Calculator started. Type 'help' for commands.")?;
        loop {
            match self.reader.read_line(PROMPT) {
                ReadEvent::Line(line) => {
                    let command = line.trim().to_ascii_lowercase();
                    if command.is_empty() {
                        continue;
                    }
                    match self.dispatch(&command)? {
                        Flow::Continue => {}
                        Flow::Quit => break,
                    }
                }
                ReadEvent::Interrupted => writeln!(self.out, "Operation cancelled")?,
                ReadEvent::Eof => {
                    writeln!(self.out, "Input terminated. Exiting...")?;
                    break;
                }
                ReadEvent::Failed(err) => {
                    writeln!(self.out, "Input error: {err}")?;
                    break;
                }
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, command: &str) -> io::Result<Flow> {
        match command {
            "exit" => {
                self.save_on_exit()?;
                writeln!(self.out, "Goodbye!")?;
                Ok(Flow::Quit)
            }
            "help" => {
                self.print_help()?;
                Ok(Flow::Continue)
            }
            "history" => {
                self.print_history()?;
                Ok(Flow::Continue)
            }
            "clear" => {
                self.calculator.clear_history();
                writeln!(self.out, "History cleared")?;
                Ok(Flow::Continue)
            }
            "undo" => {
                let message = if self.calculator.undo() {
                    "Operation undone"
                } else {
                    "Nothing to undo"
                };
                writeln!(self.out, "{message}")?;
                Ok(Flow::Continue)
            }
            "redo" => {
                let message = if self.calculator.redo() {
                    "Operation redone"
                } else {
                    "Nothing to redo"
                };
                writeln!(self.out, "{message}")?;
                Ok(Flow::Continue)
            }
            "save" => {
                match self.calculator.save_history() {
                    Ok(()) => writeln!(self.out, "History saved successfully")?,
                    Err(err) => writeln!(self.out, "Error saving history: {err}")?,
                }
                Ok(Flow::Continue)
            }
            "load" => {
                match self.calculator.load_history() {
                    Ok(_) => writeln!(self.out, "History loaded successfully")?,
                    Err(err) => writeln!(self.out, "Error loading history: {err}")?,
                }
                Ok(Flow::Continue)
            }
            _ => match command.parse::<ArithmeticOp>() {
                Ok(operation) => self.run_operation(operation),
                Err(_) => {
                    writeln!(
                        self.out,
                        "Unknown command: '{command}'. Type 'help' for available commands."
                    )?;
                    Ok(Flow::Continue)
                }
            },
        }
    }

    fn run_operation(&mut self, operation: ArithmeticOp) -> io::Result<Flow> {
        let operand1 = match self.prompt_operand(FIRST_OPERAND_PROMPT)? {
            Prompted::Value(value) => value,
            Prompted::Aborted => return Ok(Flow::Continue),
            Prompted::Quit => return Ok(Flow::Quit),
        };
        let operand2 = match self.prompt_operand(SECOND_OPERAND_PROMPT)? {
            Prompted::Value(value) => value,
            Prompted::Aborted => return Ok(Flow::Continue),
            Prompted::Quit => return Ok(Flow::Quit),
        };
        match self.calculator.perform_operation(operation, operand1, operand2) {
            Ok(calculation) => writeln!(self.out, "Result: {}", calculation.result())?,
            Err(err) => writeln!(self.out, "Error: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn prompt_operand(&mut self, prompt: &str) -> io::Result<Prompted> {
        match self.reader.read_line(prompt) {
            ReadEvent::Line(line) => {
                let text = line.trim();
                if text.eq_ignore_ascii_case("cancel") {
                    writeln!(self.out, "Operation cancelled")?;
                    return Ok(Prompted::Aborted);
                }
                match validate::parse_operand(text, self.calculator.config()) {
                    Ok(value) => Ok(Prompted::Value(value)),
                    Err(err) => {
                        writeln!(self.out, "Error: {err}")?;
                        Ok(Prompted::Aborted)
                    }
                }
            }
            ReadEvent::Interrupted => {
                writeln!(self.out, "Operation cancelled")?;
                Ok(Prompted::Aborted)
            }
            ReadEvent::Eof => {
                writeln!(self.out, "Input terminated. Exiting...")?;
                Ok(Prompted::Quit)
            }
            ReadEvent::Failed(err) => {
                writeln!(self.out, "Input error: {err}")?;
                Ok(Prompted::Quit)
            }
        }
    }

    fn save_on_exit(&mut self) -> io::Result<()> {
        match self.calculator.save_history() {
            Ok(()) => writeln!(self.out, "History saved successfully"),
            Err(err) => writeln!(self.out, "Warning: Could not save history: {err}"),
        }
    }

    fn print_history(&mut self) -> io::Result<()> {
        if self.calculator.history().is_empty() {
            return writeln!(self.out, "No calculations in history");
        }
        writeln!(self.out, "Calculation History:")?;
        for (index, calculation) in self.calculator.history().iter().enumerate() {
            writeln!(self.out, "{}. {}", index + 1, calculation)?;
        }
        Ok(())
    }

    fn print_help(&mut self) -> io::Result<()> {
        let operations = ArithmeticOp::ALL.map(ArithmeticOp::alias).join(", ");
        writeln!(self.out, "Available commands:")?;
        writeln!(
            self.out,
            "  {operations} - perform a calculation with two numbers"
        )?;
        writeln!(self.out, "  history - show calculation history")?;
        writeln!(self.out, "  clear - clear calculation history")?;
        writeln!(self.out, "  undo - undo the last calculation")?;
        writeln!(self.out, "  redo - redo the last undone calculation")?;
        writeln!(self.out, "  save - save calculation history to file")?;
        writeln!(self.out, "  load - load calculation history from file")?;
        writeln!(self.out, "  help - show this help message")?;
        writeln!(self.out, "  exit - save history and exit")?;
        Ok(())
    }
}

/// [`LineReader`] backed by a rustyline editor with command completion.
pub struct EditorReader {
    editor: Editor<CommandHelper, DefaultHistory>,
}

impl EditorReader {
    /// Creates the editor with list-style completion for command names.
    pub fn new() -> rustyline::Result<Self> {
        let config = Config::builder()
            .completion_type(CompletionType::List)
            .build();
        let mut editor: Editor<CommandHelper, DefaultHistory> = Editor::with_config(config)?;
        editor.set_helper(Some(CommandHelper::new()));
        Ok(Self { editor })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> ReadEvent {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                ReadEvent::Line(line)
            }
            Err(ReadlineError::Interrupted) => ReadEvent::Interrupted,
            Err(ReadlineError::Eof) => ReadEvent::Eof,
            Err(err) => ReadEvent::Failed(err.to_string()),
        }
    }
}

/// Completes command names at the start of the line.
pub struct CommandHelper {
    candidates: Vec<String>,
}

impl CommandHelper {
    fn new() -> Self {
        let mut candidates: Vec<String> = ArithmeticOp::ALL
            .iter()
            .map(|operation| operation.alias().to_string())
            .collect();
        candidates.extend(COMMANDS.iter().map(|command| command.to_string()));
        candidates.sort();
        Self { candidates }
    }
}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let prefix = &line[..pos];
        if prefix.contains(char::is_whitespace) {
            return Ok((0, Vec::new()));
        }
        let matches = self
            .candidates
            .iter()
            .filter(|name| name.starts_with(prefix))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((0, matches))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for CommandHelper {}
