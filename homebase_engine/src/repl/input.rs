//! Terminal input handling for the Homebase REPL.
//!
//! Wraps rustyline configuration and verb completion, with a plain stdin fallback when no
//! terminal is attached.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Outcome of reading a line from the REPL input.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

const COMMAND_TERMS: &[&str] = &["inventory", "move", "quest", "quit", "take", "talk"];

type ReplEditor = rustyline::Editor<HomebaseHelper, DefaultHistory>;

#[derive(Default)]
struct HomebaseHelper;

impl Helper for HomebaseHelper {}

impl Completer for HomebaseHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        Ok((start, verb_candidates(&prefix)))
    }
}

impl Hinter for HomebaseHelper {
    type Hint = String;
}

impl Highlighter for HomebaseHelper {}

impl Validator for HomebaseHelper {}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

/// Verbs starting with `prefix`; only the first word of a line is completed.
fn verb_candidates(prefix: &str) -> Vec<Pair> {
    if prefix.is_empty() || prefix.contains(char::is_whitespace) {
        return Vec::new();
    }
    let lower = prefix.to_lowercase();
    COMMAND_TERMS
        .iter()
        .filter(|term| term.starts_with(&lower))
        .map(|term| Pair {
            display: (*term).to_string(),
            replacement: (*term).to_string(),
        })
        .collect()
}

/// Line source for the REPL: `rustyline` on an interactive terminal, plain stdin otherwise.
pub enum InputManager {
    Rustyline(Box<RustylineInput>),
    Plain(StdinInput),
}

impl InputManager {
    pub fn new() -> Self {
        if !io::stdin().is_terminal() {
            info!("stdin is not a TTY; using basic input mode");
            return InputManager::Plain(StdinInput::default());
        }
        match RustylineInput::new() {
            Ok(editor) => InputManager::Rustyline(Box::new(editor)),
            Err(err) => {
                warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                InputManager::Plain(StdinInput::default())
            },
        }
    }

    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            InputManager::Rustyline(editor) => editor.read_line(prompt),
            InputManager::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

pub struct RustylineInput {
    editor: ReplEditor,
    history_path: Option<PathBuf>,
}

impl RustylineInput {
    fn new() -> io::Result<Self> {
        let mut editor = rustyline::Editor::<HomebaseHelper, _>::new().map_err(map_io_err)?;
        editor.set_helper(Some(HomebaseHelper));
        let history_path = history_file_path();

        if let Some(path) = history_path.as_ref() {
            if let Some(dir) = path.parent()
                && let Err(err) = fs::create_dir_all(dir)
            {
                warn!("failed to create history directory {}: {err}", dir.display());
            }

            if let Err(err) = editor.load_history(path) {
                match err {
                    ReadlineError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                        info!("no prior history found at {}, starting fresh", path.display());
                    },
                    other => {
                        warn!("failed to load history from {}: {other}", path.display());
                    },
                }
            }
        }

        Ok(Self { editor, history_path })
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                        warn!("failed to append to history: {err}");
                    }
                    if let Some(path) = self.history_path.as_ref()
                        && let Err(err) = self.editor.save_history(path)
                    {
                        warn!("failed to persist history to {}: {err}", path.display());
                    }
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
pub struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }

        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }

        Ok(InputEvent::Line(self.buffer.clone()))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    let mut path = base.to_path_buf();
    path.push("homebase_engine");
    path.push("history.txt");
    path
}
