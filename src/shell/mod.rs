//! Shell orchestration and command processing.
//!
//! The `Shell` struct owns the session state and the line front end, and runs
//! each line through the tokenizer, the statement splitter and the dispatcher
//! of the active mode's command tree.

use crate::config::{DefaultConfig, Settings, ShellConfig};
use crate::error::CliError;
use crate::io::LineIo;
use crate::tree::{commands, dispatch};
use core::fmt::Write;
use core::marker::PhantomData;
use std::rc::Rc;
use tracing::{debug, warn};

// Sub-modules
pub mod actions;
pub mod completer;
pub mod handlers;
pub mod parser;

// Re-export key types
pub use actions::YangHandlers;
pub use completer::{LineCompleter, Suggestion};
pub use handlers::{CommandHandlers, Invocation};

/// Command mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Operational commands
    #[default]
    Normal,

    /// Configuration navigation
    Configuration,
}

/// One entered configuration path element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    /// Schema node name
    pub name: String,

    /// List key values (empty for containers)
    pub keys: Vec<String>,
}

impl PathSegment {
    /// Segment for a container.
    pub fn container(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: Vec::new(),
        }
    }

    /// Segment for a list entry.
    pub fn entry(name: impl Into<String>, keys: Vec<String>) -> Self {
        Self {
            name: name.into(),
            keys,
        }
    }
}

/// Session state passed to every handler.
///
/// Mode and path change only through command actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    /// Active command mode
    pub mode: Mode,

    /// Show descriptions next to completion candidates
    pub long_help: bool,

    path: Vec<PathSegment>,
    max_depth: usize,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(true, DefaultConfig::MAX_PATH_DEPTH)
    }
}

impl ShellState {
    /// Normal mode at the top, with the given help style and path limit.
    pub fn new(long_help: bool, max_depth: usize) -> Self {
        Self {
            mode: Mode::Normal,
            long_help,
            path: Vec::new(),
            max_depth,
        }
    }

    /// Entered configuration path.
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Replace the configuration path.
    ///
    /// # Errors
    ///
    /// `CliError::PathTooDeep` if the path is longer than the configured
    /// MAX_PATH_DEPTH; the current path is kept.
    pub fn set_path(&mut self, path: Vec<PathSegment>) -> Result<(), CliError> {
        if path.len() > self.max_depth {
            return Err(CliError::PathTooDeep);
        }
        self.path = path;
        Ok(())
    }

    /// Enter configuration mode at the top.
    pub fn enter_configuration(&mut self) {
        self.mode = Mode::Configuration;
        self.path.clear();
    }

    /// Leave one path level, or configuration mode when at the top.
    pub fn exit_level(&mut self) {
        if self.path.pop().is_none() {
            self.mode = Mode::Normal;
        }
    }

    /// Return to the top of the configuration tree.
    pub fn top(&mut self) {
        self.path.clear();
    }

    /// Leave configuration mode.
    pub fn end(&mut self) {
        self.mode = Mode::Normal;
        self.path.clear();
    }
}

/// Result of executing one line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Everything the line printed, errors included
    pub output: String,

    /// False if any statement failed
    pub success: bool,

    /// A statement ended the session
    pub exit: bool,
}

/// Shell orchestration struct.
///
/// Generic over:
/// - `IO`: LineIo implementation
/// - `H`: CommandHandlers implementation
/// - `C`: ShellConfig implementation
pub struct Shell<IO, H, C = DefaultConfig>
where
    IO: LineIo,
    H: CommandHandlers + 'static,
    C: ShellConfig,
{
    /// Session state (mode, path, display preferences)
    state: ShellState,

    /// Name shown in the prompt
    hostname: String,

    /// Path segment names left out of the configuration prompt
    prompt_skip: Vec<String>,

    /// Line front end
    io: IO,

    /// Command handlers, shared with completers handed to the front end
    handlers: Rc<H>,

    /// Config type marker (zero-size)
    _config: PhantomData<C>,
}

// ============================================================================
// Debug implementation
// ============================================================================

impl<IO, H, C> core::fmt::Debug for Shell<IO, H, C>
where
    IO: LineIo,
    H: CommandHandlers + 'static,
    C: ShellConfig,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shell")
            .field("state", &self.state)
            .field("hostname", &self.hostname)
            .field("prompt_skip", &self.prompt_skip)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl<IO, H, C> Shell<IO, H, C>
where
    IO: LineIo,
    H: CommandHandlers + 'static,
    C: ShellConfig,
{
    /// Create new Shell in normal mode with default settings.
    pub fn new(handlers: H, io: IO) -> Self {
        let settings = Settings::default();
        Self {
            state: ShellState::new(settings.long_help, C::MAX_PATH_DEPTH),
            hostname: settings.hostname,
            prompt_skip: settings.prompt_skip,
            io,
            handlers: Rc::new(handlers),
            _config: PhantomData,
        }
    }

    /// Builder method to apply runtime settings (prompt and help style).
    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.hostname = settings.hostname.clone();
        self.prompt_skip = settings.prompt_skip.clone();
        self.state.long_help = settings.long_help;
        self
    }
}

// ============================================================================
// Core methods
// ============================================================================

impl<IO, H, C> Shell<IO, H, C>
where
    IO: LineIo,
    H: CommandHandlers + 'static,
    C: ShellConfig,
{
    /// Session state.
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Command handlers.
    pub fn handlers(&self) -> &H {
        &self.handlers
    }

    /// Line front end.
    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Line front end (mutable).
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    /// Generate prompt string.
    ///
    /// Format: `host# ` (normal), `host(config)# ` at the configuration top,
    /// `host(config-a-b)# ` below it (skipped segment names left out).
    pub fn prompt(&self) -> String {
        match self.state.mode {
            Mode::Normal => format!("{}# ", self.hostname),
            Mode::Configuration => {
                let mut prompt = format!("{}(config", self.hostname);
                for segment in self.state.path() {
                    if self.prompt_skip.iter().any(|skip| *skip == segment.name) {
                        continue;
                    }
                    prompt.push('-');
                    prompt.push_str(&segment.name);
                }
                prompt.push_str(")# ");
                prompt
            }
        }
    }

    /// Completer bound to a snapshot of the current state.
    pub fn completer(&self) -> LineCompleter {
        let handlers: Rc<dyn CommandHandlers> = self.handlers.clone();
        LineCompleter::new(handlers, self.state.clone())
    }

    /// Execute one line.
    ///
    /// Statements run in order and independently: a failed statement is
    /// reported as `Error: ...` and the next one still runs. A statement that
    /// ends the session stops the line.
    pub fn execute_line(&mut self, line: &str) -> Outcome {
        let mut outcome = Outcome {
            success: true,
            ..Outcome::default()
        };

        if line.len() > C::MAX_INPUT {
            report(&mut outcome, &CliError::BufferFull);
            return outcome;
        }

        let tokens = match parser::tokenize(line) {
            Ok(tokens) if tokens.len() <= C::MAX_TOKENS => tokens,
            Ok(_) => {
                report(&mut outcome, &CliError::BufferFull);
                return outcome;
            }
            Err(e) => {
                report(&mut outcome, &e);
                return outcome;
            }
        };

        for mut statement in parser::split_statements(tokens) {
            if statement.is_empty() {
                continue;
            }

            let root = commands::root(self.state.mode);
            match dispatch::execute(root, &mut statement, &*self.handlers, &mut self.state) {
                Ok(response) => {
                    response.write_to(&mut outcome.output);
                    if response.end_session {
                        outcome.exit = true;
                        break;
                    }
                }
                Err(e) => report(&mut outcome, &e),
            }
        }

        debug!(mode = ?self.state.mode, success = outcome.success, "line executed");
        outcome
    }

    /// Read and execute lines until end of input or an exit command.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - Session ended normally
    /// - `Err(IO::Error)` - Front end failed
    pub fn run(&mut self) -> Result<(), IO::Error> {
        loop {
            let prompt = self.prompt();
            let completer = self.completer();

            let Some(line) = self.io.read_line(&prompt, completer)? else {
                self.io.write_str("\nBye\n")?;
                return Ok(());
            };

            let outcome = self.execute_line(&line);
            self.io.write_str(&outcome.output)?;
            if outcome.exit {
                return Ok(());
            }
        }
    }
}

fn report(outcome: &mut Outcome, error: &CliError) {
    warn!(%error, "statement failed");
    outcome.success = false;
    // Writing to a String cannot fail
    let _ = writeln!(outcome.output, "Error: {}", error);
}
