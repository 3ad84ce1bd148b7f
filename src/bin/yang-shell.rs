//! Interactive management shell over TOML schema and data files.
//!
//! ```bash
//! cargo run -- --config demos/yang-shell.toml
//! cargo run -- --config demos/yang-shell.toml --command "show interfaces-state"
//! ```
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`
//! (for example `RUST_LOG=yang_shell=debug`).

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::Editor;
use rustyline::completion::Pair;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use yang_shell::{LineCompleter, LineIo, MemoryDatastore, Schema, Settings, Shell, YangHandlers};

// =============================================================================
// Command-line arguments
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "yang-shell", version, about = "Management shell for YANG-modeled data")]
struct Args {
    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Schema file, overrides the settings file
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Running configuration data file, overrides the settings file
    #[arg(long)]
    running: Option<PathBuf>,

    /// Operational state data file, overrides the settings file
    #[arg(long)]
    operational: Option<PathBuf>,

    /// Name shown in the prompt
    #[arg(long)]
    hostname: Option<String>,

    /// Execute one line and exit
    #[arg(short = 'e', long)]
    command: Option<String>,
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };

        if let Some(schema) = &self.schema {
            settings.schema = Some(schema.clone());
        }
        if let Some(running) = &self.running {
            settings.running = Some(running.clone());
        }
        if let Some(operational) = &self.operational {
            settings.operational = Some(operational.clone());
        }
        if let Some(hostname) = &self.hostname {
            settings.hostname = hostname.clone();
        }

        Ok(settings)
    }
}

// =============================================================================
// Line editor front end
// =============================================================================

/// rustyline helper that completes through the shell's `LineCompleter`.
struct ShellHelper {
    completer: LineCompleter,
}

impl rustyline::Helper for ShellHelper {}

impl rustyline::highlight::Highlighter for ShellHelper {}

impl rustyline::hint::Hinter for ShellHelper {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        None
    }
}

impl rustyline::validate::Validator for ShellHelper {}

impl rustyline::completion::Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, suggestions) = self.completer.complete_line(&line[..pos]);
        let long_help = self.completer.long_help();

        let pairs = suggestions
            .into_iter()
            .map(|s| Pair {
                display: s.display(long_help),
                replacement: s.word,
            })
            .collect();
        Ok((start, pairs))
    }
}

/// `LineIo` over a rustyline editor and stdout.
struct EditorIo {
    editor: Editor<ShellHelper, DefaultHistory>,
}

impl EditorIo {
    fn new() -> Result<Self> {
        let editor = Editor::new().context("failed to initialize line editor")?;
        Ok(Self { editor })
    }
}

impl LineIo for EditorIo {
    type Error = ReadlineError;

    fn read_line(
        &mut self,
        prompt: &str,
        completer: LineCompleter,
    ) -> Result<Option<String>, ReadlineError> {
        self.editor.set_helper(Some(ShellHelper { completer }));

        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            // Ctrl-C drops the current line only
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write_str(&mut self, s: &str) -> Result<(), ReadlineError> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(s.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = args.settings()?;

    let schema = match &settings.schema {
        Some(path) => Schema::load(path)
            .with_context(|| format!("failed to load schema from {}", path.display()))?,
        None => Schema::default(),
    };
    let datastore = MemoryDatastore::load(
        settings.running.as_deref(),
        settings.operational.as_deref(),
    )
    .context("failed to load datastore")?;
    tracing::debug!(modules = ?schema.modules(), "schema ready");

    let handlers =
        YangHandlers::new(schema, datastore).with_include_defaults(settings.include_defaults);

    match &args.command {
        Some(line) => {
            let mut shell: Shell<EditorIo, _> =
                Shell::new(handlers, EditorIo::new()?).with_settings(&settings);
            let outcome = shell.execute_line(line);
            shell.io_mut().write_str(&outcome.output)?;
            if !outcome.success {
                std::process::exit(1);
            }
        }
        None => {
            println!("yang-shell {}", yang_shell::VERSION);
            println!("Tab completes commands and paths. Type `exit` or press Ctrl-D to quit.\n");

            let mut shell: Shell<EditorIo, _> =
                Shell::new(handlers, EditorIo::new()?).with_settings(&settings);
            shell.run()?;
        }
    }

    Ok(())
}
