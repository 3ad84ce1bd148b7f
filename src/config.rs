//! Configuration traits and runtime settings.
//!
//! The `ShellConfig` trait sizes the shell's buffers and limits at compile time.
//! `Settings` carries the runtime choices (prompt name, help style, data files)
//! and is loaded from a TOML file.

use crate::error::CliError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Shell configuration trait defining buffer sizes and capacity limits.
///
/// All values are const (zero runtime cost).
pub trait ShellConfig {
    /// Maximum input line length in bytes (default: 512)
    const MAX_INPUT: usize;

    /// Maximum number of tokens on one line (default: 64)
    const MAX_TOKENS: usize;

    /// Maximum depth of the configuration-mode path (default: 16)
    const MAX_PATH_DEPTH: usize;
}

/// Default configuration for interactive sessions.
///
/// - MAX_INPUT: 512 bytes
/// - MAX_TOKENS: 64 tokens
/// - MAX_PATH_DEPTH: 16 segments
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl ShellConfig for DefaultConfig {
    const MAX_INPUT: usize = 512;
    const MAX_TOKENS: usize = 64;
    const MAX_PATH_DEPTH: usize = 16;
}

/// Minimal configuration for scripted or constrained use.
///
/// - MAX_INPUT: 256 bytes
/// - MAX_TOKENS: 32 tokens
/// - MAX_PATH_DEPTH: 8 segments
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MinimalConfig;

impl ShellConfig for MinimalConfig {
    const MAX_INPUT: usize = 256;
    const MAX_TOKENS: usize = 32;
    const MAX_PATH_DEPTH: usize = 8;
}

/// Runtime settings, usually read from `yang-shell.toml`.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Name shown in the prompt
    pub hostname: String,

    /// Show descriptions next to completion candidates
    pub long_help: bool,

    /// Ask the datastore to include default values in `show` output
    pub include_defaults: bool,

    /// Path segment names left out of the configuration-mode prompt
    pub prompt_skip: Vec<String>,

    /// Schema definition file
    pub schema: Option<PathBuf>,

    /// Running (configuration) data file
    pub running: Option<PathBuf>,

    /// Operational (state) data file
    pub operational: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hostname: "demo".into(),
            long_help: true,
            include_defaults: false,
            prompt_skip: vec!["config".into(), "system".into(), "interfaces".into()],
            schema: None,
            running: None,
            operational: None,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CliError> {
        toml::from_str(text).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Read and parse a settings file.
    ///
    /// Relative data-file paths are resolved against the settings file's directory.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
        let mut settings = Self::from_toml_str(&text)?;

        if let Some(base) = path.parent() {
            for file in [
                &mut settings.schema,
                &mut settings.running,
                &mut settings.operational,
            ]
            .into_iter()
            .flatten()
            {
                if file.is_relative() {
                    *file = base.join(&*file);
                }
            }
        }

        Ok(settings)
    }
}
