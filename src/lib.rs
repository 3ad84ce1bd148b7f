//! # yang-shell
//!
//! Interactive management shell for YANG-modeled datastores, in the style of
//! router and switch consoles.
//!
//! **Key features:**
//! - **Abbreviated commands** - Any unique prefix selects a command, at every level
//! - **Two modes** - Normal (operational) and configuration command sets
//! - **Schema paths** - Typed path words resolve against a schema tree, capture
//!   list keys and render as addressing expressions
//! - **Contextual completion** - Subcommands, schema children and output filters
//! - **Pluggable collaborators** - Schema provider, datastore and line front end
//!   are traits
//!
//! ## Optional Features
//!
//! - `cli` (default) - The `yang-shell` binary: rustyline front end, clap
//!   arguments, tracing output
//!
//! ## Example
//!
//! ```rust,ignore
//! use yang_shell::{MemoryDatastore, Schema, Shell, YangHandlers};
//!
//! let schema = Schema::load("schema.toml".as_ref())?;
//! let datastore = MemoryDatastore::load(Some("running.toml".as_ref()), None)?;
//! let mut shell: Shell<_, _> = Shell::new(YangHandlers::new(schema, datastore), io);
//! shell.run()?;
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![allow(clippy::result_large_err)]

// ============================================================================
// Module Declarations
// ============================================================================

// Foundation: sizing, settings, errors, front-end seam
pub mod config;
pub mod error;
pub mod io;

// Abbreviation matching shared by commands and schema paths
pub mod matching;

// Command trees, dispatcher, completion engine
pub mod tree;

// Schema model, resolver, renderer
pub mod schema;

// Datastore seam and in-memory store
pub mod datastore;

// Handler output
pub mod response;

// Shell orchestration
pub mod shell;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Core I/O
pub use io::LineIo;

// Configuration
pub use config::{DefaultConfig, MinimalConfig, Settings, ShellConfig};

// Error types
pub use error::CliError;

// Tree types
pub use tree::completion::Candidates;
pub use tree::{Action, CommandNode, Completion};

// Schema types
pub use schema::{Capture, ContextNode, NodeKind, Schema, SchemaNode, SchemaProvider};

// Datastore types
pub use datastore::{Datastore, MemoryDatastore};

// Response types
pub use response::Response;

// Shell types
pub use shell::{
    CommandHandlers, Invocation, LineCompleter, Mode, Outcome, PathSegment, Shell, ShellState,
    Suggestion, YangHandlers,
};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
