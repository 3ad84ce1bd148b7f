//! Command handler trait for executing and completing commands.
//!
//! The `CommandHandlers` trait maps the action and completion identifiers
//! stored in the command tree to behavior, implementing the execution side of
//! the metadata/execution separation: trees stay static and immutable while
//! handlers own the schema, the datastore and any other collaborators.

use crate::error::CliError;
use crate::response::Response;
use crate::shell::ShellState;
use crate::shell::parser::Token;
use crate::tree::completion::Candidates;
use crate::tree::{Action, Completion};

/// One dispatched statement, as seen by a handler.
///
/// Tokens up to `depth` are canonical command names; the rest are arguments.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'t, 'a> {
    /// Every token of the statement (before any pipe)
    pub tokens: &'t [Token<'a>],

    /// Number of leading tokens consumed as command words
    pub depth: usize,
}

impl<'t, 'a> Invocation<'t, 'a> {
    /// Create an invocation over `tokens` with `depth` command words.
    pub fn new(tokens: &'t [Token<'a>], depth: usize) -> Self {
        Self { tokens, depth }
    }

    /// Argument tokens (everything after the command words).
    pub fn arg_tokens(&self) -> &'t [Token<'a>] {
        self.tokens.get(self.depth..).unwrap_or(&[])
    }

    /// Argument texts.
    pub fn args(&self) -> Vec<&'t str> {
        self.arg_tokens().iter().map(Token::as_str).collect()
    }
}

/// Command execution and completion handler trait.
///
/// # Pattern
///
/// - `CommandNode` stores const metadata (name, help, action, completion ids)
/// - `CommandHandlers` provides the logic (this trait)
///
/// Handlers receive the session state explicitly; mode and path changes happen
/// only through `execute`.
///
/// # Example
///
/// ```rust,ignore
/// struct MyHandlers;
///
/// impl CommandHandlers for MyHandlers {
///     fn execute(&self, action: Action, state: &mut ShellState, inv: &Invocation<'_, '_>)
///         -> Result<Response, CliError>
///     {
///         match action {
///             Action::Exit => Ok(Response::exit("Bye")),
///             _ => Ok(Response::empty()),
///         }
///     }
///
///     fn complete(&self, _: Completion, _: &ShellState, _: &Invocation<'_, '_>) -> Candidates {
///         Candidates::new()
///     }
/// }
/// ```
pub trait CommandHandlers {
    /// Execute the action of the resolved command node.
    ///
    /// # Returns
    ///
    /// - `Ok(Response)`: Command executed successfully
    /// - `Err(CliError)`: Statement failed; the shell reports it and moves on
    fn execute(
        &self,
        action: Action,
        state: &mut ShellState,
        invocation: &Invocation<'_, '_>,
    ) -> Result<Response, CliError>;

    /// Suggest candidates for the word following the invocation's tokens.
    ///
    /// Failures are not reported during completion; return an empty set.
    fn complete(
        &self,
        completion: Completion,
        state: &ShellState,
        invocation: &Invocation<'_, '_>,
    ) -> Candidates;
}
