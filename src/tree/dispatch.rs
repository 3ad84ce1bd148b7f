//! Command dispatcher.
//!
//! Walks a statement's tokens down a command tree by abbreviation, rewriting
//! each matched token to the command's full name, then invokes the action of
//! the deepest node reached. Unmatched trailing tokens are that action's
//! arguments.

use super::CommandNode;
use crate::error::CliError;
use crate::matching::{self, Match};
use crate::response::Response;
use crate::shell::ShellState;
use crate::shell::handlers::{CommandHandlers, Invocation};
use crate::shell::parser::Token;
use tracing::debug;

/// Outcome of walking a statement down a command tree.
#[derive(Debug, Clone, Copy)]
pub struct Resolved {
    /// Deepest command matched (the root if none matched)
    pub node: &'static CommandNode,

    /// Number of leading tokens consumed as command words
    pub depth: usize,
}

/// Resolve the command words of a statement.
///
/// # Behavior
///
/// - A token matching no child stops the walk; it and every later token are
///   arguments
/// - A token that is a prefix of exactly one child is rewritten to the
///   child's name; the walk stops after a childless node
/// - A token matching several children fails the statement
///
/// # Returns
///
/// - `Ok(Resolved)` - Node reached and number of command words
/// - `Err(CliError::AmbiguousCommand)` - Abbreviation matches several commands
pub fn resolve(root: &'static CommandNode, tokens: &mut [Token<'_>]) -> Result<Resolved, CliError> {
    let mut node = root;
    let mut depth = 0;

    for token in tokens.iter_mut() {
        match matching::by_prefix(node.children, token.as_str()) {
            Match::None => break,
            Match::Ambiguous(candidates) => {
                return Err(CliError::AmbiguousCommand {
                    token: token.as_str().to_string(),
                    candidates: candidates.iter().map(|c| c.name.to_string()).collect(),
                });
            }
            Match::Unique(child) => {
                token.canonicalize(child.name);
                node = child;
                depth += 1;
                if !child.has_children() {
                    break;
                }
            }
        }
    }

    debug!(command = node.name, depth, "resolved command");
    Ok(Resolved { node, depth })
}

/// Dispatch one statement.
///
/// Tokens after the first unquoted `|` are output filters. They are never
/// dispatched; a notice naming them is appended to the output instead.
///
/// # Returns
///
/// - `Ok(Response)` - Action output (empty when the node has no action)
/// - `Err(CliError)` - Ambiguous command or action failure; `state` is only
///   changed by actions, so an ambiguous statement leaves it untouched
pub fn execute<H>(
    root: &'static CommandNode,
    tokens: &mut [Token<'_>],
    handlers: &H,
    state: &mut ShellState,
) -> Result<Response, CliError>
where
    H: CommandHandlers + ?Sized,
{
    let end = tokens.iter().position(Token::is_pipe).unwrap_or(tokens.len());
    let (command, filters) = tokens.split_at_mut(end);

    let resolved = resolve(root, command)?;
    let response = match resolved.node.action {
        Some(action) => {
            handlers.execute(action, state, &Invocation::new(command, resolved.depth))?
        }
        None => Response::empty(),
    };

    let unsupported = filter_names(filters);
    if unsupported.is_empty() {
        Ok(response)
    } else {
        Ok(response.with_line(&format!(
            "Output filters are not supported: {}",
            unsupported.join(", ")
        )))
    }
}

/// Filter names: the word after each `|`.
fn filter_names<'t>(tokens: &'t [Token<'_>]) -> Vec<&'t str> {
    tokens
        .windows(2)
        .filter(|pair| pair[0].is_pipe() && !pair[1].is_pipe())
        .map(|pair| pair[1].as_str())
        .collect()
}
