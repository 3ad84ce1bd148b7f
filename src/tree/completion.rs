//! Completion engine.
//!
//! Replays the dispatcher's walk over a copy of the tokens typed so far and
//! collects candidates for the next word: subcommands of the node reached,
//! merged with whatever that node's completion handler suggests.

use super::CommandNode;
use crate::matching::{self, Match};
use crate::shell::ShellState;
use crate::shell::handlers::{CommandHandlers, Invocation};
use crate::shell::parser::Token;
use std::collections::BTreeMap;

/// Candidate word to description, sorted by word.
pub type Candidates = BTreeMap<String, String>;

/// Output filters offered after `|`.
///
/// Advertised for completion only; filters are never executed.
pub const PIPE_FILTERS: &[(&str, &str)] = &[
    ("append", "Append output text to a file"),
    ("begin", "Begin with the line that matches"),
    ("context-match", "Context match"),
    ("count", "Count the number of lines in the output"),
    ("csv", "Show table output in CSV format"),
    ("de-select", "De-select columns"),
    ("details", "Display default values"),
    ("display", "Display options"),
    ("exclude", "Exclude lines that match"),
    ("extended", "Display referring entries"),
    ("icount", "Count the number of matching instances"),
    ("include", "Include lines that match"),
    ("linnum", "Enumerate lines in the output"),
    ("more", "Paginate output"),
    ("nomore", "Suppress pagination"),
    ("save", "Save output text to a file"),
    ("select", "Select additional columns"),
    ("tab", "Enforce table output"),
    ("until", "End with the line that matches"),
];

/// Output filters whose name starts with `prefix`.
pub fn pipe_filters(prefix: &str) -> Candidates {
    PIPE_FILTERS
        .iter()
        .filter(|(name, _)| name.starts_with(prefix))
        .map(|(name, help)| (name.to_string(), help.to_string()))
        .collect()
}

/// Candidates for the word following `tokens`.
///
/// `tokens` are the complete words of the current statement; the word under
/// the cursor is not included.
///
/// # Behavior
///
/// - A statement containing an unquoted `|` completes output filters
/// - Otherwise the dispatcher's walk is replayed without touching `tokens`:
///   - Every token consumed: the reached node's children are candidates
///   - A token matching nothing: no subcommand candidates
///   - A token matching several commands: no subcommand candidates
/// - The completion handler of the node reached adds candidates, replacing
///   subcommand descriptions on conflict
pub fn complete<H>(
    root: &'static CommandNode,
    tokens: &[Token<'_>],
    handlers: &H,
    state: &ShellState,
) -> Candidates
where
    H: CommandHandlers + ?Sized,
{
    if tokens.iter().any(Token::is_pipe) {
        return pipe_filters("");
    }

    let mut canonical = tokens.to_vec();
    let mut node = root;
    let mut depth = 0;
    let mut ambiguous = false;

    for token in canonical.iter_mut() {
        match matching::by_prefix(node.children, token.as_str()) {
            Match::None => break,
            Match::Ambiguous(_) => {
                ambiguous = true;
                break;
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

    let mut candidates = Candidates::new();
    if !ambiguous && depth == canonical.len() {
        for child in node.children {
            candidates.insert(child.name.to_string(), child.help.to_string());
        }
    }

    if let Some(completion) = node.complete {
        candidates.extend(handlers.complete(
            completion,
            state,
            &Invocation::new(&canonical, depth),
        ));
    }

    candidates
}
