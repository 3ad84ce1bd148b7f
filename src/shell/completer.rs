//! Completion entry point for line front ends.
//!
//! A `LineCompleter` captures the handlers and a snapshot of the session state
//! when a prompt is shown; the front end calls it with the text left of the
//! cursor whenever the user asks for completions.

use super::ShellState;
use super::handlers::CommandHandlers;
use super::parser::{self, PIPE, STATEMENT_SEPARATOR};
use crate::tree::{commands, completion};
use std::rc::Rc;

/// One completion candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Full word to insert
    pub word: String,

    /// Help text
    pub description: String,
}

impl Suggestion {
    /// Text for a completion listing.
    ///
    /// With `long_help` the description follows the word in a second column.
    pub fn display(&self, long_help: bool) -> String {
        if long_help && !self.description.is_empty() {
            format!("{:<20} {}", self.word, self.description)
        } else {
            self.word.clone()
        }
    }
}

/// Completion callback bound to one prompt.
#[derive(Clone)]
pub struct LineCompleter {
    handlers: Rc<dyn CommandHandlers>,
    state: ShellState,
}

impl core::fmt::Debug for LineCompleter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LineCompleter")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl LineCompleter {
    /// Create a completer over `handlers` for the given state.
    pub fn new(handlers: Rc<dyn CommandHandlers>, state: ShellState) -> Self {
        Self { handlers, state }
    }

    /// Whether listings should show descriptions.
    pub fn long_help(&self) -> bool {
        self.state.long_help
    }

    /// Complete the word that ends at the cursor.
    ///
    /// `line` is the text left of the cursor. Only the statement after the last
    /// `;` is considered. Returns the byte offset where the word starts and the
    /// candidates that extend it, sorted by word. Inside an open quote the word
    /// starts after the quote.
    pub fn complete_line(&self, line: &str) -> (usize, Vec<Suggestion>) {
        let start = word_start(line);
        let (head, word) = line.split_at(start);

        let Ok(tokens) = parser::tokenize(head) else {
            return (start, Vec::new());
        };
        let statement = match tokens
            .iter()
            .rposition(|t| t.is_separator(STATEMENT_SEPARATOR))
        {
            Some(i) => &tokens[i + 1..],
            None => &tokens[..],
        };

        let root = commands::root(self.state.mode);
        let suggestions = completion::complete(root, statement, &*self.handlers, &self.state)
            .into_iter()
            .filter(|(candidate, _)| candidate.starts_with(word))
            .map(|(word, description)| Suggestion { word, description })
            .collect();

        (start, suggestions)
    }
}

/// Byte offset of the word ending `line`, honoring quotes like the tokenizer.
fn word_start(line: &str) -> usize {
    let mut start = 0;
    let mut quote: Option<char> = None;

    for (index, c) in line.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                ' ' | '\t' | STATEMENT_SEPARATOR | PIPE => start = index + 1,
                '"' | '\'' => {
                    quote = Some(c);
                    start = index + 1;
                }
                _ => {}
            },
        }
    }

    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datastore::MemoryDatastore;
    use crate::schema::{NodeKind, Schema, SchemaNode};
    use crate::shell::YangHandlers;

    fn completer(state: ShellState) -> LineCompleter {
        let schema = Schema::from_nodes(vec![
            SchemaNode::new("system", "sys", NodeKind::Container)
                .with_description("System parameters")
                .with_children(vec![SchemaNode::new("hostname", "sys", NodeKind::Leaf)]),
        ]);
        let handlers = YangHandlers::new(schema, MemoryDatastore::default());
        LineCompleter::new(Rc::new(handlers), state)
    }

    fn words(result: &(usize, Vec<Suggestion>)) -> Vec<&str> {
        result.1.iter().map(|s| s.word.as_str()).collect()
    }

    #[test]
    fn test_complete_first_word() {
        let result = completer(ShellState::default()).complete_line("s");
        assert_eq!(result.0, 0);
        assert_eq!(words(&result), ["show"]);
    }

    #[test]
    fn test_complete_after_command() {
        let result = completer(ShellState::default()).complete_line("sh ");
        assert_eq!(result.0, 3);
        assert_eq!(words(&result), ["running-config"]);

        let result = completer(ShellState::default()).complete_line("show running-config sy");
        assert_eq!(result.0, 20);
        assert_eq!(words(&result), ["system"]);
    }

    #[test]
    fn test_complete_after_separator() {
        let result = completer(ShellState::default()).complete_line("show;con");
        assert_eq!(result.0, 5);
        assert_eq!(words(&result), ["configure"]);
    }

    #[test]
    fn test_complete_inside_open_quote() {
        let result = completer(ShellState::default()).complete_line("show running-config \"sy");
        assert_eq!(result.0, 21);
        assert_eq!(words(&result), ["system"]);

        // Separators inside quotes do not start a word
        assert_eq!(word_start("show 'a;b"), 6);
        assert_eq!(word_start("show 'a b' c"), 11);
    }

    #[test]
    fn test_complete_pipe_filters() {
        let result = completer(ShellState::default()).complete_line("show | in");
        assert_eq!(words(&result), ["include"]);
    }

    #[test]
    fn test_complete_uses_mode() {
        let mut state = ShellState::default();
        state.enter_configuration();
        let result = completer(state).complete_line("");
        assert_eq!(words(&result), ["do", "end", "exit", "show", "system", "top"]);
    }

    #[test]
    fn test_suggestion_display() {
        let suggestion = Suggestion {
            word: "system".into(),
            description: "System parameters".into(),
        };
        assert_eq!(
            suggestion.display(true),
            format!("{:<20} System parameters", "system")
        );
        assert_eq!(suggestion.display(false), "system");
    }
}
