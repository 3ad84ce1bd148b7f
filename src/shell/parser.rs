//! Line tokenizer and statement splitter.
//!
//! A small state machine splits a raw line into words, honoring single and
//! double quotes. `;` (statement separator) and `|` (pipe-filter separator)
//! are words of their own when they appear outside quotes.
//!
//! Tokens borrow from the input line whenever their text is contiguous in it,
//! so a typical line is tokenized without allocating.

use crate::error::CliError;
use std::borrow::Cow;

/// Token buffer capacity.
///
/// This matches the default MAX_TOKENS from ShellConfig. Shells configured
/// with a smaller limit reject longer lines before dispatch.
pub const MAX_TOKENS: usize = 64;

/// Statement separator
pub const STATEMENT_SEPARATOR: char = ';';

/// Pipe-filter separator
pub const PIPE: char = '|';

/// One word of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    text: Cow<'a, str>,
    quoted: bool,
}

/// Tokens of one line or one statement.
pub type Tokens<'a> = heapless::Vec<Token<'a>, MAX_TOKENS>;

impl<'a> Token<'a> {
    /// Unquoted word.
    pub fn word(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            text: text.into(),
            quoted: false,
        }
    }

    /// Word that came (at least partly) from a quoted span.
    pub fn quoted(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            text: text.into(),
            quoted: true,
        }
    }

    /// Token text without quotes.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether any part of the token was quoted.
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Whether this is the unquoted single-character separator `sep`.
    pub fn is_separator(&self, sep: char) -> bool {
        !self.quoted && self.text.len() == sep.len_utf8() && self.text.starts_with(sep)
    }

    /// Whether this is an unquoted `|`.
    pub fn is_pipe(&self) -> bool {
        self.is_separator(PIPE)
    }

    /// Replace the typed text with a command's full name.
    pub(crate) fn canonicalize(&mut self, name: &'static str) {
        self.text = Cow::Borrowed(name);
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Tokenizer state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum LexState {
    /// Outside quotes
    Normal,

    /// Inside a span opened by the given quote character
    Quoted(char),
}

/// Token under construction.
///
/// Tracks a byte range of the line while the text stays contiguous and
/// switches to an owned buffer once a quote character interrupts it.
struct Pending<'a> {
    line: &'a str,
    active: bool,
    quoted: bool,
    start: usize,
    end: usize,
    owned: Option<String>,
}

impl<'a> Pending<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line,
            active: false,
            quoted: false,
            start: 0,
            end: 0,
            owned: None,
        }
    }

    fn push(&mut self, index: usize, c: char) {
        if !self.active {
            self.active = true;
            self.start = index;
            self.end = index;
        }

        match &mut self.owned {
            Some(text) => text.push(c),
            None if self.end == index => self.end = index + c.len_utf8(),
            None => {
                let mut text = self.line[self.start..self.end].to_string();
                text.push(c);
                self.owned = Some(text);
            }
        }
    }

    /// A quote opened at `index`.
    fn open_quote(&mut self, index: usize) {
        if !self.active {
            self.active = true;
            self.start = index + 1;
            self.end = index + 1;
        }
        self.quoted = true;
    }

    fn take(&mut self) -> Option<Token<'a>> {
        if !self.active {
            return None;
        }

        let text = match self.owned.take() {
            Some(text) => Cow::Owned(text),
            None => Cow::Borrowed(&self.line[self.start..self.end]),
        };
        let token = Token {
            text,
            quoted: self.quoted,
        };

        self.active = false;
        self.quoted = false;
        Some(token)
    }
}

fn push_token<'a>(tokens: &mut Tokens<'a>, token: Token<'a>) -> Result<(), CliError> {
    tokens.push(token).map_err(|_| CliError::BufferFull)
}

/// Split a raw line into tokens.
///
/// # Rules
///
/// - Space and tab separate tokens outside quotes
/// - `"` or `'` opens a span closed only by the same character; the closing
///   quote ends the token, so `""` yields an empty token
/// - Unquoted `;` and `|` end the current token and are tokens themselves
/// - An unterminated quote closes silently at end of line
///
/// # Returns
///
/// - `Ok(Tokens)` - Tokens in input order
/// - `Err(CliError::BufferFull)` - More than MAX_TOKENS tokens
pub fn tokenize(line: &str) -> Result<Tokens<'_>, CliError> {
    let mut tokens = Tokens::new();
    let mut pending = Pending::new(line);
    let mut state = LexState::Normal;

    for (index, c) in line.char_indices() {
        match state {
            LexState::Normal => match c {
                ' ' | '\t' => {
                    if let Some(token) = pending.take() {
                        push_token(&mut tokens, token)?;
                    }
                }
                STATEMENT_SEPARATOR | PIPE => {
                    if let Some(token) = pending.take() {
                        push_token(&mut tokens, token)?;
                    }
                    push_token(&mut tokens, Token::word(&line[index..index + 1]))?;
                }
                '"' | '\'' => {
                    pending.open_quote(index);
                    state = LexState::Quoted(c);
                }
                _ => pending.push(index, c),
            },

            LexState::Quoted(quote) => {
                if c == quote {
                    // Closing quote ends the token, even when empty
                    if let Some(token) = pending.take() {
                        push_token(&mut tokens, token)?;
                    }
                    state = LexState::Normal;
                } else {
                    pending.push(index, c);
                }
            }
        }
    }

    // Unterminated quote or trailing word
    if let Some(token) = pending.take()
        && !token.as_str().is_empty()
    {
        push_token(&mut tokens, token)?;
    }

    Ok(tokens)
}

/// Group tokens into statements separated by unquoted `;`.
///
/// Separators are dropped. A trailing empty group is omitted, so empty input
/// yields no statements; empty groups between separators are kept.
pub fn split_statements(tokens: Tokens<'_>) -> Vec<Tokens<'_>> {
    let mut statements = Vec::new();
    let mut current = Tokens::new();

    for token in tokens {
        if token.is_separator(STATEMENT_SEPARATOR) {
            statements.push(core::mem::take(&mut current));
        } else {
            // Same capacity as the input, cannot overflow
            current.push(token).ok();
        }
    }

    if !current.is_empty() {
        statements.push(current);
    }

    statements
}
