//! Addressing-expression parsing.
//!
//! Parses the absolute, predicate-carrying paths produced by the path
//! renderer, e.g. `/interfaces/interface[name='eth0']/ext:mtu`.
//!
//! # Example
//!
//! ```rust,ignore
//! use yang_shell::datastore::xpath::XPath;
//!
//! let path = XPath::parse("/interfaces/interface[name='eth0']")?;
//! assert_eq!(path.steps().len(), 2);
//! assert_eq!(path.steps()[1].predicates, [("name", "eth0")]);
//! ```

use crate::error::CliError;

/// One `/`-separated step of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<'a> {
    /// Module prefix (`module:` before the name), if any
    pub module: Option<&'a str>,

    /// Node name
    pub name: &'a str,

    /// `[key='value']` predicates in order
    pub predicates: Vec<(&'a str, &'a str)>,
}

/// Parsed absolute path.
///
/// Zero-allocation for names and values: steps borrow from the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XPath<'a> {
    steps: Vec<Step<'a>>,
}

impl<'a> XPath<'a> {
    /// Parse an absolute path.
    ///
    /// # Syntax
    ///
    /// - Must start with `/`; `/` alone addresses the datastore root
    /// - Steps are `name` or `module:name`, followed by any number of
    ///   `[key='value']` or `[key="value"]` predicates
    /// - `/` inside a quoted predicate value is literal
    /// - Empty steps (from `//` or a trailing `/`) are skipped
    ///
    /// # Returns
    ///
    /// - `Ok(XPath)` - Successfully parsed
    /// - `Err(CliError::Datastore)` - Relative path or malformed step
    pub fn parse(input: &'a str) -> Result<Self, CliError> {
        let Some(body) = input.strip_prefix('/') else {
            return Err(malformed(input, "path must be absolute"));
        };

        let mut steps = Vec::new();
        for text in split_steps(body).map_err(|problem| malformed(input, problem))? {
            steps.push(parse_step(text).map_err(|problem| malformed(input, problem))?);
        }

        Ok(Self { steps })
    }

    /// Steps from the root down.
    pub fn steps(&self) -> &[Step<'a>] {
        &self.steps
    }

    /// Check if this path addresses the datastore root.
    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }
}

fn malformed(input: &str, problem: &str) -> CliError {
    CliError::Datastore(format!("invalid path '{}': {}", input, problem))
}

/// Split on `/` outside quotes, skipping empty steps.
fn split_steps(body: &str) -> Result<Vec<&str>, &'static str> {
    let mut steps = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;

    for (i, c) in body.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' => quote = Some(c),
                '/' => {
                    if i > start {
                        steps.push(&body[start..i]);
                    }
                    start = i + 1;
                }
                _ => {}
            },
        }
    }

    if quote.is_some() {
        return Err("unterminated quote");
    }
    if start < body.len() {
        steps.push(&body[start..]);
    }
    Ok(steps)
}

fn parse_step(text: &str) -> Result<Step<'_>, &'static str> {
    let (head, mut rest) = match text.find('[') {
        Some(i) => text.split_at(i),
        None => (text, ""),
    };

    let (module, name) = match head.split_once(':') {
        Some((module, name)) => (Some(module), name),
        None => (None, head),
    };
    if name.is_empty() || module.is_some_and(str::is_empty) {
        return Err("empty name");
    }

    let mut predicates = Vec::new();
    while !rest.is_empty() {
        let body = rest.strip_prefix('[').ok_or("text after predicate")?;
        let (key, after) = body.split_once('=').ok_or("predicate without '='")?;
        let key = key.trim();
        if key.is_empty() {
            return Err("predicate without key");
        }

        let after = after.trim_start();
        let quote = after
            .chars()
            .next()
            .filter(|c| *c == '\'' || *c == '"')
            .ok_or("predicate value must be quoted")?;
        let value_and_tail = &after[1..];
        let close = value_and_tail
            .find(quote)
            .ok_or("unterminated predicate value")?;
        let value = &value_and_tail[..close];

        rest = value_and_tail[close + 1..]
            .trim_start()
            .strip_prefix(']')
            .ok_or("predicate without ']'")?;
        predicates.push((key, value));
    }

    Ok(Step {
        module,
        name,
        predicates,
    })
}
