//! Response types for command execution.
//!
//! `Response` represents successful execution with message and formatting flags.

/// Command execution response with message and formatting flags.
/// Command failures return `Err(CliError)`, not `Response`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Response message (may span several lines, `\n` separated)
    pub message: String,

    /// Indent output (2 spaces per line)
    pub indent_message: bool,

    /// Add newline after message
    pub postfix_newline: bool,

    /// End the session once this statement's output is written
    pub end_session: bool,
}

impl Response {
    /// Create success response with default formatting.
    ///
    /// Default: no indentation, postfix newline, session continues.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            indent_message: false,
            postfix_newline: true,
            end_session: false,
        }
    }

    /// Create a response with no output.
    pub fn empty() -> Self {
        Self::success("").without_postfix_newline()
    }

    /// Create a response that ends the session.
    pub fn exit(message: impl Into<String>) -> Self {
        let mut response = Self::success(message);
        response.end_session = true;
        response
    }

    /// Builder method to indent response (2 spaces per line).
    pub fn indented(mut self) -> Self {
        self.indent_message = true;
        self
    }

    /// Builder method to suppress newline after response.
    pub fn without_postfix_newline(mut self) -> Self {
        self.postfix_newline = false;
        self
    }

    /// Append a line to the message.
    pub fn with_line(mut self, line: &str) -> Self {
        if !self.message.is_empty() && !self.message.ends_with('\n') {
            self.message.push('\n');
        }
        self.message.push_str(line);
        self.postfix_newline = true;
        self
    }

    /// Write the message to `out`, applying the formatting flags.
    pub fn write_to(&self, out: &mut String) {
        if self.indent_message {
            for (i, line) in self.message.lines().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                if !line.is_empty() {
                    out.push_str("  ");
                }
                out.push_str(line);
            }
        } else {
            out.push_str(&self.message);
        }

        if self.postfix_newline && !out.ends_with('\n') {
            out.push('\n');
        }
    }
}
