//! Line I/O abstraction for the interactive front end.
//!
//! The `LineIo` trait is the seam between the shell loop and whatever edits
//! lines for the user (a readline-style editor, a script, a test double).
//! Keystrokes, history and terminal control all live behind it.

use crate::shell::completer::LineCompleter;

/// Line-oriented front end.
///
/// The shell hands over a fresh [`LineCompleter`] with every prompt, so
/// completion always reflects the mode and path at the time of the read.
pub trait LineIo {
    /// Platform-specific error type
    type Error;

    /// Read one line of input.
    ///
    /// Returns:
    /// - `Ok(Some(line))` for a completed line (an interrupted line may be empty)
    /// - `Ok(None)` at end of input
    /// - `Err(Self::Error)` on I/O error
    fn read_line(
        &mut self,
        prompt: &str,
        completer: LineCompleter,
    ) -> Result<Option<String>, Self::Error>;

    /// Write output text.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error>;
}
