//! Command tree data structures.
//!
//! Each shell mode has one static tree of abbreviation-matchable commands.
//! All trees are const-initializable and immutable; nodes carry only metadata
//! and the identifiers of their behavior. Execution and completion logic is
//! supplied separately through the `CommandHandlers` trait, so a tree never
//! holds references back into the session.

use crate::matching::Named;

// Sub-modules
pub mod commands;
pub mod completion;
pub mod dispatch;

/// What a command does when it is the resolved node of a statement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Normal-mode root: first word matched no command
    NormalFallback,

    /// Show operational data
    Show,

    /// Show running configuration
    ShowRunningConfig,

    /// Enter configuration mode
    Configure,

    /// End the session
    Exit,

    /// Configuration-mode root: navigate to a schema path
    ConfigNavigate,

    /// Leave the current path segment, or configuration mode at the top
    ConfigExit,

    /// Leave configuration mode
    End,

    /// Return to the top of the configuration tree
    Top,

    /// Show running configuration below the current path
    ConfigShow,

    /// Run a normal-mode statement from configuration mode
    Do,
}

/// Source of completion candidates beyond a node's children.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Completion {
    /// Schema children of a state-only path
    OperationalPath,

    /// Schema children of a configuration path
    RunningPath,

    /// Schema children below the current configuration path
    ConfigPath,

    /// Completion of a nested normal-mode statement
    Exec,
}

/// Command node (const-initializable, no execution logic).
#[derive(Debug)]
pub struct CommandNode {
    /// Command name (unique among siblings)
    pub name: &'static str,

    /// One-line description shown next to completions
    pub help: &'static str,

    /// Behavior when this node is the last one matched
    pub action: Option<Action>,

    /// Extra completion candidates for words after this node
    pub complete: Option<Completion>,

    /// Subcommands, in the order they are offered
    pub children: &'static [CommandNode],
}

impl CommandNode {
    /// Check if this node has subcommands.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Find child node by exact name.
    pub fn find_child(&self, name: &str) -> Option<&'static CommandNode> {
        self.children.iter().find(|child| child.name == name)
    }
}

impl Named for CommandNode {
    fn name(&self) -> &str {
        self.name
    }
}
