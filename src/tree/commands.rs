//! The two static command trees.
//!
//! The root node of each tree is never matched by name; its action runs when
//! the first word of a statement matches none of its children.

use super::{Action, CommandNode, Completion};
use crate::shell::Mode;

/// Normal-mode commands.
pub static NORMAL_TREE: CommandNode = CommandNode {
    name: "normal",
    help: "Normal mode",
    action: Some(Action::NormalFallback),
    complete: None,
    children: &[
        CommandNode {
            name: "show",
            help: "Show operational data",
            action: Some(Action::Show),
            complete: Some(Completion::OperationalPath),
            children: &[CommandNode {
                name: "running-config",
                help: "Show running configuration",
                action: Some(Action::ShowRunningConfig),
                complete: Some(Completion::RunningPath),
                children: &[],
            }],
        },
        CommandNode {
            name: "configure",
            help: "Enter configuration mode",
            action: Some(Action::Configure),
            complete: None,
            children: &[],
        },
        CommandNode {
            name: "exit",
            help: "Exit from current mode",
            action: Some(Action::Exit),
            complete: None,
            children: &[],
        },
    ],
};

/// Configuration-mode commands.
pub static CONFIG_TREE: CommandNode = CommandNode {
    name: "config",
    help: "Configuration mode",
    action: Some(Action::ConfigNavigate),
    complete: Some(Completion::ConfigPath),
    children: &[
        CommandNode {
            name: "exit",
            help: "Exit from current mode",
            action: Some(Action::ConfigExit),
            complete: None,
            children: &[],
        },
        CommandNode {
            name: "end",
            help: "Exit configuration mode",
            action: Some(Action::End),
            complete: None,
            children: &[],
        },
        CommandNode {
            name: "top",
            help: "Return to top level",
            action: Some(Action::Top),
            complete: None,
            children: &[],
        },
        CommandNode {
            name: "show",
            help: "Show configuration",
            action: Some(Action::ConfigShow),
            complete: Some(Completion::ConfigPath),
            children: &[],
        },
        CommandNode {
            name: "do",
            help: "Execute a normal-mode command",
            action: Some(Action::Do),
            complete: Some(Completion::Exec),
            children: &[],
        },
    ],
};

/// Root of the tree for `mode`.
pub fn root(mode: Mode) -> &'static CommandNode {
    match mode {
        Mode::Normal => &NORMAL_TREE,
        Mode::Configuration => &CONFIG_TREE,
    }
}
