//! Abbreviation-aware dispatch through both command trees.

#[allow(clippy::duplicate_mod)]
#[path = "helpers.rs"]
mod helpers;

use helpers::{create_config_shell, create_test_shell, execute_err, execute_ok};
use yang_shell::shell::parser::tokenize;
use yang_shell::tree::commands::{CONFIG_TREE, NORMAL_TREE};
use yang_shell::tree::dispatch;
use yang_shell::{CliError, CommandNode, Mode, PathSegment};

/// Every unique prefix of every child name, at every level.
fn abbreviations(node: &'static CommandNode) -> Vec<(String, &'static str)> {
    let mut found = Vec::new();
    for child in node.children {
        for end in 1..=child.name.len() {
            let prefix = &child.name[..end];
            let matches = node
                .children
                .iter()
                .filter(|c| c.name.starts_with(prefix))
                .count();
            if matches == 1 {
                found.push((prefix.to_string(), child.name));
            }
        }
    }
    found
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_unique_abbreviation_equals_full_name() {
    for root in [&NORMAL_TREE, &CONFIG_TREE] {
        for (prefix, name) in abbreviations(root) {
            let mut short = tokenize(&prefix).unwrap();
            let mut full = tokenize(name).unwrap();

            let a = dispatch::resolve(root, &mut short).unwrap();
            let b = dispatch::resolve(root, &mut full).unwrap();
            assert!(core::ptr::eq(a.node, b.node), "'{}' vs '{}'", prefix, name);
            assert_eq!(short[0].as_str(), name);
        }
    }
}

#[test]
fn test_nested_abbreviation_canonicalized() {
    let mut tokens = tokenize("sh ru interfaces").unwrap();
    let resolved = dispatch::resolve(&NORMAL_TREE, &mut tokens).unwrap();

    assert_eq!(resolved.node.name, "running-config");
    assert_eq!(resolved.depth, 2);
    let words: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
    assert_eq!(words, ["show", "running-config", "interfaces"]);
}

#[test]
fn test_ambiguous_prefix_lists_candidates() {
    let mut tokens = tokenize("e").unwrap();
    let err = dispatch::resolve(&CONFIG_TREE, &mut tokens).unwrap_err();
    assert_eq!(
        err,
        CliError::AmbiguousCommand {
            token: "e".into(),
            candidates: vec!["exit".into(), "end".into()],
        }
    );
}

#[test]
fn test_full_name_that_prefixes_a_sibling_is_ambiguous() {
    static ROOT: CommandNode = CommandNode {
        name: "",
        help: "",
        action: None,
        complete: None,
        children: &[
            CommandNode {
                name: "interface",
                help: "Single interface",
                action: None,
                complete: None,
                children: &[],
            },
            CommandNode {
                name: "interfaces",
                help: "All interfaces",
                action: None,
                complete: None,
                children: &[],
            },
        ],
    };

    let mut tokens = tokenize("interface").unwrap();
    assert_eq!(
        dispatch::resolve(&ROOT, &mut tokens).unwrap_err(),
        CliError::AmbiguousCommand {
            token: "interface".into(),
            candidates: vec!["interface".into(), "interfaces".into()],
        }
    );

    let mut tokens = tokenize("interfaces").unwrap();
    assert_eq!(dispatch::resolve(&ROOT, &mut tokens).unwrap().node.name, "interfaces");
}

#[test]
fn test_empty_token_never_matches() {
    let mut tokens = tokenize("\"\"").unwrap();
    let resolved = dispatch::resolve(&NORMAL_TREE, &mut tokens).unwrap();
    assert_eq!(resolved.depth, 0);
}

// ============================================================================
// Through the shell
// ============================================================================

#[test]
fn test_ambiguous_command_keeps_state() {
    let mut shell = create_config_shell();
    execute_ok(&mut shell, "interfaces interface eth0");
    let before = shell.state().clone();

    let outcome = execute_err(&mut shell, "e");
    assert_eq!(
        outcome.output,
        "Error: Ambiguous command 'e', matches are: exit, end\n"
    );
    assert_eq!(*shell.state(), before);
}

#[test]
fn test_unknown_normal_command_is_reported() {
    let mut shell = create_test_shell();
    let output = execute_ok(&mut shell, "reload now");
    assert_eq!(output, "Unknown command 'reload'\n");
    assert_eq!(shell.state().mode, Mode::Normal);
}

#[test]
fn test_configure_abbreviations() {
    for word in ["c", "con", "configure"] {
        let mut shell = create_test_shell();
        execute_ok(&mut shell, word);
        assert_eq!(shell.state().mode, Mode::Configuration, "'{}'", word);
    }
}

#[test]
fn test_config_mode_commands() {
    let mut shell = create_config_shell();

    execute_ok(&mut shell, "sys ntp");
    assert_eq!(
        shell.state().path(),
        [PathSegment::container("system"), PathSegment::container("ntp")]
    );

    execute_ok(&mut shell, "ex");
    assert_eq!(shell.state().path(), [PathSegment::container("system")]);

    execute_ok(&mut shell, "to");
    assert!(shell.state().path().is_empty());
    assert_eq!(shell.state().mode, Mode::Configuration);

    execute_ok(&mut shell, "system; en");
    assert_eq!(shell.state().mode, Mode::Normal);
    assert!(shell.state().path().is_empty());
}

#[test]
fn test_exit_at_config_top_returns_to_normal() {
    let mut shell = create_config_shell();
    execute_ok(&mut shell, "exit");
    assert_eq!(shell.state().mode, Mode::Normal);
}

#[test]
fn test_navigation_errors() {
    let mut shell = create_config_shell();

    let outcome = execute_err(&mut shell, "interfaces interface");
    assert_eq!(outcome.output, "Error: List 'interface' requires a key\n");

    let outcome = execute_err(&mut shell, "system hostname");
    assert_eq!(outcome.output, "Error: Cannot enter leaf 'hostname'\n");

    let outcome = execute_err(&mut shell, "routing");
    assert_eq!(outcome.output, "Error: No such path element 'routing'\n");

    assert!(shell.state().path().is_empty());
}

#[test]
fn test_relative_navigation() {
    let mut shell = create_config_shell();
    execute_ok(&mut shell, "interfaces");
    execute_ok(&mut shell, "interface eth1");
    execute_ok(&mut shell, "ipv4 address 192.0.2.1");

    assert_eq!(
        shell.state().path(),
        [
            PathSegment::container("interfaces"),
            PathSegment::entry("interface", vec!["eth1".into()]),
            PathSegment::container("ipv4"),
            PathSegment::entry("address", vec!["192.0.2.1".into()]),
        ]
    );
}

#[test]
fn test_quoted_list_key() {
    let mut shell = create_config_shell();
    execute_ok(&mut shell, "interfaces interface 'Gi 0/1'");
    assert_eq!(shell.state().path()[1].keys, ["Gi 0/1"]);
}
