//! Path renderer.
//!
//! Turns resolved context nodes into an addressing expression such as
//! `/interfaces/interface[name='eth0']/ext:mtu`.

use super::ContextNode;
use core::fmt::Write;

/// Render context nodes as an addressing expression.
///
/// # Format
///
/// - One `/name` segment per context node
/// - A segment whose module differs from the previous segment's is written
///   `module:name`; the first segment sets the module context unqualified
/// - Keyed list entries get one `[key='value']` predicate per declared key
///   that has a captured value; a value containing `'` is written
///   `[key="value"]`
///
/// An empty node list renders as `/`.
pub fn render(nodes: &[ContextNode<'_>]) -> String {
    let mut out = String::new();
    let mut module: Option<&str> = None;

    for context in nodes {
        let node = context.node;
        out.push('/');

        match module {
            Some(current) if current != node.module() => {
                out.push_str(node.module());
                out.push(':');
            }
            _ => {}
        }
        module = Some(node.module());
        out.push_str(node.name());

        for (key, value) in node.keys().iter().zip(context.list_keys()) {
            let quote = if value.contains('\'') { '"' } else { '\'' };
            // Writing to a String cannot fail
            let _ = write!(out, "[{}={}{}{}]", key, quote, value, quote);
        }
    }

    if out.is_empty() {
        out.push('/');
    }
    out
}
