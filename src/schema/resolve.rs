//! Schema path resolver and show-command availability.
//!
//! Path words are matched against the schema by abbreviation, one level per
//! word, except that the word after a list name is that list's key value and
//! the word after a leaf name is the leaf's value.

use super::{Capture, ContextNode, NodeKind, SchemaNode, SchemaProvider};
use crate::error::CliError;
use crate::matching::{self, Match};
use crate::tree::completion::Candidates;
use tracing::debug;

/// Resolve path words to context nodes.
///
/// # Walk
///
/// - The first word selects a root: a configuration container when
///   `want_config_root`, otherwise a state-only top-level node
/// - A container or list selects a child by the next word
///   - Container child: appended, becomes current
///   - List child: becomes current; the next word is its key and appends the
///     keyed entry
///   - Leaf or leaf-list child: appended and the walk ends; a following word is
///     captured as its value
/// - A walk that ends while a list key is expected appends the list without keys
///
/// # Returns
///
/// - `Ok(nodes)` - Context nodes (empty for empty input)
/// - `Err(CliError::PathNotFound)` - A word matched no node
/// - `Err(CliError::AmbiguousPath)` - A word matched several nodes
pub fn resolve<'s, P>(
    provider: &'s P,
    tokens: &[&str],
    want_config_root: bool,
) -> Result<Vec<ContextNode<'s>>, CliError>
where
    P: SchemaProvider + ?Sized,
{
    resolve_from(provider, Vec::new(), tokens, want_config_root)
}

/// Continue a walk below already-resolved `base` nodes.
///
/// With an empty `base` this is [`resolve`]. Otherwise the first word selects
/// a child of the last base node; base nodes are never matched again.
pub fn resolve_from<'s, P>(
    provider: &'s P,
    base: Vec<ContextNode<'s>>,
    tokens: &[&str],
    want_config_root: bool,
) -> Result<Vec<ContextNode<'s>>, CliError>
where
    P: SchemaProvider + ?Sized,
{
    let mut nodes = base;
    let mut words = tokens.iter();

    let mut current = match nodes.last() {
        Some(last) => last.node,
        None => {
            let Some(first) = words.next() else {
                return Ok(nodes);
            };
            let root = select(provider.root_nodes(!want_config_root), first)?;
            nodes.push(ContextNode::new(root));
            root
        }
    };
    let mut awaiting_key = false;

    while let Some(word) = words.next() {
        if awaiting_key {
            nodes.push(ContextNode::with_keys(current, vec![word.to_string()]));
            awaiting_key = false;
            continue;
        }

        match current.kind() {
            NodeKind::Container | NodeKind::List => {
                let child = select(current.children(), word)?;
                match child.kind() {
                    NodeKind::Container => {
                        nodes.push(ContextNode::new(child));
                        current = child;
                    }
                    NodeKind::List => {
                        current = child;
                        awaiting_key = true;
                    }
                    NodeKind::Leaf | NodeKind::LeafList => {
                        let mut node = ContextNode::new(child);
                        if let Some(value) = words.next() {
                            node.capture = Capture::Value(value.to_string());
                        }
                        nodes.push(node);
                        return Ok(nodes);
                    }
                }
            }
            NodeKind::Leaf | NodeKind::LeafList => {
                // Top-level leaf: the word is its value
                if let Some(last) = nodes.last_mut() {
                    last.capture = Capture::Value(word.to_string());
                }
                return Ok(nodes);
            }
        }
    }

    if awaiting_key {
        nodes.push(ContextNode::new(current));
    }

    debug!(words = tokens.len(), nodes = nodes.len(), "resolved schema path");
    Ok(nodes)
}

/// Rebuild context nodes for a stored configuration path.
///
/// Segment names are full names from an earlier resolution, so they are
/// looked up exactly rather than by abbreviation.
///
/// # Errors
///
/// `CliError::PathNotFound` if a segment no longer names a configuration node.
pub fn locate<'s, 'p, P, I>(provider: &'s P, segments: I) -> Result<Vec<ContextNode<'s>>, CliError>
where
    P: SchemaProvider + ?Sized,
    I: IntoIterator<Item = (&'p str, &'p [String])>,
{
    let mut nodes: Vec<ContextNode<'s>> = Vec::new();

    for (name, keys) in segments {
        let found = match nodes.last() {
            Some(parent) => parent.node.children().iter().find(|n| n.name() == name),
            None => provider.root_nodes(false).into_iter().find(|n| n.name() == name),
        };
        let node = found.ok_or_else(|| CliError::PathNotFound {
            token: name.to_string(),
        })?;
        nodes.push(if keys.is_empty() {
            ContextNode::new(node)
        } else {
            ContextNode::with_keys(node, keys.to_vec())
        });
    }

    Ok(nodes)
}

/// Children a `show` command may descend into after `tokens`.
///
/// # Returns
///
/// - Empty `tokens`: the root set for `want_state_only`
/// - Path ending at a container or keyed list entry: its children whose
///   state-only flag equals `want_state_only`
/// - Anything else (unresolvable path, list awaiting its key, leaf): empty
pub fn available_children<P>(provider: &P, tokens: &[&str], want_state_only: bool) -> Candidates
where
    P: SchemaProvider + ?Sized,
{
    available_children_from(provider, Vec::new(), tokens, want_state_only)
}

/// [`available_children`] for words relative to already-resolved `base` nodes.
pub fn available_children_from<'s, P>(
    provider: &'s P,
    base: Vec<ContextNode<'s>>,
    tokens: &[&str],
    want_state_only: bool,
) -> Candidates
where
    P: SchemaProvider + ?Sized,
{
    if base.is_empty() && tokens.is_empty() {
        return describe(provider.root_nodes(want_state_only));
    }

    let Ok(nodes) = resolve_from(provider, base, tokens, !want_state_only) else {
        return Candidates::new();
    };
    let Some(last) = nodes.last() else {
        return Candidates::new();
    };

    match last.node.kind() {
        NodeKind::List if last.list_keys().is_empty() => Candidates::new(),
        NodeKind::List | NodeKind::Container => describe(
            last.node
                .children()
                .iter()
                .filter(|child| child.is_state_only() == want_state_only),
        ),
        NodeKind::Leaf | NodeKind::LeafList => Candidates::new(),
    }
}

fn select<'s, I>(nodes: I, word: &str) -> Result<&'s SchemaNode, CliError>
where
    I: IntoIterator<Item = &'s SchemaNode>,
{
    match matching::by_prefix(nodes, word) {
        Match::Unique(node) => Ok(node),
        Match::None => Err(CliError::PathNotFound {
            token: word.to_string(),
        }),
        Match::Ambiguous(found) => Err(CliError::AmbiguousPath {
            token: word.to_string(),
            candidates: found.iter().map(|n| n.name().to_string()).collect(),
        }),
    }
}

fn describe<'s, I>(nodes: I) -> Candidates
where
    I: IntoIterator<Item = &'s SchemaNode>,
{
    nodes
        .into_iter()
        .map(|node| (node.name().to_string(), node.description().to_string()))
        .collect()
}
