//! Typed schema tree and path addressing.
//!
//! A schema is a read-only tree of containers, lists (with keys), leaves and
//! leaf-lists, each owned by a module. The shell never edits it; it walks it to
//! turn typed path words into context nodes and renders those as addressing
//! expressions for the datastore.

use crate::matching::Named;
use serde::Deserialize;

// Sub-modules
pub mod loader;
pub mod render;
pub mod resolve;

pub use loader::Schema;
pub use render::render;
pub use resolve::{available_children, available_children_from, locate, resolve, resolve_from};

/// Schema node kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// Grouping node without a value
    Container,

    /// Keyed sequence of entries
    List,

    /// Single value
    Leaf,

    /// Sequence of values
    LeafList,
}

impl NodeKind {
    /// Check if this kind carries a value (leaf or leaf-list).
    pub fn is_terminal(self) -> bool {
        matches!(self, NodeKind::Leaf | NodeKind::LeafList)
    }
}

/// One node of the schema tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaNode {
    name: String,
    module: String,
    kind: NodeKind,
    keys: Vec<String>,
    description: String,
    state_only: bool,
    children: Vec<SchemaNode>,
}

impl SchemaNode {
    /// Create a configuration node without keys, description or children.
    pub fn new(name: impl Into<String>, module: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            module: module.into(),
            kind,
            keys: Vec::new(),
            description: String::new(),
            state_only: false,
            children: Vec::new(),
        }
    }

    /// Builder method to set the list keys.
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to mark the node as state data (config false).
    pub fn with_state_only(mut self, state_only: bool) -> Self {
        self.state_only = state_only;
        self
    }

    /// Builder method to set the children.
    pub fn with_children(mut self, children: Vec<SchemaNode>) -> Self {
        self.children = children;
        self
    }

    /// Node name (unique among siblings).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the module that defines the node.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Node kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Key leaf names (non-empty only for lists).
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the node holds state data only.
    pub fn is_state_only(&self) -> bool {
        self.state_only
    }

    /// Child nodes in schema order.
    pub fn children(&self) -> &[SchemaNode] {
        &self.children
    }
}

impl Named for SchemaNode {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Schema provider trait.
///
/// Implementations expose the top-level nodes of every loaded module.
pub trait SchemaProvider {
    /// Top-level nodes.
    ///
    /// - `want_state_only == true`: every top-level state-only node
    /// - `want_state_only == false`: every top-level configuration container
    fn root_nodes(&self, want_state_only: bool) -> Vec<&SchemaNode>;
}

/// Value captured for a context node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    /// Nothing captured
    None,

    /// Key values of a list entry
    Keys(Vec<String>),

    /// Value typed after a leaf or leaf-list
    Value(String),
}

/// Schema node resolved from typed path words, plus what was captured for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextNode<'s> {
    /// Schema node
    pub node: &'s SchemaNode,

    /// Captured keys or value
    pub capture: Capture,
}

impl<'s> ContextNode<'s> {
    /// Context node with nothing captured.
    pub fn new(node: &'s SchemaNode) -> Self {
        Self {
            node,
            capture: Capture::None,
        }
    }

    /// Context node for a list entry.
    pub fn with_keys(node: &'s SchemaNode, keys: Vec<String>) -> Self {
        Self {
            node,
            capture: Capture::Keys(keys),
        }
    }

    /// Captured list key values (empty unless a keyed list entry).
    pub fn list_keys(&self) -> &[String] {
        match &self.capture {
            Capture::Keys(keys) => keys,
            _ => &[],
        }
    }

    /// Captured leaf value.
    pub fn leaf_value(&self) -> Option<&str> {
        match &self.capture {
            Capture::Value(value) => Some(value),
            _ => None,
        }
    }
}
