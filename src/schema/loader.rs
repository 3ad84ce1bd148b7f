//! TOML-backed schema provider.
//!
//! # File format
//!
//! ```toml
//! [[module]]
//! name = "ietf-interfaces"
//!
//! [[module.node]]
//! name = "interfaces"
//! kind = "container"
//! description = "Interface parameters"
//!
//! [[module.node.children]]
//! name = "interface"
//! kind = "list"
//! keys = ["name"]
//! ```
//!
//! A node's `module` defaults to its parent's (or to the enclosing `[[module]]`
//! for top-level nodes). `config = false` marks state data and is inherited by
//! every descendant.

use super::{NodeKind, SchemaNode, SchemaProvider};
use crate::error::CliError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaFile {
    #[serde(default, rename = "module")]
    modules: Vec<ModuleDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModuleDef {
    name: String,
    #[serde(default, rename = "node")]
    nodes: Vec<NodeDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeDef {
    name: String,
    kind: NodeKind,
    #[serde(default)]
    module: Option<String>,
    #[serde(default)]
    keys: Vec<String>,
    #[serde(default)]
    description: String,
    #[serde(default = "default_config")]
    config: bool,
    #[serde(default)]
    children: Vec<NodeDef>,
}

fn default_config() -> bool {
    true
}

/// Loaded schema: the top-level nodes of every module, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    modules: Vec<String>,
    nodes: Vec<SchemaNode>,
}

impl Schema {
    /// Build a schema from already constructed top-level nodes.
    pub fn from_nodes(nodes: Vec<SchemaNode>) -> Self {
        let mut modules: Vec<String> = Vec::new();
        for node in &nodes {
            if !modules.iter().any(|m| m == node.module()) {
                modules.push(node.module().to_string());
            }
        }
        Self { modules, nodes }
    }

    /// Parse a schema from TOML text.
    ///
    /// # Errors
    ///
    /// `CliError::Config` for malformed TOML and for structural problems:
    /// lists without keys, keys naming no leaf child, keys on non-lists,
    /// children under leaves, and duplicate sibling names.
    pub fn from_toml_str(text: &str) -> Result<Self, CliError> {
        let file: SchemaFile = toml::from_str(text).map_err(|e| CliError::Config(e.to_string()))?;

        let mut modules = Vec::new();
        let mut nodes = Vec::new();
        for module in file.modules {
            for def in module.nodes {
                nodes.push(build(def, &module.name, false)?);
            }
            modules.push(module.name);
        }
        check_unique(&nodes, "top level")?;

        debug!(modules = modules.len(), roots = nodes.len(), "loaded schema");
        Ok(Self { modules, nodes })
    }

    /// Read and parse a schema file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Module names in load order.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// Top-level nodes of every module.
    pub fn nodes(&self) -> &[SchemaNode] {
        &self.nodes
    }
}

impl SchemaProvider for Schema {
    fn root_nodes(&self, want_state_only: bool) -> Vec<&SchemaNode> {
        self.nodes
            .iter()
            .filter(|node| {
                if want_state_only {
                    node.is_state_only()
                } else {
                    !node.is_state_only() && node.kind() == NodeKind::Container
                }
            })
            .collect()
    }
}

fn build(def: NodeDef, parent_module: &str, parent_state_only: bool) -> Result<SchemaNode, CliError> {
    let module = def.module.unwrap_or_else(|| parent_module.to_string());
    let state_only = parent_state_only || !def.config;

    match def.kind {
        NodeKind::List => {
            if def.keys.is_empty() {
                return Err(invalid(&def.name, "list has no keys"));
            }
            for key in &def.keys {
                let is_leaf = def
                    .children
                    .iter()
                    .any(|c| &c.name == key && c.kind == NodeKind::Leaf);
                if !is_leaf {
                    return Err(invalid(&def.name, &format!("key '{}' is not a leaf child", key)));
                }
            }
        }
        _ if !def.keys.is_empty() => return Err(invalid(&def.name, "only lists have keys")),
        NodeKind::Leaf | NodeKind::LeafList if !def.children.is_empty() => {
            return Err(invalid(&def.name, "leaves have no children"));
        }
        _ => {}
    }

    let mut children = Vec::with_capacity(def.children.len());
    for child in def.children {
        children.push(build(child, &module, state_only)?);
    }
    check_unique(&children, &def.name)?;

    Ok(SchemaNode::new(def.name, module, def.kind)
        .with_keys(def.keys)
        .with_description(def.description)
        .with_state_only(state_only)
        .with_children(children))
}

fn check_unique(nodes: &[SchemaNode], parent: &str) -> Result<(), CliError> {
    for (i, node) in nodes.iter().enumerate() {
        if nodes[i + 1..].iter().any(|n| n.name() == node.name()) {
            return Err(invalid(node.name(), &format!("duplicate name under {}", parent)));
        }
    }
    Ok(())
}

fn invalid(name: &str, problem: &str) -> CliError {
    CliError::Config(format!("schema node '{}': {}", name, problem))
}
