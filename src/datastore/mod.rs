//! Datastore access.
//!
//! The `Datastore` trait is the seam to whatever holds configuration and state
//! data. `MemoryDatastore` answers lookups from two TOML documents (running
//! configuration and operational state) and backs the demo binary and tests.

use crate::error::CliError;
use std::path::Path;
use toml::{Table, Value};
use tracing::trace;

pub mod xpath;

use xpath::{Step, XPath};

/// Datastore service.
///
/// Paths are absolute addressing expressions as produced by the path renderer.
/// `Ok(None)` means the path is valid but holds no data.
pub trait Datastore {
    /// Operational (state) data at `xpath`.
    fn get(&self, xpath: &str, include_defaults: bool) -> Result<Option<Value>, CliError>;

    /// Running configuration at `xpath`.
    fn get_config(&self, xpath: &str, include_defaults: bool) -> Result<Option<Value>, CliError>;
}

/// In-memory datastore backed by TOML documents.
///
/// Lists are arrays of tables. A predicate selects the entries whose key field,
/// rendered as text, equals the predicate value; one matching entry is returned
/// as a table, several as an array. Module prefixes are ignored. Only explicit
/// data is stored, so `include_defaults` has no effect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDatastore {
    running: Table,
    operational: Table,
}

impl MemoryDatastore {
    /// Create a datastore from parsed documents.
    pub fn new(running: Table, operational: Table) -> Self {
        Self {
            running,
            operational,
        }
    }

    /// Parse both documents from TOML text.
    pub fn from_toml_str(running: &str, operational: &str) -> Result<Self, CliError> {
        Ok(Self::new(parse(running)?, parse(operational)?))
    }

    /// Read the documents from files; a missing path means an empty document.
    pub fn load(running: Option<&Path>, operational: Option<&Path>) -> Result<Self, CliError> {
        Ok(Self::new(read(running)?, read(operational)?))
    }

    /// Running configuration document.
    pub fn running(&self) -> &Table {
        &self.running
    }

    /// Operational state document.
    pub fn operational(&self) -> &Table {
        &self.operational
    }
}

impl Datastore for MemoryDatastore {
    fn get(&self, xpath: &str, _include_defaults: bool) -> Result<Option<Value>, CliError> {
        trace!(xpath, "operational lookup");
        Ok(lookup(&self.operational, &XPath::parse(xpath)?))
    }

    fn get_config(&self, xpath: &str, _include_defaults: bool) -> Result<Option<Value>, CliError> {
        trace!(xpath, "running lookup");
        Ok(lookup(&self.running, &XPath::parse(xpath)?))
    }
}

fn parse(text: &str) -> Result<Table, CliError> {
    text.parse::<Table>()
        .map_err(|e| CliError::Datastore(e.to_string()))
}

fn read(path: Option<&Path>) -> Result<Table, CliError> {
    let Some(path) = path else {
        return Ok(Table::new());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
    parse(&text)
}

fn lookup(root: &Table, path: &XPath<'_>) -> Option<Value> {
    let Some((first, rest)) = path.steps().split_first() else {
        return Some(Value::Table(root.clone()));
    };

    let mut current = filter(root.get(first.name)?, first)?;
    for step in rest {
        current = descend(&current, step)?;
    }
    Some(current)
}

fn descend(value: &Value, step: &Step<'_>) -> Option<Value> {
    match value {
        Value::Table(table) => filter(table.get(step.name)?, step),
        // Step applied to every entry of an unselected list
        Value::Array(entries) => {
            let found: Vec<Value> = entries.iter().filter_map(|e| descend(e, step)).collect();
            (!found.is_empty()).then_some(Value::Array(found))
        }
        _ => None,
    }
}

fn filter(value: &Value, step: &Step<'_>) -> Option<Value> {
    if step.predicates.is_empty() {
        return Some(value.clone());
    }

    match value {
        Value::Array(entries) => {
            let mut found: Vec<Value> = entries
                .iter()
                .filter(|entry| matches(entry, &step.predicates))
                .cloned()
                .collect();
            match found.len() {
                0 => None,
                1 => found.pop(),
                _ => Some(Value::Array(found)),
            }
        }
        Value::Table(_) if matches(value, &step.predicates) => Some(value.clone()),
        _ => None,
    }
}

fn matches(entry: &Value, predicates: &[(&str, &str)]) -> bool {
    let Some(table) = entry.as_table() else {
        return false;
    };
    predicates
        .iter()
        .all(|(key, expected)| table.get(*key).is_some_and(|v| scalar_text(v) == *expected))
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
