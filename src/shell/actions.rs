//! Stock command handlers backed by a schema and a datastore.
//!
//! `YangHandlers` implements every action and completion of the built-in
//! command trees: `show` and `show running-config` in normal mode, schema
//! navigation, `exit`/`end`/`top`/`show`/`do` in configuration mode.

use super::handlers::{CommandHandlers, Invocation};
use super::parser::Tokens;
use super::{PathSegment, ShellState};
use crate::datastore::Datastore;
use crate::error::CliError;
use crate::response::Response;
use crate::schema::{self, ContextNode, NodeKind, SchemaProvider};
use crate::tree::commands::NORMAL_TREE;
use crate::tree::completion::{self, Candidates};
use crate::tree::{Action, Completion, dispatch};
use toml::{Table, Value};
use tracing::debug;

/// Shown when a path holds no data.
pub const NO_DATA: &str = "No data";

/// Handlers for the built-in command trees.
#[derive(Debug, Clone)]
pub struct YangHandlers<S, D> {
    schema: S,
    datastore: D,
    include_defaults: bool,
}

impl<S, D> YangHandlers<S, D>
where
    S: SchemaProvider,
    D: Datastore,
{
    /// Create handlers over a schema and a datastore.
    pub fn new(schema: S, datastore: D) -> Self {
        Self {
            schema,
            datastore,
            include_defaults: false,
        }
    }

    /// Builder method to ask the datastore for default values too.
    pub fn with_include_defaults(mut self, include_defaults: bool) -> Self {
        self.include_defaults = include_defaults;
        self
    }

    /// Schema provider.
    pub fn schema(&self) -> &S {
        &self.schema
    }

    /// Datastore.
    pub fn datastore(&self) -> &D {
        &self.datastore
    }

    fn fetch(&self, xpath: &str, state_only: bool) -> Result<Option<Value>, CliError> {
        if state_only {
            self.datastore.get(xpath, self.include_defaults)
        } else {
            self.datastore.get_config(xpath, self.include_defaults)
        }
    }

    /// Print the data at a path, or under every root when `path` is empty.
    fn show(&self, path: &[&str], state_only: bool) -> Result<Response, CliError> {
        let nodes = schema::resolve(&self.schema, path, !state_only)?;
        self.show_nodes(&nodes, state_only)
    }

    fn show_nodes(&self, nodes: &[ContextNode<'_>], state_only: bool) -> Result<Response, CliError> {
        let mut data = Table::new();

        if nodes.is_empty() {
            for root in self.schema.root_nodes(state_only) {
                if let Some(value) = self.fetch(&format!("/{}", root.name()), state_only)? {
                    data.insert(root.name().to_string(), value);
                }
            }
        } else {
            let xpath = schema::render(nodes);
            debug!(%xpath, state_only, "show");

            if let (Some(last), Some(value)) = (nodes.last(), self.fetch(&xpath, state_only)?) {
                data.insert(last.node.name().to_string(), value);
            }
        }

        if data.is_empty() {
            return Ok(Response::success(NO_DATA));
        }

        let text = toml::to_string(&data).map_err(|e| CliError::Datastore(e.to_string()))?;
        Ok(Response::success(text.trim_end()).indented())
    }

    /// Context nodes of the stored configuration path.
    fn located(&self, state: &ShellState) -> Result<Vec<ContextNode<'_>>, CliError> {
        schema::locate(
            &self.schema,
            state
                .path()
                .iter()
                .map(|segment| (segment.name.as_str(), segment.keys.as_slice())),
        )
    }

    /// Make `args`, taken relative to the current path, the new configuration path.
    fn navigate(&self, state: &mut ShellState, args: &[&str]) -> Result<Response, CliError> {
        if args.is_empty() {
            return Ok(Response::empty());
        }

        let base = self.located(state)?;
        let nodes = schema::resolve_from(&self.schema, base, args, true)?;
        if let Some(last) = nodes.last() {
            match last.node.kind() {
                NodeKind::Leaf | NodeKind::LeafList => {
                    return Err(CliError::NotNavigable {
                        name: last.node.name().to_string(),
                    });
                }
                NodeKind::List if last.list_keys().is_empty() => {
                    return Err(CliError::ListKeyRequired {
                        list: last.node.name().to_string(),
                    });
                }
                NodeKind::List | NodeKind::Container => {}
            }
        }

        let path = nodes
            .iter()
            .map(|n| PathSegment::entry(n.node.name(), n.list_keys().to_vec()))
            .collect();
        state.set_path(path)?;
        Ok(Response::empty())
    }

    /// Run the arguments as a normal-mode statement.
    fn run_nested(
        &self,
        state: &mut ShellState,
        invocation: &Invocation<'_, '_>,
    ) -> Result<Response, CliError> {
        let mut tokens =
            Tokens::from_slice(invocation.arg_tokens()).map_err(|_| CliError::BufferFull)?;
        if tokens.is_empty() {
            return Ok(Response::empty());
        }
        dispatch::execute(&NORMAL_TREE, &mut tokens, self, state)
    }
}

impl<S, D> CommandHandlers for YangHandlers<S, D>
where
    S: SchemaProvider,
    D: Datastore,
{
    fn execute(
        &self,
        action: Action,
        state: &mut ShellState,
        invocation: &Invocation<'_, '_>,
    ) -> Result<Response, CliError> {
        let args = invocation.args();

        match action {
            // Reported, but not a failed statement
            Action::NormalFallback => match args.first() {
                Some(word) => Ok(Response::success(
                    CliError::CommandNotFound(word.to_string()).to_string(),
                )),
                None => Ok(Response::empty()),
            },
            Action::Show => self.show(&args, true),
            Action::ShowRunningConfig => self.show(&args, false),
            Action::Configure => {
                state.enter_configuration();
                Ok(Response::empty())
            }
            Action::Exit => Ok(Response::exit("Bye")),
            Action::ConfigNavigate => self.navigate(state, &args),
            Action::ConfigExit => {
                state.exit_level();
                Ok(Response::empty())
            }
            Action::End => {
                state.end();
                Ok(Response::empty())
            }
            Action::Top => {
                state.top();
                Ok(Response::empty())
            }
            Action::ConfigShow => {
                let nodes = schema::resolve_from(&self.schema, self.located(state)?, &args, true)?;
                self.show_nodes(&nodes, false)
            }
            Action::Do => self.run_nested(state, invocation),
        }
    }

    fn complete(
        &self,
        source: Completion,
        state: &ShellState,
        invocation: &Invocation<'_, '_>,
    ) -> Candidates {
        let args = invocation.args();

        match source {
            Completion::OperationalPath => schema::available_children(&self.schema, &args, true),
            Completion::RunningPath => schema::available_children(&self.schema, &args, false),
            Completion::ConfigPath => match self.located(state) {
                Ok(base) => schema::available_children_from(&self.schema, base, &args, false),
                Err(_) => Candidates::new(),
            },
            Completion::Exec => {
                completion::complete(&NORMAL_TREE, invocation.arg_tokens(), self, state)
            }
        }
    }
}
