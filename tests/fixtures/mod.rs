//! Test fixtures and utilities for yang-shell testing.
//!
//! Provides:
//! - `MockIo`: Test implementation of the LineIo trait
//! - `SCHEMA_TOML`, `RUNNING_TOML`, `OPERATIONAL_TOML`: fixture schema and data
//! - Constructors for the fixture schema, datastore and handlers

#![allow(dead_code)]

use std::collections::VecDeque;
use yang_shell::{LineCompleter, LineIo, MemoryDatastore, Schema, YangHandlers};

// ============================================================================
// MockIo - Test I/O Implementation
// ============================================================================

/// Mock line front end for testing.
///
/// Serves queued lines, records every prompt and keeps the completer handed
/// over with the most recent prompt, so tests can complete at that state.
#[derive(Debug, Default)]
pub struct MockIo {
    /// Input queue (simulates user entering lines)
    input: VecDeque<String>,

    /// Output capture
    output: String,

    /// Prompts shown, in order
    prompts: Vec<String>,

    /// Completer from the last read
    completer: Option<LineCompleter>,
}

impl MockIo {
    /// Create new MockIo with no input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create MockIo with pre-loaded input lines.
    pub fn with_lines(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|line| line.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Queue another input line.
    pub fn push_line(&mut self, line: &str) {
        self.input.push_back(line.to_string());
    }

    /// Captured output.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Clear output buffer.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Prompts shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Completer handed over with the last prompt.
    pub fn last_completer(&self) -> Option<&LineCompleter> {
        self.completer.as_ref()
    }

    /// Number of unread lines.
    pub fn input_len(&self) -> usize {
        self.input.len()
    }
}

impl LineIo for MockIo {
    type Error = ();

    fn read_line(
        &mut self,
        prompt: &str,
        completer: LineCompleter,
    ) -> Result<Option<String>, Self::Error> {
        self.prompts.push(prompt.to_string());
        self.completer = Some(completer);
        Ok(self.input.pop_front())
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.output.push_str(s);
        Ok(())
    }
}

// ============================================================================
// Fixture schema and data
// ============================================================================

/// Interfaces model (with an IPv4 augmentation) plus a small system module.
pub const SCHEMA_TOML: &str = r#"
[[module]]
name = "ietf-interfaces"

[[module.node]]
name = "interfaces"
kind = "container"
description = "Interface parameters"

[[module.node.children]]
name = "interface"
kind = "list"
keys = ["name"]
description = "The list of configured interfaces"

[[module.node.children.children]]
name = "name"
kind = "leaf"
description = "The name of the interface"

[[module.node.children.children]]
name = "type"
kind = "leaf"
description = "The type of the interface"

[[module.node.children.children]]
name = "admin-status"
kind = "leaf"
description = "The desired state of the interface"

[[module.node.children.children]]
name = "enabled"
kind = "leaf"
description = "The configured state of the interface"

[[module.node.children.children]]
name = "ipv4"
kind = "container"
module = "ietf-ip"
description = "Parameters for the IPv4 address family"

[[module.node.children.children.children]]
name = "address"
kind = "list"
keys = ["ip"]
description = "The list of IPv4 addresses on the interface"

[[module.node.children.children.children.children]]
name = "ip"
kind = "leaf"
description = "The IPv4 address on the interface"

[[module.node.children.children.children.children]]
name = "prefix-length"
kind = "leaf"
description = "The length of the subnet prefix"

[[module.node]]
name = "interfaces-state"
kind = "container"
config = false
description = "Operational state of interfaces"

[[module.node.children]]
name = "interface"
kind = "list"
keys = ["name"]
description = "The list of interfaces on the device"

[[module.node.children.children]]
name = "name"
kind = "leaf"
description = "The name of the interface"

[[module.node.children.children]]
name = "oper-status"
kind = "leaf"
description = "The current operational state"

[[module.node.children.children]]
name = "statistics"
kind = "container"
description = "Interface counters"

[[module.node.children.children.children]]
name = "in-octets"
kind = "leaf"
description = "Octets received"

[[module]]
name = "demo-system"

[[module.node]]
name = "system"
kind = "container"
description = "System group configuration"

[[module.node.children]]
name = "hostname"
kind = "leaf"
description = "The name of the host"

[[module.node.children]]
name = "ntp"
kind = "container"
description = "NTP client configuration"

[[module.node.children.children]]
name = "enabled"
kind = "leaf"
description = "Synchronize the clock"

[[module.node.children.children]]
name = "server"
kind = "list"
keys = ["name"]
description = "NTP servers"

[[module.node.children.children.children]]
name = "name"
kind = "leaf"
description = "Server name"

[[module.node.children.children.children]]
name = "address"
kind = "leaf"
description = "Server address"

[[module.node.children.children]]
name = "source-interface"
kind = "leaf"
description = "Interface NTP packets are sent from"

[[module.node]]
name = "system-state"
kind = "container"
config = false
description = "System operational state"

[[module.node.children]]
name = "uptime"
kind = "leaf"
description = "Seconds since boot"
"#;

/// Running configuration matching `SCHEMA_TOML`.
pub const RUNNING_TOML: &str = r#"
[system]
hostname = "edge-1"

[system.ntp]
enabled = true

[[system.ntp.server]]
name = "pool"
address = "pool.ntp.org"

[[interfaces.interface]]
name = "eth0"
type = "ethernetCsmacd"
admin-status = "up"
enabled = true

[[interfaces.interface.ipv4.address]]
ip = "192.0.2.1"
prefix-length = 24

[[interfaces.interface]]
name = "eth1"
type = "ethernetCsmacd"
admin-status = "down"
enabled = false
"#;

/// Operational state matching `SCHEMA_TOML`.
pub const OPERATIONAL_TOML: &str = r#"
[system-state]
uptime = 42

[[interfaces-state.interface]]
name = "eth0"
oper-status = "up"

[interfaces-state.interface.statistics]
in-octets = 1000

[[interfaces-state.interface]]
name = "eth1"
oper-status = "down"
"#;

/// Handlers over the fixture schema and data.
pub type TestHandlers = YangHandlers<Schema, MemoryDatastore>;

/// Parse the fixture schema.
pub fn schema() -> Schema {
    Schema::from_toml_str(SCHEMA_TOML).unwrap()
}

/// Parse the fixture data.
pub fn datastore() -> MemoryDatastore {
    MemoryDatastore::from_toml_str(RUNNING_TOML, OPERATIONAL_TOML).unwrap()
}

/// Handlers over the fixture schema and data.
pub fn handlers() -> TestHandlers {
    YangHandlers::new(schema(), datastore())
}
