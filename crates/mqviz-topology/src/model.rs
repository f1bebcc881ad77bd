//! Definitions document and entity types.
//!
//! Mirrors the definitions export of a broker management interface. Only the
//! fields the graph needs are typed; everything else is carried along in the
//! flattened `extra` maps so a document survives a load/save cycle.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use mqviz_error::{Error, Result};

/// Name of the sentinel exchange standing in for the default (nameless) exchange.
///
/// Queues without an explicit binding are bound to it, and it is rendered as a
/// regular exchange node.
pub const DEFAULT_EXCHANGE: &str = "NULL";

/// A full definitions export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definitions {
    pub queues: Vec<Queue>,
    pub exchanges: Vec<Exchange>,
    pub bindings: Vec<Binding>,
    /// Top-level keys the graph does not use (`vhosts`, `users`, `policies`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Queue {
    pub name: String,
    pub vhost: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub name: String,
    pub vhost: String,
    /// Free-form exchange type label (direct, topic, fanout, headers, ...).
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub durable: bool,
    #[serde(default)]
    pub internal: bool,
    #[serde(default)]
    pub auto_delete: bool,
    #[serde(default)]
    pub arguments: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Exchange {
    /// Placeholder for an exchange that bindings refer to but the export omits.
    pub fn implicit(name: impl Into<String>, vhost: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vhost: vhost.into(),
            kind: "direct".to_string(),
            durable: true,
            internal: true,
            auto_delete: false,
            arguments: Map::new(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    pub vhost: String,
    /// Source exchange name, or [`DEFAULT_EXCHANGE`].
    pub source: String,
    pub destination: String,
    pub destination_type: DestinationType,
    pub routing_key: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl Binding {
    /// The binding every queue implicitly has on the default exchange,
    /// routed by the queue's own name.
    pub fn default_for(queue: &Queue) -> Self {
        Self {
            vhost: queue.vhost.clone(),
            source: DEFAULT_EXCHANGE.to_string(),
            destination: queue.name.clone(),
            destination_type: DestinationType::Queue,
            routing_key: queue.name.clone(),
            arguments: Map::new(),
        }
    }
}

/// What a binding's `destination` names.
///
/// Unrecognized values are kept verbatim and treated like queues when
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DestinationType {
    Queue,
    Exchange,
    Other(String),
}

impl DestinationType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Queue => "queue",
            Self::Exchange => "exchange",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_exchange(&self) -> bool {
        matches!(self, Self::Exchange)
    }
}

impl From<String> for DestinationType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "queue" => Self::Queue,
            "exchange" => Self::Exchange,
            _ => Self::Other(raw),
        }
    }
}

impl From<DestinationType> for String {
    fn from(kind: DestinationType) -> Self {
        match kind {
            DestinationType::Other(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl Definitions {
    /// Parse a definitions export from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|err| {
            Error::deserialization_failed(err.to_string())
                .with_operation("topology::from_json")
                .with_context("line", err.line().to_string())
                .with_context("column", err.column().to_string())
                .set_source(err)
        })
    }

    /// Distinct virtual hosts referenced by any entity, in first-seen order.
    pub fn vhosts(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.queues
            .iter()
            .map(|q| q.vhost.as_str())
            .chain(self.exchanges.iter().map(|x| x.vhost.as_str()))
            .chain(self.bindings.iter().map(|b| b.vhost.as_str()))
            .filter(|vhost| seen.insert(*vhost))
            .collect()
    }

    /// Whether any queue, exchange or binding lives in `vhost`.
    pub fn has_vhost(&self, vhost: &str) -> bool {
        self.queues.iter().any(|q| q.vhost == vhost)
            || self.exchanges.iter().any(|x| x.vhost == vhost)
            || self.bindings.iter().any(|b| b.vhost == vhost)
    }
}
