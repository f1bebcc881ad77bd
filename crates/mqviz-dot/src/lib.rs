//! Graph rendering for producing DOT format output.
//!
//! Turns a normalized broker topology into a Graphviz digraph. Only one
//! virtual host is drawn per graph. Queues, exchanges and bindings become
//! clusters, nodes and labeled edges.
//!
//! # Module Structure
//!
//! - [`dot`]: DOT format utilities, node identifiers and escaping
//! - [`topology`]: Per-entity fragments (queue, exchange, binding)

mod dot;
mod topology;

use tracing::{debug, warn};

use mqviz_topology::Definitions;

pub use dot::{DotBuilder, NodeKind, escape_id, escape_label};

/// Virtual host rendered when none is requested.
pub const DEFAULT_VHOST: &str = "/";

// ============================================================================
// Render Options
// ============================================================================

/// Options for graph rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Virtual host to draw; entities are selected by exact match.
    pub vhost: String,
    /// Draw a producer node feeding each exchange.
    pub producers: bool,
    /// Draw a consumer node reading from each queue.
    pub consumers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            vhost: DEFAULT_VHOST.to_string(),
            producers: false,
            consumers: false,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vhost(mut self, vhost: impl Into<String>) -> Self {
        self.vhost = vhost.into();
        self
    }

    pub fn with_producers(mut self, producers: bool) -> Self {
        self.producers = producers;
        self
    }

    pub fn with_consumers(mut self, consumers: bool) -> Self {
        self.consumers = consumers;
        self
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Render one virtual host of a normalized topology to DOT.
///
/// Fragments are emitted in document order: all queues, then all exchanges,
/// then all bindings. Normalization must already have run over the whole
/// document; this function does not synthesize anything.
pub fn render_definitions(definitions: &Definitions, options: &RenderOptions) -> String {
    let vhost = options.vhost.as_str();
    if !definitions.has_vhost(vhost) {
        warn!(vhost, "no queues, exchanges or bindings in vhost");
    }

    let mut dot = DotBuilder::new();
    dot.attr("bgcolor", "transparent")
        .attr("truecolor", "true")
        .attr("rankdir", "LR")
        .node_style("style=\"filled\"")
        .blank();

    let queues: Vec<_> = definitions
        .queues
        .iter()
        .filter(|q| q.vhost == vhost)
        .collect();
    let exchanges: Vec<_> = definitions
        .exchanges
        .iter()
        .filter(|x| x.vhost == vhost)
        .collect();
    let bindings: Vec<_> = definitions
        .bindings
        .iter()
        .filter(|b| b.vhost == vhost)
        .collect();

    for queue in &queues {
        topology::render_queue(&mut dot, queue, options.consumers);
    }
    for exchange in &exchanges {
        topology::render_exchange(&mut dot, exchange, options.producers);
    }
    for binding in &bindings {
        topology::render_binding(&mut dot, binding);
    }

    debug!(
        vhost,
        queues = queues.len(),
        exchanges = exchanges.len(),
        bindings = bindings.len(),
        "rendered topology"
    );

    dot.build()
}
