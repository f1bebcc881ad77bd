//! Per-entity DOT fragments.

use mqviz_topology::{Binding, Exchange, Queue};

use super::dot::{DotBuilder, NodeKind};

const QUEUE_FILL: &str = "red";
const EXCHANGE_FILL: &str = "#3333CC";
const PRODUCER_FILL: &str = "#00ffff";
const CONSUMER_FILL: &str = "#33ccff";

/// A queue cluster holding a record-shaped node; optionally a consumer
/// reading from it.
pub fn render_queue(dot: &mut DotBuilder, queue: &Queue, consumers: bool) {
    let queue_id = NodeKind::Queue.id(&queue.name);

    dot.start_cluster(&queue_id, &queue.name)
        .attr("color", "transparent")
        .node_full(
            &queue_id,
            &[
                ("label", "{||||}"),
                ("fillcolor", QUEUE_FILL),
                ("shape", "record"),
            ],
        )
        .end_cluster();

    if consumers {
        let consumer_id = NodeKind::Consumer.id(&queue.name);
        dot.node_full(&consumer_id, &[("label", "C"), ("fillcolor", CONSUMER_FILL)])
            .edge(&queue_id, &consumer_id);
    }
}

/// An exchange cluster labeled with name and type; optionally a producer
/// publishing into it.
pub fn render_exchange(dot: &mut DotBuilder, exchange: &Exchange, producers: bool) {
    let exchange_id = NodeKind::Exchange.id(&exchange.name);
    let label = format!("{}\ntype={}", exchange.name, exchange.kind);

    dot.start_cluster(&exchange_id, &label)
        .attr("color", "transparent")
        .node_full(
            &exchange_id,
            &[
                ("label", "X"),
                ("fillcolor", EXCHANGE_FILL),
                ("shape", "ellipse"),
            ],
        )
        .end_cluster();

    if producers {
        let producer_id = NodeKind::Producer.id(&exchange.name);
        dot.node_full(
            &producer_id,
            &[
                ("label", "P"),
                ("style", "filled"),
                ("fillcolor", PRODUCER_FILL),
            ],
        )
        .edge(&producer_id, &exchange_id);
    }
}

/// A routing-key labeled edge from the source exchange to its destination.
pub fn render_binding(dot: &mut DotBuilder, binding: &Binding) {
    let target = if binding.destination_type.is_exchange() {
        NodeKind::Exchange
    } else {
        NodeKind::Queue
    };
    dot.edge_with_attrs(
        &NodeKind::Exchange.id(&binding.source),
        &target.id(&binding.destination),
        &[("label", binding.routing_key.as_str())],
    );
}
