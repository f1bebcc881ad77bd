//! Implicit binding and exchange synthesis.
//!
//! A broker export only lists what was declared explicitly. Two things are
//! implicit and have to be derived before the topology can be drawn:
//!
//! 1. every queue is reachable through the default exchange under its own
//!    name, unless some binding already targets it;
//! 2. every binding needs a source exchange node, even the nameless one.
//!
//! Pass 2 runs over the bindings pass 1 created, so the order is fixed.
//! Both passes only append; existing entities are never touched.

use std::collections::HashSet;

use tracing::debug;

use crate::model::{Binding, Definitions, Exchange};

/// Derive all implicit entities for the whole document (every vhost).
pub fn normalize(definitions: Definitions) -> Definitions {
    with_implicit_exchanges(with_default_bindings(definitions))
}

/// Add a default-exchange binding for each queue nothing routes to.
///
/// A queue counts as bound when a binding in the same vhost names it as
/// destination.
pub fn with_default_bindings(mut definitions: Definitions) -> Definitions {
    let missing: Vec<Binding> = {
        let bound: HashSet<(&str, &str)> = definitions
            .bindings
            .iter()
            .map(|b| (b.destination.as_str(), b.vhost.as_str()))
            .collect();

        definitions
            .queues
            .iter()
            .filter(|q| !bound.contains(&(q.name.as_str(), q.vhost.as_str())))
            .map(Binding::default_for)
            .collect()
    };

    for binding in &missing {
        debug!(
            queue = %binding.destination,
            vhost = %binding.vhost,
            "synthesized default binding"
        );
    }
    definitions.bindings.extend(missing);
    definitions
}

/// Add a placeholder exchange for each binding source that is not declared
/// in the binding's vhost.
pub fn with_implicit_exchanges(mut definitions: Definitions) -> Definitions {
    let mut known: HashSet<(String, String)> = definitions
        .exchanges
        .iter()
        .map(|x| (x.name.clone(), x.vhost.clone()))
        .collect();

    let mut missing = Vec::new();
    for binding in &definitions.bindings {
        let key = (binding.source.clone(), binding.vhost.clone());
        if known.contains(&key) {
            continue;
        }
        debug!(
            exchange = %binding.source,
            vhost = %binding.vhost,
            "synthesized implicit exchange"
        );
        missing.push(Exchange::implicit(&binding.source, &binding.vhost));
        known.insert(key);
    }

    definitions.exchanges.extend(missing);
    definitions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DEFAULT_EXCHANGE, DestinationType, Queue};
    use serde_json::Map;

    fn queue(name: &str, vhost: &str) -> Queue {
        Queue {
            name: name.to_string(),
            vhost: vhost.to_string(),
            extra: Map::new(),
        }
    }

    fn exchange(name: &str, vhost: &str, kind: &str) -> Exchange {
        Exchange {
            kind: kind.to_string(),
            internal: false,
            ..Exchange::implicit(name, vhost)
        }
    }

    fn binding(source: &str, destination: &str, vhost: &str, kind: DestinationType) -> Binding {
        Binding {
            vhost: vhost.to_string(),
            source: source.to_string(),
            destination: destination.to_string(),
            destination_type: kind,
            routing_key: "rk".to_string(),
            arguments: Map::new(),
        }
    }

    fn definitions(
        queues: Vec<Queue>,
        exchanges: Vec<Exchange>,
        bindings: Vec<Binding>,
    ) -> Definitions {
        Definitions {
            queues,
            exchanges,
            bindings,
            extra: Map::new(),
        }
    }

    /// Every queue has a binding and every binding has a source exchange.
    fn assert_complete(defs: &Definitions) {
        for q in &defs.queues {
            assert!(
                defs.bindings
                    .iter()
                    .any(|b| b.destination == q.name && b.vhost == q.vhost),
                "queue {} in {} has no binding",
                q.name,
                q.vhost
            );
        }
        for b in &defs.bindings {
            assert!(
                defs.exchanges
                    .iter()
                    .any(|x| x.name == b.source && x.vhost == b.vhost),
                "binding source {} in {} has no exchange",
                b.source,
                b.vhost
            );
        }
    }

    #[test]
    fn test_unbound_queue_gets_default_binding_and_exchange() {
        let defs = normalize(definitions(vec![queue("q1", "/")], vec![], vec![]));

        assert_eq!(defs.bindings.len(), 1);
        let b = &defs.bindings[0];
        assert_eq!(b.source, DEFAULT_EXCHANGE);
        assert_eq!(b.destination, "q1");
        assert_eq!(b.routing_key, "q1");
        assert_eq!(b.vhost, "/");
        assert_eq!(b.destination_type, DestinationType::Queue);
        assert!(b.arguments.is_empty());

        assert_eq!(
            defs.exchanges,
            vec![Exchange::implicit(DEFAULT_EXCHANGE, "/")]
        );
        assert_complete(&defs);
    }

    #[test]
    fn test_bound_queue_is_left_alone() {
        let input = definitions(
            vec![queue("orders", "/")],
            vec![exchange("events", "/", "topic")],
            vec![binding("events", "orders", "/", DestinationType::Queue)],
        );
        let defs = normalize(input.clone());
        assert_eq!(defs, input);
    }

    #[test]
    fn test_binding_in_other_vhost_does_not_count() {
        let defs = normalize(definitions(
            vec![queue("orders", "/")],
            vec![exchange("events", "/prod", "topic")],
            vec![binding("events", "orders", "/prod", DestinationType::Queue)],
        ));
        assert_eq!(defs.bindings.len(), 2);
        assert_eq!(defs.bindings[1].vhost, "/");
        assert_eq!(defs.bindings[1].source, DEFAULT_EXCHANGE);
        assert_complete(&defs);
    }

    #[test]
    fn test_missing_source_exchange_created_once() {
        let defs = normalize(definitions(
            vec![queue("a", "/"), queue("b", "/")],
            vec![],
            vec![
                binding("events", "a", "/", DestinationType::Queue),
                binding("events", "b", "/", DestinationType::Queue),
            ],
        ));
        assert_eq!(defs.exchanges.len(), 1);
        assert_eq!(defs.exchanges[0].name, "events");
        assert_eq!(defs.exchanges[0].kind, "direct");
        assert_complete(&defs);
    }

    #[test]
    fn test_same_name_exchange_in_other_vhost_still_synthesized() {
        let defs = normalize(definitions(
            vec![],
            vec![exchange("events", "/prod", "fanout")],
            vec![binding("events", "audit", "/", DestinationType::Exchange)],
        ));
        assert_eq!(defs.exchanges.len(), 2);
        assert_eq!(defs.exchanges[1].vhost, "/");
        assert_complete(&defs);
    }

    #[test]
    fn test_default_exchange_synthesized_per_vhost() {
        let defs = normalize(definitions(
            vec![queue("q", "/"), queue("q", "/prod"), queue("r", "/")],
            vec![],
            vec![],
        ));
        assert_eq!(defs.bindings.len(), 3);
        let names: Vec<(&str, &str)> = defs
            .exchanges
            .iter()
            .map(|x| (x.name.as_str(), x.vhost.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![(DEFAULT_EXCHANGE, "/"), (DEFAULT_EXCHANGE, "/prod")]
        );
        assert_complete(&defs);
    }

    #[test]
    fn test_existing_entities_keep_order_and_content() {
        let input = definitions(
            vec![queue("z", "/"), queue("a", "/")],
            vec![exchange("x2", "/", "topic"), exchange("x1", "/", "fanout")],
            vec![binding("x2", "x1", "/", DestinationType::Exchange)],
        );
        let defs = normalize(input.clone());

        assert_eq!(defs.queues, input.queues);
        assert_eq!(defs.exchanges[..2], input.exchanges[..]);
        assert_eq!(defs.bindings[0], input.bindings[0]);
        // Default bindings follow queue order.
        assert_eq!(defs.bindings[1].destination, "z");
        assert_eq!(defs.bindings[2].destination, "a");
        assert_complete(&defs);
    }

    #[test]
    fn test_normalize_is_stable_on_normalized_input() {
        let once = normalize(definitions(
            vec![queue("q1", "/"), queue("q2", "/dev")],
            vec![],
            vec![binding("missing", "q1", "/", DestinationType::Queue)],
        ));
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
    }
}
