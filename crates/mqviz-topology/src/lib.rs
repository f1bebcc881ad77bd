//! Broker topology model and normalization.
//!
//! This crate deserializes a broker definitions export (queues, exchanges and
//! bindings grouped by virtual host) and fills in the entities the broker
//! leaves implicit, so every queue is reachable and every binding starts at a
//! visible exchange.
//!
//! # Module Structure
//!
//! - [`model`]: Definitions document and entity types
//! - [`normalize`]: Implicit binding and exchange synthesis

pub mod model;
pub mod normalize;

pub use model::{Binding, DEFAULT_EXCHANGE, Definitions, DestinationType, Exchange, Queue};
pub use normalize::{normalize, with_default_bindings, with_implicit_exchanges};
