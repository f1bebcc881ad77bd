//! Core processing pipeline: parse → normalize → render.

use std::time::Instant;

use tracing::info;

use mqviz_dot::render_definitions;
use mqviz_error::Result;
use mqviz_topology::{Definitions, normalize};

use crate::MqvizOptions;

/// Run the full transformation over one definitions document.
///
/// 1. Parse the JSON export
/// 2. Normalize across every vhost
/// 3. Render the requested vhost (or list vhosts)
pub fn process_definitions(opts: &MqvizOptions, input: &str) -> Result<String> {
    let parse_start = Instant::now();
    let definitions = Definitions::from_json(input)?;
    info!(
        queues = definitions.queues.len(),
        exchanges = definitions.exchanges.len(),
        bindings = definitions.bindings.len(),
        "Parsing: {:.3}s",
        parse_start.elapsed().as_secs_f64()
    );

    let normalize_start = Instant::now();
    let definitions = normalize(definitions);
    info!(
        exchanges = definitions.exchanges.len(),
        bindings = definitions.bindings.len(),
        "Normalization: {:.3}s",
        normalize_start.elapsed().as_secs_f64()
    );

    if opts.list_vhosts {
        return Ok(definitions
            .vhosts()
            .iter()
            .map(|vhost| format!("{vhost}\n"))
            .collect());
    }

    let render_start = Instant::now();
    let output = render_definitions(&definitions, &opts.render);
    info!(
        "Graph rendering: {:.3}s",
        render_start.elapsed().as_secs_f64()
    );
    Ok(output)
}
