//! mqviz command-line interface.
//!
pub mod input;
pub mod options;
pub mod output;
pub mod pipeline;

use mqviz_dot::RenderOptions;
use mqviz_error::Result;

pub use options::GraphOptions;
pub use pipeline::process_definitions;

/// Options for running mqviz.
#[derive(Debug, Clone, Default)]
pub struct MqvizOptions {
    pub render: RenderOptions,
    /// Print the vhosts found in the document instead of a graph.
    pub list_vhosts: bool,
}

/// Main entry point: definitions JSON in, DOT (or vhost list) out.
pub fn run_main(opts: &MqvizOptions, input: &str) -> Result<String> {
    process_definitions(opts, input)
}
