//! Graph options shared by the command line.

use clap::Args;

use mqviz_dot::{DEFAULT_VHOST, RenderOptions};

/// What part of the topology to draw and how.
#[derive(Args, Debug, Clone)]
pub struct GraphOptions {
    /// Render producers
    #[arg(short = 'p', long)]
    pub producers: bool,

    /// Render consumers
    #[arg(short = 'c', long)]
    pub consumers: bool,

    /// Restrict to this vhost
    #[arg(short = 'x', long, value_name = "VHOST", default_value = DEFAULT_VHOST)]
    pub vhost: String,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            producers: false,
            consumers: false,
            vhost: DEFAULT_VHOST.to_string(),
        }
    }
}

impl From<&GraphOptions> for RenderOptions {
    fn from(opts: &GraphOptions) -> Self {
        RenderOptions::new()
            .with_vhost(opts.vhost.clone())
            .with_producers(opts.producers)
            .with_consumers(opts.consumers)
    }
}
