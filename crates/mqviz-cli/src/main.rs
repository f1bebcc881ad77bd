use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use mqviz::input::read_definitions;
use mqviz::output::write_output;
use mqviz::{GraphOptions, MqvizOptions, run_main};
use mqviz_error::Result;

#[derive(Parser, Debug)]
#[command(
    name = "mqviz",
    about = "mqviz: draw broker queues, exchanges and bindings as a Graphviz digraph",
    version
)]
pub struct Cli {
    /// Definitions file (defaults to stdin)
    #[arg(short = 'd', long, value_name = "FILE")]
    definitions: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short = 'o', long, value_name = "FILE")]
    outfile: Option<PathBuf>,

    #[command(flatten)]
    graph: GraphOptions,

    /// List the vhosts in the definitions instead of rendering
    #[arg(long)]
    list_vhosts: bool,
}

pub fn run(args: Cli) -> Result<()> {
    let total_start = Instant::now();

    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = MqvizOptions {
        render: (&args.graph).into(),
        list_vhosts: args.list_vhosts,
    };

    let input = read_definitions(args.definitions.as_deref())?;
    let output = run_main(&opts, &input).inspect_err(|e| {
        tracing::error!(error = %e, "transformation failed");
    })?;
    write_output(args.outfile.as_deref(), &output)?;

    let total_secs = total_start.elapsed().as_secs_f64();
    tracing::info!(total_secs, "complete");
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
