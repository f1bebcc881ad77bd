//! Writing the rendered graph.

use std::io::Write;
use std::path::Path;

use tracing::info;

use mqviz_error::{Error, Result};

/// Write `output` to `path`, or stdout when `None`.
pub fn write_output(path: Option<&Path>, output: &str) -> Result<()> {
    let result = match path {
        Some(path) => std::fs::write(path, output),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
        }
    };

    result.map_err(|err| {
        let target = path.map_or_else(|| "<stdout>".to_string(), |p| p.display().to_string());
        Error::from(err)
            .with_operation("output::write_output")
            .with_context("path", target)
    })?;

    if let Some(path) = path {
        info!(path = %path.display(), "output written");
    }
    Ok(())
}
