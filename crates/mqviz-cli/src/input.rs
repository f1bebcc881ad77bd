//! Reading the definitions document.

use std::io::Read;
use std::path::Path;

use tracing::info;

use mqviz_error::{Error, Result};

/// Read the whole definitions document from `path`, or stdin when `None`.
pub fn read_definitions(path: Option<&Path>) -> Result<String> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path).map_err(|err| {
            Error::from(err)
                .with_operation("input::read_definitions")
                .with_context("path", path.display().to_string())
        })?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .lock()
                .read_to_string(&mut text)
                .map_err(|err| {
                    Error::from(err)
                        .with_operation("input::read_definitions")
                        .with_context("path", "<stdin>")
                })?;
            text
        }
    };
    info!(bytes = text.len(), "definitions read");
    Ok(text)
}
