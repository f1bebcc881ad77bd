//! # mqviz-error
//!
//! Unified error handling for mqviz.
//!
//! - **ErrorKind**: what went wrong (e.g. DeserializationFailed, IoFailed)
//! - **Error Context**: operation name plus key/value pairs to locate the cause
//! - **Error Source**: the underlying error, boxed so raw types do not leak
//!
//! ## Usage
//!
//! ```rust
//! use mqviz_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::DeserializationFailed, "missing field `vhost`")
//!         .with_operation("topology::load")
//!         .with_context("line", "42"))
//! }
//! ```

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using mqviz Error
pub type Result<T> = std::result::Result<T, Error>;
