/// Crate-wide error type
///
/// Every fallible operation outside of tests returns `ShowcaseError` (or a
/// domain error that converts into it via `#[from]`). Expected conditions
/// such as a bounded wait that elapses or a fetch skipped on a non-success
/// status are modeled as values, not errors.

use crate::domain::parse::ParseError;
use crate::domain::validation::ArgumentError;

/// Errors surfaced by the demo suite
#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    /// A required argument was absent or empty
    #[error("argument error: {0}")]
    Argument(#[from] ArgumentError),

    /// A demo name given on the command line does not exist
    #[error("unknown demo: {0}")]
    UnknownDemo(String),

    /// Text input could not be parsed into a domain value
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Filesystem error while writing the download cache
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level HTTP failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}
