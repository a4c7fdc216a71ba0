//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur during request-line parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line has fewer than the three required tokens
    /// (method, path, version).
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),
}
