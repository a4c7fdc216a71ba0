//! Error types for the file server.

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Errors that can occur while handling a connection.
///
/// All of them are connection-local: the task handling the connection logs
/// the error and the connection closes. Nothing propagates further, except
/// the bind failure surfaced by [`crate::server::FileServer::run`].
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing the request line.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
