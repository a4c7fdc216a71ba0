//! Error types for the client.

use thiserror::Error;

/// Errors that can occur during a single client request.
#[derive(Debug, Error)]
pub enum Error {
    /// The TCP connection could not be established.
    #[error("Error connecting to {0}: {1}")]
    Connect(String, #[source] std::io::Error),

    /// The request could not be written to the socket.
    #[error("Error writing request: {0}")]
    SendRequest(#[source] std::io::Error),

    /// The response could not be written to the output.
    #[error("Error writing response: {0}")]
    Output(#[source] std::io::Error),
}
