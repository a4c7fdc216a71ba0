//! HTTP request-line parsing and representation.

use crate::parser::error::Error;
use crate::parser::method::Method;

/// Represents the request line of an HTTP request.
///
/// This is the only part of a request the server retains; the header block
/// that follows it is read and discarded.
#[derive(Debug, Clone)]
pub struct RequestLine {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path
    pub path: String,
    /// The HTTP version token, kept verbatim and otherwise ignored
    pub version: String,
}

/// Parse an HTTP request line.
///
/// # Arguments
///
/// * `line` - The request line, without its terminating newline
///
/// # Returns
///
/// The parsed request line, or an error if it has fewer than three
/// whitespace-separated tokens. Tokens beyond the third are ignored.
pub fn parse_request_line(line: &str) -> Result<RequestLine, Error> {
    // Split the request line into method, path, and version
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(Error::MalformedRequestLine(line.to_string()));
    }

    Ok(RequestLine {
        method: Method::from(parts[0]),
        path: parts[1].to_string(),
        version: parts[2].to_string(),
    })
}
