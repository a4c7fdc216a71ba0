//! Raw-socket HTTP client.
//!
//! A single linear procedure: connect, write one hand-built request, then
//! copy response lines to the output until the peer closes the connection.
//! The response is never parsed and there are no timeouts or retries.

mod error;

mod tests;

pub use error::Error;

use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::parser::Method;

/// Build the request text sent on the wire.
///
/// The `HOST` header casing is kept as-is; header names are
/// case-insensitive on the receiving side.
pub fn build_request(method: &Method, path: &str, host_port: &str) -> String {
    format!("{method} {path} HTTP/1.1\r\nHOST: {host_port}\r\n\r\n")
}

/// Perform one request against `host_port` and copy the raw response to
/// `out`.
///
/// # Arguments
///
/// * `host_port` - The `host:port` string to connect to
/// * `method` - The method token placed in the request line
/// * `path` - The request path, sent verbatim
/// * `out` - Destination for the response, written line by line
///
/// # Returns
///
/// `Ok(())` once the peer closes the connection or a socket read fails;
/// response read errors end the copy loop rather than surfacing. Connect
/// and write failures are returned.
pub async fn fetch(
    host_port: &str,
    method: &Method,
    path: &str,
    out: &mut (impl AsyncWrite + Unpin),
) -> Result<(), Error> {
    let stream = TcpStream::connect(host_port)
        .await
        .map_err(|e| Error::Connect(host_port.to_string(), e))?;
    let mut reader = BufReader::new(stream);

    // Send the request in one write
    let request = build_request(method, path, host_port);
    reader
        .get_mut()
        .write_all(request.as_bytes())
        .await
        .map_err(Error::SendRequest)?;

    // Copy response lines verbatim until the peer closes the connection
    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) | Err(_) => break,
            Ok(_) => out.write_all(line.as_bytes()).await.map_err(Error::Output)?,
        }
    }
    out.flush().await.map_err(Error::Output)?;

    Ok(())
}
