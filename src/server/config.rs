//! Server configuration.

use std::net::SocketAddr;

/// File server configuration.
///
/// The defaults reproduce the server's fixed behavior: port 8080, the
/// `helloworld.html` index page, the `notfound.html` error page, and
/// 1024-byte copy chunks. File names are resolved against the process
/// working directory.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The address to bind to.
    pub addr: SocketAddr,
    /// The file served when the request path is exactly `/`.
    pub index_page: String,
    /// The file streamed as the body of 404 responses, when it exists.
    pub not_found_page: String,
    /// Size of the buffer used to copy file bytes to the socket.
    pub chunk_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".parse().unwrap(),
            index_page: "helloworld.html".to_string(),
            not_found_page: "notfound.html".to_string(),
            chunk_size: 1024,
        }
    }
}
