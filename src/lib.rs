//! A minimal HTTP/1.1 file server and raw-socket client.
//!
//! This library backs two small executables: a server that serves files from
//! its working directory over a narrow subset of HTTP/1.1, and a client that
//! writes one hand-built request and copies the raw response to its output.
//!
//! # Features
//!
//! - Parse HTTP request lines into method, path, and version
//! - Serve files with one independent task per connection
//! - `404 Not Found` responses backed by an optional error page
//! - `405 Method Not Allowed` for everything that is not a GET
//! - Raw client with no response parsing, timeouts, or retries
//!
//! # Examples
//!
//! ## Parsing a request line
//!
//! ```
//! use tinyserve::{parse_request_line, Method};
//!
//! let line = parse_request_line("GET /index.html HTTP/1.1").unwrap();
//! assert_eq!(line.method, Method::GET);
//! assert_eq!(line.path, "/index.html");
//! ```
//!
//! ## Running the server
//!
//! ```no_run
//! use tinyserve::{FileServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tinyserve::ServerError> {
//!     let server = FileServer::new(ServerConfig::default());
//!     server.run().await
//! }
//! ```

// Export the parser module
pub mod parser;

// Export the server module
pub mod server;

// Export the client module
pub mod client;

// Re-export commonly used items for convenience
pub use parser::{Error as ParserError, Method, RequestLine, parse_request_line};
pub use server::{Error as ServerError, FileServer, ResponseHead, ServerConfig, StatusCode};
pub use client::Error as ClientError;
