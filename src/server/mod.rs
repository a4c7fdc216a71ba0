//! Static file server implementation.
//!
//! This module provides a minimal HTTP/1.1 file server that handles each
//! accepted connection on its own task, with no state shared between
//! connections.

mod response;
mod config;
mod error;
mod file_server;


// Re-export public items
pub use response::{ResponseHead, StatusCode};
pub use config::ServerConfig;
pub use error::Error;
pub use file_server::FileServer;
