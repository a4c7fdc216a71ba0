//! File server executable.
//!
//! Takes no arguments: serves the working directory on port 8080 until the
//! process is killed. Only a bind failure ends it from the inside.

use log::error;
use tinyserve::{FileServer, ServerConfig};

#[tokio::main]
async fn main() {
    env_logger::init();

    let server = FileServer::new(ServerConfig::default());
    if let Err(e) = server.run().await {
        error!("Server failed to start: {e}");
        std::process::exit(1);
    }
}
