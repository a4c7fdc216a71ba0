//! Client executable, GET only.
//!
//! `tinyget <host:port> <path>` performs a single GET request and prints
//! the raw response to stdout.

use log::error;
use tinyserve::client;
use tinyserve::Method;

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: tinyget <host:port> <path>");
        return;
    }

    let mut stdout = tokio::io::stdout();
    if let Err(e) = client::fetch(&args[1], &Method::GET, &args[2], &mut stdout).await {
        error!("{e}");
    }
}
