//! Client executable with an explicit method.
//!
//! `tinyreq <method> <host:port> <path>` sends the given method token
//! verbatim and prints the raw response to stdout.

use log::error;
use tinyserve::client;
use tinyserve::Method;

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        println!("Usage: tinyreq <method> <host:port> <path>");
        return;
    }

    let method = Method::from(args[1].as_str());
    let mut stdout = tokio::io::stdout();
    if let Err(e) = client::fetch(&args[2], &method, &args[3], &mut stdout).await {
        error!("{e}");
    }
}
