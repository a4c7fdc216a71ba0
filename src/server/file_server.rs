//! Connection accept loop and request handling.

use log::{debug, error, info, warn};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

use crate::parser::{Method, parse_request_line};
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::response::{ResponseHead, StatusCode};

/// A minimal HTTP/1.1 file server.
///
/// Files are served from the process working directory. Each accepted
/// connection is handled on its own task: one request, at most one
/// response, then the connection closes. Tasks share no state.
pub struct FileServer {
    /// The server configuration.
    pub config: ServerConfig,
}

impl FileServer {
    /// Create a new file server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Bind the listening address and accept connections until the process
    /// exits.
    ///
    /// Returns an error only if the bind fails. Accept errors are logged
    /// and the loop continues; the loop never waits for a handler to
    /// finish.
    pub async fn run(&self) -> Result<(), Error> {
        let listener = TcpListener::bind(self.config.addr).await?;
        info!("Listening on http://{addr}", addr = self.config.addr);

        loop {
            match listener.accept().await {
                Ok((mut socket, addr)) => {
                    debug!("Accepted connection from {addr}");
                    let config = self.config.clone();
                    tokio::spawn(async move {
                        if let Err(e) = Self::handle_connection(&mut socket, &config).await {
                            warn!("Connection from {addr} aborted: {e}");
                        }
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {e}");
                }
            }
        }
    }

    /// Handle a single connection.
    ///
    /// Reads the request line, discards the header block, and dispatches on
    /// the method. An error return means the request was aborted; for
    /// malformed request lines and read failures nothing has been written
    /// to the socket. The caller closes the connection by dropping it.
    ///
    /// The request path is looked up relative to the working directory after
    /// removing one leading `/`. Nothing rejects `..` segments or absolute
    /// paths, so the server can be walked out of its directory.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        config: &ServerConfig,
    ) -> Result<(), Error> {
        let mut reader = BufReader::new(socket);

        // Read the request line
        let mut line = String::new();
        if reader.read_line(&mut line).await? == 0 {
            // Peer closed the connection before sending anything
            return Ok(());
        }

        let request = parse_request_line(line.trim())?;

        // Read and discard header lines until the empty line that ends them
        loop {
            line.clear();
            if reader.read_line(&mut line).await? == 0 {
                return Err(Error::IoError(std::io::ErrorKind::UnexpectedEof.into()));
            }
            if line.trim().is_empty() {
                break;
            }
        }

        let socket = reader.get_mut();

        // Only GET is served
        if request.method != Method::GET {
            let head = ResponseHead::new(StatusCode::MethodNotAllowed);
            socket.write_all(&head.to_bytes()).await?;
            return Ok(());
        }

        // `/` maps to the index page; any other path becomes a file name by
        // dropping its leading slash
        let file_name = if request.path == "/" {
            config.index_page.clone()
        } else {
            request
                .path
                .strip_prefix('/')
                .unwrap_or(request.path.as_str())
                .to_string()
        };

        match File::open(&file_name).await {
            Ok(file) => Self::send_file(socket, file, StatusCode::Ok, config.chunk_size).await,
            Err(e) => {
                debug!("Open failed for {file_name}: {e}");
                Self::send_not_found(socket, config).await
            }
        }
    }

    /// Send a `404 Not Found` response.
    ///
    /// Streams the configured error page when it exists; otherwise the
    /// response is a bare status line with no headers and no body.
    async fn send_not_found(
        socket: &mut (impl AsyncWrite + Unpin),
        config: &ServerConfig,
    ) -> Result<(), Error> {
        match File::open(&config.not_found_page).await {
            Ok(file) => Self::send_file(socket, file, StatusCode::NotFound, config.chunk_size).await,
            Err(_) => {
                let head = ResponseHead::new(StatusCode::NotFound);
                socket.write_all(&head.to_bytes()).await?;
                Ok(())
            }
        }
    }

    /// Write a full response whose body is the file's bytes.
    ///
    /// The content length comes from file metadata and the body is copied
    /// in fixed-size chunks. A file read error ends the body early; there
    /// is no retry, so the peer sees a short response.
    async fn send_file(
        socket: &mut (impl AsyncWrite + Unpin),
        mut file: File,
        status: StatusCode,
        chunk_size: usize,
    ) -> Result<(), Error> {
        let len = file.metadata().await?.len();

        let head = ResponseHead::new(status)
            .with_content_type("text/html")
            .with_content_length(len);
        socket.write_all(&head.to_bytes()).await?;

        let mut buf = vec![0; chunk_size];
        loop {
            let n = match file.read(&mut buf).await {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => {
                    warn!("Read failed while streaming response body: {e}");
                    break;
                }
            };
            socket.write_all(&buf[..n]).await?;
        }

        Ok(())
    }
}
