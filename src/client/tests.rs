//! Tests for the raw client.

#[cfg(test)]
mod client_tests {
    use std::path::PathBuf;
    use tokio::net::TcpListener;

    use crate::client::{self, Error};
    use crate::parser::Method;
    use crate::server::{FileServer, ServerConfig};

    fn test_file(name: &str, contents: &[u8]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tinyserve-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    // Accept one connection and run the file server handler on it.
    async fn serve_one(config: ServerConfig) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let _ = FileServer::handle_connection(&mut socket, &config).await;
        });
        addr.to_string()
    }

    #[test]
    fn test_build_request_text() {
        let request = client::build_request(&Method::GET, "/hello.html", "localhost:8080");
        assert_eq!(
            request,
            "GET /hello.html HTTP/1.1\r\nHOST: localhost:8080\r\n\r\n"
        );
    }

    #[test]
    fn test_build_request_with_unknown_method() {
        let request = client::build_request(&Method::from("BREW"), "/pot", "localhost:8080");
        assert_eq!(request, "BREW /pot HTTP/1.1\r\nHOST: localhost:8080\r\n\r\n");
    }

    #[tokio::test]
    async fn test_fetch_round_trip() {
        // hello.html = "hi", requested by name through the real socket path
        let path = test_file("fetch-hello.html", b"hi");
        let host_port = serve_one(ServerConfig::default()).await;

        let mut out = Vec::new();
        client::fetch(
            &host_port,
            &Method::GET,
            &format!("/{}", path.display()),
            &mut out,
        )
        .await
        .unwrap();

        assert_eq!(
            out,
            b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 2\r\n\r\nhi"
        );
    }

    #[tokio::test]
    async fn test_fetch_root_serves_index_page() {
        let path = test_file("fetch-index.html", b"<p>index</p>");
        let mut config = ServerConfig::default();
        config.index_page = path.display().to_string();
        let host_port = serve_one(config).await;

        let mut out = Vec::new();
        client::fetch(&host_port, &Method::GET, "/", &mut out)
            .await
            .unwrap();

        assert_eq!(
            out,
            b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 12\r\n\r\n<p>index</p>"
        );
    }

    #[tokio::test]
    async fn test_fetch_with_post_gets_405() {
        let host_port = serve_one(ServerConfig::default()).await;

        let mut out = Vec::new();
        client::fetch(&host_port, &Method::POST, "/anything", &mut out)
            .await
            .unwrap();

        assert_eq!(out, b"HTTP/1.1 405 Method Not Allowed\r\n\r\n");
    }

    #[tokio::test]
    async fn test_fetch_connect_failure() {
        // Bind and drop a listener so the port is (almost certainly) closed
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut out = Vec::new();
        let result = client::fetch(&addr.to_string(), &Method::GET, "/", &mut out).await;

        assert!(matches!(result, Err(Error::Connect(_, _))));
        assert!(out.is_empty());
    }
}
