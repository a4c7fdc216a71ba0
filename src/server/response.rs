//! HTTP response head construction.

/// HTTP status codes used by the file server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    NotFound = 404,
    MethodNotAllowed = 405,
}

impl StatusCode {
    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

/// The status line and headers of an HTTP response.
///
/// Bodies are streamed straight from their source file and never pass
/// through this type. Headers are kept in insertion order, which is the
/// order they appear on the wire.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    /// The HTTP status code
    pub status: StatusCode,
    /// The response headers, in wire order
    pub headers: Vec<(String, String)>,
}

impl ResponseHead {
    /// Create a new response head with the given status code and no headers.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
        }
    }

    /// Append a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Append the content type header.
    pub fn with_content_type(self, content_type: impl Into<String>) -> Self {
        self.with_header("Content-Type", content_type)
    }

    /// Append the content length header.
    pub fn with_content_length(self, len: u64) -> Self {
        self.with_header("Content-Length", len.to_string())
    }

    /// Convert the response head to bytes, including the blank line that
    /// separates headers from the body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        // Add the status line
        let status_line = format!(
            "HTTP/1.1 {} {}\r\n",
            self.status as u16,
            self.status.reason_phrase()
        );
        bytes.extend_from_slice(status_line.as_bytes());

        // Add the headers
        for (name, value) in &self.headers {
            let header_line = format!("{name}: {value}\r\n");
            bytes.extend_from_slice(header_line.as_bytes());
        }

        // Add the empty line that separates headers from body
        bytes.extend_from_slice(b"\r\n");

        bytes
    }
}
