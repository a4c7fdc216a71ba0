//! HTTP request methods.

use std::fmt;
use std::str::FromStr;

/// HTTP request methods as they appear in the request line.
///
/// Only `GET` is ever served; every other method is answered with
/// `405 Method Not Allowed`. Tokens outside the well-known set are kept
/// verbatim in [`Method::Other`] so the dispatch decision happens in one
/// place instead of failing at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
    /// Any method token outside the well-known set, kept as-is.
    Other(String),
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other => Method::Other(other.to_string()),
        }
    }
}

// Every token is a valid method, so FromStr cannot fail.
impl FromStr for Method {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Method::from(s))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Other(token) => write!(f, "{token}"),
            _ => write!(f, "{self:?}"),
        }
    }
}
