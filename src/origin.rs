use crate::error::RequestError;
use std::fmt;
use url::Url;

/// A request origin: the `(scheme, host, port)` triple of the CORS protocol.
///
/// Scheme and host are stored lower-cased and the port is dropped when it
/// equals the scheme default, so derived equality is exactly the same-origin
/// comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl Origin {
    pub fn new<S, H>(scheme: S, host: H, port: Option<u16>) -> Self
    where
        S: Into<String>,
        H: Into<String>,
    {
        let scheme = scheme.into().to_ascii_lowercase();
        let host = host.into().to_ascii_lowercase();
        let port = port.filter(|value| Some(*value) != default_port(&scheme));
        Self { scheme, host, port }
    }

    pub fn from_url(url: &Url) -> Result<Self, RequestError> {
        let host = url
            .host_str()
            .ok_or_else(|| RequestError::MissingHost(url.to_string()))?;
        Ok(Self::new(url.scheme(), host, url.port()))
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// The explicit port, `None` when the scheme default applies.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn same_origin(&self, other: &Origin) -> bool {
        self == other
    }

    /// The ASCII serialization used for the `Origin` header and compared
    /// against `Access-Control-Allow-Origin`.
    pub fn ascii_serialization(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" | "ws" => Some(80),
        "https" | "wss" => Some(443),
        "ftp" => Some(21),
        _ => None,
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
