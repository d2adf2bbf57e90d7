use crate::error::RequestError;
use crate::headers::HeaderMap;
use crate::origin::Origin;
use crate::util::is_http_token;
use url::Url;

/// Whether the request will be sent with credentials (cookies, client
/// certificates, Authorization state) attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorsMode {
    #[default]
    Anonymous,
    UseCredentials,
}

impl CorsMode {
    pub fn is_credentialed(self) -> bool {
        matches!(self, CorsMode::UseCredentials)
    }
}

/// A normalized, immutable view of an outgoing request.
///
/// Construction validates the method token and URL and derives the origin, so
/// everything downstream (classification, preflight construction, checks) is
/// total and infallible.
#[derive(Debug, Clone)]
pub struct Request {
    method: String,
    url: Url,
    origin: Origin,
    headers: HeaderMap,
    mode: CorsMode,
}

impl Request {
    pub fn new<M>(
        method: M,
        url: &str,
        headers: HeaderMap,
        mode: CorsMode,
    ) -> Result<Self, RequestError>
    where
        M: Into<String>,
    {
        let method = method.into();
        if !is_http_token(&method) {
            return Err(RequestError::InvalidMethod(method));
        }
        let url = Url::parse(url)?;
        let origin = Origin::from_url(&url)?;
        Ok(Self {
            method,
            url,
            origin,
            headers,
            mode,
        })
    }

    /// Internal constructor for requests the engine assembles itself from
    /// already-validated parts.
    pub(crate) fn from_parts(
        method: String,
        url: Url,
        origin: Origin,
        headers: HeaderMap,
        mode: CorsMode,
    ) -> Self {
        Self {
            method,
            url,
            origin,
            headers,
            mode,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn mode(&self) -> CorsMode {
        self.mode
    }

    pub fn is_same_origin(&self, target: &Origin) -> bool {
        self.origin.same_origin(target)
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
