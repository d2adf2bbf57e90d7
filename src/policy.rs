use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::allowed_origins::{AllowedOrigins, OriginGrant};
use crate::constants::header;
use crate::exposed_headers::ExposedHeaders;
use crate::headers::HeaderMap;
use crate::request::Request;
use thiserror::Error;

/// Server-side policy configuration: the allow-lists a deployment decides
/// on, never hard-coded by the engine.
#[derive(Debug, Clone)]
pub struct PolicyOptions {
    pub origins: AllowedOrigins,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    pub max_age: Option<u64>,
}

impl Default for PolicyOptions {
    fn default() -> Self {
        Self {
            origins: AllowedOrigins::Any,
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            credentials: false,
            max_age: None,
        }
    }
}

/// Rejected policy configurations, caught at construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("credentialed policies must name specific origins, not the * wildcard")]
    CredentialsRequireSpecificOrigin,
    #[error("credentialed policies must list methods explicitly, not the * wildcard")]
    CredentialsRequireExplicitMethods,
    #[error("credentialed policies must list allowed headers explicitly, not the * wildcard")]
    CredentialsRequireExplicitHeaders,
    #[error("credentialed policies must list exposed headers explicitly, not the * wildcard")]
    CredentialsRequireExplicitExposeList,
    #[error("allowed header lists may not contain the * wildcard; use AllowedHeaders::Any")]
    AllowedHeadersListCannotContainWildcard,
}

impl PolicyOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let AllowedHeaders::List(values) = &self.allowed_headers
            && values.iter().any(|value| value == "*")
        {
            return Err(ValidationError::AllowedHeadersListCannotContainWildcard);
        }
        if self.credentials {
            if matches!(self.origins, AllowedOrigins::Any) {
                return Err(ValidationError::CredentialsRequireSpecificOrigin);
            }
            if matches!(self.methods, AllowedMethods::Any) {
                return Err(ValidationError::CredentialsRequireExplicitMethods);
            }
            if matches!(self.allowed_headers, AllowedHeaders::Any) {
                return Err(ValidationError::CredentialsRequireExplicitHeaders);
            }
            if matches!(self.exposed_headers, ExposedHeaders::Any) {
                return Err(ValidationError::CredentialsRequireExplicitExposeList);
            }
        }
        Ok(())
    }
}

/// Server-side header generator: mirrors the client rules to compute the
/// response headers a compliant server emits for a given request.
///
/// Both generators are deterministic, side-effect-free mappings; neither
/// mutates its input.
pub struct CorsPolicy {
    options: PolicyOptions,
}

impl CorsPolicy {
    pub fn new(options: PolicyOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &PolicyOptions {
        &self.options
    }

    /// Computes the headers for a preflight response.
    ///
    /// A request without an `Origin` header is not a CORS request and maps
    /// to an empty set; a disallowed origin, method, or header list maps to
    /// the applicable `Vary` bookkeeping alone, which a client-side check
    /// then reports as the concrete rule violation.
    pub fn preflight_response_headers(&self, request: &Request) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let Some(origin) = request.headers().get(header::ORIGIN) else {
            return headers;
        };

        let (origin_headers, origin_allowed) = self.origin_headers(origin);
        headers.extend(origin_headers);
        if !origin_allowed {
            return headers;
        }

        if let Some(requested) = request.headers().get(header::ACCESS_CONTROL_REQUEST_METHOD)
            && !self.options.methods.allows_method(requested)
        {
            tracing::debug!(requested, "preflight requested a disallowed method");
            return headers;
        }
        let requested_headers = request
            .headers()
            .get(header::ACCESS_CONTROL_REQUEST_HEADERS);
        if let Some(requested) = requested_headers
            && !self.options.allowed_headers.allows_headers(requested)
        {
            tracing::debug!(requested, "preflight requested disallowed headers");
            return headers;
        }

        headers.extend(self.credentials_headers());
        if let Some(value) = self.options.methods.header_value() {
            headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
        headers.extend(self.allow_headers_headers(requested_headers));
        if let Some(max_age) = self.options.max_age {
            headers.insert(header::ACCESS_CONTROL_MAX_AGE, max_age.to_string());
        }
        headers
    }

    /// Computes the headers for the actual (non-preflight) response: the
    /// input response headers extended with `Access-Control-Allow-Origin`,
    /// `Allow-Credentials`, and the expose list.
    pub fn actual_response_headers(
        &self,
        request: &Request,
        response_headers: &HeaderMap,
    ) -> HeaderMap {
        let mut headers = response_headers.clone();
        let Some(origin) = request.headers().get(header::ORIGIN) else {
            return headers;
        };

        let (origin_headers, origin_allowed) = self.origin_headers(origin);
        headers.extend(origin_headers);
        if !origin_allowed {
            return headers;
        }

        headers.extend(self.credentials_headers());
        if let Some(value) = self.options.exposed_headers.header_value(response_headers) {
            headers.insert(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
        headers
    }

    fn origin_headers(&self, origin: &str) -> (HeaderMap, bool) {
        let mut headers = HeaderMap::new();
        match self.options.origins.grant(origin) {
            OriginGrant::Wildcard => {
                headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
                (headers, true)
            }
            OriginGrant::Mirror => {
                headers.add_vary(header::ORIGIN);
                headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
                (headers, true)
            }
            OriginGrant::Disallow => {
                tracing::debug!(origin, "request origin not allowed by policy");
                if self.options.origins.vary_on_disallow() {
                    headers.add_vary(header::ORIGIN);
                }
                (headers, false)
            }
        }
    }

    fn credentials_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if self.options.credentials {
            headers.insert(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }

    fn allow_headers_headers(&self, requested: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match &self.options.allowed_headers {
            AllowedHeaders::MirrorRequest => {
                headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
                if let Some(value) = requested
                    && !value.is_empty()
                {
                    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
                }
            }
            other => {
                if let Some(value) = other.header_value() {
                    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
                }
            }
        }
        headers
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
