use crate::constants::header;
use crate::error::AccessControlError;
use crate::headers::HeaderMap;
use crate::request::CorsMode;
use crate::response::Response;
use crate::tables;
use crate::util::{normalize_lower, split_header_list};

/// A read-restricted view over a response's headers.
///
/// Only simple response headers and those the server explicitly listed in
/// `Access-Control-Expose-Headers` are readable; everything else fails with
/// [`AccessControlError::HeaderNotExposed`]. Iteration yields the same
/// exposable subset, so hidden headers never leak through enumeration
/// either. The view never mutates the wrapped headers.
#[derive(Debug, Clone)]
pub struct ProtectedHeaders {
    headers: HeaderMap,
    expose_value: Option<String>,
    exposed: Vec<String>,
    expose_any: bool,
    mode: CorsMode,
}

impl ProtectedHeaders {
    pub fn new(expose_value: Option<&str>, headers: HeaderMap, mode: CorsMode) -> Self {
        let exposed: Vec<String> = expose_value
            .map(|value| split_header_list(value).map(normalize_lower).collect())
            .unwrap_or_default();
        let expose_any = exposed.iter().any(|token| token == "*");
        Self {
            headers,
            expose_value: expose_value.map(str::to_string),
            exposed,
            expose_any,
            mode,
        }
    }

    /// Builds the view straight from a response, reading the expose list out
    /// of its own headers.
    pub fn from_response(response: &Response, mode: CorsMode) -> Self {
        Self::new(
            response.headers().get(header::ACCESS_CONTROL_EXPOSE_HEADERS),
            response.headers().clone(),
            mode,
        )
    }

    fn is_exposed(&self, lower_name: &str) -> bool {
        if tables::is_simple_response_header(lower_name) {
            return true;
        }
        if self.expose_any && !self.mode.is_credentialed() {
            return true;
        }
        self.exposed.iter().any(|token| token == lower_name)
    }

    /// Looks up a header. Fails when the server did not expose the name,
    /// even if the header exists in the wrapped mapping; an exposed name
    /// that is simply absent yields `Ok(None)`.
    pub fn get(&self, name: &str) -> Result<Option<&str>, AccessControlError> {
        let lower = normalize_lower(name);
        if !self.is_exposed(&lower) {
            return Err(AccessControlError::HeaderNotExposed {
                header: name.to_string(),
                exposed: self.expose_value.clone(),
            });
        }
        Ok(self.headers.get(name))
    }

    /// Iterates over the exposable subset only.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .filter(|(name, _)| self.is_exposed(&normalize_lower(name)))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(name, _)| name)
    }
}

#[cfg(test)]
#[path = "protected_headers_test.rs"]
mod protected_headers_test;
