use crate::classify::preflight_header_names;
use crate::constants::{header, method};
use crate::headers::HeaderMap;
use crate::request::{CorsMode, Request};

/// Builds the `OPTIONS` preflight for a request classified as
/// preflight-required.
///
/// The output is deterministic: same input request, byte-identical headers.
/// `Access-Control-Request-Headers` is sorted lexicographically and
/// lower-cased; it is omitted when only simple headers are present (a
/// non-simple method alone still triggers a preflight). The preflight itself
/// is sent without credentials.
pub fn build_preflight(request: &Request) -> Request {
    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(header::ORIGIN, request.origin().ascii_serialization());
    headers.insert(header::ACCESS_CONTROL_REQUEST_METHOD, request.method());

    let names = preflight_header_names(request);
    if !names.is_empty() {
        headers.insert(header::ACCESS_CONTROL_REQUEST_HEADERS, names.join(","));
    }

    Request::from_parts(
        method::OPTIONS.to_string(),
        request.url().clone(),
        request.origin().clone(),
        headers,
        CorsMode::Anonymous,
    )
}

#[cfg(test)]
#[path = "preflight_test.rs"]
mod preflight_test;
