use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Methods a browser sends cross-origin without a preflight. Compared
/// case-sensitively: `get` is not a simple method.
pub const SIMPLE_METHODS: &[&str] = &["GET", "HEAD", "POST"];

static SIMPLE_REQUEST_HEADERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from(["accept", "accept-language", "content-language", "content-type"])
});

static SIMPLE_CONTENT_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "application/x-www-form-urlencoded",
        "multipart/form-data",
        "text/plain",
    ])
});

// Forbidden request header names per the Fetch standard. These belong to the
// transport, never to the engine: they are skipped during classification and
// never listed in Access-Control-Request-Headers.
static FORBIDDEN_REQUEST_HEADERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "accept-charset",
        "accept-encoding",
        "access-control-request-headers",
        "access-control-request-method",
        "connection",
        "content-length",
        "cookie",
        "cookie2",
        "date",
        "dnt",
        "expect",
        "host",
        "keep-alive",
        "origin",
        "referer",
        "te",
        "trailer",
        "transfer-encoding",
        "upgrade",
        "via",
    ])
});

static SIMPLE_RESPONSE_HEADERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "cache-control",
        "content-language",
        "content-type",
        "expires",
        "last-modified",
        "pragma",
    ])
});

pub fn is_simple_method(method: &str) -> bool {
    SIMPLE_METHODS.contains(&method)
}

/// `name` must already be lower-cased.
pub fn is_simple_request_header(name: &str) -> bool {
    SIMPLE_REQUEST_HEADERS.contains(name)
}

/// Parameters after `;` are ignored; the media type compares
/// case-insensitively.
pub fn is_simple_content_type(value: &str) -> bool {
    let media_type = value
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    SIMPLE_CONTENT_TYPES.contains(media_type.as_str())
}

/// `name` must already be lower-cased.
pub fn is_forbidden_request_header(name: &str) -> bool {
    FORBIDDEN_REQUEST_HEADERS.contains(name)
        || name.starts_with("proxy-")
        || name.starts_with("sec-")
}

/// `name` must already be lower-cased.
pub fn is_simple_response_header(name: &str) -> bool {
    SIMPLE_RESPONSE_HEADERS.contains(name)
}

#[cfg(test)]
#[path = "tables_test.rs"]
mod tables_test;
