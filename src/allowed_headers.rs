use crate::util::split_header_list;
use std::collections::HashSet;

/// Configuration for the `Access-Control-Allow-Headers` response value.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedHeaders {
    List(Vec<String>),
    /// Wildcard: always allowed and emits "*" on preflight.
    Any,
    /// Echo whatever the preflight asked for, with
    /// `Vary: Access-Control-Request-Headers`.
    MirrorRequest,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        AllowedHeaders::List(Vec::new())
    }
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();
        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            let key = trimmed.to_ascii_lowercase();
            if seen.insert(key) {
                deduped.push(trimmed);
            }
        }

        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }

    /// Whether every header in a comma-separated
    /// `Access-Control-Request-Headers` value is allowed. Header names
    /// compare case-insensitively.
    pub fn allows_headers(&self, request_headers: &str) -> bool {
        match self {
            Self::Any | Self::MirrorRequest => true,
            Self::List(allowed) => {
                let request_headers = request_headers.trim();
                if request_headers.is_empty() {
                    return true;
                }

                split_header_list(request_headers).all(|header| {
                    allowed
                        .iter()
                        .any(|allowed_header| allowed_header.eq_ignore_ascii_case(header))
                })
            }
        }
    }

    /// The explicit header value, `None` when empty or when the value is
    /// derived from the request instead.
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(",")),
            Self::Any => Some("*".to_string()),
            Self::MirrorRequest => None,
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
