use crate::headers::HeaderMap;
use crate::tables;
use crate::util::normalize_lower;
use std::collections::HashSet;

/// Configuration mirror of the `Access-Control-Expose-Headers` response
/// header.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ExposedHeaders {
    /// Derive the list from the non-simple headers actually present on the
    /// response.
    #[default]
    Auto,
    List(Vec<String>),
    Any,
}

impl ExposedHeaders {
    /// Builds an allow-list from the provided iterator, automatically
    /// trimming whitespace and removing duplicates. A list of just `"*"`
    /// collapses into [`Self::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut deduped: Vec<String> = Vec::new();

        for value in values.into_iter() {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty() {
                continue;
            }
            let key = normalize_lower(&trimmed);
            if seen.insert(key) {
                deduped.push(trimmed);
            }
        }

        if deduped.len() == 1 && deduped[0] == "*" {
            return Self::Any;
        }

        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }

    /// Serializes the configuration into a header-ready value for the given
    /// response headers.
    ///
    /// `Auto` lists the response's non-simple headers (original casing
    /// preserved, sorted case-insensitively for determinism), skipping the
    /// `Access-Control-*` bookkeeping headers themselves.
    pub fn header_value(&self, response_headers: &HeaderMap) -> Option<String> {
        match self {
            Self::Auto => {
                let mut names: Vec<&str> = response_headers
                    .names()
                    .filter(|name| {
                        let lower = normalize_lower(name);
                        !tables::is_simple_response_header(&lower)
                            && !lower.starts_with("access-control-")
                            && lower != "vary"
                    })
                    .collect();
                if names.is_empty() {
                    return None;
                }
                names.sort_by_key(|name| normalize_lower(name));
                Some(names.join(","))
            }
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(",")),
            Self::Any => Some("*".to_string()),
        }
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
