use crate::constants::header;
use crate::util::{normalize_lower, split_header_list};
use indexmap::IndexMap;

/// An ordered header mapping with case-insensitive names.
///
/// Lookup ignores case, iteration preserves insertion order and the casing
/// each name was inserted with. `Vary` is special-cased the way CORS
/// middleware needs it: values merge and de-duplicate instead of replacing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    // keyed by the lower-cased name; the value keeps the original spelling
    entries: IndexMap<String, (String, String)>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn insert<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let value = value.into();
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.entries.insert(normalize_lower(&name), (name, value));
        }
    }

    pub fn add_vary<S: Into<String>>(&mut self, value: S) {
        let key = normalize_lower(header::VARY);
        let mut entries: Vec<String> = self
            .entries
            .get(&key)
            .map(|(_, existing)| {
                split_header_list(existing)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let incoming = value.into().trim().to_string();
        if !incoming.is_empty() {
            entries.push(incoming);
        }

        if entries.is_empty() {
            self.entries.shift_remove(&key);
            return;
        }

        let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            if deduped
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(&entry))
            {
                continue;
            }
            deduped.push(entry);
        }

        self.entries
            .insert(key, (header::VARY.to_string(), deduped.join(", ")));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&normalize_lower(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_lower(name))
    }

    /// Yields `(name, value)` pairs in insertion order with original casing.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges `other` into `self`, keeping `Vary` values merged rather than
    /// replaced.
    pub fn extend(&mut self, other: HeaderMap) {
        for (_, (name, value)) in other.entries {
            if name.eq_ignore_ascii_case(header::VARY) {
                self.add_vary(value);
            } else {
                self.insert(name, value);
            }
        }
    }
}

impl<N, V> FromIterator<(N, V)> for HeaderMap
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = HeaderMap::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
