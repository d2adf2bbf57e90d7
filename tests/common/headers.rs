#![allow(dead_code)]

use preflight_cors::constants::header;
use preflight_cors::HeaderMap;
use std::collections::HashSet;

pub fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name)
}

pub fn has_header(headers: &HeaderMap, name: &str) -> bool {
    headers.contains(name)
}

pub fn vary_values(headers: &HeaderMap) -> HashSet<String> {
    headers
        .get(header::VARY)
        .map(|value| {
            value
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect::<HashSet<_>>()
        })
        .unwrap_or_default()
}
