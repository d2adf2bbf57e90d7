#![allow(dead_code)]

use preflight_cors::HeaderMap;

pub fn assert_header_eq(headers: &HeaderMap, name: &str, expected: &str) {
    match headers.get(name) {
        Some(value) => assert_eq!(value, expected, "unexpected value for header {name}"),
        None => panic!("expected header {name} to be present, got {headers:?}"),
    }
}

pub fn assert_header_absent(headers: &HeaderMap, name: &str) {
    assert!(
        !headers.contains(name),
        "expected header {name} to be absent, got {:?}",
        headers.get(name)
    );
}
