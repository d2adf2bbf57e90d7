mod common;

use common::builders::{policy, request};
use insta::assert_yaml_snapshot;
use preflight_cors::constants::{header, method};
use preflight_cors::{build_preflight, AllowedHeaders, AllowedOrigins, HeaderMap};
use serde::Serialize;

#[derive(Serialize)]
struct HeaderSnapshot {
    name: String,
    value: String,
}

fn capture(headers: &HeaderMap) -> Vec<HeaderSnapshot> {
    let mut entries: Vec<HeaderSnapshot> = headers
        .iter()
        .map(|(name, value)| HeaderSnapshot {
            name: name.to_string(),
            value: value.to_string(),
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

#[test]
fn preflight_request_snapshot() {
    let original = request()
        .method(method::PUT)
        .url("https://app.example/data")
        .header("Content-Type", "application/json")
        .header("X-Trace-Id", "abc")
        .build();

    let preflight = build_preflight(&original);
    let snapshot = capture(preflight.headers());

    assert_yaml_snapshot!("preflight_request", snapshot);
}

#[test]
fn exact_origin_preflight_response_snapshot() {
    let server = policy()
        .origins(AllowedOrigins::exact("https://app.example"))
        .methods([method::GET, method::POST])
        .allowed_headers(AllowedHeaders::list(["X-Trace-Id", "Content-Type"]))
        .build();

    let preflight = request()
        .method(method::OPTIONS)
        .url("https://api.example/items")
        .header(header::ORIGIN, "https://app.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, method::POST)
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,x-trace-id")
        .build();

    let snapshot = capture(&server.preflight_response_headers(&preflight));

    assert_yaml_snapshot!("exact_origin_preflight_response", snapshot);
}
