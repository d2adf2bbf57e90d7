mod common;

use common::builders::{policy, request};
use preflight_cors::constants::{header, method};
use preflight_cors::{build_preflight, classify, AllowedHeaders, CorsClient, Response};
use proptest::prelude::*;

fn simple_method_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![method::GET, method::HEAD, method::POST])
}

fn simple_header_strategy() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop::sample::select(vec![
        ("Accept", "application/xml"),
        ("Accept-Language", "en-GB"),
        ("Content-Language", "de"),
        ("Content-Type", "text/plain"),
    ])
}

fn custom_header_name_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("x-[a-z]{1,12}").unwrap()
}

proptest! {
    #[test]
    fn simple_requests_never_require_preflight(
        method in simple_method_strategy(),
        headers in prop::collection::vec(simple_header_strategy(), 0..4),
    ) {
        let mut builder = request().method(method);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        prop_assert!(!classify(&builder.build()).required());
    }

    #[test]
    fn custom_headers_always_require_preflight(name in custom_header_name_strategy()) {
        let request = request().header(name.as_str(), "1").build();

        let plan = classify(&request);

        prop_assert!(plan.required());
    }

    #[test]
    fn preflight_header_list_is_sorted_and_lowercased(
        names in prop::collection::hash_set(custom_header_name_strategy(), 1..6),
    ) {
        let mut builder = request();
        for name in &names {
            // staggered casing on the wire must not affect the output
            builder = builder.header(name.to_uppercase(), "1");
        }

        let preflight = build_preflight(&builder.build());
        let value = preflight
            .headers()
            .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
            .expect("non-simple headers are present");

        let tokens: Vec<&str> = value.split(',').collect();
        let mut sorted = tokens.clone();
        sorted.sort_unstable();
        prop_assert_eq!(&tokens, &sorted);
        prop_assert!(tokens.iter().all(|token| token.chars().all(|ch| !ch.is_uppercase())));
    }

    #[test]
    fn mirror_policy_round_trips_any_header_set(
        names in prop::collection::hash_set(custom_header_name_strategy(), 0..6),
    ) {
        let server = policy()
            .allowed_headers(AllowedHeaders::MirrorRequest)
            .build();
        let client = CorsClient::default();

        let mut builder = request().method(method::PUT);
        for name in &names {
            builder = builder.header(name.as_str(), "1");
        }
        let original = builder.build();

        let preflight = client.preflight_request(&original);
        let response = Response::new(204, server.preflight_response_headers(&preflight));

        prop_assert_eq!(client.validate_preflight(&original, &response), Ok(()));
    }
}
