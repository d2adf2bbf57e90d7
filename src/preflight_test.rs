use super::*;
use crate::constants::{header, method};

fn request(req_method: &str, headers: &[(&str, &str)], mode: CorsMode) -> Request {
    let headers: HeaderMap = headers.iter().copied().collect();
    Request::new(req_method, "http://a.example/resource", headers, mode)
        .expect("well-formed request")
}

mod build_preflight {
    use super::*;

    #[test]
    fn when_built_should_target_same_url_with_options_method() {
        // Arrange
        let original = request("PUT", &[], CorsMode::Anonymous);

        // Act
        let preflight = build_preflight(&original);

        // Assert
        assert_eq!(preflight.method(), method::OPTIONS);
        assert_eq!(preflight.url(), original.url());
        assert_eq!(preflight.headers().get(header::ORIGIN), Some("http://a.example"));
        assert_eq!(
            preflight.headers().get(header::ACCESS_CONTROL_REQUEST_METHOD),
            Some("PUT")
        );
    }

    #[test]
    fn when_only_method_is_non_simple_should_omit_request_headers_header() {
        // Arrange
        let original = request("DELETE", &[("Accept", "*/*")], CorsMode::Anonymous);

        // Act
        let preflight = build_preflight(&original);

        // Assert
        assert!(
            !preflight
                .headers()
                .contains(header::ACCESS_CONTROL_REQUEST_HEADERS)
        );
    }

    #[test]
    fn when_non_simple_headers_are_present_should_sort_and_lowercase_them() {
        // Arrange
        let original = request(
            "POST",
            &[("X-Zebra", "1"), ("X-Apple", "2"), ("Content-Type", "application/json")],
            CorsMode::Anonymous,
        );

        // Act
        let preflight = build_preflight(&original);

        // Assert
        assert_eq!(
            preflight.headers().get(header::ACCESS_CONTROL_REQUEST_HEADERS),
            Some("content-type,x-apple,x-zebra")
        );
    }

    #[test]
    fn when_original_is_credentialed_should_still_build_anonymous_preflight() {
        // Arrange
        let original = request("PUT", &[], CorsMode::UseCredentials);

        // Act
        let preflight = build_preflight(&original);

        // Assert
        assert_eq!(preflight.mode(), CorsMode::Anonymous);
    }

    #[test]
    fn when_built_twice_should_produce_identical_headers() {
        // Arrange
        let original = request(
            "PATCH",
            &[("X-B", "1"), ("X-A", "2")],
            CorsMode::Anonymous,
        );

        // Act
        let first = build_preflight(&original);
        let second = build_preflight(&original);

        // Assert
        let first_pairs: Vec<(&str, &str)> = first.headers().iter().collect();
        let second_pairs: Vec<(&str, &str)> = second.headers().iter().collect();
        assert_eq!(first_pairs, second_pairs);
    }
}
