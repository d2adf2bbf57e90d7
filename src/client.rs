use crate::checks::{preflight_checks, response_checks, Check};
use crate::classify::{classify, PreflightPlan};
use crate::error::AccessControlError;
use crate::preflight::build_preflight;
use crate::protected_headers::ProtectedHeaders;
use crate::request::Request;
use crate::response::Response;

/// Client-side engine configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// When set, actual-response validation passes 5xx responses through
    /// unchecked so the caller sees the server error instead of a CORS
    /// failure. Preflight responses are always validated.
    pub skip_response_checks_on_server_error: bool,
}

/// Client-side CORS engine: classification, preflight construction, and
/// response validation for outgoing cross-origin requests.
///
/// Stateless and synchronous; a shared instance can be used from any number
/// of threads. The transport (sending the preflight and actual requests)
/// stays with the caller.
#[derive(Debug, Clone, Default)]
pub struct CorsClient {
    options: ClientOptions,
}

impl CorsClient {
    pub fn new(options: ClientOptions) -> Self {
        Self { options }
    }

    pub fn classify(&self, request: &Request) -> PreflightPlan {
        classify(request)
    }

    /// Builds the `OPTIONS` preflight; meaningful only when
    /// [`classify`](Self::classify) reported a preflight as required.
    pub fn preflight_request(&self, request: &Request) -> Request {
        build_preflight(request)
    }

    pub fn preflight_checks(&self, request: &Request) -> Vec<Check> {
        preflight_checks(request)
    }

    pub fn response_checks(&self, request: &Request) -> Vec<Check> {
        response_checks(request)
    }

    /// Runs every preflight check against the preflight response, reporting
    /// the first rule violation.
    pub fn validate_preflight(
        &self,
        request: &Request,
        response: &Response,
    ) -> Result<(), AccessControlError> {
        for check in preflight_checks(request) {
            check.run(response)?;
        }
        Ok(())
    }

    /// Runs the actual-response checks, honoring the configured server-error
    /// bypass.
    pub fn validate_response(
        &self,
        request: &Request,
        response: &Response,
    ) -> Result<(), AccessControlError> {
        if self.options.skip_response_checks_on_server_error && response.is_server_error() {
            tracing::debug!(
                status = response.status(),
                "skipping CORS checks for server error response"
            );
            return Ok(());
        }
        for check in response_checks(request) {
            check.run(response)?;
        }
        Ok(())
    }

    /// Wraps the actual response's headers in the read-restricted view the
    /// caller may expose further.
    pub fn readable_headers(&self, request: &Request, response: &Response) -> ProtectedHeaders {
        ProtectedHeaders::from_response(response, request.mode())
    }
}
