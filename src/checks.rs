use crate::classify::preflight_header_names;
use crate::constants::header;
use crate::error::AccessControlError;
use crate::request::Request;
use crate::response::Response;
use crate::tables;
use crate::util::{normalize_lower, split_header_list};

const WILDCARD: &str = "*";

/// The CORS rule a [`Check`] enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Origin,
    Credentials,
    AllowMethod,
    AllowHeaders,
}

/// A single validation rule bound to the original request.
///
/// Checks are pure predicates over already-received headers: no I/O, no
/// hidden state, safe to clone and re-run any number of times. Failures are
/// typed rather than boolean so callers can branch on the exact rule that
/// rejected the response.
#[derive(Debug, Clone)]
pub struct Check {
    kind: CheckKind,
    request: Request,
}

impl Check {
    pub fn new(kind: CheckKind, request: Request) -> Self {
        Self { kind, request }
    }

    pub fn kind(&self) -> CheckKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        match self.kind {
            CheckKind::Origin => "allow-origin",
            CheckKind::Credentials => "allow-credentials",
            CheckKind::AllowMethod => "allow-method",
            CheckKind::AllowHeaders => "allow-headers",
        }
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn run(&self, response: &Response) -> Result<(), AccessControlError> {
        let result = match self.kind {
            CheckKind::Origin => check_origin(&self.request, response),
            CheckKind::Credentials => check_credentials(&self.request, response),
            CheckKind::AllowMethod => check_allow_method(&self.request, response),
            CheckKind::AllowHeaders => check_allow_headers(&self.request, response),
        };
        if let Err(error) = &result {
            tracing::debug!(check = self.name(), %error, "response failed CORS check");
        }
        result
    }
}

/// The checks a preflight response must pass before the actual request is
/// authorized.
pub fn preflight_checks(request: &Request) -> Vec<Check> {
    let mut checks = vec![Check::new(CheckKind::Origin, request.clone())];
    if request.mode().is_credentialed() {
        checks.push(Check::new(CheckKind::Credentials, request.clone()));
    }
    checks.push(Check::new(CheckKind::AllowMethod, request.clone()));
    checks.push(Check::new(CheckKind::AllowHeaders, request.clone()));
    checks
}

/// The subset of checks that apply to the actual (non-preflight) response.
pub fn response_checks(request: &Request) -> Vec<Check> {
    let mut checks = vec![Check::new(CheckKind::Origin, request.clone())];
    if request.mode().is_credentialed() {
        checks.push(Check::new(CheckKind::Credentials, request.clone()));
    }
    checks
}

fn check_origin(request: &Request, response: &Response) -> Result<(), AccessControlError> {
    let expected = request.origin().ascii_serialization();
    let actual = response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN);

    match actual {
        Some(WILDCARD) if !request.mode().is_credentialed() => Ok(()),
        Some(value) if value == expected => Ok(()),
        _ => Err(AccessControlError::OriginMismatch {
            expected,
            actual: actual.map(str::to_string),
        }),
    }
}

fn check_credentials(request: &Request, response: &Response) -> Result<(), AccessControlError> {
    debug_assert!(request.mode().is_credentialed());
    let allow_origin = response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN);
    let allow_credentials = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS);

    if allow_origin == Some(WILDCARD) || allow_credentials != Some("true") {
        return Err(AccessControlError::CredentialsNotAllowed {
            allow_origin: allow_origin.map(str::to_string),
            allow_credentials: allow_credentials.map(str::to_string),
        });
    }
    Ok(())
}

fn check_allow_method(request: &Request, response: &Response) -> Result<(), AccessControlError> {
    let method = request.method();
    if tables::is_simple_method(method) {
        return Ok(());
    }

    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS);
    if let Some(value) = allowed {
        for token in split_header_list(value) {
            // methods are case-sensitive tokens, unlike header names
            if token == method {
                return Ok(());
            }
            if token == WILDCARD && !request.mode().is_credentialed() {
                return Ok(());
            }
        }
    }

    Err(AccessControlError::MethodNotAllowed {
        method: method.to_string(),
        allowed: allowed.map(str::to_string),
    })
}

fn check_allow_headers(request: &Request, response: &Response) -> Result<(), AccessControlError> {
    let needed = preflight_header_names(request);
    if needed.is_empty() {
        return Ok(());
    }

    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS);
    let tokens: Vec<String> = allowed
        .map(|value| split_header_list(value).map(normalize_lower).collect())
        .unwrap_or_default();

    if tokens.iter().any(|token| token == WILDCARD) && !request.mode().is_credentialed() {
        return Ok(());
    }

    for name in needed {
        if !tokens.contains(&name) {
            return Err(AccessControlError::HeaderNotAllowed {
                header: name,
                allowed: allowed.map(str::to_string),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "checks_test.rs"]
mod checks_test;
