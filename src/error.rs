use thiserror::Error;

/// A CORS rule violation detected while validating a response or reading a
/// protected header. Every variant carries the expected and actual values so
/// callers can report or branch on the exact failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessControlError {
    #[error(
        "Access-Control-Allow-Origin {actual:?} does not authorize request origin {expected}"
    )]
    OriginMismatch {
        expected: String,
        actual: Option<String>,
    },
    #[error(
        "credentialed request denied: Access-Control-Allow-Origin was {allow_origin:?}, Access-Control-Allow-Credentials was {allow_credentials:?}"
    )]
    CredentialsNotAllowed {
        allow_origin: Option<String>,
        allow_credentials: Option<String>,
    },
    #[error("method {method} is not listed in Access-Control-Allow-Methods {allowed:?}")]
    MethodNotAllowed {
        method: String,
        allowed: Option<String>,
    },
    #[error("header {header} is not listed in Access-Control-Allow-Headers {allowed:?}")]
    HeaderNotAllowed {
        header: String,
        allowed: Option<String>,
    },
    #[error("header {header} is not covered by Access-Control-Expose-Headers {exposed:?}")]
    HeaderNotExposed {
        header: String,
        exposed: Option<String>,
    },
}

/// Rejected request input, raised at construction time rather than inside
/// validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("method {0:?} is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("failed to parse request url")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request url {0:?} has no host, so no origin can be derived")]
    MissingHost(String),
}
