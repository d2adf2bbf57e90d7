pub mod constants;
pub mod tables;

mod allowed_headers;
mod allowed_methods;
mod allowed_origins;
mod checks;
mod classify;
mod client;
mod error;
mod exposed_headers;
mod headers;
mod origin;
mod policy;
mod preflight;
mod protected_headers;
mod request;
mod response;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use allowed_origins::{
    AllowedOrigins, OriginGrant, OriginMatcher, OriginPredicateFn, PatternError,
};
pub use checks::{preflight_checks, response_checks, Check, CheckKind};
pub use classify::{classify, preflight_header_names, PreflightPlan, Reason};
pub use client::{ClientOptions, CorsClient};
pub use error::{AccessControlError, RequestError};
pub use exposed_headers::ExposedHeaders;
pub use headers::HeaderMap;
pub use origin::Origin;
pub use policy::{CorsPolicy, PolicyOptions, ValidationError};
pub use preflight::build_preflight;
pub use protected_headers::ProtectedHeaders;
pub use request::{CorsMode, Request};
pub use response::Response;
