use crate::constants::header;
use crate::request::Request;
use crate::tables;
use crate::util::normalize_lower;

/// Why a request cannot go out as a simple request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    NonSimpleMethod,
    NonSimpleHeader,
    NonSimpleContentType,
}

/// The outcome of classifying a request: whether a preflight exchange is
/// required and every rule that triggered it. Derived purely from the
/// request; never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightPlan {
    reasons: Vec<Reason>,
}

impl PreflightPlan {
    pub fn required(&self) -> bool {
        !self.reasons.is_empty()
    }

    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }
}

/// Classifies a request as simple or preflight-required.
///
/// Total over any well-formed [`Request`]: it never errors. Forbidden headers
/// belong to the transport and are skipped before classification.
pub fn classify(request: &Request) -> PreflightPlan {
    let mut reasons = Vec::new();

    if !tables::is_simple_method(request.method()) {
        reasons.push(Reason::NonSimpleMethod);
    }

    let mut non_simple_header = false;
    let mut non_simple_content_type = false;
    for (name, value) in request.headers().iter() {
        let lower = normalize_lower(name);
        if tables::is_forbidden_request_header(&lower) {
            continue;
        }
        if lower.eq_ignore_ascii_case(header::CONTENT_TYPE) {
            if !tables::is_simple_content_type(value) {
                non_simple_content_type = true;
            }
        } else if !tables::is_simple_request_header(&lower) {
            non_simple_header = true;
        }
    }
    if non_simple_header {
        reasons.push(Reason::NonSimpleHeader);
    }
    if non_simple_content_type {
        reasons.push(Reason::NonSimpleContentType);
    }

    PreflightPlan { reasons }
}

/// The lower-cased, lexicographically sorted names a preflight must ask
/// permission for: every request header outside the simple set, including
/// `content-type` when its media type is non-simple.
///
/// Shared by the preflight builder and the allow-headers check so both always
/// agree on what needs approval.
pub fn preflight_header_names(request: &Request) -> Vec<String> {
    let mut names: Vec<String> = request
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            let lower = normalize_lower(name);
            if tables::is_forbidden_request_header(&lower) {
                return None;
            }
            if lower.eq_ignore_ascii_case(header::CONTENT_TYPE) {
                if tables::is_simple_content_type(value) {
                    return None;
                }
                return Some(lower);
            }
            if tables::is_simple_request_header(&lower) {
                return None;
            }
            Some(lower)
        })
        .collect();
    names.sort();
    names.dedup();
    names
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
