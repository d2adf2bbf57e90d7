use crate::util::equals_ignore_case;
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub type OriginPredicateFn = dyn Fn(&str) -> bool + Send + Sync;

/// Server-side origin allow-list configuration.
#[derive(Clone, Default)]
pub enum AllowedOrigins {
    #[default]
    Any,
    Exact(String),
    List(Vec<OriginMatcher>),
    Predicate(Arc<OriginPredicateFn>),
}

/// What the policy grants a concrete request origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginGrant {
    /// Emit the `*` wildcard.
    Wildcard,
    /// Echo the request origin back.
    Mirror,
    Disallow,
}

#[derive(Debug)]
pub enum PatternError {
    Build(Box<BuildError>),
    Timeout { elapsed: Duration, budget: Duration },
    TooLong { length: usize, max: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Build(_) => write!(f, "failed to compile origin pattern"),
            PatternError::Timeout { .. } => {
                write!(f, "compiling origin pattern exceeded the configured budget")
            }
            PatternError::TooLong { length, max } => write!(
                f,
                "origin pattern length {} exceeds maximum allowed {}",
                length, max
            ),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::Build(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 50_000;
const MAX_ORIGIN_LENGTH: usize = 4_096;

#[derive(Clone)]
pub enum OriginMatcher {
    Exact(String),
    Pattern(Regex),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, PATTERN_COMPILE_BUDGET).map(Self::Pattern)
    }

    fn compile_pattern(pattern: &str, budget: Duration) -> Result<Regex, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let started = Instant::now();
        let regex = Regex::new(&format!("(?i:{pattern})"))
            .map_err(|err| PatternError::Build(Box::new(err)))?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(regex)
    }

    #[cfg(test)]
    pub(crate) fn pattern_str_with_budget(
        pattern: &str,
        budget: Duration,
    ) -> Result<Self, PatternError> {
        Self::compile_pattern(pattern, budget).map(Self::Pattern)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            OriginMatcher::Exact(value) => equals_ignore_case(value, candidate),
            OriginMatcher::Pattern(regex) => regex.is_match(candidate.as_bytes()),
        }
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::Exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::Exact(value.to_owned())
    }
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    pub fn grant(&self, request_origin: &str) -> OriginGrant {
        if request_origin.len() > MAX_ORIGIN_LENGTH {
            return OriginGrant::Disallow;
        }

        match self {
            AllowedOrigins::Any => OriginGrant::Wildcard,
            AllowedOrigins::Exact(value) => {
                if equals_ignore_case(value, request_origin) {
                    OriginGrant::Mirror
                } else {
                    OriginGrant::Disallow
                }
            }
            AllowedOrigins::List(matchers) => {
                if matchers.iter().any(|matcher| matcher.matches(request_origin)) {
                    OriginGrant::Mirror
                } else {
                    OriginGrant::Disallow
                }
            }
            AllowedOrigins::Predicate(predicate) => {
                if predicate(request_origin) {
                    OriginGrant::Mirror
                } else {
                    OriginGrant::Disallow
                }
            }
        }
    }

    /// Whether `Vary: Origin` applies even when the origin is rejected.
    pub fn vary_on_disallow(&self) -> bool {
        !matches!(self, AllowedOrigins::Any)
    }
}

impl fmt::Debug for AllowedOrigins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllowedOrigins::Any => write!(f, "Any"),
            AllowedOrigins::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            AllowedOrigins::List(matchers) => {
                write!(f, "List([{} matchers])", matchers.len())
            }
            AllowedOrigins::Predicate(_) => write!(f, "Predicate(..)"),
        }
    }
}

#[cfg(test)]
#[path = "allowed_origins_test.rs"]
mod allowed_origins_test;
