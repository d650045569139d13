//! Error types for storefront-router

use std::fmt;
use thiserror::Error;

/// Result type alias for routing operations
pub type Result<T> = std::result::Result<T, RoutingError>;

/// Which unique field two route entries collided on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteField {
    Path,
    Name,
}

impl fmt::Display for RouteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteField::Path => f.write_str("path"),
            RouteField::Name => f.write_str("name"),
        }
    }
}

/// Errors raised while building a route table or navigating it.
///
/// An unmatched path is not an error; it is reported as
/// [`Outcome::NotFound`](crate::Outcome::NotFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// Two entries share a path or a name
    #[error("Duplicate route {field} `{value}` (entries {first} and {second})")]
    DuplicateRoute {
        field: RouteField,
        value: String,
        first: usize,
        second: usize,
    },

    /// A redirect chain revisited a path
    #[error("Redirect cycle: {}", chain.join(" -> "))]
    RedirectCycle { chain: Vec<String> },

    /// Malformed route path or redirect target
    #[error("Invalid path `{path}`: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    /// No route registered under this name
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// `href` was not given a value for a pattern parameter
    #[error("Missing parameter `{param}` for route `{route}`")]
    MissingParam { route: String, param: String },

    /// The not-found fallback names a route that does not render a view
    #[error("Fallback route `{0}` does not render a view")]
    InvalidFallback(String),
}

impl RoutingError {
    pub(crate) fn invalid_path(path: impl Into<String>, reason: &'static str) -> Self {
        RoutingError::InvalidPath {
            path: path.into(),
            reason,
        }
    }
}
