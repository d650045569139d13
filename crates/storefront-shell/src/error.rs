//! Error types for storefront-shell

use storefront_router::RoutingError;
use thiserror::Error;

/// Errors loading a route table from a file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid route `{path}`: {reason}")]
    InvalidEntry { path: String, reason: &'static str },

    #[error("Invalid not_found section: {0}")]
    InvalidNotFound(&'static str),

    #[error(transparent)]
    UnknownView(#[from] crate::view::UnknownView),

    #[error(transparent)]
    Routing(#[from] RoutingError),
}
