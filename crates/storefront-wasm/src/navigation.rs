//! Flattened navigation results for the JavaScript shell
//!
//! Converts router outcomes into owned values that cross the WASM boundary
//! without borrowing the router.

use storefront_router::{Destination, Location, Navigation, Outcome, Router, RoutingError};
use storefront_shell::{storefront_router, ConfigError, RoutesFile, View};

/// Errors specific to the binding's flattened inputs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// `href` params must alternate names and values
    #[error("Unpaired href parameters: expected name/value pairs, got {0} items")]
    UnpairedParams(usize),

    #[error(transparent)]
    Routing(#[from] RoutingError),
}

/// Kind of result handed to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Resolved,
    Fallback,
    Redirect,
    NotFound,
}

impl NavigationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationKind::Resolved => "resolved",
            NavigationKind::Fallback => "fallback",
            NavigationKind::Redirect => "redirect",
            NavigationKind::NotFound => "not_found",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationResult {
    pub kind: NavigationKind,
    pub name: Option<String>,
    pub view: Option<View>,
    /// Matched location, redirect target, or the unmatched location
    pub location: Location,
    /// Paths that redirected on the way here
    pub redirects: Vec<String>,
}

impl NavigationResult {
    fn new(kind: NavigationKind, location: Location) -> Self {
        Self {
            kind,
            name: None,
            view: None,
            location,
            redirects: Vec::new(),
        }
    }

    pub fn from_outcome(outcome: Outcome<'_, View>) -> Self {
        match outcome {
            Outcome::Resolved(r) => Self {
                name: Some(r.name.to_string()),
                view: Some(*r.view),
                ..Self::new(NavigationKind::Resolved, r.location)
            },
            Outcome::Redirect(location) => Self::new(NavigationKind::Redirect, location),
            Outcome::NotFound(location) => Self::new(NavigationKind::NotFound, location),
        }
    }

    pub fn from_navigation(nav: Navigation<'_, View>) -> Self {
        let redirects = nav
            .redirected_from
            .iter()
            .map(|l| l.path.clone())
            .collect();
        let result = match nav.destination {
            Destination::Resolved(r) => Self {
                name: Some(r.name.to_string()),
                view: Some(*r.view),
                ..Self::new(NavigationKind::Resolved, r.location)
            },
            Destination::Fallback(r) => Self {
                name: Some(r.name.to_string()),
                view: Some(*r.view),
                ..Self::new(NavigationKind::Fallback, r.location)
            },
            Destination::NotFound(location) => Self::new(NavigationKind::NotFound, location),
        };
        Self { redirects, ..result }
    }
}

/// Owned storefront router for the binding
#[derive(Debug)]
pub struct Navigator {
    router: Router<View>,
}

impl Navigator {
    pub fn storefront() -> Result<Self, RoutingError> {
        Ok(Self {
            router: storefront_router()?,
        })
    }

    /// Build from route-file TOML text
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            router: RoutesFile::parse(source)?.into_router()?,
        })
    }

    pub fn resolve(&self, path: &str) -> NavigationResult {
        NavigationResult::from_outcome(self.router.resolve(path))
    }

    pub fn navigate(&self, path: &str) -> Result<NavigationResult, RoutingError> {
        Ok(NavigationResult::from_navigation(self.router.navigate(path)?))
    }

    /// Path of a named route; `params` alternates names and values
    pub fn href(&self, name: &str, params: &[String]) -> Result<String, BindingError> {
        if params.len() % 2 != 0 {
            return Err(BindingError::UnpairedParams(params.len()));
        }
        let pairs: Vec<(&str, &str)> = params
            .chunks_exact(2)
            .map(|kv| (kv[0].as_str(), kv[1].as_str()))
            .collect();
        Ok(self.router.href(name, &pairs)?)
    }
}
