//! Route table and navigation resolution

use crate::error::{Result, RouteField, RoutingError};
use crate::path::{validate_redirect, Location, Pattern};
use crate::trie::{Captures, Trie};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// Path matching options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouterOptions {
    /// A trailing slash must match exactly (`/cart/` does not match `/cart`)
    pub strict: bool,
    /// Literal segments are compared case-sensitively
    pub sensitive: bool,
}

/// What `navigate` does with a path no route matches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NotFoundPolicy {
    /// End navigation with [`Destination::NotFound`]
    #[default]
    Report,
    /// Follow a redirect to this path
    Redirect(String),
    /// Render the view of the route with this name
    Render(String),
}

/// Where a route leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<V> {
    View { name: String, view: V },
    Redirect { name: Option<String>, to: String },
}

impl<V> Target<V> {
    pub fn name(&self) -> Option<&str> {
        match self {
            Target::View { name, .. } => Some(name),
            Target::Redirect { name, .. } => name.as_deref(),
        }
    }
}

/// A route table entry
#[derive(Debug, Clone)]
pub struct Route<V> {
    path: String,
    target: Target<V>,
    pattern: Pattern,
}

impl<V> Route<V> {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.target.name()
    }

    pub fn target(&self) -> &Target<V> {
        &self.target
    }

    pub fn view(&self) -> Option<&V> {
        match &self.target {
            Target::View { view, .. } => Some(view),
            Target::Redirect { .. } => None,
        }
    }

    pub fn redirect_to(&self) -> Option<&str> {
        match &self.target {
            Target::Redirect { to, .. } => Some(to),
            Target::View { .. } => None,
        }
    }
}

fn decode(value: String) -> String {
    let decoded = urlencoding::decode(&value).ok().map(Cow::into_owned);
    decoded.unwrap_or(value)
}

/// Captured path parameters as (name, value) pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(SmallVec<[(String, String); 4]>);

impl Params {
    /// Pair names with captured values, percent-decoding each value.
    /// Values that do not decode to UTF-8 are kept as captured.
    fn capture<'a>(names: impl Iterator<Item = &'a str>, values: Captures) -> Self {
        Self(
            names
                .map(str::to_string)
                .zip(values.into_iter().map(decode))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A path resolved to a view
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'r, V> {
    pub name: &'r str,
    pub view: &'r V,
    pub params: Params,
    /// The location that matched, query and fragment included
    pub location: Location,
}

/// Result of a single resolution step
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<'r, V> {
    Resolved(Resolved<'r, V>),
    /// Resolve again at this location
    Redirect(Location),
    NotFound(Location),
}

/// Terminal result of [`Router::navigate`]
#[derive(Debug, Clone, PartialEq)]
pub enum Destination<'r, V> {
    Resolved(Resolved<'r, V>),
    /// Nothing matched; the not-found policy picked this view
    Fallback(Resolved<'r, V>),
    NotFound(Location),
}

/// A completed navigation
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation<'r, V> {
    pub destination: Destination<'r, V>,
    /// Locations that redirected, in the order they were visited
    pub redirected_from: Vec<Location>,
}

impl<'r, V> Navigation<'r, V> {
    /// The view to render, if any
    pub fn resolved(&self) -> Option<&Resolved<'r, V>> {
        match &self.destination {
            Destination::Resolved(r) | Destination::Fallback(r) => Some(r),
            Destination::NotFound(_) => None,
        }
    }
}

/// Immutable navigation router.
///
/// Built once at start-up with [`Router::builder`] and handed to the hosting
/// shell. Views are opaque to the router.
#[derive(Debug)]
pub struct Router<V> {
    routes: Vec<Route<V>>,
    trie: Trie,
    names: HashMap<String, usize>,
    options: RouterOptions,
    not_found: NotFoundPolicy,
    fallback: Option<usize>,
}

impl<V> Router<V> {
    pub fn builder() -> RouterBuilder<V> {
        RouterBuilder::new()
    }

    /// Resolve a path in one step.
    ///
    /// Redirect routes yield [`Outcome::Redirect`]; the caller resolves the
    /// new location itself, or uses [`Router::navigate`].
    ///
    /// ```
    /// use storefront_router::{Outcome, Router};
    ///
    /// let router = Router::builder()
    ///     .redirect("/", "/login")
    ///     .view("/login", "login", "LoginView")
    ///     .build()
    ///     .unwrap();
    ///
    /// let Outcome::Redirect(next) = router.resolve("/") else { panic!() };
    /// assert_eq!(next.path, "/login");
    ///
    /// let Outcome::Resolved(r) = router.resolve(&next.path) else { panic!() };
    /// assert_eq!((r.name, *r.view), ("login", "LoginView"));
    /// ```
    pub fn resolve(&self, path: &str) -> Outcome<'_, V> {
        self.resolve_location(Location::parse(path))
    }

    fn resolve_location(&self, location: Location) -> Outcome<'_, V> {
        let found = self
            .trie
            .find(&location.segments(), location.has_trailing_slash());
        let Some(found) = found else {
            tracing::debug!(path = %location.path, "no route matched");
            return Outcome::NotFound(location);
        };

        let route = &self.routes[found.route];
        match &route.target {
            Target::Redirect { to, .. } => {
                tracing::debug!(path = %location.path, to = %to, "redirect");
                Outcome::Redirect(location.redirect_to(to))
            }
            Target::View { name, view } => {
                tracing::debug!(path = %location.path, route = %name, "resolved");
                Outcome::Resolved(Resolved {
                    name,
                    view,
                    params: Params::capture(route.pattern.param_names(), found.captures),
                    location,
                })
            }
        }
    }

    /// Resolve a path, following redirects to a terminal destination.
    ///
    /// Fails with [`RoutingError::RedirectCycle`] if the chain revisits a path.
    pub fn navigate(&self, path: &str) -> Result<Navigation<'_, V>> {
        let mut location = Location::parse(path);
        let mut seen = HashSet::new();
        let mut redirected_from = Vec::new();
        let mut fell_back = false;

        loop {
            if !seen.insert(location.key(self.options)) {
                let chain: Vec<String> = redirected_from
                    .iter()
                    .map(|l: &Location| l.path.clone())
                    .chain(std::iter::once(location.path.clone()))
                    .collect();
                tracing::error!(chain = ?chain, "redirect cycle");
                return Err(RoutingError::RedirectCycle { chain });
            }

            let destination = match self.resolve_location(location.clone()) {
                Outcome::Resolved(resolved) => Destination::Resolved(resolved),
                Outcome::Redirect(next) => {
                    redirected_from.push(std::mem::replace(&mut location, next));
                    continue;
                }
                Outcome::NotFound(missed) => match (&self.not_found, fell_back) {
                    (NotFoundPolicy::Redirect(to), false) => {
                        let next = missed.redirect_to(to);
                        // The fallback itself is unmatched; redirecting would revisit it
                        if next.key(self.options) == missed.key(self.options) {
                            self.fallback_for(missed)
                        } else {
                            tracing::warn!(path = %missed.path, to = %to, "no route matched, redirecting");
                            fell_back = true;
                            location = next;
                            redirected_from.push(missed);
                            continue;
                        }
                    }
                    _ => self.fallback_for(missed),
                },
            };

            return Ok(Navigation {
                destination,
                redirected_from,
            });
        }
    }

    fn fallback_for(&self, location: Location) -> Destination<'_, V> {
        let fallback = self.fallback.map(|i| &self.routes[i].target);
        match fallback {
            Some(Target::View { name, view }) => {
                tracing::warn!(path = %location.path, fallback = %name, "no route matched, rendering fallback");
                Destination::Fallback(Resolved {
                    name,
                    view,
                    params: Params::default(),
                    location,
                })
            }
            _ => {
                tracing::warn!(path = %location.path, "no route matched");
                Destination::NotFound(location)
            }
        }
    }

    /// Look up a route by name
    pub fn route(&self, name: &str) -> Option<&Route<V>> {
        self.names.get(name).map(|&i| &self.routes[i])
    }

    /// Build the path of a named route.
    ///
    /// ```
    /// use storefront_router::Router;
    ///
    /// let router = Router::builder()
    ///     .view("/orders/:id", "order", ())
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(router.href("order", &[("id", "42")]).unwrap(), "/orders/42");
    /// ```
    pub fn href(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let route = self
            .route(name)
            .ok_or_else(|| RoutingError::UnknownRoute(name.to_string()))?;
        route.pattern.render(name, params)
    }

    /// Routes in table order
    pub fn routes(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn options(&self) -> RouterOptions {
        self.options
    }

    pub fn not_found_policy(&self) -> &NotFoundPolicy {
        &self.not_found
    }
}

/// Collects route entries and validates them into a [`Router`]
#[derive(Debug)]
pub struct RouterBuilder<V> {
    entries: Vec<(String, Target<V>)>,
    options: RouterOptions,
    not_found: NotFoundPolicy,
}

impl<V> Default for RouterBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RouterBuilder<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            options: RouterOptions::default(),
            not_found: NotFoundPolicy::default(),
        }
    }

    /// Add a route rendering `view`
    pub fn view(self, path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        self.route(
            path,
            Target::View {
                name: name.into(),
                view,
            },
        )
    }

    /// Add an unnamed redirect
    pub fn redirect(self, path: impl Into<String>, to: impl Into<String>) -> Self {
        self.route(
            path,
            Target::Redirect {
                name: None,
                to: to.into(),
            },
        )
    }

    pub fn named_redirect(
        self,
        path: impl Into<String>,
        name: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.route(
            path,
            Target::Redirect {
                name: Some(name.into()),
                to: to.into(),
            },
        )
    }

    pub fn route(mut self, path: impl Into<String>, target: Target<V>) -> Self {
        self.entries.push((path.into(), target));
        self
    }

    pub fn options(mut self, options: RouterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    pub fn sensitive(mut self, sensitive: bool) -> Self {
        self.options.sensitive = sensitive;
        self
    }

    pub fn not_found(mut self, policy: NotFoundPolicy) -> Self {
        self.not_found = policy;
        self
    }

    /// Validate the table and build the router.
    ///
    /// Fails on the first duplicate path or name, malformed path, or bad
    /// not-found policy.
    pub fn build(self) -> Result<Router<V>> {
        let mut trie = Trie::new(self.options);
        let mut routes = Vec::with_capacity(self.entries.len());
        let mut paths: HashMap<String, usize> = HashMap::new();
        let mut names: HashMap<String, usize> = HashMap::new();

        for (index, (path, target)) in self.entries.into_iter().enumerate() {
            let pattern = Pattern::parse(&path)?;
            if let Target::Redirect { to, .. } = &target {
                validate_redirect(to)?;
            }

            let key = pattern.key(self.options);
            if let Some(&first) = paths.get(&key) {
                return Err(RoutingError::DuplicateRoute {
                    field: RouteField::Path,
                    value: path,
                    first,
                    second: index,
                });
            }
            paths.insert(key, index);

            if let Some(name) = target.name() {
                if let Some(&first) = names.get(name) {
                    return Err(RoutingError::DuplicateRoute {
                        field: RouteField::Name,
                        value: name.to_string(),
                        first,
                        second: index,
                    });
                }
                names.insert(name.to_string(), index);
            }

            trie.insert(&pattern, index);
            routes.push(Route {
                path,
                target,
                pattern,
            });
        }

        let fallback = match &self.not_found {
            NotFoundPolicy::Report => None,
            NotFoundPolicy::Redirect(to) => {
                validate_redirect(to)?;
                None
            }
            NotFoundPolicy::Render(name) => {
                let index = *names
                    .get(name)
                    .ok_or_else(|| RoutingError::UnknownRoute(name.clone()))?;
                if routes[index].view().is_none() {
                    return Err(RoutingError::InvalidFallback(name.clone()));
                }
                Some(index)
            }
        };

        tracing::info!(routes = routes.len(), not_found = ?self.not_found, "route table built");

        Ok(Router {
            routes,
            trie,
            names,
            options: self.options,
            not_found: self.not_found,
            fallback,
        })
    }
}
