//! Request locations and route patterns
//!
//! ## Pattern Syntax
//! - `/products` - literal segment
//! - `:name` - named parameter (captures one segment)
//! - `*` or `*name` - wildcard (captures the remaining path, last segment only,
//!   no trailing slash)

use crate::error::{Result, RoutingError};
use crate::RouterOptions;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Path segments of a request, split on `/` with empty segments dropped
pub(crate) type Segments<'a> = SmallVec<[&'a str; 8]>;

fn split_segments(path: &str) -> Segments<'_> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Fold a literal segment for comparison
pub(crate) fn fold(segment: &str, sensitive: bool) -> Cow<'_, str> {
    if sensitive {
        Cow::Borrowed(segment)
    } else {
        Cow::Owned(segment.to_lowercase())
    }
}

/// A navigation request split into path, query and fragment.
///
/// ```
/// use storefront_router::Location;
///
/// let loc = Location::parse("/products?page=2#top");
/// assert_eq!(loc.path, "/products");
/// assert_eq!(loc.query.as_deref(), Some("page=2"));
/// assert_eq!(loc.fragment.as_deref(), Some("top"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    /// Path component, always starting with `/`
    pub path: String,
    /// Raw query string without the leading `?`
    pub query: Option<String>,
    /// Raw fragment without the leading `#`
    pub fragment: Option<String>,
}

impl Location {
    /// Split a raw request into its components
    pub fn parse(raw: &str) -> Self {
        let (rest, fragment) = match raw.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        Self {
            path,
            query,
            fragment,
        }
    }

    /// Location reached by following a redirect to `target`.
    ///
    /// A bare path target keeps this location's query and fragment; a target
    /// carrying its own `?` or `#` replaces both.
    pub fn redirect_to(&self, target: &str) -> Self {
        let next = Location::parse(target);
        if target.contains('?') || target.contains('#') {
            next
        } else {
            Location {
                path: next.path,
                query: self.query.clone(),
                fragment: self.fragment.clone(),
            }
        }
    }

    pub(crate) fn segments(&self) -> Segments<'_> {
        split_segments(&self.path)
    }

    pub(crate) fn has_trailing_slash(&self) -> bool {
        self.path.len() > 1 && self.path.ends_with('/')
    }

    /// Normalised path used to detect revisits in a redirect chain
    pub(crate) fn key(&self, options: RouterOptions) -> String {
        let mut key = String::with_capacity(self.path.len());
        for segment in self.segments() {
            key.push('/');
            key.push_str(&fold(segment, options.sensitive));
        }
        if key.is_empty() || (options.strict && self.has_trailing_slash()) {
            key.push('/');
        }
        key
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Static(String),
    Param(String),
    Wildcard(String),
}

/// Parsed route path
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Pattern {
    pub(crate) segments: Vec<Segment>,
    pub(crate) trailing_slash: bool,
}

impl Pattern {
    pub(crate) fn parse(path: &str) -> Result<Self> {
        validate_target(path)?;
        let raw = split_segments(path);
        let mut segments = Vec::with_capacity(raw.len());
        for (i, segment) in raw.iter().enumerate() {
            if let Some(name) = segment.strip_prefix(':') {
                if name.is_empty() {
                    return Err(RoutingError::invalid_path(path, "empty parameter name"));
                }
                segments.push(Segment::Param(name.to_string()));
            } else if let Some(name) = segment.strip_prefix('*') {
                if i + 1 != raw.len() {
                    return Err(RoutingError::invalid_path(
                        path,
                        "wildcard must be the last segment",
                    ));
                }
                let name = if name.is_empty() { "*" } else { name };
                segments.push(Segment::Wildcard(name.to_string()));
            } else {
                segments.push(Segment::Static(segment.to_string()));
            }
        }
        let trailing_slash = path.len() > 1 && path.ends_with('/');
        // A wildcard already swallows any trailing slash of the request
        if trailing_slash && matches!(segments.last(), Some(Segment::Wildcard(_))) {
            return Err(RoutingError::invalid_path(
                path,
                "wildcard must not be followed by a slash",
            ));
        }
        Ok(Self {
            segments,
            trailing_slash,
        })
    }

    /// Key under which two patterns are considered the same route.
    /// Parameter names do not distinguish patterns.
    pub(crate) fn key(&self, options: RouterOptions) -> String {
        let mut key = String::new();
        for segment in &self.segments {
            key.push('/');
            match segment {
                Segment::Static(s) => key.push_str(&fold(s, options.sensitive)),
                Segment::Param(_) => key.push(':'),
                Segment::Wildcard(_) => key.push('*'),
            }
        }
        if key.is_empty() || (options.strict && self.trailing_slash) {
            key.push('/');
        }
        key
    }

    /// Names of captured segments, in capture order
    pub(crate) fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) | Segment::Wildcard(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Render a concrete path, substituting percent-encoded values from `params`
    pub(crate) fn render(&self, route: &str, params: &[(&str, &str)]) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            let (name, wildcard) = match segment {
                Segment::Static(s) => {
                    out.push_str(s);
                    continue;
                }
                Segment::Param(name) => (name, false),
                Segment::Wildcard(name) => (name, true),
            };
            let value = params
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.trim_matches('/'))
                .ok_or_else(|| RoutingError::MissingParam {
                    route: route.to_string(),
                    param: name.clone(),
                })?;
            if wildcard {
                // Slashes in a wildcard value separate segments
                let parts: Vec<_> = value.split('/').map(urlencoding::encode).collect();
                out.push_str(&parts.join("/"));
            } else {
                out.push_str(&urlencoding::encode(value));
            }
        }
        if out.is_empty() || self.trailing_slash {
            out.push('/');
        }
        Ok(out)
    }
}

/// Route paths must be absolute and carry no query or fragment
fn validate_target(path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(RoutingError::invalid_path(path, "must start with '/'"));
    }
    if path.contains('?') || path.contains('#') {
        return Err(RoutingError::invalid_path(
            path,
            "must not contain a query or fragment",
        ));
    }
    Ok(())
}

/// Redirect targets may carry a query or fragment (see [`Location::redirect_to`])
pub(crate) fn validate_redirect(target: &str) -> Result<()> {
    if !target.starts_with('/') {
        return Err(RoutingError::invalid_path(target, "must start with '/'"));
    }
    Ok(())
}
