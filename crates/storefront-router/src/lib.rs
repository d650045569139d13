//! storefront-router: Client-side navigation router
//!
//! Resolves a requested path against an immutable route table to a named
//! view, a redirect, or a not-found outcome. Views are opaque identifiers
//! owned by the hosting shell; the router never renders or touches history.
//!
//! ## Features
//! - Literal paths matched segment by segment, first table entry wins
//! - Parameters and wildcards: `/orders/:id`, `/help/*topic`
//! - Redirects followed with cycle detection ([`Router::navigate`])
//! - Configurable not-found policy ([`NotFoundPolicy`])
//! - Reverse lookup by route name ([`Router::href`])
//!
//! ## Normalisation
//! - Empty and trailing segments are ignored unless `strict` is set
//! - Literal segments are case-insensitive unless `sensitive` is set
//! - Query and fragment are split off before matching and survive redirects
//!
//! ## Example
//! ```
//! use storefront_router::{Router, RoutingError};
//!
//! let router = Router::builder()
//!     .redirect("/", "/login")
//!     .view("/login", "login", "LoginView")
//!     .view("/cart", "cart", "CartView")
//!     .build()?;
//!
//! let nav = router.navigate("/")?;
//! let view = nav.resolved().map(|r| *r.view);
//! assert_eq!(view, Some("LoginView"));
//! # Ok::<(), RoutingError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
mod path;
mod router;
mod trie;

pub use error::{Result, RouteField, RoutingError};
pub use path::Location;
pub use router::{
    Destination, Navigation, NotFoundPolicy, Outcome, Params, Resolved, Route, Router,
    RouterBuilder, RouterOptions, Target,
};
