//! storefront-shell: Storefront route table and tooling
//!
//! Owns the storefront's view identifiers and its route table, and loads
//! alternative tables from TOML route files. The router itself lives in
//! `storefront-router`; rendering and history stay with the hosting shell.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod table;
pub mod view;

pub use config::{load_routes, RoutesFile};
pub use error::ConfigError;
pub use table::{storefront_builder, storefront_router, HOME_REDIRECT, STOREFRONT_ROUTES};
pub use view::{UnknownView, View};
