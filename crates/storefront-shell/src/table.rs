//! The storefront route table

use crate::View;
use storefront_router::{Result, Router, RouterBuilder};

/// Where `/` sends visitors
pub const HOME_REDIRECT: &str = "/login";

/// Storefront views as (path, name, view), in table order after the `/` redirect
pub const STOREFRONT_ROUTES: [(&str, &str, View); 8] = [
    ("/login", "login", View::Login),
    ("/products", "products", View::Products),
    ("/my-orders", "my-orders", View::MyOrders),
    ("/cart", "cart", View::Cart),
    ("/admin", "admin", View::Admin),
    ("/register", "register", View::Register),
    ("/payment", "payment", View::Payment),
    ("/chat", "chat", View::Chat),
];

/// Builder preloaded with the storefront table, for shells that want to
/// change options or the not-found policy before building
pub fn storefront_builder() -> RouterBuilder<View> {
    STOREFRONT_ROUTES.into_iter().fold(
        Router::builder().redirect("/", HOME_REDIRECT),
        |builder, (path, name, view)| builder.view(path, name, view),
    )
}

/// The storefront router with default options
pub fn storefront_router() -> Result<Router<View>> {
    storefront_builder().build()
}
