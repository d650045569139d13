//! Storefront view identifiers

use std::fmt;
use std::str::FromStr;

/// Views the storefront shell knows how to render.
///
/// The router treats these as opaque; the string form is what route files
/// and the browser binding use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Login,
    Products,
    MyOrders,
    Cart,
    Admin,
    Register,
    Payment,
    Chat,
}

impl View {
    pub const ALL: [View; 8] = [
        View::Login,
        View::Products,
        View::MyOrders,
        View::Cart,
        View::Admin,
        View::Register,
        View::Payment,
        View::Chat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Login => "LoginView",
            View::Products => "ProductsView",
            View::MyOrders => "MyOrdersView",
            View::Cart => "CartView",
            View::Admin => "AdminView",
            View::Register => "RegisterView",
            View::Payment => "PaymentView",
            View::Chat => "ChatView",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

/// A view identifier no storefront view answers to
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown view: {0}")]
pub struct UnknownView(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>(), Ok(view));
        }
    }

    #[test]
    fn test_unknown_view() {
        assert_eq!(
            "CheckoutView".parse::<View>(),
            Err(UnknownView("CheckoutView".into()))
        );
        // Identifiers are exact
        assert!("loginview".parse::<View>().is_err());
    }
}
