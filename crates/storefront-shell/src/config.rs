//! Route tables loaded from TOML
//!
//! ```toml
//! [options]
//! strict = false
//! sensitive = false
//!
//! [not_found]
//! redirect = "/login"     # or: render = "login"
//!
//! [[routes]]
//! path = "/"
//! redirect = "/login"
//!
//! [[routes]]
//! path = "/login"
//! name = "login"
//! view = "LoginView"
//! ```

use crate::error::ConfigError;
use crate::View;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use storefront_router::{NotFoundPolicy, Router, RouterOptions, Target};

/// Root of a route file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutesFile {
    pub options: OptionsConfig,
    pub not_found: NotFoundConfig,
    pub routes: Vec<RouteEntry>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionsConfig {
    pub strict: bool,
    pub sensitive: bool,
}

/// At most one of `redirect` and `render`; neither means report not-found
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotFoundConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<String>,
}

/// One route: exactly one of `view` (with a `name`) and `redirect`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl RouteEntry {
    fn target(self) -> Result<(String, Target<View>), ConfigError> {
        let target = match (self.view, self.redirect) {
            (Some(view), None) => {
                let name = self.name.ok_or(ConfigError::InvalidEntry {
                    path: self.path.clone(),
                    reason: "a view route needs a name",
                })?;
                Target::View {
                    name,
                    view: view.parse()?,
                }
            }
            (None, Some(to)) => Target::Redirect {
                name: self.name,
                to,
            },
            (Some(_), Some(_)) => {
                return Err(ConfigError::InvalidEntry {
                    path: self.path,
                    reason: "both view and redirect set",
                })
            }
            (None, None) => {
                return Err(ConfigError::InvalidEntry {
                    path: self.path,
                    reason: "neither view nor redirect set",
                })
            }
        };
        Ok((self.path, target))
    }
}

impl NotFoundConfig {
    fn policy(self) -> Result<NotFoundPolicy, ConfigError> {
        match (self.redirect, self.render) {
            (None, None) => Ok(NotFoundPolicy::Report),
            (Some(to), None) => Ok(NotFoundPolicy::Redirect(to)),
            (None, Some(name)) => Ok(NotFoundPolicy::Render(name)),
            (Some(_), Some(_)) => Err(ConfigError::InvalidNotFound(
                "redirect and render are exclusive",
            )),
        }
    }
}

impl RoutesFile {
    /// Parse a route file from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Describe an existing router as a route file
    pub fn from_router(router: &Router<View>) -> Self {
        let options = router.options();
        let not_found = match router.not_found_policy() {
            NotFoundPolicy::Report => NotFoundConfig::default(),
            NotFoundPolicy::Redirect(to) => NotFoundConfig {
                redirect: Some(to.clone()),
                render: None,
            },
            NotFoundPolicy::Render(name) => NotFoundConfig {
                redirect: None,
                render: Some(name.clone()),
            },
        };
        let routes = router
            .routes()
            .map(|route| RouteEntry {
                path: route.path().to_string(),
                name: route.name().map(str::to_string),
                view: route.view().map(|v| v.as_str().to_string()),
                redirect: route.redirect_to().map(str::to_string),
            })
            .collect();

        Self {
            options: OptionsConfig {
                strict: options.strict,
                sensitive: options.sensitive,
            },
            not_found,
            routes,
        }
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Validate entries and build the router
    pub fn into_router(self) -> Result<Router<View>, ConfigError> {
        let mut builder = Router::builder()
            .options(RouterOptions {
                strict: self.options.strict,
                sensitive: self.options.sensitive,
            })
            .not_found(self.not_found.policy()?);
        for entry in self.routes {
            let (path, target) = entry.target()?;
            builder = builder.route(path, target);
        }
        Ok(builder.build()?)
    }
}

/// Load and validate a route table from a TOML file
pub fn load_routes(path: &Path) -> Result<Router<View>, ConfigError> {
    let content = fs::read_to_string(path)?;
    let router = RoutesFile::parse(&content)?.into_router()?;
    tracing::info!(path = %path.display(), routes = router.len(), "route file loaded");
    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_router::{Outcome, RoutingError};

    #[test]
    fn test_minimal_file() {
        let router = RoutesFile::parse(
            r#"
            [[routes]]
            path = "/"
            redirect = "/login"

            [[routes]]
            path = "/login"
            name = "login"
            view = "LoginView"
            "#,
        )
        .unwrap()
        .into_router()
        .unwrap();

        assert_eq!(router.len(), 2);
        assert_eq!(router.options(), RouterOptions::default());
        assert_eq!(router.not_found_policy(), &NotFoundPolicy::Report);
        assert!(matches!(router.resolve("/"), Outcome::Redirect(_)));
    }

    #[test]
    fn test_options_and_policy() {
        let router = RoutesFile::parse(
            r#"
            [options]
            strict = true

            [not_found]
            render = "login"

            [[routes]]
            path = "/login"
            name = "login"
            view = "LoginView"
            "#,
        )
        .unwrap()
        .into_router()
        .unwrap();

        assert!(router.options().strict);
        assert!(!router.options().sensitive);
        assert_eq!(
            router.not_found_policy(),
            &NotFoundPolicy::Render("login".into())
        );
    }

    #[test]
    fn test_view_without_name() {
        let err = RoutesFile::parse(
            r#"
            [[routes]]
            path = "/cart"
            view = "CartView"
            "#,
        )
        .unwrap()
        .into_router()
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEntry { path, .. } if path == "/cart"));
    }

    #[test]
    fn test_both_and_neither_target() {
        let both = RoutesFile::parse(
            r#"
            [[routes]]
            path = "/cart"
            name = "cart"
            view = "CartView"
            redirect = "/login"
            "#,
        )
        .unwrap()
        .into_router();
        assert!(matches!(both, Err(ConfigError::InvalidEntry { .. })));

        let neither = RoutesFile::parse("[[routes]]\npath = \"/cart\"\n")
            .unwrap()
            .into_router();
        assert!(matches!(neither, Err(ConfigError::InvalidEntry { .. })));
    }

    #[test]
    fn test_unknown_view() {
        let err = RoutesFile::parse(
            r#"
            [[routes]]
            path = "/checkout"
            name = "checkout"
            view = "CheckoutView"
            "#,
        )
        .unwrap()
        .into_router()
        .unwrap_err();
        assert_eq!(err.to_string(), "Unknown view: CheckoutView");
    }

    #[test]
    fn test_exclusive_not_found() {
        let err = RoutesFile::parse(
            r#"
            [not_found]
            redirect = "/login"
            render = "login"
            "#,
        )
        .unwrap()
        .into_router()
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNotFound(_)));
    }

    #[test]
    fn test_duplicate_routes_rejected() {
        let err = RoutesFile::parse(
            r#"
            [[routes]]
            path = "/cart"
            name = "cart"
            view = "CartView"

            [[routes]]
            path = "/basket"
            name = "cart"
            view = "CartView"
            "#,
        )
        .unwrap()
        .into_router()
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Routing(RoutingError::DuplicateRoute { .. })
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = RoutesFile::parse(
            r#"
            [[routes]]
            path = "/cart"
            component = "CartView"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
