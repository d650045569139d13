//! WASM bindings for the JavaScript shell

use crate::navigation::{NavigationResult, Navigator};
use wasm_bindgen::prelude::*;

// ============================================================================
// Router
// ============================================================================

/// WASM-exposed storefront router
#[wasm_bindgen]
pub struct StorefrontRouter {
    inner: Navigator,
}

#[wasm_bindgen]
impl StorefrontRouter {
    /// Router over the built-in storefront table
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<StorefrontRouter, JsError> {
        Ok(Self {
            inner: Navigator::storefront()?,
        })
    }

    /// Router over a TOML route file's contents
    #[wasm_bindgen(js_name = fromToml)]
    pub fn from_toml(source: &str) -> Result<StorefrontRouter, JsError> {
        Ok(Self {
            inner: Navigator::from_toml(source)?,
        })
    }

    /// Single resolution step; the shell re-resolves on "redirect"
    pub fn resolve(&self, path: &str) -> RouteResult {
        self.inner.resolve(path).into()
    }

    /// Follow redirects; throws on a redirect cycle
    pub fn navigate(&self, path: &str) -> Result<RouteResult, JsError> {
        Ok(self.inner.navigate(path)?.into())
    }

    /// Path of a named route, params as [name, value, name, value, ...]
    pub fn href(&self, name: &str, params: Vec<String>) -> Result<String, JsError> {
        Ok(self.inner.href(name, &params)?)
    }
}

/// Navigation result for WASM
#[wasm_bindgen]
pub struct RouteResult {
    kind: String,
    name: Option<String>,
    view: Option<String>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
    redirects: Vec<String>,
}

#[wasm_bindgen]
impl RouteResult {
    /// "resolved", "fallback", "redirect" or "not_found"
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> String {
        self.kind.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> Option<String> {
        self.name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn view(&self) -> Option<String> {
        self.view.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn path(&self) -> String {
        self.path.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn query(&self) -> Option<String> {
        self.query.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.clone()
    }
}

impl From<NavigationResult> for RouteResult {
    fn from(result: NavigationResult) -> Self {
        Self {
            kind: result.kind.as_str().to_string(),
            name: result.name,
            view: result.view.map(|v| v.as_str().to_string()),
            path: result.location.path,
            query: result.location.query,
            fragment: result.location.fragment,
            redirects: result.redirects,
        }
    }
}
