//! storefront-wasm: Storefront router for the browser shell
//!
//! Path resolution compiled to WebAssembly. The JavaScript shell feeds it
//! navigation paths and renders whatever view comes back.

pub mod navigation;

#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::*;

pub use navigation::{BindingError, NavigationKind, NavigationResult, Navigator};
