//! Client module - HTTP implementations of the auth endpoints
//!
//! This module provides a unified interface for talking to the auth
//! backend while supporting different implementations for WASM
//! (gloo_net) and no-WASM (reqwest) environments.

/// Backend the original shell develops against.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3004";

#[cfg(feature = "no-wasm")]
pub mod request;
#[cfg(feature = "no-wasm")]
pub use request::NativeClient;

#[cfg(feature = "wasm")]
pub mod gloo;
#[cfg(feature = "wasm")]
pub use gloo::WasmClient;
