//! Storage module - durable home of the session token
//!
//! One key-value pair survives restarts: the session token under
//! `"userToken"`. No-WASM environments keep it in a small JSON file;
//! WASM environments use the browser's localStorage.

/// Fixed persistence key for the session token.
pub const TOKEN_KEY: &str = "userToken";

#[cfg(feature = "no-wasm")]
pub mod no_wasm;
#[cfg(feature = "no-wasm")]
pub use no_wasm::FileTokenStore;

#[cfg(feature = "wasm")]
pub mod gloo;
#[cfg(feature = "wasm")]
pub use gloo::LocalStorageTokenStore;
