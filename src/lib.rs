pub mod client;
pub mod error;
pub mod form;
pub mod interface;
pub mod model;
pub mod session;
pub mod storage;

#[cfg(feature = "no-wasm")]
pub use reqwest::Client;
#[cfg(feature = "no-wasm")]
pub use tokio;
