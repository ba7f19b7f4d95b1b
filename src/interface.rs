#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::model::dtos::LoginParams;
use crate::model::structs::UserProfile;

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance
    async fn new() -> Result<Self>
    where
        Self: Sized;
}

/// The two auth endpoints the core talks to.
pub trait AuthApi {
    /// Exchange credentials for a session token.
    ///
    /// Returns `AuthRejected` for a non-success status (message taken
    /// from the response body when the server provides one) and
    /// `NetworkError` when the server was never reached.
    async fn login(&self, params: LoginParams<'_>) -> Result<String>;

    /// Fetch the profile belonging to `token`.
    ///
    /// Any outcome other than a transport failure that is not a valid
    /// profile maps to `TokenInvalid`. Never mutates session state.
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile>;
}

/// Durable home of the one persisted token.
///
/// Single writer (the session manager); read once at start-up.
pub trait TokenStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}
