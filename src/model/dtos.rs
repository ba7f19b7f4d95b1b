use serde::{Deserialize, Serialize};

/// Credential pair handed to `AuthApi::login`. Transient; never
/// persisted, never logged.
#[derive(Clone)]
pub struct LoginParams<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

// LoginParams carries a password; keep it out of Debug output.
impl std::fmt::Debug for LoginParams<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("LoginParams")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// JSON body for `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequestBody<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Success body of `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginResponseBody {
    pub token: String,
}

/// Error body the server attaches to non-success statuses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
