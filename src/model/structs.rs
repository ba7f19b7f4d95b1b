use serde::{Deserialize, Serialize};

// Common data structures used across all platforms

/// One checkbox-backed candidate in the selection widget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectableItem {
    pub key: String,
    pub label: String,
    pub checked: bool,
}

/// The full selection list plus the derived "at least one checked" flag.
///
/// `valid` is recomputed from `items` on every mutation; subscribers
/// never observe the two out of sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectionState {
    pub items: Vec<SelectableItem>,
    pub valid: bool,
}

/// Profile returned by `/auth/userinfo`.
///
/// The fake auth backend echoes a few extra fields (`password`,
/// `fakeToken`) in the same body; they are deliberately not modeled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(rename = "name")]
    pub display_name: DisplayName,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayName {
    pub first: String,
    pub last: String,
}

/// The authoritative logged-in flag broadcast to the application.
///
/// `username` rides along for display purposes and may lag behind the
/// flag when the profile fetch has not completed (or failed); only
/// `is_logged_in` carries authorization meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionState {
    pub is_logged_in: bool,
    pub username: Option<String>,
}

/// Where the session lifecycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    LoggedOut,
    Authenticating,
    Restoring,
    LoggedIn,
}
