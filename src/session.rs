//! Session manager
//!
//! Single writer of [`SessionState`]: owns the token lifecycle from
//! credential exchange through persistence, restore-on-startup and
//! logout, and pushes every state change to its subscribers.
//!
//! A token on disk is necessary but not sufficient for `is_logged_in`;
//! the flag flips only after the server confirms the token through a
//! profile fetch (or an explicit login success). Every restart
//! re-validates.

use std::sync::{Arc, Mutex};

use crate::error::{ErrorKind, Result};
use crate::interface::{AuthApi, TokenStore};
use crate::model::dtos::LoginParams;
use crate::model::structs::{SessionPhase, SessionState, UserProfile};

type SessionCallback = Arc<dyn Fn(&SessionState) + Send + Sync>;

struct SessionInner {
    phase: SessionPhase,
    state: SessionState,
    profile: Option<UserProfile>,
    // Bumped by every logout. An async attempt captures the value when
    // it starts and commits its outcome only if it is unchanged when
    // the network call returns: the most recent causal outcome wins,
    // not the most recently completed request.
    generation: u64,
    subscribers: Vec<SessionCallback>,
}

/// Owns the authentication lifecycle and the logged-in flag.
///
/// Generic over the auth endpoints and the token store, which is also
/// the test seam. Cheap to clone; clones share the same session.
pub struct SessionManager<A, S> {
    api: A,
    store: S,
    inner: Arc<Mutex<SessionInner>>,
}

impl<A: Clone, S: Clone> Clone for SessionManager<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            store: self.store.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, S> SessionManager<A, S>
where
    A: AuthApi,
    S: TokenStore,
{
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            inner: Arc::new(Mutex::new(SessionInner {
                phase: SessionPhase::LoggedOut,
                state: SessionState::default(),
                profile: None,
                generation: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Exchange credentials for a token and establish the session.
    ///
    /// On success the token is persisted and the profile fetched
    /// best-effort before the logged-in flag flips. At most one
    /// login/restore attempt may be in flight; a concurrent call gets
    /// `OperationInProgress` synchronously with no state change.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let (generation, cleared) = {
            let mut inner = self.inner.lock().unwrap();
            match inner.phase {
                SessionPhase::Authenticating | SessionPhase::Restoring => {
                    return Err(ErrorKind::OperationInProgress.into());
                }
                SessionPhase::LoggedOut | SessionPhase::LoggedIn => {}
            }
            // Re-login over a live session drops it first, so a failed
            // exchange cannot leave a stale logged-in flag behind.
            let cleared = if inner.phase == SessionPhase::LoggedIn {
                inner.profile = None;
                inner.state.is_logged_in = false;
                inner.state.username = None;
                Some(inner.state.clone())
            } else {
                None
            };
            inner.phase = SessionPhase::Authenticating;
            (inner.generation, cleared)
        };

        if let Some(state) = cleared {
            self.notify(&state);
        }

        let params = LoginParams { username, password };
        let token = match self.api.login(params).await {
            Ok(token) => token,
            Err(e) => {
                let mut inner = self.inner.lock().unwrap();
                if inner.generation == generation && inner.phase == SessionPhase::Authenticating {
                    inner.phase = SessionPhase::LoggedOut;
                }
                return Err(e);
            }
        };

        // Best-effort: a missing profile does not fail the login, it
        // only leaves the display name unset.
        let profile = match self.api.fetch_profile(&token).await {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::warn!("profile fetch after login failed: {e}");
                None
            }
        };

        let committed = {
            let mut inner = self.inner.lock().unwrap();
            if inner.generation != generation {
                // A logout overtook this exchange; its outcome stands.
                log::info!("discarding login outcome superseded by logout");
                None
            } else {
                if let Err(e) = self.store.save(&token) {
                    log::warn!("failed to persist session token: {e}");
                }
                inner.phase = SessionPhase::LoggedIn;
                inner.state.is_logged_in = true;
                inner.state.username = profile.as_ref().map(|p| p.username.clone());
                inner.profile = profile;
                Some(inner.state.clone())
            }
        };

        if let Some(state) = committed {
            self.notify(&state);
        }

        Ok(token)
    }

    /// Drop the session. Local state is authoritative: the flag clears
    /// immediately, the stored token is deleted, and no server round
    /// trip is involved. Never fails.
    pub fn logout(&self) {
        let state = {
            let mut inner = self.inner.lock().unwrap();
            inner.generation += 1;
            inner.phase = SessionPhase::LoggedOut;
            inner.profile = None;
            inner.state.is_logged_in = false;
            inner.state.username = None;
            inner.state.clone()
        };

        if let Err(e) = self.store.clear() {
            log::warn!("failed to delete stored token: {e}");
        }

        self.notify(&state);
    }

    /// Re-establish the session from a previously persisted token.
    ///
    /// Idempotent; a call while logged in or while another attempt is
    /// in flight is a no-op. A stored token is only trusted after the
    /// profile endpoint confirms it: rejection purges the token and
    /// lands in `LoggedOut` as a normal outcome (`Ok(false)`). Only a
    /// transport failure surfaces as an error, with the token kept for
    /// a later retry.
    pub async fn restore_session(&self) -> Result<bool> {
        let generation = {
            let mut inner = self.inner.lock().unwrap();
            match inner.phase {
                SessionPhase::LoggedIn => return Ok(true),
                SessionPhase::Authenticating | SessionPhase::Restoring => {
                    return Ok(inner.state.is_logged_in);
                }
                SessionPhase::LoggedOut => {}
            }
            inner.phase = SessionPhase::Restoring;
            inner.generation
        };

        let token = match self.store.load() {
            Ok(token) => token,
            Err(e) => {
                log::warn!("unreadable token store, treating as logged out: {e}");
                None
            }
        };

        let Some(token) = token else {
            let mut inner = self.inner.lock().unwrap();
            if inner.generation == generation && inner.phase == SessionPhase::Restoring {
                inner.phase = SessionPhase::LoggedOut;
            }
            return Ok(false);
        };

        match self.api.fetch_profile(&token).await {
            Ok(profile) => {
                let committed = {
                    let mut inner = self.inner.lock().unwrap();
                    if inner.generation != generation {
                        log::info!("discarding restore outcome superseded by logout");
                        None
                    } else {
                        inner.phase = SessionPhase::LoggedIn;
                        inner.state.is_logged_in = true;
                        inner.state.username = Some(profile.username.clone());
                        inner.profile = Some(profile);
                        Some(inner.state.clone())
                    }
                };

                match committed {
                    Some(state) => {
                        self.notify(&state);
                        Ok(true)
                    }
                    None => Ok(false),
                }
            }
            Err(e) if matches!(e.kind(), ErrorKind::NetworkError(_)) => {
                // The server never judged the token; keep it so a later
                // restore can retry.
                let mut inner = self.inner.lock().unwrap();
                if inner.generation == generation && inner.phase == SessionPhase::Restoring {
                    inner.phase = SessionPhase::LoggedOut;
                }
                Err(e)
            }
            Err(e) => {
                log::info!("stored token rejected, purging: {e}");
                let mut inner = self.inner.lock().unwrap();
                if inner.generation == generation {
                    if let Err(e) = self.store.clear() {
                        log::warn!("failed to purge stale token: {e}");
                    }
                    if inner.phase == SessionPhase::Restoring {
                        inner.phase = SessionPhase::LoggedOut;
                    }
                }
                Ok(false)
            }
        }
    }

    /// Non-blocking read of the logged-in flag.
    pub fn is_authenticated(&self) -> bool {
        self.inner.lock().unwrap().state.is_logged_in
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.inner.lock().unwrap().state.clone()
    }

    /// Profile from the most recent login or restore, if any.
    pub fn current_profile(&self) -> Option<UserProfile> {
        self.inner.lock().unwrap().profile.clone()
    }

    /// Fetch the profile for an arbitrary token. Mutates nothing; the
    /// session only changes through `login`/`restore_session`/`logout`.
    pub async fn fetch_profile(&self, token: &str) -> Result<UserProfile> {
        self.api.fetch_profile(token).await
    }

    /// Register a callback invoked with the new state after every
    /// session transition, synchronously and in transition order.
    pub fn subscribe(&self, callback: impl Fn(&SessionState) + Send + Sync + 'static) {
        self.inner
            .lock()
            .unwrap()
            .subscribers
            .push(Arc::new(callback));
    }

    fn notify(&self, state: &SessionState) {
        // Snapshot the list so a callback may subscribe without
        // deadlocking.
        let subscribers: Vec<SessionCallback> =
            self.inner.lock().unwrap().subscribers.clone();
        for callback in &subscribers {
            callback(state);
        }
    }
}
