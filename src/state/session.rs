//! Session lifecycle: the single writer over credential and identity.
//!
//! DESIGN
//! ======
//! All transition logic lives in [`SessionCore`], a plain reducer whose
//! mutations are serialized by the single-threaded event loop. Each
//! transition reports the token-store side effect it requires as a
//! [`StoreAction`], keeping browser glue out of the decision logic (and
//! out of the unit tests). [`SessionStore`] is the thin Leptos wrapper
//! components reach through context; its `initialize`, `login`, and
//! `logout` methods are the only paths that write the credential key.
//!
//! An in-flight login is guarded by a session epoch: `logout` bumps the
//! epoch, so a login completion that raced a logout is discarded and the
//! logged-out postcondition always wins. Two racing logins share an
//! epoch — the later completion overwrites the earlier one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use thiserror::Error;

use crate::net::api::ApiError;
use crate::util::claims::{self, DecodeError, Identity};
use crate::util::clock::now_secs;
use crate::util::token_store::{BrowserTokenStore, TokenStore};

/// Why a credential could not become the active session.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The token could not be decoded; the session is left untouched.
    #[error("invalid credential: {0}")]
    InvalidCredential(#[from] DecodeError),
    /// The token's expiry claim is missing or already in the past.
    #[error("credential already expired")]
    ExpiredCredential,
}

/// Why a login attempt failed end to end.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Token-store side effect requested by a session transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreAction {
    None,
    Persist(String),
    Clear,
}

impl StoreAction {
    /// Apply the requested side effect to `store`.
    pub fn apply(&self, store: &impl TokenStore) {
        match self {
            Self::None => {}
            Self::Persist(token) => store.set(token),
            Self::Clear => store.clear(),
        }
    }
}

/// Result of an epoch-guarded login completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The session adopted the credential; persist it.
    LoggedIn(StoreAction),
    /// A logout superseded this attempt; nothing changed.
    Stale,
}

/// Snapshot of the authenticated-or-not state.
///
/// Invariant: `logged_in` is true iff `credential` is present, unexpired
/// at the time it was adopted, and successfully decoded; `identity` is
/// present iff `logged_in` is true.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub credential: Option<String>,
    pub identity: Option<Identity>,
}

impl Session {
    fn authenticated(credential: String, identity: Identity) -> Self {
        Self {
            logged_in: true,
            credential: Some(credential),
            identity: Some(identity),
        }
    }
}

/// Reducer holding the session plus the epoch used to cancel in-flight
/// logins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionCore {
    session: Session,
    epoch: u64,
}

impl SessionCore {
    /// Rebuild the session from a previously stored credential, run once
    /// at process start. Expired or undecodable tokens silently downgrade
    /// to logged out and ask for the store to be cleared.
    pub fn restore(stored: Option<String>, now: i64) -> (Self, StoreAction) {
        let Some(token) = stored else {
            return (Self::default(), StoreAction::None);
        };
        match claims::decode(&token) {
            Ok(claims) if claims.is_expired(now) => {
                log::info!("stored credential expired; clearing");
                (Self::default(), StoreAction::Clear)
            }
            Ok(claims) => {
                let identity = claims.identity();
                (
                    Self {
                        session: Session::authenticated(token, identity),
                        epoch: 0,
                    },
                    StoreAction::None,
                )
            }
            Err(err) => {
                log::warn!("stored credential rejected: {err}");
                (Self::default(), StoreAction::Clear)
            }
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Snapshot the epoch before a login network round-trip.
    pub fn begin_login(&self) -> u64 {
        self.epoch
    }

    /// Complete a login begun at `epoch`. A completion that lost the race
    /// against `logout` is discarded without touching the session.
    ///
    /// # Errors
    ///
    /// Propagates [`SessionError`] from [`SessionCore::login`].
    pub fn complete_login(
        &mut self,
        epoch: u64,
        token: &str,
        now: i64,
    ) -> Result<LoginOutcome, SessionError> {
        if epoch != self.epoch {
            log::info!("discarding login completion from a superseded session epoch");
            return Ok(LoginOutcome::Stale);
        }
        self.login(token, now).map(LoginOutcome::LoggedIn)
    }

    /// Adopt `token` as the active credential.
    ///
    /// # Errors
    ///
    /// Leaves the session untouched when the token cannot be decoded or
    /// is already expired.
    pub fn login(&mut self, token: &str, now: i64) -> Result<StoreAction, SessionError> {
        let claims = claims::decode(token)?;
        if claims.is_expired(now) {
            return Err(SessionError::ExpiredCredential);
        }
        self.session = Session::authenticated(token.to_owned(), claims.identity());
        Ok(StoreAction::Persist(token.to_owned()))
    }

    /// Clear the session and bump the epoch so any in-flight login lands
    /// stale. Always succeeds.
    pub fn logout(&mut self) -> StoreAction {
        self.session = Session::default();
        self.epoch += 1;
        StoreAction::Clear
    }
}

/// Leptos-facing session container provided through context.
///
/// Reads are snapshots of one reactive signal; every write funnels
/// through the named entry points below, so components can subscribe to
/// login/logout transitions without owning any of the mutation rules.
#[derive(Clone, Copy)]
pub struct SessionStore {
    core: RwSignal<SessionCore>,
}

impl SessionStore {
    /// Build the startup session from the browser token store.
    pub fn initialize() -> Self {
        let (core, action) = SessionCore::restore(BrowserTokenStore.get(), now_secs());
        action.apply(&BrowserTokenStore);
        Self {
            core: RwSignal::new(core),
        }
    }

    /// Reactive session snapshot; subscribes the caller to transitions.
    pub fn session(&self) -> Session {
        self.core.with(|core| core.session().clone())
    }

    /// Non-reactive session snapshot for event handlers.
    pub fn snapshot(&self) -> Session {
        self.core.with_untracked(|core| core.session().clone())
    }

    /// Current raw credential, read fresh on every call so requests
    /// issued after a login/logout pick up the change immediately.
    pub fn token(&self) -> Option<String> {
        self.core
            .with_untracked(|core| core.session().credential.clone())
    }

    /// Exchange form credentials for a token and adopt it.
    ///
    /// The epoch snapshot taken before the network round-trip makes a
    /// concurrent `logout` win over this attempt's completion.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError`] when the backend rejects the credentials or
    /// the returned token is unusable. The session is untouched on error.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, LoginError> {
        let epoch = self.core.with_untracked(SessionCore::begin_login);
        let token = crate::net::api::login(username, password).await?;
        let mut core = self.core.get_untracked();
        let outcome = core.complete_login(epoch, &token, now_secs())?;
        if let LoginOutcome::LoggedIn(action) = &outcome {
            action.apply(&BrowserTokenStore);
        }
        self.core.set(core);
        Ok(outcome)
    }

    /// Clear the session locally and best-effort notify the backend.
    /// Infallible from the caller's perspective; a failed invalidation
    /// call is logged and otherwise ignored.
    pub fn logout(&self) {
        #[cfg(feature = "hydrate")]
        let token = self.token();

        let mut core = self.core.get_untracked();
        core.logout().apply(&BrowserTokenStore);
        self.core.set(core);
        log::info!("session cleared");

        #[cfg(feature = "hydrate")]
        if let Some(token) = token {
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::net::api::logout_request(&token).await {
                    log::warn!("logout notification failed: {err}");
                }
            });
        }
    }
}
