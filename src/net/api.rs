//! REST API helpers for the loyalty backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying
//! the current bearer credential read fresh from the session store.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Authorization failures funnel through one global handler
//! (`handle_authorization_failure`) instead of per-call-site checks;
//! everything else surfaces as a typed [`ApiError`] that pages render as
//! a transient message. The login call is the deliberate exception: a
//! rejected login is reported to the form and never trips the handler,
//! so a failure raised while already on the login page cannot start a
//! redirect loop.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{Account, MalformedResponse, TransactionRecord};
use crate::state::session::SessionStore;

const API_BASE: &str = "/api/v1";

/// Failure modes for calls to the loyalty backend.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// 401-class response: the credential was rejected or insufficient.
    /// Already handled globally by the time the caller sees it.
    #[error("authorization rejected")]
    Unauthorized,
    /// The backend refused the request and said why.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Malformed(#[from] MalformedResponse),
    /// Transport-level failure; never mutates the session.
    #[error("network error: {0}")]
    Network(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> String {
    format!("{API_BASE}/auth/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint() -> String {
    format!("{API_BASE}/auth/logout")
}

#[cfg(any(test, feature = "hydrate"))]
fn account_endpoint(account_id: &str) -> String {
    format!("{API_BASE}/accounts/{account_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn recent_transactions_endpoint(account_id: &str) -> String {
    format!("{API_BASE}/accounts/{account_id}/recent-transactions")
}

/// Message shown for a rejected login, preferring the body's own wording.
#[cfg(any(test, feature = "hydrate"))]
fn rejection_message(body: &serde_json::Value, status: u16) -> String {
    super::types::error_message(body).unwrap_or_else(|| format!("login failed: {status}"))
}

/// True when an authorization failure on `current_path` should navigate
/// to the login page. Already being there must not re-navigate.
#[cfg(any(test, feature = "hydrate"))]
fn should_redirect_to_login(current_path: &str) -> bool {
    current_path != crate::util::route_guard::LOGIN_PATH
}

/// Global authorization-failure handler: clears the session exactly once
/// per failing response, then navigates to the login page unless it is
/// already the active route.
#[cfg(feature = "hydrate")]
fn handle_authorization_failure(session: &SessionStore) {
    log::warn!("authorization failure; clearing session");
    session.logout();
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = window.location().pathname().unwrap_or_default();
    if should_redirect_to_login(&path) {
        let _ = window
            .location()
            .set_href(crate::util::route_guard::LOGIN_PATH);
    }
}

/// Authorized GET returning the raw JSON body.
#[cfg(feature = "hydrate")]
async fn authorized_get(session: SessionStore, url: &str) -> Result<serde_json::Value, ApiError> {
    let request = gloo_net::http::Request::get(url);
    // Token is read per request, not captured at client construction, so
    // a login/logout takes effect on the very next call.
    let request = match session.token() {
        Some(token) => request.header("Authorization", &format!("Bearer {token}")),
        None => request,
    };
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if response.status() == 401 || response.status() == 403 {
        handle_authorization_failure(&session);
        return Err(ApiError::Unauthorized);
    }
    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Rejected(
            super::types::error_message(&body)
                .unwrap_or_else(|| format!("request failed: {}", response.status())),
        ));
    }
    Ok(body)
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// # Errors
///
/// `Rejected` carries the backend's message for bad credentials;
/// `Malformed` flags a 2xx body with no token under either accepted
/// envelope; `Network` covers transport failures.
pub async fn login(username: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "username": username, "password": password });
        let response = gloo_net::http::Request::post(&login_endpoint())
            .json(&payload)
            .map_err(|err| ApiError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Rejected(rejection_message(&body, response.status())));
        }
        Ok(super::types::extract_token(&body)?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Best-effort backend session invalidation via `POST /auth/logout`.
/// Local logout never depends on the outcome.
///
/// # Errors
///
/// Returns an error for logging only; callers must not block on it.
pub async fn logout_request(token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::post(&logout_endpoint())
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Rejected(format!(
                "logout failed: {}",
                response.status()
            )));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch an account summary via `GET /accounts/{id}`.
///
/// # Errors
///
/// See [`ApiError`]; an `Unauthorized` response has already cleared the
/// session by the time this returns.
pub async fn fetch_account(session: SessionStore, account_id: &str) -> Result<Account, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = authorized_get(session, &account_endpoint(account_id)).await?;
        Ok(super::types::unwrap_data(&body)?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, account_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the recent ledger rows via `GET /accounts/{id}/recent-transactions`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn fetch_recent_transactions(
    session: SessionStore,
    account_id: &str,
) -> Result<Vec<TransactionRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = authorized_get(session, &recent_transactions_endpoint(account_id)).await?;
        Ok(super::types::unwrap_data(&body)?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, account_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
