//! Durable bearer-credential storage scoped to the browser origin.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `localStorage` key holds the raw token string; absence means
//! logged out. Expiry is not enforced here — the session decoder owns
//! that. All writes flow through the session store's `initialize`,
//! `login`, and `logout` entry points; no other component touches the
//! credential key directly.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "loyalty_portal_token";

/// Contract for the durable credential slot.
pub trait TokenStore {
    /// Read the stored credential, if any.
    fn get(&self) -> Option<String>;
    /// Replace the stored credential. Immediately visible to `get`.
    fn set(&self, token: &str);
    /// Remove the stored credential.
    fn clear(&self);
}

/// `localStorage`-backed store. Server-side paths no-op and read as
/// absent so SSR renders the logged-out shell deterministically.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-memory store used by native unit tests in place of the browser.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryTokenStore(std::cell::RefCell<Option<String>>);

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}
