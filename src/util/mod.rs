//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock)
//! and cross-cutting policy (claims decoding, route guarding) from page
//! and component logic to improve reuse and testability.

pub mod claims;
pub mod clock;
pub mod format;
pub mod route_guard;
pub mod token_store;
