//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and shared widgets while reading session
//! state from the Leptos context provider.

pub mod layout;
pub mod stat_card;
