//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Session state is the only process-wide mutable state in the app; it
//! lives behind a single container so every component sees the same
//! login/logout transitions.

pub mod session;
