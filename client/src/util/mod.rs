//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, clock,
//! file inputs) from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod clock;
pub mod credential_store;
pub mod file_input;
