//! Shared client state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal` per state type; pages read and update them
//! with `expect_context`.

pub mod paging;
pub mod recommend;
pub mod session;
