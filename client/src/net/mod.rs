//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the configured client every other module sends through; `auth`,
//! `profile`, `perfume`, `recommend`, and `community` expose one function per
//! endpoint; `types` defines the wire schema and `error` the shared result.

pub mod auth;
pub mod community;
pub mod error;
pub mod http;
pub mod perfume;
pub mod profile;
pub mod recommend;
pub mod types;
