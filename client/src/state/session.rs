//! Signed-in session for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<SessionState>`. Signin sets it, logout
//! clears it, and expiry evicts it on the next read. API wrappers never read
//! it ambiently; pages pass the credential into each authenticated call.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{MemberInfo, TokenResponse};

/// Access token authorizing requests on behalf of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub access_token: String,
    /// Absolute expiry in milliseconds since the Unix epoch.
    pub expires_at_ms: i64,
    /// Refresh-token slot the backend issued alongside the access token.
    pub index: Option<i64>,
}

impl Credential {
    pub fn new(access_token: impl Into<String>, expires_at_ms: i64) -> Self {
        Self { access_token: access_token.into(), expires_at_ms, index: None }
    }

    /// Build a credential from a login/reissue response.
    ///
    /// Uses the response's `expires_in` when present, otherwise
    /// `default_ttl_secs`. Returns `None` for an empty token.
    pub fn from_token_response(resp: &TokenResponse, now_ms: i64, default_ttl_secs: u64) -> Option<Self> {
        let token = resp.access_token.trim();
        if token.is_empty() {
            return None;
        }
        let ttl_secs = resp.expires_in.unwrap_or(default_ttl_secs);
        let ttl_ms = i64::try_from(ttl_secs.saturating_mul(1000)).unwrap_or(i64::MAX);
        Some(Self {
            access_token: token.to_owned(),
            expires_at_ms: now_ms.saturating_add(ttl_ms),
            index: resp.index,
        })
    }

    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }

    /// Whole seconds left before expiry, zero once expired.
    pub fn remaining_secs(&self, now_ms: i64) -> u64 {
        u64::try_from((self.expires_at_ms - now_ms) / 1000).unwrap_or(0)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub credential: Option<Credential>,
    pub user: Option<MemberInfo>,
    /// True until the stored cookie has been checked on startup.
    pub loading: bool,
}

impl SessionState {
    /// Replace whatever session existed with a fresh credential.
    pub fn sign_in(&mut self, credential: Credential) {
        self.credential = Some(credential);
        self.user = None;
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.credential = None;
        self.user = None;
        self.loading = false;
    }

    /// Credential usable at `now_ms`. An expired credential is evicted.
    pub fn active_credential(&mut self, now_ms: i64) -> Option<Credential> {
        if self.credential.as_ref().is_some_and(|c| c.is_expired(now_ms)) {
            self.sign_out();
        }
        self.credential.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.credential.is_some()
    }

    pub fn member_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.member_id)
    }
}
