//! Session lifecycle helpers shared by pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signin, logout, reload-restore, and token refresh all go through here so
//! the session signal and the credential cookie never disagree.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::error::ApiError;
use crate::state::recommend::RecommendState;
use crate::state::session::{Credential, SessionState};
use crate::util::{clock, credential_store};

/// Whether a protected page should send the visitor to `/signin`.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.credential.is_none()
}

/// Redirect to `/signin` whenever the session has loaded and nobody is signed in.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/signin", NavigateOptions::default());
        }
    });
}

/// Credential usable right now; evicts an expired one from the session and cookie.
///
/// Only writes to `session` when it evicts, so it is safe to call from an
/// effect that tracks the session.
pub fn current_credential(session: RwSignal<SessionState>) -> Option<Credential> {
    let now = clock::now_ms();
    let credential = session.with_untracked(|s| s.credential.clone())?;
    if !credential.is_expired(now) {
        return Some(credential);
    }
    session.update(|s| {
        s.active_credential(now);
    });
    credential_store::clear();
    None
}

/// Install `credential` as the signed-in session and persist it.
pub fn establish_session(session: RwSignal<SessionState>, credential: Credential) {
    credential_store::save(&credential, clock::now_ms());
    session.update(|s| s.sign_in(credential));
}

/// Adopt a credential refreshed by `net::auth::with_reissue`, keeping the
/// loaded profile.
pub fn remember_credential(session: RwSignal<SessionState>, credential: Credential) {
    let unchanged = session.with_untracked(|s| s.credential.as_ref() == Some(&credential));
    if unchanged {
        return;
    }
    credential_store::save(&credential, clock::now_ms());
    session.update(|s| s.credential = Some(credential));
}

/// Restore a session from the cookie on startup.
pub fn restore_session(session: RwSignal<SessionState>) {
    match credential_store::load(clock::now_ms()) {
        Some(credential) => session.update(|s| s.sign_in(credential)),
        None => session.update(|s| s.loading = false),
    }
}

/// Clear the session, the cookie, and cached per-user state.
pub fn end_session(session: RwSignal<SessionState>, recommend: RwSignal<RecommendState>) {
    credential_store::clear();
    session.update(SessionState::sign_out);
    recommend.set(RecommendState::default());
}

/// End the session and reload at the site root.
pub fn logout(session: RwSignal<SessionState>, recommend: RwSignal<RecommendState>) {
    end_session(session, recommend);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().replace("/");
        }
    }
}

/// An authenticated call failed: end the session when the token is no longer accepted.
pub fn handle_auth_failure(
    error: &ApiError,
    session: RwSignal<SessionState>,
    recommend: RwSignal<RecommendState>,
) -> bool {
    if matches!(error, ApiError::Unauthorized) {
        end_session(session, recommend);
        true
    } else {
        false
    }
}

/// Fetch the profile for the current session into `SessionState::user`.
pub fn load_profile(
    session: RwSignal<SessionState>,
    recommend: RwSignal<RecommendState>,
    client: crate::net::http::HttpClient,
    ttl_secs: u64,
) {
    let Some(credential) = current_credential(session) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let call_client = client.clone();
        let result = crate::net::auth::with_reissue(&client, credential, clock::now_ms(), ttl_secs, move |c| {
            let client = call_client.clone();
            async move { crate::net::profile::get_user_info(&client, &c).await }
        })
        .await;
        match result {
            Ok((user, credential)) => {
                remember_credential(session, credential);
                session.update(|s| s.user = Some(user));
            }
            Err(e) => {
                leptos::logging::warn!("profile load failed: {e}");
                handle_auth_failure(&e, session, recommend);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (credential, recommend, client, ttl_secs);
    }
}
