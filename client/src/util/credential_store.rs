//! Cookie persistence for the access token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session signal is the source of truth while the page is open; the
//! cookie only lets a reload restore it. The cookie value is
//! `<expires_at_ms>:<token>[:<index>]` (URL-encoded) and its max-age matches the token's remaining
//! lifetime, so the browser drops it at the same moment the session would
//! evict it.

#[cfg(test)]
#[path = "credential_store_test.rs"]
mod credential_store_test;

use crate::state::session::Credential;

pub const COOKIE_NAME: &str = "access_token";

pub(crate) fn encode_credential(credential: &Credential) -> String {
    let raw = format!("{}:{}", credential.expires_at_ms, credential.access_token);
    let index = credential.index.map(|i| format!(":{i}")).unwrap_or_default();
    url::form_urlencoded::byte_serialize(format!("{raw}{index}").as_bytes()).collect()
}

pub(crate) fn decode_credential(value: &str) -> Option<Credential> {
    let decoded: String = url::form_urlencoded::parse(format!("v={value}").as_bytes())
        .next()
        .map(|(_, v)| v.into_owned())?;
    let (expires, rest) = decoded.split_once(':')?;
    let expires_at_ms = expires.parse().ok()?;
    let (token, index) = match rest.rsplit_once(':') {
        Some((token, index)) if index.parse::<i64>().is_ok() => (token, index.parse().ok()),
        _ => (rest, None),
    };
    if token.is_empty() {
        return None;
    }
    Some(Credential { access_token: token.to_owned(), expires_at_ms, index })
}

pub(crate) fn set_cookie_string(value: &str, max_age_secs: u64) -> String {
    format!("{COOKIE_NAME}={value}; path=/; max-age={max_age_secs}; SameSite=Lax")
}

/// Find `name` in a `document.cookie` style header.
pub(crate) fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k == name).then_some(v)
    })
}

/// Restore a stored credential that has not yet expired.
pub fn load(now_ms: i64) -> Option<Credential> {
    let credential = decode_credential(find_cookie(&read_cookie_header()?, COOKIE_NAME)?)?;
    (!credential.is_expired(now_ms)).then_some(credential)
}

pub fn save(credential: &Credential, now_ms: i64) {
    write_cookie(&set_cookie_string(&encode_credential(credential), credential.remaining_secs(now_ms)));
}

pub fn clear() {
    write_cookie(&set_cookie_string("", 0));
}

fn read_cookie_header() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        html_document()?.cookie().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn write_cookie(cookie: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(cookie);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cookie;
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}
