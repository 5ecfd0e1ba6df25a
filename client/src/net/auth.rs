//! Member account endpoints: signup, signin, recovery, reissue, deletion.
//!
//! Unauthenticated calls go out without a bearer token. `reissue` and
//! `delete_account` require the caller's credential.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use super::error::{ApiError, ApiResult};
use super::http::{Body, HttpClient, Method};
use super::types::{
    ChangePasswordRequest, ExistResponse, FindPasswordRequest, ReissueRequest, SigninRequest, SignupRequest,
    TokenResponse, ValueRequest,
};
use crate::state::session::Credential;

const JOIN_PATH: &str = "members/join";
const LOGIN_PATH: &str = "members/login";
const REISSUE_PATH: &str = "members/reissue";
const FIND_PASSWORD_PATH: &str = "members/find-pw";
const CHANGE_PASSWORD_PATH: &str = "members/change-pw";
const CHECK_CODE_PATH: &str = "members/code";
const MEMBER_PATH: &str = "auth/members";

/// Signup fields the backend can check for uniqueness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DuplicateField {
    Email,
    Username,
}

impl DuplicateField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Username => "username",
        }
    }

    /// Map a form field name onto a checkable field.
    pub fn from_field(name: &str) -> Option<Self> {
        match name {
            "email" => Some(Self::Email),
            "username" => Some(Self::Username),
            _ => None,
        }
    }
}

pub(crate) fn exist_path(field: DuplicateField) -> String {
    format!("members/exist-{}", field.as_str())
}

/// Create an account via `POST members/join`.
///
/// # Errors
///
/// Returns the transport or status error from the backend.
pub async fn signup(client: &HttpClient, request: &SignupRequest) -> ApiResult<()> {
    client.send_unit(Method::Post, JOIN_PATH, None, Body::json(request)?).await
}

/// Ask whether `value` is already taken for `field` via `POST members/exist-{field}`.
///
/// # Errors
///
/// Returns the transport, status, or decode error from the backend.
pub async fn is_exist(client: &HttpClient, field: DuplicateField, value: &str) -> ApiResult<bool> {
    let payload = ValueRequest { value: value.to_owned() };
    let resp: ExistResponse = client
        .send_json(Method::Post, &exist_path(field), None, Body::json(&payload)?)
        .await?;
    Ok(resp.result)
}

/// Exchange email + password for an access token via `POST members/login`.
///
/// # Errors
///
/// Returns the transport, status, or decode error from the backend.
pub async fn signin(client: &HttpClient, request: &SigninRequest) -> ApiResult<TokenResponse> {
    client.send_json(Method::Post, LOGIN_PATH, None, Body::json(request)?).await
}

/// Refresh an access token via `POST members/reissue`.
///
/// # Errors
///
/// Returns `Unauthorized` when the credential carries no refresh index, or the
/// backend's error otherwise.
pub async fn reissue(client: &HttpClient, credential: &Credential) -> ApiResult<TokenResponse> {
    let index = credential.index.ok_or(ApiError::Unauthorized)?;
    let payload = ReissueRequest { index, access_token: credential.access_token.clone() };
    client
        .send_json(Method::Post, REISSUE_PATH, Some(credential), Body::json(&payload)?)
        .await
}

/// Start password recovery for `email` via `POST members/find-pw`.
///
/// # Errors
///
/// Returns the transport or status error from the backend.
pub async fn find_password(client: &HttpClient, email: &str) -> ApiResult<()> {
    let payload = FindPasswordRequest { email: email.to_owned() };
    client
        .send_unit(Method::Post, FIND_PASSWORD_PATH, None, Body::json(&payload)?)
        .await
}

/// Set a new password via `PUT members/change-pw`.
///
/// # Errors
///
/// Returns the transport or status error from the backend.
pub async fn change_password(client: &HttpClient, email: &str, password: &str) -> ApiResult<()> {
    let payload = ChangePasswordRequest { email: email.to_owned(), password: password.to_owned() };
    client
        .send_unit(Method::Put, CHANGE_PASSWORD_PATH, None, Body::json(&payload)?)
        .await
}

/// Verify an emailed recovery code via `PUT members/code`.
///
/// # Errors
///
/// Returns the transport or status error from the backend.
pub async fn check_code(client: &HttpClient, code: &str) -> ApiResult<()> {
    let payload = ValueRequest { value: code.to_owned() };
    client
        .send_unit(Method::Put, CHECK_CODE_PATH, None, Body::json(&payload)?)
        .await
}

/// Delete the signed-in account via `DELETE auth/members`.
///
/// # Errors
///
/// Returns the transport or status error from the backend.
pub async fn delete_account(client: &HttpClient, credential: &Credential) -> ApiResult<()> {
    client
        .send_unit(Method::Delete, MEMBER_PATH, Some(credential), Body::Empty)
        .await
}

/// Run an authenticated call, reissuing the token once on a 401.
///
/// Returns the call's value together with the credential that succeeded, so
/// the caller can store a refreshed token.
///
/// # Errors
///
/// Returns the call's error, or the reissue error when the token could not
/// be refreshed.
pub async fn with_reissue<T, F, Fut>(
    client: &HttpClient,
    credential: Credential,
    now_ms: i64,
    default_ttl_secs: u64,
    call: F,
) -> ApiResult<(T, Credential)>
where
    F: Fn(Credential) -> Fut,
    Fut: Future<Output = ApiResult<T>>,
{
    match call(credential.clone()).await {
        Err(ApiError::Unauthorized) => {
            let token = reissue(client, &credential).await?;
            let mut fresh =
                Credential::from_token_response(&token, now_ms, default_ttl_secs).ok_or(ApiError::Unauthorized)?;
            fresh.index = fresh.index.or(credential.index);
            let value = call(fresh.clone()).await?;
            Ok((value, fresh))
        }
        other => other.map(|value| (value, credential)),
    }
}
