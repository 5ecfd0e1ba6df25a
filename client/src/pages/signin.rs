//! Signin page: email + password, then profile fetch and redirect home.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::config::ClientConfig;
use crate::form::hook::use_form;
use crate::form::validate::validate_email_form;
use crate::form::{ErrorState, FormController, FormState};
use crate::net::auth;
use crate::net::error::{ApiError, ApiResult};
use crate::net::http::HttpClient;
use crate::net::types::{SigninRequest, TokenResponse};
use crate::state::recommend::RecommendState;
use crate::state::session::{Credential, SessionState};
use crate::util::auth::{establish_session, load_profile};
use crate::util::clock;

pub const EMAIL_ERROR: &str = "이메일을 확인해주세요.";
pub const PASSWORD_ERROR: &str = "비밀번호를 입력해주세요.";

pub fn validate_signin(values: &FormState) -> ErrorState {
    let field = |name: &str| values.get(name).map_or("", String::as_str);
    let mut errors = ErrorState::new();
    if !validate_email_form(field("email")) {
        errors.insert("email".to_owned(), EMAIL_ERROR.to_owned());
    }
    if field("password").is_empty() {
        errors.insert("password".to_owned(), PASSWORD_ERROR.to_owned());
    }
    errors
}

pub fn signin_form() -> FormController {
    FormController::new([("email", ""), ("password", "")], validate_signin)
}

pub fn signin_request(values: &FormState) -> SigninRequest {
    let value = |name: &str| values.get(name).cloned().unwrap_or_default();
    SigninRequest { email: value("email").trim().to_owned(), password: value("password") }
}

/// Turn a login response into a session credential.
///
/// # Errors
///
/// Returns `Decode` when the backend answered without a token.
pub fn credential_from_login(resp: &TokenResponse, now_ms: i64, default_ttl_secs: u64) -> ApiResult<Credential> {
    Credential::from_token_response(resp, now_ms, default_ttl_secs)
        .ok_or_else(|| ApiError::Decode("login response carried no access token".to_owned()))
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let ttl = expect_context::<ClientConfig>().credential_ttl_secs;
    let session = expect_context::<RwSignal<SessionState>>();
    let recommend = expect_context::<RwSignal<RecommendState>>();
    let navigate = use_navigate();
    let form = use_form(signin_form());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let client = client.clone();
        let navigate = navigate.clone();
        form.handle_submit(move |values| async move {
            let token = auth::signin(&client, &signin_request(&values)).await?;
            let credential = credential_from_login(&token, clock::now_ms(), ttl)?;
            establish_session(session, credential);
            load_profile(session, recommend, client, ttl);
            navigate("/", NavigateOptions::default());
            Ok::<(), ApiError>(())
        });
    };

    view! {
        <div class="account-page">
            <h1 class="account-page__header">"로그인"</h1>
            <form class="account-form" on:submit=on_submit>
                <FormField form=form name="email" label="이메일" placeholder="이메일을 입력해주세요" />
                <FormField
                    form=form
                    name="password"
                    label="비밀번호"
                    input_type="password"
                    placeholder="비밀번호를 입력해주세요"
                />
                <Show when=move || form.submit_error().is_some()>
                    <p class="account-error account-error--submit">
                        {move || form.submit_error().unwrap_or_default()}
                    </p>
                </Show>
                <button class="account-button account-button--primary" type="submit" disabled=move || form.is_pending()>
                    "로그인"
                </button>
            </form>
            <div class="account-links">
                <A href="/signup">"회원가입"</A>
                <A href="/find-password">"비밀번호 찾기"</A>
            </div>
        </div>
    }
}
