//! Signup page: email / username / password with blur-time uniqueness checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation and the create-account flow go through `AccountGateway` so the
//! whole submit path can run against a fake backend in tests.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use std::future::Future;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::form::hook::use_form;
use crate::form::validate::{validate_email_form, validate_password, validate_username};
use crate::form::{ErrorState, FormController, FormState};
use crate::net::auth::{self, DuplicateField};
use crate::net::error::{ApiError, ApiResult};
use crate::net::http::HttpClient;
use crate::net::types::SignupRequest;

pub const EMAIL_ERROR: &str = "올바른 이메일을 입력해주세요.";
pub const USERNAME_ERROR: &str = "유저네임을 입력해주세요.";
pub const PASSWORD_ERROR: &str = "대문자와 특수문자를 1자 이상 포함해주세요.";
pub const SIGNIN_ROUTE: &str = "/signin";

/// Backend operations the signup flow needs.
pub trait AccountGateway {
    fn create_account(&self, request: SignupRequest) -> impl Future<Output = ApiResult<()>>;
    fn field_exists(&self, field: DuplicateField, value: String) -> impl Future<Output = ApiResult<bool>>;
}

#[derive(Clone, Debug)]
pub struct HttpAccountGateway {
    client: HttpClient,
}

impl HttpAccountGateway {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

impl AccountGateway for HttpAccountGateway {
    async fn create_account(&self, request: SignupRequest) -> ApiResult<()> {
        auth::signup(&self.client, &request).await
    }

    async fn field_exists(&self, field: DuplicateField, value: String) -> ApiResult<bool> {
        auth::is_exist(&self.client, field, &value).await
    }
}

pub fn validate_signup(values: &FormState) -> ErrorState {
    let field = |name: &str| values.get(name).map_or("", String::as_str);
    let mut errors = ErrorState::new();
    if !validate_email_form(field("email")) {
        errors.insert("email".to_owned(), EMAIL_ERROR.to_owned());
    }
    if !validate_username(field("username")) {
        errors.insert("username".to_owned(), USERNAME_ERROR.to_owned());
    }
    if !validate_password(field("password")) {
        errors.insert("password".to_owned(), PASSWORD_ERROR.to_owned());
    }
    errors
}

pub fn conflict_message(field: &str) -> String {
    match field {
        "email" => "이미 사용 중인 이메일입니다.".to_owned(),
        "username" => "이미 사용 중인 유저네임입니다.".to_owned(),
        other => format!("이미 사용 중인 {other}입니다."),
    }
}

pub fn signup_form() -> FormController {
    FormController::new([("email", ""), ("password", ""), ("username", "")], validate_signup)
        .with_conflict_message(conflict_message)
}

/// Create the account and return the route to visit next.
///
/// # Errors
///
/// Returns the gateway's error when account creation fails.
pub async fn submit_signup<G: AccountGateway>(gateway: &G, values: FormState) -> ApiResult<&'static str> {
    let value = |name: &str| values.get(name).cloned().unwrap_or_default();
    let request = SignupRequest { email: value("email"), password: value("password"), username: value("username") };
    gateway.create_account(request).await?;
    Ok(SIGNIN_ROUTE)
}

/// Existence check for a blurred field; fields without a backend check never conflict.
///
/// # Errors
///
/// Returns the gateway's error when the check itself fails.
pub async fn check_signup_field<G: AccountGateway>(gateway: &G, field: &str, value: String) -> ApiResult<bool> {
    match DuplicateField::from_field(field) {
        Some(checkable) => gateway.field_exists(checkable, value).await,
        None => Ok(false),
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let gateway = HttpAccountGateway::new(expect_context::<HttpClient>());
    let navigate = use_navigate();
    let form = use_form(signup_form());

    let submit_gateway = gateway.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let gateway = submit_gateway.clone();
        let navigate = navigate.clone();
        form.handle_submit(move |values| async move {
            let next = submit_signup(&gateway, values).await?;
            navigate(next, NavigateOptions::default());
            Ok::<(), ApiError>(())
        });
    };

    let check = move |field: &'static str| {
        let gateway = gateway.clone();
        Callback::new(move |()| {
            let gateway = gateway.clone();
            form.check_duplicate(field, move |field, value| async move {
                check_signup_field(&gateway, field, value).await
            });
        })
    };
    let check_email = check("email");
    let check_username = check("username");

    view! {
        <div class="account-page">
            <h1 class="account-page__header">"회원 가입"</h1>
            <form class="account-form" on:submit=on_submit>
                <FormField
                    form=form
                    name="email"
                    label="이메일"
                    placeholder="이메일을 입력해주세요"
                    on_blur=check_email
                />
                <FormField
                    form=form
                    name="username"
                    label="유저네임"
                    placeholder="유저네임을 입력해주세요"
                    on_blur=check_username
                />
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
                    "회원가입"
                </button>
            </form>
            <A href=SIGNIN_ROUTE>"로그인하기"</A>
        </div>
    }
}
