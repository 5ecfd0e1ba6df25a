//! Password recovery: request a code, verify it, then set a new password.
//!
//! Each step has its own form; the page only moves forward after the
//! backend accepts the current step.

#[cfg(test)]
#[path = "find_password_test.rs"]
mod find_password_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::form::hook::{FormHandle, use_form};
use crate::form::validate::{validate_email_form, validate_password, validate_recovery_code};
use crate::form::{ErrorState, FormController, FormState};
use crate::net::auth;
use crate::net::error::ApiError;
use crate::net::http::HttpClient;

pub const EMAIL_ERROR: &str = "올바른 이메일을 입력해주세요.";
pub const CODE_ERROR: &str = "6자리 인증번호를 입력해주세요.";
pub const PASSWORD_ERROR: &str = "대문자와 특수문자를 1자 이상 포함해주세요.";
pub const CONFIRM_ERROR: &str = "비밀번호가 일치하지 않습니다.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecoveryStep {
    RequestCode,
    VerifyCode { email: String },
    ChangePassword { email: String },
    Done,
}

impl RecoveryStep {
    /// Step reached once the backend accepted the current one.
    ///
    /// `email` is only read when leaving `RequestCode`.
    #[must_use]
    pub fn advance(self, email: &str) -> Self {
        match self {
            Self::RequestCode => Self::VerifyCode { email: email.trim().to_owned() },
            Self::VerifyCode { email } => Self::ChangePassword { email },
            Self::ChangePassword { .. } | Self::Done => Self::Done,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Self::VerifyCode { email } | Self::ChangePassword { email } => Some(email),
            Self::RequestCode | Self::Done => None,
        }
    }
}

fn field<'a>(values: &'a FormState, name: &str) -> &'a str {
    values.get(name).map_or("", String::as_str)
}

pub fn validate_request(values: &FormState) -> ErrorState {
    let mut errors = ErrorState::new();
    if !validate_email_form(field(values, "email")) {
        errors.insert("email".to_owned(), EMAIL_ERROR.to_owned());
    }
    errors
}

pub fn validate_code(values: &FormState) -> ErrorState {
    let mut errors = ErrorState::new();
    if !validate_recovery_code(field(values, "code").trim()) {
        errors.insert("code".to_owned(), CODE_ERROR.to_owned());
    }
    errors
}

pub fn validate_new_password(values: &FormState) -> ErrorState {
    let mut errors = ErrorState::new();
    let password = field(values, "password");
    if !validate_password(password) {
        errors.insert("password".to_owned(), PASSWORD_ERROR.to_owned());
    }
    if field(values, "confirm") != password {
        errors.insert("confirm".to_owned(), CONFIRM_ERROR.to_owned());
    }
    errors
}

pub fn request_form() -> FormController {
    FormController::new([("email", "")], validate_request)
}

pub fn code_form() -> FormController {
    FormController::new([("code", "")], validate_code)
}

pub fn password_form() -> FormController {
    FormController::new([("confirm", ""), ("password", "")], validate_new_password)
}

#[component]
pub fn FindPasswordPage() -> impl IntoView {
    let client = expect_context::<HttpClient>();
    let navigate = use_navigate();
    let step = RwSignal::new(RecoveryStep::RequestCode);
    let request = use_form(request_form());
    let code = use_form(code_form());
    let password = use_form(password_form());

    let request_client = client.clone();
    let on_request = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let client = request_client.clone();
        request.handle_submit(move |values| async move {
            let email = field(&values, "email").trim().to_owned();
            auth::find_password(&client, &email).await?;
            step.update(|s| *s = s.clone().advance(&email));
            Ok::<(), ApiError>(())
        });
    };

    let code_client = client.clone();
    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let client = code_client.clone();
        code.handle_submit(move |values| async move {
            auth::check_code(&client, field(&values, "code").trim()).await?;
            step.update(|s| *s = s.clone().advance(""));
            Ok::<(), ApiError>(())
        });
    };

    let on_change = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let client = client.clone();
        let Some(email) = step.with_untracked(|s| s.email().map(str::to_owned)) else {
            return;
        };
        password.handle_submit(move |values| async move {
            auth::change_password(&client, &email, field(&values, "password")).await?;
            step.update(|s| *s = s.clone().advance(""));
            Ok::<(), ApiError>(())
        });
    };

    Effect::new(move || {
        if step.with(|s| *s == RecoveryStep::Done) {
            navigate("/signin", NavigateOptions::default());
        }
    });

    view! {
        <div class="account-page">
            <h1 class="account-page__header">"비밀번호 찾기"</h1>
            {move || match step.get() {
                RecoveryStep::RequestCode => {
                    view! {
                        <form class="account-form" on:submit=on_request.clone()>
                            <FormField form=request name="email" label="이메일" placeholder="가입한 이메일을 입력해주세요" />
                            <SubmitError form=request />
                            <button class="account-button account-button--primary" type="submit" disabled=move || request.is_pending()>
                                "인증번호 받기"
                            </button>
                        </form>
                    }
                        .into_any()
                }
                RecoveryStep::VerifyCode { email } => {
                    view! {
                        <form class="account-form" on:submit=on_verify.clone()>
                            <p class="account-hint">{format!("{email}로 인증번호를 보냈습니다.")}</p>
                            <FormField form=code name="code" label="인증번호" />
                            <SubmitError form=code />
                            <button class="account-button account-button--primary" type="submit" disabled=move || code.is_pending()>
                                "확인"
                            </button>
                        </form>
                    }
                        .into_any()
                }
                RecoveryStep::ChangePassword { .. } | RecoveryStep::Done => {
                    view! {
                        <form class="account-form" on:submit=on_change.clone()>
                            <FormField form=password name="password" label="새 비밀번호" input_type="password" />
                            <FormField form=password name="confirm" label="비밀번호 확인" input_type="password" />
                            <SubmitError form=password />
                            <button class="account-button account-button--primary" type="submit" disabled=move || password.is_pending()>
                                "비밀번호 변경"
                            </button>
                        </form>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn SubmitError(form: FormHandle) -> impl IntoView {
    view! {
        <Show when=move || form.submit_error().is_some()>
            <p class="account-error account-error--submit">{move || form.submit_error().unwrap_or_default()}</p>
        </Show>
    }
}
