//! Leptos adaptor around `FormController`.
//!
//! The controller lives in a signal; async work is spawned on the UI task and
//! writes its result back through `finish_submit` / `apply_check`.

use std::fmt::Display;
use std::future::Future;

use leptos::prelude::*;

use super::{FormController, FormState, SubmitDecision};

/// Copyable handle to a mounted form.
#[derive(Clone, Copy)]
pub struct FormHandle {
    pub form: RwSignal<FormController>,
}

/// Mount `controller` for the lifetime of the calling component.
pub fn use_form(controller: FormController) -> FormHandle {
    FormHandle { form: RwSignal::new(controller) }
}

impl FormHandle {
    pub fn value(&self, field: &str) -> String {
        self.form.with(|f| f.value(field).to_owned())
    }

    pub fn error(&self, field: &str) -> Option<String> {
        self.form.with(|f| f.error(field).map(str::to_owned))
    }

    pub fn is_pending(&self) -> bool {
        self.form.with(FormController::is_pending)
    }

    pub fn submit_error(&self) -> Option<String> {
        self.form.with(|f| f.submit_error().map(str::to_owned))
    }

    pub fn handle_change(&self, field: &str, value: String) {
        self.form.update(|f| {
            f.handle_change(field, value);
        });
    }

    /// Validate and, when clean, run `on_submit` with a snapshot of the values.
    ///
    /// Does nothing while a previous submission is pending.
    pub fn handle_submit<S, Fut, E>(&self, on_submit: S)
    where
        S: FnOnce(FormState) -> Fut + 'static,
        Fut: Future<Output = Result<(), E>> + 'static,
        E: Display + 'static,
    {
        let Some(SubmitDecision::Proceed(values)) = self.form.try_update(FormController::begin_submit) else {
            return;
        };
        let form = self.form;
        leptos::task::spawn_local(async move {
            let result = on_submit(values).await;
            form.try_update(|f| f.finish_submit(result));
        });
    }

    /// Blur handler: run `check(field, value)` and merge a conflict on `Ok(true)`.
    pub fn check_duplicate<C, Fut, E>(&self, field: &'static str, check: C)
    where
        C: FnOnce(&'static str, String) -> Fut + 'static,
        Fut: Future<Output = Result<bool, E>> + 'static,
        E: Display + 'static,
    {
        let Some(value) = self.form.with_untracked(|f| f.begin_check(field)) else {
            return;
        };
        let form = self.form;
        leptos::task::spawn_local(async move {
            let outcome = check(field, value.clone()).await;
            form.try_update(|f| f.apply_check(field, &value, outcome));
        });
    }
}
