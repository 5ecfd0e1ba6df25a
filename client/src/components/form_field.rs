//! Labelled input bound to a `FormHandle` field, with its inline error.

use leptos::prelude::*;

use crate::form::hook::FormHandle;

#[component]
pub fn FormField(
    form: FormHandle,
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    /// Runs when the input loses focus (existence checks).
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <label class="account-label" for=name>
            {label}
        </label>
        <input
            class="account-input"
            id=name
            name=name
            type=input_type
            placeholder=placeholder
            prop:value=move || form.value(name)
            disabled=move || form.is_pending()
            on:input=move |ev| form.handle_change(name, event_target_value(&ev))
            on:blur=move |_| {
                if let Some(cb) = on_blur {
                    cb.run(());
                }
            }
        />
        <p class="account-error">{move || form.error(name).unwrap_or_default()}</p>
    }
}
