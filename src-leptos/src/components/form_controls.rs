//! Labeled form controls with inline validation messages
//!
//! Each control renders a label, the input element, and the field's
//! current validation message (if any). Values flow in through signals
//! and edits flow out through callbacks, so the owning page keeps the
//! whole form state in one place.

use leptos::prelude::*;
use petheaven_types::FieldError;

fn control_class(base: &'static str, error: Option<FieldError>) -> String {
    if error.is_some() {
        format!("{base} has-error")
    } else {
        base.to_string()
    }
}

/// Single-line labeled input.
#[component]
pub fn FormInput(
    #[prop(into)] label: String,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<FieldError>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form-group">
            <label class="form-label">{label}</label>
            <input
                type=input_type
                class=move || control_class("form-input", error.get())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldMessage error=error />
        </div>
    }
}

/// Multi-line labeled input.
#[component]
pub fn FormTextarea(
    #[prop(into)] label: String,
    #[prop(default = 4)] rows: u32,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<FieldError>>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-label">{label}</label>
            <textarea
                rows=rows
                placeholder=placeholder.unwrap_or_default()
                class=move || control_class("form-textarea", error.get())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            <FieldMessage error=error />
        </div>
    }
}

/// Labeled native select over (value, label) options. The placeholder,
/// when given, becomes a leading option carrying the empty value.
#[component]
pub fn FormSelect(
    #[prop(into)] label: String,
    #[prop(into)] options: Vec<(String, String)>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] error: Option<Signal<Option<FieldError>>>,
) -> impl IntoView {
    let error = error.unwrap_or_else(|| Signal::derive(|| None));

    view! {
        <div class="form-group">
            <label class="form-label">{label}</label>
            <select
                class=move || control_class("form-select", error.get())
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {options.into_iter().map(|(value, text)| {
                    view! { <option value=value>{text}</option> }
                }).collect_view()}
            </select>
            <FieldMessage error=error />
        </div>
    }
}

/// Inline validation message for one field.
#[component]
fn FieldMessage(#[prop(into)] error: Signal<Option<FieldError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <span class="field-message">
                {move || error.get().map(|err| err.to_string()).unwrap_or_default()}
            </span>
        </Show>
    }
}
