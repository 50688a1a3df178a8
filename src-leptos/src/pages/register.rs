//! Member registration page

use crate::components::{ConfirmationDialog, FormInput};
use crate::forms::try_submit;
use leptos::prelude::*;
use petheaven_types::{RegisterErrors, RegisterForm, REGISTER_CONFIRMATION};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(RegisterErrors::default());
    let confirmation = RwSignal::new(Option::<String>::None);

    let on_submit = move || {
        if try_submit(form, errors) {
            confirmation.set(Some(REGISTER_CONFIRMATION.to_string()));
        }
    };

    view! {
        <div class="page page-form">
            <h2 class="page-title">"Register as a Member"</h2>
            <p class="page-subtitle">
                "Join the Pet Heaven society and help us care for abandoned pets."
            </p>

            <div class="form-card">
                <FormInput
                    label="Full Name"
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |value| {
                        form.update(|f| f.name = value);
                        errors.update(|e| e.name = None);
                    })
                    error=Signal::derive(move || errors.get().name)
                />
                <FormInput
                    label="Email"
                    input_type="email"
                    value=Signal::derive(move || form.get().email)
                    on_input=Callback::new(move |value| {
                        form.update(|f| f.email = value);
                        errors.update(|e| e.email = None);
                    })
                    error=Signal::derive(move || errors.get().email)
                />
                <FormInput
                    label="Phone Number"
                    input_type="tel"
                    value=Signal::derive(move || form.get().phone)
                    on_input=Callback::new(move |value| {
                        form.update(|f| f.phone = value);
                        errors.update(|e| e.phone = None);
                    })
                    error=Signal::derive(move || errors.get().phone)
                />
                <FormInput
                    label="Address"
                    value=Signal::derive(move || form.get().address)
                    on_input=Callback::new(move |value| {
                        form.update(|f| f.address = value);
                        errors.update(|e| e.address = None);
                    })
                    error=Signal::derive(move || errors.get().address)
                />

                <button class="btn btn--primary btn--block" on:click=move |_| on_submit()>
                    "Register"
                </button>
            </div>

            <ConfirmationDialog
                message=confirmation
                on_dismiss=Callback::new(move |_| confirmation.set(None))
            />
        </div>
    }
}
