//! Contact page with the inquiry form and shelter details

use crate::app::AppState;
use crate::components::{ConfirmationDialog, FormInput, FormTextarea};
use crate::forms::try_submit;
use leptos::prelude::*;
use petheaven_types::{ContactErrors, ContactForm, CONTACT_CONFIRMATION};

#[component]
pub fn ContactPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let shelter = state.shelter;

    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(ContactErrors::default());
    let confirmation = RwSignal::new(Option::<String>::None);

    let on_submit = move || {
        if try_submit(form, errors) {
            confirmation.set(Some(CONTACT_CONFIRMATION.to_string()));
        }
    };

    view! {
        <div class="page page-form">
            <h2 class="page-title">"Contact Us"</h2>
            <p class="page-subtitle">
                "Have a question about adoption, membership, or volunteering? Send us a message."
            </p>

            <div class="contact-details">
                <div class="contact-item">
                    <span class="contact-icon">"✉️"</span>
                    <span>{shelter.email.clone()}</span>
                </div>
                <div class="contact-item">
                    <span class="contact-icon">"📞"</span>
                    <span>{shelter.phone.clone()}</span>
                </div>
                <div class="contact-item">
                    <span class="contact-icon">"📍"</span>
                    <span>{shelter.address.clone()}</span>
                </div>
            </div>

            <div class="form-card">
                <FormInput
                    label="Name"
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
                    label="Subject"
                    value=Signal::derive(move || form.get().subject)
                    on_input=Callback::new(move |value| {
                        form.update(|f| f.subject = value);
                        errors.update(|e| e.subject = None);
                    })
                    error=Signal::derive(move || errors.get().subject)
                />
                <FormTextarea
                    label="Message"
                    rows=5
                    placeholder="Tell us how we can help you..."
                    value=Signal::derive(move || form.get().message)
                    on_input=Callback::new(move |value| {
                        form.update(|f| f.message = value);
                        errors.update(|e| e.message = None);
                    })
                    error=Signal::derive(move || errors.get().message)
                />

                <button class="btn btn--primary btn--block" on:click=move |_| on_submit()>
                    "Send Message"
                </button>
            </div>

            <ConfirmationDialog
                message=confirmation
                on_dismiss=Callback::new(move |_| confirmation.set(None))
            />
        </div>
    }
}
