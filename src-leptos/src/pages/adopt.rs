//! Adoption request page

use crate::app::AppState;
use crate::components::{ConfirmationDialog, FormInput, FormSelect, FormTextarea};
use crate::forms::try_submit;
use leptos::prelude::*;
use petheaven_types::{adoption_confirmation, AdoptErrors, AdoptForm};

#[component]
pub fn AdoptPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let form = RwSignal::new(AdoptForm::default());
    let errors = RwSignal::new(AdoptErrors::default());
    let confirmation = RwSignal::new(Option::<String>::None);

    let pet_options: Vec<(String, String)> = state
        .pets
        .iter()
        .map(|pet| {
            (
                pet.id.to_string(),
                format!("{} - {} ({})", pet.name, pet.breed, pet.kind.label()),
            )
        })
        .collect();

    // The chosen id is read before the submit resets the form, so the
    // confirmation can still name the pet
    let pets = state.pets.clone();
    let on_submit = move || {
        let chosen = form.with_untracked(|f| f.pet_id.clone());
        if try_submit(form, errors) {
            confirmation.set(Some(adoption_confirmation(&pets, &chosen)));
        }
    };

    view! {
        <div class="page page-form">
            <h2 class="page-title">"Adopt a Pet"</h2>
            <p class="page-subtitle">
                "Give one of our pets a loving forever home. Tell us about yourself and we will be in touch."
            </p>

            <div class="form-card">
                <FormInput
                    label="Your Name"
                    value=Signal::derive(move || form.get().adopter_name)
                    on_input=Callback::new(move |value| {
                        form.update(|f| f.adopter_name = value);
                        errors.update(|e| e.adopter_name = None);
                    })
                    error=Signal::derive(move || errors.get().adopter_name)
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
                <FormSelect
                    label="Select Pet"
                    options=pet_options
                    placeholder="Choose a pet..."
                    value=Signal::derive(move || form.get().pet_id)
                    on_change=Callback::new(move |value: String| {
                        form.update(|f| f.pet_id = value);
                        errors.update(|e| e.pet_id = None);
                    })
                    error=Signal::derive(move || errors.get().pet_id)
                />
                <FormTextarea
                    label="Pet Ownership Experience"
                    rows=3
                    value=Signal::derive(move || form.get().experience)
                    on_input=Callback::new(move |value| {
                        form.update(|f| f.experience = value);
                        errors.update(|e| e.experience = None);
                    })
                    error=Signal::derive(move || errors.get().experience)
                />
                <FormTextarea
                    label="Why do you want to adopt?"
                    rows=3
                    value=Signal::derive(move || form.get().reason)
                    on_input=Callback::new(move |value| {
                        form.update(|f| f.reason = value);
                        errors.update(|e| e.reason = None);
                    })
                    error=Signal::derive(move || errors.get().reason)
                />

                <button class="btn btn--primary btn--block" on:click=move |_| on_submit()>
                    "Submit Adoption Request"
                </button>
            </div>

            <ConfirmationDialog
                message=confirmation
                on_dismiss=Callback::new(move |_| confirmation.set(None))
            />
        </div>
    }
}
