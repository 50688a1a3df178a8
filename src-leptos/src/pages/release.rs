//! Pet surrender page

use crate::components::{ConfirmationDialog, FormInput, FormSelect, FormTextarea};
use crate::forms::try_submit;
use leptos::prelude::*;
use petheaven_types::{PetKind, ReleaseErrors, ReleaseForm, RELEASE_CONFIRMATION};

#[component]
pub fn ReleasePage() -> impl IntoView {
    let form = RwSignal::new(ReleaseForm::default());
    let errors = RwSignal::new(ReleaseErrors::default());
    let confirmation = RwSignal::new(Option::<String>::None);

    let on_submit = move || {
        if try_submit(form, errors) {
            confirmation.set(Some(RELEASE_CONFIRMATION.to_string()));
        }
    };

    let type_options: Vec<(String, String)> = PetKind::ALL
        .into_iter()
        .map(|kind| (kind.as_str().to_string(), kind.label().to_string()))
        .collect();

    view! {
        <div class="page page-form">
            <h2 class="page-title">"Release a Pet to Us"</h2>
            <p class="page-subtitle">
                "If you can no longer care for your pet, we will take them in and find them a new home."
            </p>

            <div class="form-card">
                <FormInput
                    label="Your Name"
                    value=Signal::derive(move || form.get().owner_name)
                    on_input=Callback::new(move |value| {
                        form.update(|f| f.owner_name = value);
                        errors.update(|e| e.owner_name = None);
                    })
                    error=Signal::derive(move || errors.get().owner_name)
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
                    label="Pet Name"
                    value=Signal::derive(move || form.get().pet_name)
                    on_input=Callback::new(move |value| {
                        form.update(|f| f.pet_name = value);
                        errors.update(|e| e.pet_name = None);
                    })
                    error=Signal::derive(move || errors.get().pet_name)
                />
                <FormSelect
                    label="Pet Type"
                    options=type_options
                    value=Signal::derive(move || form.get().pet_type.as_str().to_string())
                    on_change=Callback::new(move |value: String| {
                        form.update(|f| f.pet_type = PetKind::from_value(&value));
                    })
                />
                <FormInput
                    label="Breed"
                    value=Signal::derive(move || form.get().breed)
                    on_input=Callback::new(move |value| {
                        form.update(|f| f.breed = value);
                        errors.update(|e| e.breed = None);
                    })
                    error=Signal::derive(move || errors.get().breed)
                />
                <FormInput
                    label="Age (years)"
                    input_type="number"
                    value=Signal::derive(move || form.get().age)
                    on_input=Callback::new(move |value| {
                        form.update(|f| f.age = value);
                        errors.update(|e| e.age = None);
                    })
                    error=Signal::derive(move || errors.get().age)
                />
                <FormTextarea
                    label="Reason for Release"
                    value=Signal::derive(move || form.get().reason)
                    on_input=Callback::new(move |value| {
                        form.update(|f| f.reason = value);
                        errors.update(|e| e.reason = None);
                    })
                    error=Signal::derive(move || errors.get().reason)
                />

                <button class="btn btn--primary btn--block" on:click=move |_| on_submit()>
                    "Submit Request"
                </button>
            </div>

            <ConfirmationDialog
                message=confirmation
                on_dismiss=Callback::new(move |_| confirmation.set(None))
            />
        </div>
    }
}
