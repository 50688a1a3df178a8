//! Form state and validation for the four data-collection forms.
//!
//! Each form is a pair of structs: the field values (one member per
//! field) and the validation outcome (one `Option<FieldError>` slot per
//! field). Validation is exhaustive: every rule runs on submit and all
//! failures are recorded before any is surfaced, so a user sees the full
//! set of problems at once.

mod adopt;
mod contact;
mod register;
mod release;
pub mod rules;

#[cfg(test)]
mod tests;

pub use adopt::{adoption_confirmation, AdoptErrors, AdoptForm};
pub use contact::{ContactErrors, ContactForm, CONTACT_CONFIRMATION};
pub use register::{RegisterErrors, RegisterForm, REGISTER_CONFIRMATION};
pub use release::{ReleaseErrors, ReleaseForm, RELEASE_CONFIRMATION};
pub use rules::FieldError;

/// Field values of a submission form.
pub trait FormState: Default {
    /// Parallel error structure for this form.
    type Errors: FormErrors;

    /// Run every field rule and collect all failures.
    fn validate(&self) -> Self::Errors;

    /// Return the form to its initial empty values.
    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Per-field validation outcome of a form.
pub trait FormErrors: Default {
    /// True when every field passed.
    fn is_empty(&self) -> bool;

    /// Number of fields that failed.
    fn count(&self) -> usize;
}
