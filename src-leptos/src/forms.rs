//! Shared submit flow for the form pages.

use leptos::prelude::*;
use petheaven_types::{FormErrors, FormState};
use serde::Serialize;

/// Run one submit attempt against a form held in signals.
///
/// Validation is exhaustive: the whole error set is computed first and
/// then replaces the previous one, so stale messages never linger. On
/// success the form returns to its initial values and the error set is
/// cleared.
///
/// Returns true when the submission was accepted.
pub fn try_submit<F>(form: RwSignal<F>, errors: RwSignal<F::Errors>) -> bool
where
    F: FormState + Serialize + Send + Sync + 'static,
    F::Errors: Send + Sync + 'static,
{
    let outcome = form.with_untracked(|f| f.validate());

    if outcome.is_empty() {
        let payload = form.with_untracked(|f| serde_json::to_string(f).unwrap_or_default());
        log::info!("Submission accepted: {payload}");
        form.update(|f| f.reset());
        errors.set(F::Errors::default());
        true
    } else {
        log::debug!("Submission rejected with {} field errors", outcome.count());
        errors.set(outcome);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petheaven_types::{ContactErrors, ContactForm};

    #[test]
    fn test_rejected_submission_keeps_values_and_sets_errors() {
        let form = RwSignal::new(ContactForm {
            name: "Sam".to_string(),
            ..Default::default()
        });
        let errors = RwSignal::new(ContactErrors::default());

        assert!(!try_submit(form, errors));
        assert_eq!(form.get_untracked().name, "Sam");
        assert_eq!(errors.get_untracked().count(), 3);
    }

    #[test]
    fn test_editing_a_field_clears_only_its_own_error() {
        let form = RwSignal::new(ContactForm::default());
        let errors = RwSignal::new(ContactErrors::default());
        assert!(!try_submit(form, errors));
        assert_eq!(errors.get_untracked().count(), 4);

        // Input handlers update the value and drop that field's error
        form.update(|f| f.email = "pat@example.org".to_string());
        errors.update(|e| e.email = None);

        let current = errors.get_untracked();
        assert_eq!(current.count(), 3);
        assert_eq!(current.email, None);
        assert!(current.name.is_some());
    }

    #[test]
    fn test_accepted_submission_resets_form_and_errors() {
        let form = RwSignal::new(ContactForm {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Just saying hi".to_string(),
        });
        // Start from a dirty error set to check it gets cleared
        let errors = RwSignal::new(ContactForm::default().validate());

        assert!(try_submit(form, errors));
        assert_eq!(form.get_untracked(), ContactForm::default());
        assert!(errors.get_untracked().is_empty());
    }
}
