use super::{AdoptForm, ContactForm, FieldError, FormErrors, FormState, RegisterForm, ReleaseForm};

fn valid_register() -> RegisterForm {
    RegisterForm {
        name: "Jamie Tan".to_string(),
        email: "jamie@example.com".to_string(),
        phone: "91234567".to_string(),
        address: "12 Clementi Ave 3".to_string(),
    }
}

fn valid_release() -> ReleaseForm {
    ReleaseForm {
        owner_name: "Sam Lee".to_string(),
        email: "sam@example.com".to_string(),
        phone: "9123 4567".to_string(),
        pet_name: "Rocky".to_string(),
        breed: "Corgi".to_string(),
        age: "2".to_string(),
        reason: "Moving overseas".to_string(),
        ..Default::default()
    }
}

fn valid_adopt() -> AdoptForm {
    AdoptForm {
        adopter_name: "Priya Nair".to_string(),
        email: "priya@example.com".to_string(),
        phone: "81234567".to_string(),
        address: "5 Tampines St 32".to_string(),
        pet_id: "1".to_string(),
        experience: "Grew up with dogs".to_string(),
        reason: "Looking for a companion".to_string(),
    }
}

fn valid_contact() -> ContactForm {
    ContactForm {
        name: "Alex Chua".to_string(),
        email: "alex@example.com".to_string(),
        subject: "Volunteering".to_string(),
        message: "How can I help on weekends?".to_string(),
    }
}

#[test]
fn test_blank_forms_flag_every_checked_field() {
    assert_eq!(RegisterForm::default().validate().count(), 4);
    assert_eq!(ReleaseForm::default().validate().count(), 7);
    assert_eq!(AdoptForm::default().validate().count(), 7);
    assert_eq!(ContactForm::default().validate().count(), 4);
}

#[test]
fn test_valid_forms_pass_every_rule() {
    assert!(valid_register().validate().is_empty());
    assert!(valid_release().validate().is_empty());
    assert!(valid_adopt().validate().is_empty());
    assert!(valid_contact().validate().is_empty());
}

#[test]
fn test_one_bad_field_is_the_only_error() {
    let mut form = valid_register();
    form.email = "not-an-email".to_string();

    let errors = form.validate();

    assert_eq!(errors.count(), 1);
    assert_eq!(errors.email, Some(FieldError::InvalidEmail));
}

#[test]
fn test_phone_boundary_on_a_full_form() {
    let mut form = valid_register();

    form.phone = "1234567".to_string();
    assert_eq!(form.validate().phone, Some(FieldError::PhoneTooShort));

    form.phone = "12345678".to_string();
    assert!(form.validate().is_empty());
}

#[test]
fn test_whitespace_only_values_count_as_blank() {
    let mut form = valid_contact();
    form.subject = "   ".to_string();

    let errors = form.validate();

    assert_eq!(errors.count(), 1);
    assert!(errors.subject.as_ref().is_some_and(FieldError::is_blank));
}

#[test]
fn test_correcting_one_field_keeps_other_failures() {
    let mut form = ContactForm::default();
    assert_eq!(form.validate().count(), 4);

    form.email = "pat@example.org".to_string();
    let errors = form.validate();

    assert_eq!(errors.count(), 3);
    assert_eq!(errors.email, None);
    assert!(errors.name.is_some());
    assert!(errors.subject.is_some());
    assert!(errors.message.is_some());
}

#[test]
fn test_reset_returns_to_defaults() {
    let mut form = valid_adopt();
    form.reset();
    assert_eq!(form, AdoptForm::default());

    let mut form = valid_release();
    form.reset();
    assert_eq!(form, ReleaseForm::default());
}

#[test]
fn test_error_messages_match_display_copy() {
    let errors = ReleaseForm::default().validate();
    assert_eq!(errors.age.unwrap().to_string(), "Valid age is required");
    assert_eq!(errors.pet_name.unwrap().to_string(), "Pet name is required");

    let errors = AdoptForm::default().validate();
    assert_eq!(errors.pet_id.unwrap().to_string(), "Please select a pet");
    assert_eq!(
        errors.experience.unwrap().to_string(),
        "Please describe your experience"
    );
    assert_eq!(
        errors.reason.unwrap().to_string(),
        "Please tell us why you want to adopt"
    );
}
