//! Member registration form.

use serde::{Deserialize, Serialize};

use super::rules;
use super::{FieldError, FormErrors, FormState};

/// Confirmation shown after a registration is accepted.
pub const REGISTER_CONFIRMATION: &str =
    "Thank you for registering! Our team will contact you soon.";

/// Field values for the member registration form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterForm {
    /// Full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone number
    pub phone: String,
    /// Postal address
    pub address: String,
}

/// Validation outcome for [`RegisterForm`], one slot per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub phone: Option<FieldError>,
    pub address: Option<FieldError>,
}

impl FormState for RegisterForm {
    type Errors = RegisterErrors;

    fn validate(&self) -> RegisterErrors {
        RegisterErrors {
            name: rules::required(&self.name, "Name is required").err(),
            email: rules::email(&self.email).err(),
            phone: rules::phone(&self.phone).err(),
            address: rules::required(&self.address, "Address is required").err(),
        }
    }
}

impl FormErrors for RegisterErrors {
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    fn count(&self) -> usize {
        [&self.name, &self.email, &self.phone, &self.address]
            .into_iter()
            .filter(|slot| slot.is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_flags_every_field() {
        let errors = RegisterForm::default().validate();
        assert_eq!(errors.count(), 4);
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_filled_form_passes() {
        let form = RegisterForm {
            name: "Jamie Tan".to_string(),
            email: "jamie@example.com".to_string(),
            phone: "91234567".to_string(),
            address: "12 Clementi Ave 3".to_string(),
        };
        assert!(form.validate().is_empty());
    }
}
