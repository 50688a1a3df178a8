//! Contact / inquiry form.

use serde::{Deserialize, Serialize};

use super::rules;
use super::{FieldError, FormErrors, FormState};

/// Confirmation shown after an inquiry is accepted.
pub const CONTACT_CONFIRMATION: &str =
    "Thank you for contacting us! We will respond to your inquiry within 24 hours.";

/// Field values for the contact form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender's name
    pub name: String,
    /// Sender's email
    pub email: String,
    /// Inquiry subject line
    pub subject: String,
    /// Inquiry body
    pub message: String,
}

/// Validation outcome for [`ContactForm`], one slot per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub subject: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FormState for ContactForm {
    type Errors = ContactErrors;

    fn validate(&self) -> ContactErrors {
        ContactErrors {
            name: rules::required(&self.name, "Name is required").err(),
            email: rules::email(&self.email).err(),
            subject: rules::required(&self.subject, "Subject is required").err(),
            message: rules::required(&self.message, "Message is required").err(),
        }
    }
}

impl FormErrors for ContactErrors {
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    fn count(&self) -> usize {
        [&self.name, &self.email, &self.subject, &self.message]
            .into_iter()
            .filter(|slot| slot.is_some())
            .count()
    }
}
