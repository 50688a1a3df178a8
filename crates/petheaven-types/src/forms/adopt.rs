//! Adoption request form.

use serde::{Deserialize, Serialize};

use super::rules;
use super::{FieldError, FormErrors, FormState};
use crate::models::Pet;

/// Field values for the adoption request form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdoptForm {
    /// Applicant's name
    pub adopter_name: String,
    /// Applicant's email
    pub email: String,
    /// Applicant's phone number
    pub phone: String,
    /// Applicant's address
    pub address: String,
    /// Chosen pet id as the select control's string value; empty means
    /// no choice yet
    pub pet_id: String,
    /// Prior pet-ownership experience
    pub experience: String,
    /// Why the applicant wants to adopt
    pub reason: String,
}

/// Validation outcome for [`AdoptForm`], one slot per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdoptErrors {
    pub adopter_name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub phone: Option<FieldError>,
    pub address: Option<FieldError>,
    pub pet_id: Option<FieldError>,
    pub experience: Option<FieldError>,
    pub reason: Option<FieldError>,
}

impl FormState for AdoptForm {
    type Errors = AdoptErrors;

    fn validate(&self) -> AdoptErrors {
        AdoptErrors {
            adopter_name: rules::required(&self.adopter_name, "Name is required").err(),
            email: rules::email(&self.email).err(),
            phone: rules::phone(&self.phone).err(),
            address: rules::required(&self.address, "Address is required").err(),
            pet_id: rules::pet_choice(&self.pet_id).err(),
            experience: rules::required(&self.experience, "Please describe your experience").err(),
            reason: rules::required(&self.reason, "Please tell us why you want to adopt").err(),
        }
    }
}

impl FormErrors for AdoptErrors {
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    fn count(&self) -> usize {
        [
            &self.adopter_name,
            &self.email,
            &self.phone,
            &self.address,
            &self.pet_id,
            &self.experience,
            &self.reason,
        ]
        .into_iter()
        .filter(|slot| slot.is_some())
        .count()
    }
}

/// Build the confirmation message for an accepted adoption request,
/// naming the chosen pet. Ids outside the roster fall back to "a pet".
pub fn adoption_confirmation(pets: &[Pet], pet_id: &str) -> String {
    let name = pet_id
        .parse::<u32>()
        .ok()
        .and_then(|id| pets.iter().find(|pet| pet.id == id))
        .map(|pet| pet.name.clone())
        .unwrap_or_else(|| "a pet".to_string());
    format!("Thank you for your adoption request for {name}! Our team will contact you for an interview.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_names_the_chosen_pet() {
        let pets = Pet::roster();
        assert_eq!(
            adoption_confirmation(&pets, "5"),
            "Thank you for your adoption request for Charlie! Our team will contact you for an interview."
        );
    }

    #[test]
    fn test_confirmation_falls_back_for_unknown_ids() {
        let pets = Pet::roster();
        assert!(adoption_confirmation(&pets, "42").contains("for a pet!"));
        assert!(adoption_confirmation(&pets, "").contains("for a pet!"));
    }

    #[test]
    fn test_missing_selection_is_reported() {
        let errors = AdoptForm::default().validate();
        assert_eq!(errors.pet_id, Some(FieldError::NoPetChosen));
    }
}
