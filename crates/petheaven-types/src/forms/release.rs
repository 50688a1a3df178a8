//! Pet surrender form.

use serde::{Deserialize, Serialize};

use super::rules;
use super::{FieldError, FormErrors, FormState};
use crate::models::PetKind;

/// Confirmation shown after a surrender request is accepted.
pub const RELEASE_CONFIRMATION: &str =
    "Thank you for your submission. Our team will contact you to arrange the pet handover.";

/// Field values for the pet surrender form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseForm {
    /// Owner's name
    pub owner_name: String,
    /// Owner's email
    pub email: String,
    /// Owner's phone number
    pub phone: String,
    /// Pet's name
    pub pet_name: String,
    /// Species; the selector only offers the known set, so this field
    /// has no failure mode
    pub pet_type: PetKind,
    /// Breed
    pub breed: String,
    /// Age in years, as typed
    pub age: String,
    /// Why the pet is being given up
    pub reason: String,
}

/// Validation outcome for [`ReleaseForm`], one slot per checked field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseErrors {
    pub owner_name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub phone: Option<FieldError>,
    pub pet_name: Option<FieldError>,
    pub breed: Option<FieldError>,
    pub age: Option<FieldError>,
    pub reason: Option<FieldError>,
}

impl FormState for ReleaseForm {
    type Errors = ReleaseErrors;

    fn validate(&self) -> ReleaseErrors {
        ReleaseErrors {
            owner_name: rules::required(&self.owner_name, "Name is required").err(),
            email: rules::email(&self.email).err(),
            phone: rules::phone(&self.phone).err(),
            pet_name: rules::required(&self.pet_name, "Pet name is required").err(),
            breed: rules::required(&self.breed, "Breed is required").err(),
            age: rules::age(&self.age).err(),
            reason: rules::required(&self.reason, "Reason is required").err(),
        }
    }
}

impl FormErrors for ReleaseErrors {
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    fn count(&self) -> usize {
        [
            &self.owner_name,
            &self.email,
            &self.phone,
            &self.pet_name,
            &self.breed,
            &self.age,
            &self.reason,
        ]
        .into_iter()
        .filter(|slot| slot.is_some())
        .count()
    }
}
